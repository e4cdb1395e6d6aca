//! The output model: test parameters, test cases and test procedures.
//!
//! A [`TestSpecification`] is owned by the caller. The generator only ever
//! appends to it, so one specification can accumulate the results of several
//! generation runs (or hold hand-written entries alongside generated ones).

use serde::{Deserialize, Serialize};

/// Whether a test parameter is an input to the system under test or an
/// observed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterKind {
    Input,
    Output,
}

/// Index of a parameter in [`TestSpecification::parameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterId(pub usize);

/// A named, typed test variable referenced by test cases and steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestParameter {
    pub name: String,
    pub kind: ParameterKind,
}

/// One parameter/value binding of a test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterAssignment {
    pub parameter: ParameterId,
    pub value: String,
}

/// A generated test case: the assignments for one path through the process,
/// plus the procedure realizing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub consistent: bool,
    pub assignments: Vec<ParameterAssignment>,
    pub procedure: TestProcedure,
}

/// The ordered, human-readable steps of a test case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestProcedure {
    pub steps: Vec<TestStep>,
}

/// One step of a test procedure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestStep {
    /// Position of the originating vertex on the path.
    pub position: usize,
    pub action: String,
    pub expected_outcome: String,
    #[serde(default)]
    pub description: Option<String>,
    /// The parameter established or checked at this step, if any.
    #[serde(default)]
    pub parameter: Option<ParameterId>,
}

/// Caller-owned container the generator appends into.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestSpecification {
    pub parameters: Vec<TestParameter>,
    pub test_cases: Vec<TestCase>,
}

impl TestSpecification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parameter(&self, id: ParameterId) -> &TestParameter {
        &self.parameters[id.0]
    }

    /// Appends a parameter and returns its id.
    pub fn add_parameter(&mut self, parameter: TestParameter) -> ParameterId {
        self.parameters.push(parameter);
        ParameterId(self.parameters.len() - 1)
    }
}
