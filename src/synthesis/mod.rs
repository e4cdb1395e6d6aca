//! Synthesis of test cases and procedures from selected paths.
//!
//! Each path is walked once, vertex by vertex, alongside the vertex's
//! outgoing edge on the path (absent for the terminal end node). The walk
//! produces the test case's parameter assignments and its procedure steps in
//! one pass, so both always agree on parameter disambiguation.

use crate::graph::GraphPath;
use crate::process::{NodeKind, ProcessConnection, ProcessDefinition, ProcessNode};
use crate::specification::{
    ParameterAssignment, ParameterId, ParameterKind, TestCase, TestParameter, TestProcedure,
    TestSpecification, TestStep,
};
use ahash::AHashMap;

/// Value assigned when an expression names a variable without `=value`.
const PRESENT: &str = "is present";

/// Registry of the parameters created during one generation run. At most one
/// parameter exists per distinct (disambiguated) name; parameters are created
/// lazily on first reference and reused across paths.
struct ParameterRegistry {
    by_name: AHashMap<String, ParameterId>,
}

impl ParameterRegistry {
    fn new() -> Self {
        Self {
            by_name: AHashMap::new(),
        }
    }

    /// Looks up the parameter with the given name, creating and appending it
    /// if this run has not seen the name yet.
    fn resolve(
        &mut self,
        specification: &mut TestSpecification,
        name: &str,
        kind: ParameterKind,
    ) -> ParameterId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = specification.add_parameter(TestParameter {
            name: name.to_string(),
            kind,
        });
        self.by_name.insert(name.to_string(), id);
        id
    }
}

/// Walks selected paths and emits test cases into a specification. Not
/// thread-safe by design: disambiguation depends on synthesis order.
pub struct Synthesizer<'a> {
    definition: &'a ProcessDefinition,
    registry: ParameterRegistry,
    case_count: usize,
}

impl<'a> Synthesizer<'a> {
    pub fn new(definition: &'a ProcessDefinition) -> Self {
        Self {
            definition,
            registry: ParameterRegistry::new(),
            case_count: 0,
        }
    }

    /// Synthesizes one test case (with its procedure) from a path and appends
    /// it, along with any newly referenced parameters, to `specification`.
    pub fn synthesize(&mut self, path: &GraphPath, specification: &mut TestSpecification) {
        let mut walk = PathWalk {
            registry: &mut self.registry,
            specification,
            seen_names: Vec::new(),
            assignments: Vec::new(),
            steps: Vec::new(),
        };

        for (position, &vertex) in path.vertices.iter().enumerate() {
            let node = &self.definition.nodes[vertex];
            let outgoing = path
                .edges
                .get(position)
                .map(|&e| &self.definition.connections[e]);

            match &node.kind {
                NodeKind::Start => walk.consume_start(node, outgoing, position),
                NodeKind::Decision => walk.consume_decision(node, outgoing, position),
                NodeKind::Step { .. } => walk.consume_step(node, outgoing, position),
                NodeKind::End => {}
            }
        }

        let (assignments, steps) = (walk.assignments, walk.steps);
        self.case_count += 1;
        specification.test_cases.push(TestCase {
            name: format!("Test Case {}", self.case_count),
            consistent: true,
            assignments,
            procedure: TestProcedure { steps },
        });
    }
}

/// The state of one path walk: the per-path disambiguation sequence and the
/// assignments and steps accumulated so far.
struct PathWalk<'a> {
    registry: &'a mut ParameterRegistry,
    specification: &'a mut TestSpecification,
    seen_names: Vec<String>,
    assignments: Vec<ParameterAssignment>,
    steps: Vec<TestStep>,
}

impl PathWalk<'_> {
    /// A start node contributes a precondition step and an input assignment
    /// when its outgoing transition carries a condition.
    fn consume_start(
        &mut self,
        node: &ProcessNode,
        outgoing: Option<&ProcessConnection>,
        position: usize,
    ) {
        let Some(condition) = outgoing.and_then(ProcessConnection::condition_text) else {
            return;
        };
        let parameter = self.assign_from_expression(condition, ParameterKind::Input);
        self.steps.push(TestStep {
            position,
            action: format!("Establish precondition: {condition}"),
            expected_outcome: condition.to_string(),
            description: node.description.clone(),
            parameter: Some(parameter),
        });
    }

    /// A decision contributes an input assignment named after the decision,
    /// valued by the branch condition actually taken.
    fn consume_decision(
        &mut self,
        node: &ProcessNode,
        outgoing: Option<&ProcessConnection>,
        position: usize,
    ) {
        let condition = outgoing.and_then(ProcessConnection::condition_text);
        let mut parameter = None;

        if !node.name.trim().is_empty() {
            let value = condition.unwrap_or(PRESENT).to_string();
            parameter = Some(self.assign(&node.name, value, ParameterKind::Input));
        }

        let action = match condition {
            Some(c) => format!("Establish condition: {}={}", node.name, c),
            None => String::new(),
        };
        self.steps.push(TestStep {
            position,
            action,
            expected_outcome: condition.unwrap_or_default().to_string(),
            description: node.description.clone(),
            parameter,
        });
    }

    /// A step contributes an output assignment for its expected outcome and,
    /// when its outgoing transition carries a condition, an input assignment
    /// for that condition. The condition also joins the step's expected
    /// outcome text, but the procedure step references only the outcome
    /// parameter.
    fn consume_step(
        &mut self,
        node: &ProcessNode,
        outgoing: Option<&ProcessConnection>,
        position: usize,
    ) {
        let expected = node.expected_outcome();
        let parameter =
            expected.map(|outcome| self.assign_from_expression(outcome, ParameterKind::Output));

        let condition = outgoing.and_then(ProcessConnection::condition_text);
        if let Some(condition) = condition {
            self.assign_from_expression(condition, ParameterKind::Input);
        }

        let expected_outcome = match expected {
            Some(outcome) => match condition {
                Some(condition) => format!("{outcome}, {condition}"),
                None => outcome.to_string(),
            },
            None => String::new(),
        };
        self.steps.push(TestStep {
            position,
            action: node.name.clone(),
            expected_outcome,
            description: node.description.clone(),
            parameter,
        });
    }

    /// Parses `variable[=value]` and records the resulting assignment.
    fn assign_from_expression(&mut self, expression: &str, kind: ParameterKind) -> ParameterId {
        let (variable, value) = split_assignment_expression(expression);
        self.assign(&variable, value, kind)
    }

    /// Disambiguates the variable name, resolves its parameter and records an
    /// assignment.
    fn assign(&mut self, variable: &str, value: String, kind: ParameterKind) -> ParameterId {
        let name = counting_parameter_name(&mut self.seen_names, variable);
        let parameter = self.registry.resolve(self.specification, &name, kind);
        self.assignments.push(ParameterAssignment { parameter, value });
        parameter
    }
}

/// Splits a `variable[=value]` expression at the first `=`. A missing or
/// empty value defaults to `"is present"`.
fn split_assignment_expression(expression: &str) -> (String, String) {
    match expression.split_once('=') {
        Some((variable, value)) if !value.trim().is_empty() => {
            (variable.trim().to_string(), value.trim().to_string())
        }
        Some((variable, _)) => (variable.trim().to_string(), PRESENT.to_string()),
        None => (expression.trim().to_string(), PRESENT.to_string()),
    }
}

/// Returns `base`, or `base N` (N starting at 2) if earlier occurrences on
/// this path already took the name, and records the result as seen.
fn counting_parameter_name(seen_names: &mut Vec<String>, base: &str) -> String {
    let base = base.trim();
    let mut candidate = base.to_string();
    let mut counter = 1usize;
    while seen_names.iter().any(|n| n == &candidate) {
        counter += 1;
        candidate = format!("{base} {counter}");
    }
    seen_names.push(candidate.clone());
    candidate
}
