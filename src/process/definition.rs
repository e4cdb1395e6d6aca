use serde::{Deserialize, Serialize};

/// The complete, canonical definition of a process model, ready for test-case
/// generation. This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessDefinition {
    pub nodes: Vec<ProcessNode>,
    pub connections: Vec<ProcessConnection>,
}

/// A single node of the process model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub kind: NodeKind,
}

/// The variant of a process node.
///
/// A decision's `name` (on the surrounding [`ProcessNode`]) doubles as the
/// label of the test parameter generated for it. A step may declare an
/// expected outcome of the form `variable[=value]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeKind {
    Start,
    End,
    Decision,
    Step {
        #[serde(default)]
        expected_outcome: Option<String>,
    },
}

/// A directed connection between two nodes, optionally carrying a branch
/// condition. A missing or blank condition means the transition is
/// unconditional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessConnection {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub condition: Option<String>,
}

impl ProcessNode {
    pub fn is_start(&self) -> bool {
        self.kind == NodeKind::Start
    }

    pub fn is_end(&self) -> bool {
        self.kind == NodeKind::End
    }

    /// The step's expected-outcome expression, if this node is a step and the
    /// expression is non-blank.
    pub fn expected_outcome(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Step { expected_outcome } => expected_outcome
                .as_deref()
                .map(str::trim)
                .filter(|o| !o.is_empty()),
            _ => None,
        }
    }
}

impl ProcessConnection {
    /// The connection's condition, trimmed, if it is non-blank.
    pub fn condition_text(&self) -> Option<&str> {
        self.condition
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Whether the connection carries a non-blank condition.
    pub fn has_condition(&self) -> bool {
        self.condition_text().is_some()
    }
}
