use super::definition::ProcessDefinition;
use crate::error::ProcessConversionError;

/// A trait for custom data models that can be converted into a testflow
/// `ProcessDefinition`.
///
/// This is the primary extension point for making testflow format-agnostic.
/// By implementing this trait on your own model structs, you provide a
/// translation layer that allows the generator to process your custom
/// flowchart format.
///
/// # Example
///
/// ```rust,no_run
/// use testflow::prelude::*;
/// use testflow::error::ProcessConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyCustomNode { id: String, label: String, shape: String }
/// struct MyCustomFlowchart { nodes: Vec<MyCustomNode> }
///
/// // 2. Implement `IntoProcess` for your top-level struct.
/// impl IntoProcess for MyCustomFlowchart {
///     fn into_process(self) -> Result<ProcessDefinition, ProcessConversionError> {
///         let mut nodes = Vec::new();
///         for node in self.nodes {
///             let kind = match node.shape.as_str() {
///                 "circle" => NodeKind::Start,
///                 "doublecircle" => NodeKind::End,
///                 "diamond" => NodeKind::Decision,
///                 "box" => NodeKind::Step { expected_outcome: None },
///                 other => {
///                     return Err(ProcessConversionError::ValidationError(format!(
///                         "Unknown node shape: {other}"
///                     )));
///                 }
///             };
///             nodes.push(ProcessNode {
///                 id: node.id,
///                 name: node.label,
///                 description: None,
///                 kind,
///             });
///         }
///
///         Ok(ProcessDefinition {
///             nodes,
///             connections: vec![], // Convert your edges here as well
///         })
///     }
/// }
/// ```
pub trait IntoProcess {
    /// Consumes the object and converts it into a testflow-compatible process
    /// definition.
    fn into_process(self) -> Result<ProcessDefinition, ProcessConversionError>;
}
