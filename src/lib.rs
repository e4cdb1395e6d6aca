//! # Testflow - Process-Model Test-Case Generation Engine
//!
//! **Testflow** derives concrete test cases and step-by-step test procedures
//! from a directed process model: a flowchart of start/decision/step/end
//! nodes connected by optionally-conditioned transitions. It combines graph
//! path enumeration, combinatorial condition coverage with conflict
//! avoidance, a heuristic fallback for intractable graphs, and deterministic
//! synthesis of named test parameters and human-readable procedures.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model
//! of a process definition. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your custom flowchart format (e.g., from JSON, YAML, etc.) into your own Rust structs.
//! 2.  **Convert to Testflow's Model**: Implement the `IntoProcess` trait for your structs to provide a translation layer into Testflow's `ProcessDefinition`.
//! 3.  **Generate**: Use `Generator::builder` to create a generator for the definition and run it against a `TestSpecification` you own. The generator appends one test case per selected path, covering every branch condition it can, and never mixes mutually exclusive branches in one case.
//! 4.  **Inspect**: Read the generated parameters, assignments and procedures from the specification, and the `GenerationReport` for the search mode used and any coverage gaps.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use testflow::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // A minimal process: start -> decision -> (step | step) -> end.
//!     let definition = ProcessDefinition {
//!         nodes: vec![
//!             ProcessNode {
//!                 id: "start".into(),
//!                 name: "Start".into(),
//!                 description: None,
//!                 kind: NodeKind::Start,
//!             },
//!             ProcessNode {
//!                 id: "check".into(),
//!                 name: "Temperature".into(),
//!                 description: None,
//!                 kind: NodeKind::Decision,
//!             },
//!             ProcessNode {
//!                 id: "alarm".into(),
//!                 name: "Raise alarm".into(),
//!                 description: None,
//!                 kind: NodeKind::Step { expected_outcome: Some("alarm=on".into()) },
//!             },
//!             ProcessNode {
//!                 id: "log".into(),
//!                 name: "Log reading".into(),
//!                 description: None,
//!                 kind: NodeKind::Step { expected_outcome: None },
//!             },
//!             ProcessNode {
//!                 id: "end".into(),
//!                 name: "End".into(),
//!                 description: None,
//!                 kind: NodeKind::End,
//!             },
//!         ],
//!         connections: vec![
//!             ProcessConnection { source: "start".into(), target: "check".into(), condition: None },
//!             ProcessConnection { source: "check".into(), target: "alarm".into(), condition: Some("high".into()) },
//!             ProcessConnection { source: "check".into(), target: "log".into(), condition: Some("normal".into()) },
//!             ProcessConnection { source: "alarm".into(), target: "end".into(), condition: None },
//!             ProcessConnection { source: "log".into(), target: "end".into(), condition: None },
//!         ],
//!     };
//!
//!     let generator = Generator::builder(definition).build();
//!
//!     let mut specification = TestSpecification::new();
//!     let report = generator.generate(&mut specification)?;
//!
//!     println!(
//!         "Generated {} test cases ({:?} mode)",
//!         report.test_case_count, report.mode
//!     );
//!     for test_case in &specification.test_cases {
//!         println!("{}:", test_case.name);
//!         for assignment in &test_case.assignments {
//!             let parameter = specification.parameter(assignment.parameter);
//!             println!("  {} = {}", parameter.name, assignment.value);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod generator;
pub mod graph;
pub mod prelude;
pub mod process;
pub mod specification;
pub mod synthesis;
