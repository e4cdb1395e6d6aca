//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! testflow crate. Import this module to get access to the core functionality
//! without having to import each type individually.

// Generation
pub use crate::generator::{GenerationReport, Generator, GeneratorBuilder, SearchMode};

// Input model
pub use crate::process::{
    IntoProcess, NodeKind, ProcessConnection, ProcessDefinition, ProcessNode,
};

// Output model
pub use crate::specification::{
    ParameterAssignment, ParameterId, ParameterKind, TestCase, TestParameter, TestProcedure,
    TestSpecification, TestStep,
};

// Error types
pub use crate::error::{GenerateError, ProcessConversionError};

// Result type alias for convenience
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
