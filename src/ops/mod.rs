//! Operation system - typed values, factories, and the built-in operations

// Core operation system modules
pub mod error;
pub mod factory;
pub mod value;

// Operation implementations
pub mod math;

// Re-export core types
pub use error::{MathError, Result};
pub use value::{DataType, Value};

// Re-export factory types
pub use factory::{
    default_registry, OperationCategory, OperationFactory, OperationMetadata, OperationRegistry,
    PortDefinition,
};
