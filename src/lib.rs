//! Math Ops - A typed arithmetic operations library
//!
//! This library provides pure, stateless arithmetic operations over typed
//! values, together with per-operation metadata and a registry for
//! dispatching operations by name.

pub mod ops;

// Re-export the operation entry points
pub use ops::math::add::{add, process_add};
pub use ops::math::subtract::{process_subtract, subtract};

// Re-export commonly used types
pub use ops::{
    default_registry, DataType, MathError, OperationCategory, OperationFactory,
    OperationMetadata, OperationRegistry, PortDefinition, Result, Value,
};
