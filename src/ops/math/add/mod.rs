//! Addition operation
//!
//! - mod.rs: operation metadata and factory implementation
//! - functions.rs: core computation logic

mod functions;

pub use functions::*;

use crate::ops::error::Result;
use crate::ops::factory::{OperationCategory, OperationFactory, OperationMetadata, PortDefinition};
use crate::ops::value::{DataType, Value};

/// Addition operation that takes two numeric inputs and produces their sum
#[derive(Default)]
pub struct AddFactory;

impl OperationFactory for AddFactory {
    fn metadata() -> OperationMetadata {
        OperationMetadata::new(
            "Add",
            "Add",
            OperationCategory::math(),
            "Adds two numeric values together",
        )
        .with_inputs(vec![
            PortDefinition::required("A", DataType::Any).with_description("First operand"),
            PortDefinition::required("B", DataType::Any).with_description("Second operand"),
        ])
        .with_outputs(vec![
            PortDefinition::required("Result", DataType::Any).with_description("Sum of A and B"),
        ])
        .with_tags(vec!["math", "arithmetic", "basic"])
    }

    fn evaluate(inputs: &[Value]) -> Result<Vec<Value>> {
        process_add(inputs)
    }
}
