//! Subtraction operation
//!
//! - mod.rs: operation metadata and factory implementation
//! - functions.rs: core computation logic

mod functions;

pub use functions::*;

use crate::ops::error::Result;
use crate::ops::factory::{OperationCategory, OperationFactory, OperationMetadata, PortDefinition};
use crate::ops::value::{DataType, Value};

/// Subtraction operation that takes two numeric inputs and produces their difference
#[derive(Default)]
pub struct SubtractFactory;

impl OperationFactory for SubtractFactory {
    fn metadata() -> OperationMetadata {
        OperationMetadata::new(
            "Subtract",
            "Subtract",
            OperationCategory::math(),
            "Subtracts the second numeric value from the first",
        )
        .with_inputs(vec![
            PortDefinition::required("A", DataType::Any).with_description("Value to subtract from"),
            PortDefinition::required("B", DataType::Any).with_description("Value to subtract"),
        ])
        .with_outputs(vec![
            PortDefinition::required("Result", DataType::Any)
                .with_description("Difference of A and B"),
        ])
        .with_tags(vec!["math", "arithmetic", "basic"])
    }

    fn evaluate(inputs: &[Value]) -> Result<Vec<Value>> {
        process_subtract(inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtract_metadata() {
        let metadata = SubtractFactory::metadata();
        assert_eq!(metadata.op_type, "Subtract");
        assert_eq!(metadata.display_name, "Subtract");
        assert_eq!(
            metadata.description,
            "Subtracts the second numeric value from the first"
        );
        assert_eq!(metadata.inputs.len(), 2);
        assert_eq!(metadata.outputs.len(), 1);

        assert_eq!(metadata.inputs[0].name, "A");
        assert_eq!(metadata.inputs[1].name, "B");
        assert_eq!(metadata.outputs[0].name, "Result");
        assert_eq!(metadata.category, OperationCategory::math());
    }

    #[test]
    fn test_subtract_factory_evaluation() {
        let outputs =
            SubtractFactory::evaluate(&[Value::Integer(0), Value::Integer(5)]).unwrap();
        assert_eq!(outputs, vec![Value::Integer(-5)]);
    }
}
