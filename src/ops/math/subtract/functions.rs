//! Core computation logic for the subtraction operation

use log::trace;

use crate::ops::error::{MathError, Result};
use crate::ops::value::Value;

/// Compute the arithmetic difference of two operands
///
/// Integer operands stay in exact integer arithmetic (wrapping on
/// overflow); any other numeric pairing is promoted to floats.
pub fn subtract(a: &Value, b: &Value) -> Result<Value> {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => Ok(Value::Integer(x.wrapping_sub(*y))),
        _ => {
            let (x, y) = float_operands("Subtract", a, b)?;
            Ok(Value::Float(x - y))
        }
    }
}

/// Process a subtraction over an input slice, first two elements are the operands
pub fn process_subtract(inputs: &[Value]) -> Result<Vec<Value>> {
    if inputs.len() < 2 {
        return Err(MathError::MissingOperands {
            op: "Subtract",
            expected: 2,
            actual: inputs.len(),
        });
    }
    let result = subtract(&inputs[0], &inputs[1])?;
    trace!("Subtract({:?}, {:?}) -> {:?}", inputs[0], inputs[1], result);
    Ok(vec![result])
}

/// Validate input types for subtraction
pub fn validate_subtract_inputs(inputs: &[Value]) -> bool {
    inputs.len() >= 2 && inputs.iter().take(2).all(Value::is_numeric)
}

/// Get default values for subtraction inputs
pub fn default_subtract_inputs() -> Vec<Value> {
    vec![Value::Integer(0), Value::Integer(0)]
}

/// Coerce both operands to floats, rejecting non-numeric values
fn float_operands(op: &'static str, a: &Value, b: &Value) -> Result<(f64, f64)> {
    match (a.as_float(), b.as_float()) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(MathError::TypeMismatch {
            op,
            lhs: a.type_name(),
            rhs: b.type_name(),
        }),
    }
}
