//! Core computation logic for the addition operation

use log::trace;

use crate::ops::error::{MathError, Result};
use crate::ops::value::Value;

/// Compute the arithmetic sum of two operands
///
/// Integer operands stay in exact integer arithmetic (wrapping on
/// overflow); any other numeric pairing is promoted to floats.
pub fn add(a: &Value, b: &Value) -> Result<Value> {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => Ok(Value::Integer(x.wrapping_add(*y))),
        _ => {
            let (x, y) = float_operands("Add", a, b)?;
            Ok(Value::Float(x + y))
        }
    }
}

/// Process an addition over an input slice, first two elements are the operands
pub fn process_add(inputs: &[Value]) -> Result<Vec<Value>> {
    if inputs.len() < 2 {
        return Err(MathError::MissingOperands {
            op: "Add",
            expected: 2,
            actual: inputs.len(),
        });
    }
    let result = add(&inputs[0], &inputs[1])?;
    trace!("Add({:?}, {:?}) -> {:?}", inputs[0], inputs[1], result);
    Ok(vec![result])
}

/// Validate input types for addition
pub fn validate_add_inputs(inputs: &[Value]) -> bool {
    inputs.len() >= 2 && inputs.iter().take(2).all(Value::is_numeric)
}

/// Get default values for addition inputs
pub fn default_add_inputs() -> Vec<Value> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_integers() {
        assert_eq!(
            add(&Value::Integer(2), &Value::Integer(3)),
            Ok(Value::Integer(5))
        );
        assert_eq!(
            add(&Value::Integer(-1), &Value::Integer(1)),
            Ok(Value::Integer(0))
        );
    }

    #[test]
    fn test_add_floats() {
        let result = add(&Value::Float(2.5), &Value::Float(3.7)).unwrap();
        if let Value::Float(value) = result {
            assert!((value - 6.2).abs() < f64::EPSILON);
        } else {
            panic!("Expected Float result");
        }
    }

    #[test]
    fn test_add_mixed_promotes_to_float() {
        assert_eq!(
            add(&Value::Integer(2), &Value::Float(0.5)),
            Ok(Value::Float(2.5))
        );
        assert_eq!(
            add(&Value::Float(0.5), &Value::Integer(2)),
            Ok(Value::Float(2.5))
        );
    }

    #[test]
    fn test_add_boolean_coercion() {
        assert_eq!(
            add(&Value::Float(2.0), &Value::Boolean(true)),
            Ok(Value::Float(3.0))
        );
        assert_eq!(
            add(&Value::Boolean(false), &Value::Float(2.0)),
            Ok(Value::Float(2.0))
        );
    }

    #[test]
    fn test_add_commutative() {
        let pairs = [
            (Value::Integer(2), Value::Integer(3)),
            (Value::Integer(-10), Value::Integer(7)),
            (Value::Float(1.25), Value::Float(-0.75)),
            (Value::Integer(4), Value::Float(0.5)),
        ];

        for (a, b) in &pairs {
            assert_eq!(add(a, b), add(b, a));
        }
    }

    #[test]
    fn test_add_integer_overflow_wraps() {
        assert_eq!(
            add(&Value::Integer(i64::MAX), &Value::Integer(1)),
            Ok(Value::Integer(i64::MIN))
        );
    }

    #[test]
    fn test_add_rejects_text_operand() {
        let result = add(&Value::Integer(1), &Value::Text("two".to_string()));
        assert_eq!(
            result,
            Err(MathError::TypeMismatch {
                op: "Add",
                lhs: "Integer",
                rhs: "Text",
            })
        );
    }

    #[test]
    fn test_add_is_deterministic() {
        let a = Value::Float(0.1);
        let b = Value::Float(0.2);
        let first = add(&a, &b).unwrap();
        for _ in 0..10 {
            assert_eq!(add(&a, &b).unwrap(), first);
        }
    }

    #[test]
    fn test_process_add() {
        let inputs = vec![Value::Integer(2), Value::Integer(3)];
        assert_eq!(process_add(&inputs), Ok(vec![Value::Integer(5)]));
    }

    #[test]
    fn test_process_add_requires_two_operands() {
        let result = process_add(&[Value::Integer(1)]);
        assert_eq!(
            result,
            Err(MathError::MissingOperands {
                op: "Add",
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_validate_add_inputs() {
        assert!(validate_add_inputs(&[Value::Integer(1), Value::Float(2.0)]));
        assert!(validate_add_inputs(&[Value::Float(1.0), Value::Boolean(true)]));
        assert!(!validate_add_inputs(&[Value::Float(1.0)]));
        assert!(!validate_add_inputs(&[
            Value::Float(1.0),
            Value::Text("hello".to_string())
        ]));
    }

    #[test]
    fn test_default_add_inputs() {
        let defaults = default_add_inputs();
        assert_eq!(process_add(&defaults), Ok(vec![Value::Integer(0)]));
    }
}
