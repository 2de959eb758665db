//! Typed values that flow through operations

use serde::{Deserialize, Serialize};

/// Data types that operation ports can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Floating point number
    Float,
    /// Signed integer
    Integer,
    /// Boolean value
    Boolean,
    /// Text string
    Text,
    /// Any type (for generic ports)
    Any,
}

impl DataType {
    /// Check if this data type can connect to another
    pub fn can_connect_to(&self, other: &DataType) -> bool {
        self == other || *self == DataType::Any || *other == DataType::Any
    }

    /// Get a human-readable name for this data type
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Float => "Float",
            DataType::Integer => "Integer",
            DataType::Boolean => "Boolean",
            DataType::Text => "Text",
            DataType::Any => "Any",
        }
    }
}

/// Core value type passed to and returned from operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Floating point number
    Float(f64),
    /// Signed integer
    Integer(i64),
    /// Boolean value
    Boolean(bool),
    /// Text string
    Text(String),
    /// Empty/null value
    Empty,
}

impl Value {
    /// Get the data type descriptor for this value
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Float(_) => DataType::Float,
            Value::Integer(_) => DataType::Integer,
            Value::Boolean(_) => DataType::Boolean,
            Value::Text(_) => DataType::Text,
            Value::Empty => DataType::Any,
        }
    }

    /// Get a human-readable name for this value's type
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Empty => "Empty",
            other => other.data_type().name(),
        }
    }

    /// Extract a float from any coercible value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Check whether this value can act as a numeric operand
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Float(_) | Value::Integer(_) | Value::Boolean(_))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}
