//! Error types for operation evaluation

use thiserror::Error;

/// Failures surfaced by operation evaluation or registry dispatch
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    #[error("{op}: type mismatch between {lhs} and {rhs}")]
    TypeMismatch {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    #[error("{op}: expected {expected} operands, got {actual}")]
    MissingOperands {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}

pub type Result<T> = std::result::Result<T, MathError>;
