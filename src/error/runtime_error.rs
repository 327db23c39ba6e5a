use thiserror::Error;

use crate::{error::ErrorKind, interpreter::value::core::ValueKind};

/// Represents all errors that can occur while applying operators to values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Attempted division or remainder by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// The operator is not defined for this pair of value kinds.
    #[error("Operator '{operator}' is not supported between {left} and {right}.")]
    UnsupportedOperand {
        /// The operator symbol.
        operator: &'static str,
        /// Kind of the left operand.
        left:     ValueKind,
        /// Kind of the right operand.
        right:    ValueKind,
    },
    /// Operand shapes are incompatible for the operator.
    #[error("Cannot apply '{operator}' to operands of size {left} and {right}.")]
    DimensionMismatch {
        /// The operator symbol.
        operator: &'static str,
        /// Shape of the left operand, such as `3` or `2x2`.
        left:     String,
        /// Shape of the right operand.
        right:    String,
    },
    /// Matrix rows have differing lengths.
    #[error("Matrix row {row} has {found} elements but {expected} were expected.")]
    RaggedMatrix {
        /// Index of the offending row.
        row:      usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found:    usize,
    },
    /// Arithmetic overflowed the element type.
    #[error("Overflow while trying to compute result.")]
    Overflow,
}

impl RuntimeError {
    /// Returns the classified kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::UnsupportedOperand { .. } => ErrorKind::UnsupportedOperand,
            Self::DimensionMismatch { .. } | Self::RaggedMatrix { .. } => {
                ErrorKind::DimensionMismatch
            },
            Self::Overflow => ErrorKind::Overflow,
        }
    }
}
