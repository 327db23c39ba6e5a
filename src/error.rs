use thiserror::Error;

/// Classified error kinds.
///
/// The stable taxonomy shared by the evaluator, the syntax diagnostic engine
/// and the presentation layer. Each kind carries a string form and a
/// recommended fix.
pub mod kind;
/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing, parsing or reading
/// literals. Every variant records the zero-based column where the problem was
/// found.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while applying operators to
/// values: division by zero, unsupported operand pairs, dimension mismatches
/// and overflow.
pub mod runtime_error;

pub use kind::ErrorKind;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced by evaluating an expression.
///
/// Runtime errors are raised by the value layer, which does not know where in
/// the source text it was called from. The parser wraps them with the column
/// of the operator that triggered them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The expression could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Applying an operator failed.
    #[error("Error at column {}: {source}", .position + 1)]
    Runtime {
        /// The underlying failure.
        source:   RuntimeError,
        /// Zero-based column of the operator that failed.
        position: usize,
    },
}

impl Error {
    /// Returns the classified kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime { source, .. } => source.kind(),
        }
    }

    /// Returns the zero-based column the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Parse(e) => e.position(),
            Self::Runtime { position, .. } => *position,
        }
    }

    /// Returns the same error moved `offset` columns to the right.
    #[must_use]
    pub fn shifted(self, offset: usize) -> Self {
        match self {
            Self::Parse(e) => Self::Parse(e.shifted(offset)),
            Self::Runtime { source, position } => {
                Self::Runtime { source,
                                position: position + offset }
            },
        }
    }
}
