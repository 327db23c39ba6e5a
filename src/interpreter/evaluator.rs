use crate::error::RuntimeError;

/// Binary operator evaluation logic.
///
/// Routes arithmetic and bitwise operators over every pair of value kinds,
/// and defines how values of the same kind are ordered.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements increment and decrement for every value kind.
pub mod unary;

/// Operand types the parser can evaluate into.
///
/// Connects the grammar to the value layer: every operand type knows how to
/// read a literal and how to apply an arithmetic operator.
pub mod operand;

/// The result of applying an operator to values.
pub type EvalResult<T> = Result<T, RuntimeError>;
