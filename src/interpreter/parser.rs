/// Core parsing and evaluation logic.
///
/// Implements the recursive-descent grammar over a token slice and the
/// evaluation entry points for every operand type.
pub mod core;

/// Literal readers.
///
/// Reads the text of numbers and bracketed literals into scalars, rationals,
/// vectors and matrices. Also reads back the rendered form of each value.
pub mod literal;
