/// The evaluator module applies operators to values.
///
/// It holds the dispatch over every pair of value kinds for arithmetic and
/// bitwise operators, increment and decrement, ordering, and the `Operand`
/// trait that lets the parser evaluate into any supported result type.
///
/// # Responsibilities
/// - Implements the compatibility table between scalars, rationals, vectors
///   and matrices.
/// - Reports runtime errors such as division by zero, unsupported operand
///   pairs, size mismatches and overflow.
pub mod evaluator;
/// The lexer module tokenizes expression text for the parser.
///
/// The tokenizer reads raw text and produces a finite stream of numbers,
/// operators and parentheses, ending with a single end-of-input token. Every
/// token records the column where it starts.
///
/// # Responsibilities
/// - Skips whitespace between tokens.
/// - Keeps number text raw so the consumer decides how to read it.
/// - Reads bracketed literals as single tokens when asked to.
/// - Reports lexical errors with the offending character and its column.
pub mod lexer;
/// The parser module evaluates a token stream directly.
///
/// A recursive-descent grammar with the usual precedence of `*` and `/` over
/// `+` and `-`. Values are computed while parsing; no syntax tree is kept.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares scalars, exact rationals, vectors and matrices, along
/// with the element capabilities that decide which operators exist for a
/// given element type.
///
/// # Responsibilities
/// - Defines the `Value` enum and its kinds.
/// - Keeps every invariant at construction time: reduced rationals,
///   rectangular matrices.
/// - Renders each value to text.
pub mod value;
