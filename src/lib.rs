//! # arithmos
//!
//! arithmos is an arithmetic expression interpreter written in Rust.
//! It tokenizes and evaluates expressions over scalars, exact rationals,
//! vectors and matrices, and reports structural defects in raw input with
//! caret-style positions.
//!
//! ```
//! use arithmos::{evaluate_str, evaluate_value, interpreter::value::core::Value};
//!
//! assert_eq!(evaluate_str("2 + 3 * 4").unwrap(), 14.0);
//!
//! let v: Value<i64> = evaluate_value("[1 2; 3 4] * [1 1]").unwrap();
//! assert_eq!(v.to_string(), "3 7");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::fmt::Display;

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        evaluator::operand::Operand,
        lexer::{tokenize, tokenize_literals},
        parser::core::evaluate_as,
        value::{
            core::Value, element::Arithmetic, matrix::Matrix, rational::Rational, vector::Vector,
        },
    },
};

/// Structural checks on raw input.
///
/// Scans text without tokenizing it: bracket balance and nesting for `()` and
/// `[]`, and the type word of declarations such as `int a = 5`. Each defect
/// is classified into the shared error taxonomy with a column.
pub mod diagnostics;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during tokenizing,
/// parsing, reading literals or applying operators. Every error exposes a
/// classified kind, a recommended fix and the column it points at.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, parser, values).
/// - Maps each failure onto the stable `ErrorKind` taxonomy.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// This module ties together the tokenizer, the parser, the value types and
/// the operator dispatch. It exposes the building blocks behind the
/// convenience functions of this crate.
pub mod interpreter;
/// Arithmetic and bitwise operator symbols.
pub mod operator;
/// Rendering of errors and results for a terminal.
pub mod report;
/// General utilities for safe numeric conversion and helpers.
///
/// # Responsibilities
/// - Convert between `i64` and `f64` without silent data loss.
/// - Narrow widened intermediates back to `i64`.
/// - Greatest common divisor for rational reduction.
pub mod util;

fn evaluate_tokens<O>(input: &str, literals: bool) -> Result<O, Error>
    where O: Operand + Display
{
    let tokens = if literals { tokenize_literals(input)? } else { tokenize(input)? };
    let value = evaluate_as::<O>(&tokens)?;
    debug!(input, result = %value, "evaluated");
    Ok(value)
}

/// Evaluates a plain expression as an `f64`.
///
/// # Examples
/// ```
/// use arithmos::{error::ErrorKind, evaluate_str};
///
/// assert_eq!(evaluate_str("(1 + 2) * 3").unwrap(), 9.0);
/// assert_eq!(evaluate_str("1 / 0").unwrap_err().kind(), ErrorKind::DivisionByZero);
/// ```
pub fn evaluate_str(input: &str) -> Result<f64, Error> {
    evaluate_tokens(input, false)
}

/// Evaluates a plain expression with scalar elements of type `T`.
///
/// # Examples
/// ```
/// use arithmos::{error::ErrorKind, evaluate_scalar};
///
/// assert_eq!(evaluate_scalar::<i64>("7 / 2").unwrap(), 3);
/// assert_eq!(evaluate_scalar::<i8>("100 + 100").unwrap_err().kind(), ErrorKind::Overflow);
/// ```
pub fn evaluate_scalar<T>(input: &str) -> Result<T, Error>
    where T: Arithmetic + Operand
{
    evaluate_tokens(input, false)
}

/// Evaluates a plain expression with exact rational arithmetic.
///
/// # Examples
/// ```
/// use arithmos::evaluate_rational;
///
/// assert_eq!(evaluate_rational("1 / 3 + 1 / 6").unwrap().to_string(), "1/2");
/// assert_eq!(evaluate_rational("0.1 + 0.2").unwrap().to_string(), "3/10");
/// ```
pub fn evaluate_rational(input: &str) -> Result<Rational, Error> {
    evaluate_tokens(input, false)
}

/// Evaluates an expression of vector literals.
///
/// # Examples
/// ```
/// use arithmos::{error::ErrorKind, evaluate_vector};
///
/// assert_eq!(evaluate_vector::<f64>("[1 2 3] + [4 5 6]").unwrap().to_string(), "5 7 9");
///
/// let err = evaluate_vector::<f64>("[10 20 30] / [0 5 10]").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
/// ```
pub fn evaluate_vector<T: Arithmetic>(input: &str) -> Result<Vector<T>, Error> {
    evaluate_tokens(input, true)
}

/// Evaluates an expression of matrix literals.
///
/// # Examples
/// ```
/// use arithmos::evaluate_matrix;
///
/// let m = evaluate_matrix::<i64>("[1 2; 3 4] * [5 6; 7 8]").unwrap();
/// assert_eq!(m.to_string(), "19 22\n43 50");
/// ```
pub fn evaluate_matrix<T: Arithmetic>(input: &str) -> Result<Matrix<T>, Error> {
    evaluate_tokens(input, true)
}

/// Evaluates an expression mixing scalars, vectors and matrices.
///
/// A bare number is a scalar, a bracketed literal is a vector, and a
/// bracketed literal with `;` rows is a matrix.
///
/// # Examples
/// ```
/// use arithmos::{error::ErrorKind, evaluate_value, interpreter::value::core::Value};
///
/// let v: Value = evaluate_value("[1 2 3] * 2 + [1 1 1]").unwrap();
/// assert_eq!(v.to_string(), "3 5 7");
///
/// let err = evaluate_value::<f64>("2 * [1 2 3]").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnsupportedOperand);
/// ```
pub fn evaluate_value<T: Arithmetic>(input: &str) -> Result<Value<T>, Error> {
    evaluate_tokens(input, true)
}
