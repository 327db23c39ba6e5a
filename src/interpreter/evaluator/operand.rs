use crate::{
    error::{Error, ParseError},
    interpreter::{
        evaluator::EvalResult,
        parser::literal,
        value::{
            core::Value, element::Arithmetic, matrix::Matrix, rational::Rational, vector::Vector,
        },
    },
    operator::ArithmeticOp,
};

/// A type the parser can evaluate an expression into.
///
/// The grammar is the same for every operand type; only the reading of
/// Number tokens and the meaning of the operators change. The caller picks
/// the operand type, it is never inferred from the tokens.
pub trait Operand: Sized {
    /// Converts the raw text of a Number token.
    ///
    /// Error positions are relative to the start of `text`.
    ///
    /// # Errors
    /// `InvalidNumberFormat` if the text cannot be read as `Self`, or any
    /// error raised while building the literal.
    fn from_literal(text: &str) -> Result<Self, Error>;

    /// Applies an arithmetic operator with `self` on the left.
    ///
    /// # Errors
    /// Whatever the value layer raises for this pair of operands.
    fn apply(&self, op: ArithmeticOp, rhs: &Self) -> EvalResult<Self>;
}

/// Rejects Number text that is not a bracketed literal.
fn bracketed(text: &str) -> Result<&str, Error> {
    if text.starts_with('[') {
        Ok(text)
    } else {
        Err(ParseError::InvalidNumberFormat { text:     text.to_string(),
                                              position: 0, }.into())
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),* $(,)?) => {$(
        impl Operand for $t {
            fn from_literal(text: &str) -> Result<Self, Error> {
                literal::parse_scalar(text)
            }

            fn apply(&self, op: ArithmeticOp, rhs: &Self) -> EvalResult<Self> {
                Arithmetic::apply(*self, op, *rhs)
            }
        }
    )*};
}

impl_scalar_operand!(f64, i8, i16, i32, i64, i128, isize);

impl Operand for Rational {
    fn from_literal(text: &str) -> Result<Self, Error> {
        if text.starts_with('[') {
            return Err(ParseError::InvalidNumberFormat { text:     text.to_string(),
                                                         position: 0, }.into());
        }
        literal::parse_rational(text)
    }

    fn apply(&self, op: ArithmeticOp, rhs: &Self) -> EvalResult<Self> {
        Self::apply(*self, op, *rhs)
    }
}

impl<T: Arithmetic> Operand for Vector<T> {
    fn from_literal(text: &str) -> Result<Self, Error> {
        literal::parse_vector(bracketed(text)?)
    }

    fn apply(&self, op: ArithmeticOp, rhs: &Self) -> EvalResult<Self> {
        self.zip_with(op, rhs)
    }
}

impl<T: Arithmetic> Operand for Matrix<T> {
    fn from_literal(text: &str) -> Result<Self, Error> {
        literal::parse_matrix(bracketed(text)?)
    }

    fn apply(&self, op: ArithmeticOp, rhs: &Self) -> EvalResult<Self> {
        match op {
            ArithmeticOp::Mul => self.matmul(rhs),
            _ => self.zip_with(op, rhs),
        }
    }
}

impl<T: Arithmetic> Operand for Value<T> {
    fn from_literal(text: &str) -> Result<Self, Error> {
        literal::parse_value(text)
    }

    fn apply(&self, op: ArithmeticOp, rhs: &Self) -> EvalResult<Self> {
        Self::apply(self, op, rhs)
    }
}
