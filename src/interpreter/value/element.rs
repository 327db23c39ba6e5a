use std::{fmt, str::FromStr};

use crate::{
    error::RuntimeError,
    interpreter::evaluator::EvalResult,
    operator::{ArithmeticOp, BitwiseOp},
    util::num::i64_to_f64_checked,
};

/// Element types that support checked arithmetic.
///
/// Every scalar, vector element and matrix element is an `Arithmetic` type.
/// Implementations report division or remainder by zero as
/// [`RuntimeError::DivisionByZero`] and overflow as
/// [`RuntimeError::Overflow`] instead of panicking.
pub trait Arithmetic: Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display + FromStr {
    /// The additive identity.
    const ZERO: Self;

    /// Converts an integer into this type if it is exactly representable.
    fn from_i64(value: i64) -> Option<Self>;

    /// Applies `op` to `self` and `rhs`.
    ///
    /// # Example
    /// ```
    /// use arithmos::{
    ///     error::RuntimeError, interpreter::value::element::Arithmetic, operator::ArithmeticOp,
    /// };
    ///
    /// assert_eq!(7_i64.apply(ArithmeticOp::Rem, 4), Ok(3));
    /// assert_eq!(1_i64.apply(ArithmeticOp::Div, 0), Err(RuntimeError::DivisionByZero));
    /// assert_eq!(i64::MAX.apply(ArithmeticOp::Add, 1), Err(RuntimeError::Overflow));
    /// ```
    fn apply(self, op: ArithmeticOp, rhs: Self) -> EvalResult<Self>;
}

/// Element types that support bitwise operators and shifts.
pub trait BitwiseOps: Arithmetic {
    /// Applies the bitwise `op` to `self` and `rhs`.
    ///
    /// Shift amounts outside `0..BITS` fail with [`RuntimeError::Overflow`].
    fn apply_bitwise(self, op: BitwiseOp, rhs: Self) -> EvalResult<Self>;
}

/// Element types that can be stepped up or down by one.
pub trait Incrementable: Arithmetic {
    /// Returns `self + 1`.
    fn increment(self) -> EvalResult<Self>;
    /// Returns `self - 1`.
    fn decrement(self) -> EvalResult<Self>;
}

const fn is_division(op: ArithmeticOp) -> bool {
    matches!(op, ArithmeticOp::Div | ArithmeticOp::Rem)
}

macro_rules! impl_integer_element {
    ($($t:ty),* $(,)?) => {$(
        impl Arithmetic for $t {
            const ZERO: Self = 0;

            fn from_i64(value: i64) -> Option<Self> {
                Self::try_from(value).ok()
            }

            fn apply(self, op: ArithmeticOp, rhs: Self) -> EvalResult<Self> {
                if rhs == 0 && is_division(op) {
                    return Err(RuntimeError::DivisionByZero);
                }
                let result = match op {
                    ArithmeticOp::Add => self.checked_add(rhs),
                    ArithmeticOp::Sub => self.checked_sub(rhs),
                    ArithmeticOp::Mul => self.checked_mul(rhs),
                    ArithmeticOp::Div => self.checked_div(rhs),
                    ArithmeticOp::Rem => self.checked_rem(rhs),
                };
                result.ok_or(RuntimeError::Overflow)
            }
        }

        impl BitwiseOps for $t {
            fn apply_bitwise(self, op: BitwiseOp, rhs: Self) -> EvalResult<Self> {
                match op {
                    BitwiseOp::And => Ok(self & rhs),
                    BitwiseOp::Or => Ok(self | rhs),
                    BitwiseOp::Xor => Ok(self ^ rhs),
                    BitwiseOp::Shl => u32::try_from(rhs).ok()
                                                        .and_then(|s| self.checked_shl(s))
                                                        .ok_or(RuntimeError::Overflow),
                    BitwiseOp::Shr => u32::try_from(rhs).ok()
                                                        .and_then(|s| self.checked_shr(s))
                                                        .ok_or(RuntimeError::Overflow),
                }
            }
        }

        impl Incrementable for $t {
            fn increment(self) -> EvalResult<Self> {
                self.checked_add(1).ok_or(RuntimeError::Overflow)
            }

            fn decrement(self) -> EvalResult<Self> {
                self.checked_sub(1).ok_or(RuntimeError::Overflow)
            }
        }
    )*};
}

impl_integer_element!(i8, i16, i32, i64, i128, isize);

impl Arithmetic for f64 {
    const ZERO: Self = 0.0;

    fn from_i64(value: i64) -> Option<Self> {
        i64_to_f64_checked(value, ()).ok()
    }

    fn apply(self, op: ArithmeticOp, rhs: Self) -> EvalResult<Self> {
        if rhs == 0.0 && is_division(op) {
            return Err(RuntimeError::DivisionByZero);
        }
        Ok(match op {
               ArithmeticOp::Add => self + rhs,
               ArithmeticOp::Sub => self - rhs,
               ArithmeticOp::Mul => self * rhs,
               ArithmeticOp::Div => self / rhs,
               ArithmeticOp::Rem => self % rhs,
           })
    }
}

impl Incrementable for f64 {
    fn increment(self) -> EvalResult<Self> {
        Ok(self + 1.0)
    }

    fn decrement(self) -> EvalResult<Self> {
        Ok(self - 1.0)
    }
}
