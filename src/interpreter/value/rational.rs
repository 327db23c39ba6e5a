use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{
    error::{Error, RuntimeError},
    interpreter::{evaluator::EvalResult, parser::literal},
    operator::ArithmeticOp,
    util::num::{gcd, narrow_i128},
};

/// An exact fraction of two `i64` values.
///
/// A `Rational` is always stored in reduced form: numerator and denominator
/// share no common factor and the denominator is positive. Zero is `0/1`.
/// Arithmetic is carried out in `i128` and fails with
/// [`RuntimeError::Overflow`] if the reduced result does not fit back into
/// `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator:   i64,
    denominator: i64,
}

impl Rational {
    /// `0/1`
    pub const ZERO: Self = Self { numerator:   0,
                                  denominator: 1, };
    /// `1/1`
    pub const ONE: Self = Self { numerator:   1,
                                 denominator: 1, };

    /// Creates a reduced rational number.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denominator` is zero.
    /// - `Overflow` if normalizing the sign does not fit (`i64::MIN / -1`).
    ///
    /// # Example
    /// ```
    /// use arithmos::interpreter::value::rational::Rational;
    ///
    /// let half = Rational::new(4, 8).unwrap();
    /// assert_eq!((half.numerator(), half.denominator()), (1, 2));
    ///
    /// let r = Rational::new(3, -4).unwrap();
    /// assert_eq!(r.to_string(), "-3/4");
    /// ```
    pub fn new(numerator: i64, denominator: i64) -> EvalResult<Self> {
        Self::reduced(i128::from(numerator), i128::from(denominator))
    }

    /// Creates the rational `value/1`.
    #[must_use]
    pub const fn from_integer(value: i64) -> Self {
        Self { numerator:   value,
               denominator: 1, }
    }

    pub(crate) fn reduced(numerator: i128, denominator: i128) -> EvalResult<Self> {
        if denominator == 0 {
            return Err(RuntimeError::DivisionByZero);
        }
        let divisor = gcd(numerator, denominator);
        let (mut numerator, mut denominator) = (numerator / divisor, denominator / divisor);
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }
        Ok(Self { numerator:   narrow_i128(numerator)?,
                  denominator: narrow_i128(denominator)?, })
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub const fn denominator(self) -> i64 {
        self.denominator
    }

    /// Returns `true` for `0/1`.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.numerator == 0
    }

    /// Applies an arithmetic operator to two rationals.
    ///
    /// `Rem` follows truncated division, like `%` on integers: the result has
    /// the sign of the dividend.
    ///
    /// # Errors
    /// - `DivisionByZero` when dividing by, or taking the remainder of, zero.
    /// - `Overflow` if the reduced result does not fit in `i64`.
    pub fn apply(self, op: ArithmeticOp, rhs: Self) -> EvalResult<Self> {
        let (a, b) = (i128::from(self.numerator), i128::from(self.denominator));
        let (c, d) = (i128::from(rhs.numerator), i128::from(rhs.denominator));

        match op {
            ArithmeticOp::Add => Self::reduced(a * d + c * b, b * d),
            ArithmeticOp::Sub => Self::reduced(a * d - c * b, b * d),
            ArithmeticOp::Mul => Self::reduced(a * c, b * d),
            ArithmeticOp::Div => {
                if rhs.is_zero() {
                    return Err(RuntimeError::DivisionByZero);
                }
                Self::reduced(a * d, b * c)
            },
            ArithmeticOp::Rem => {
                if rhs.is_zero() {
                    return Err(RuntimeError::DivisionByZero);
                }
                Self::reduced((a * d) % (c * b), b * d)
            },
        }
    }

    /// Returns `self + 1`.
    pub fn increment(self) -> EvalResult<Self> {
        self.apply(ArithmeticOp::Add, Self::ONE)
    }

    /// Returns `self - 1`.
    pub fn decrement(self) -> EvalResult<Self> {
        self.apply(ArithmeticOp::Sub, Self::ONE)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let left = i128::from(self.numerator) * i128::from(other.denominator);
        let right = i128::from(other.numerator) * i128::from(self.denominator);
        left.cmp(&right)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Rational {
    type Err = Error;

    /// Reads `n/d`, `n` or an exact decimal such as `-1.25`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        literal::parse_rational(s)
    }
}
