use std::fmt;

use crate::interpreter::value::{matrix::Matrix, rational::Rational, vector::Vector};

/// The kind of a [`Value`], used in error messages and dispatch tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A single element.
    Scalar,
    /// An exact fraction.
    Rational,
    /// A sequence of elements.
    Vector,
    /// A rectangular grid of elements.
    Matrix,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scalar => "Scalar",
            Self::Rational => "Rational",
            Self::Vector => "Vector",
            Self::Matrix => "Matrix",
        };
        write!(f, "{name}")
    }
}

/// Represents a runtime value in the interpreter.
///
/// The element type `T` of scalars, vectors and matrices is a compile-time
/// parameter; rationals always use `i64` numerator and denominator. Which
/// operators are available depends on the capabilities of `T`:
/// [`Arithmetic`](crate::interpreter::value::element::Arithmetic) for
/// `+ - * / %`,
/// [`BitwiseOps`](crate::interpreter::value::element::BitwiseOps) for
/// `& | ^ << >>` and
/// [`Incrementable`](crate::interpreter::value::element::Incrementable) for
/// increment and decrement.
///
/// Equality is structural. Values of differing kinds are never equal, and
/// never ordered.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T = f64> {
    /// A single element.
    Scalar(T),
    /// An exact fraction in reduced form.
    Rational(Rational),
    /// A fixed-length sequence of elements.
    Vector(Vector<T>),
    /// A rectangular matrix of elements.
    Matrix(Matrix<T>),
}

impl<T> Value<T> {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Scalar(_) => ValueKind::Scalar,
            Self::Rational(_) => ValueKind::Rational,
            Self::Vector(_) => ValueKind::Vector,
            Self::Matrix(_) => ValueKind::Matrix,
        }
    }

    /// Returns the scalar, if this value is one.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&T> {
        match self {
            Self::Scalar(x) => Some(x),
            _ => None,
        }
    }

    /// Returns the rational, if this value is one.
    #[must_use]
    pub const fn as_rational(&self) -> Option<Rational> {
        match self {
            Self::Rational(r) => Some(*r),
            _ => None,
        }
    }

    /// Returns the vector, if this value is one.
    #[must_use]
    pub const fn as_vector(&self) -> Option<&Vector<T>> {
        match self {
            Self::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the matrix, if this value is one.
    #[must_use]
    pub const fn as_matrix(&self) -> Option<&Matrix<T>> {
        match self {
            Self::Matrix(m) => Some(m),
            _ => None,
        }
    }
}

impl<T> From<Rational> for Value<T> {
    fn from(r: Rational) -> Self {
        Self::Rational(r)
    }
}

impl<T> From<Vector<T>> for Value<T> {
    fn from(v: Vector<T>) -> Self {
        Self::Vector(v)
    }
}

impl<T> From<Matrix<T>> for Value<T> {
    fn from(m: Matrix<T>) -> Self {
        Self::Matrix(m)
    }
}

impl<T: fmt::Display> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(x) => write!(f, "{x}"),
            Self::Rational(r) => write!(f, "{r}"),
            Self::Vector(v) => write!(f, "{v}"),
            Self::Matrix(m) => write!(f, "{m}"),
        }
    }
}
