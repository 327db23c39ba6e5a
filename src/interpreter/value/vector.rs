use std::{fmt, slice};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::EvalResult,
        value::element::{Arithmetic, BitwiseOps, Incrementable},
    },
    operator::{ArithmeticOp, BitwiseOp},
};

/// A fixed-length sequence of elements.
///
/// The length is set at construction. Element-wise operations between two
/// vectors require both to have the same length; broadcasting applies a single
/// element to every position.
#[derive(Debug, Clone, PartialEq, PartialOrd, Default)]
pub struct Vector<T> {
    elements: Vec<T>,
}

impl<T> Vector<T> {
    /// Wraps the given elements.
    #[must_use]
    pub const fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the vector holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Borrows the elements.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Unwraps the elements.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.elements
    }
}

impl<T: Arithmetic> Vector<T> {
    /// A vector of `len` zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self::new(vec![T::ZERO; len])
    }

    fn map<F>(&self, f: F) -> EvalResult<Self>
        where F: Fn(T) -> EvalResult<T>
    {
        self.elements.iter().map(|&x| f(x)).collect::<EvalResult<Vec<_>>>().map(Self::new)
    }

    fn zip_map<F>(&self, operator: &'static str, rhs: &Self, f: F) -> EvalResult<Self>
        where F: Fn(T, T) -> EvalResult<T>
    {
        if self.len() != rhs.len() {
            return Err(RuntimeError::DimensionMismatch { operator,
                                                         left: self.len().to_string(),
                                                         right: rhs.len().to_string() });
        }
        self.elements
            .iter()
            .zip(rhs.elements.iter())
            .map(|(&l, &r)| f(l, r))
            .collect::<EvalResult<Vec<_>>>()
            .map(Self::new)
    }

    /// Applies `op` element by element.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the lengths differ.
    /// - Any error raised by an element operation, such as `DivisionByZero`
    ///   when a right-hand element is zero.
    ///
    /// # Example
    /// ```
    /// use arithmos::{interpreter::value::vector::Vector, operator::ArithmeticOp};
    ///
    /// let a = Vector::new(vec![1.0, 2.0, 3.0]);
    /// let b = Vector::new(vec![4.0, 5.0, 6.0]);
    ///
    /// assert_eq!(a.zip_with(ArithmeticOp::Add, &b).unwrap(),
    ///            Vector::new(vec![5.0, 7.0, 9.0]));
    /// ```
    pub fn zip_with(&self, op: ArithmeticOp, rhs: &Self) -> EvalResult<Self> {
        self.zip_map(op.symbol(), rhs, |l, r| l.apply(op, r))
    }

    /// Applies `op` between every element and `scalar`.
    pub fn broadcast(&self, op: ArithmeticOp, scalar: T) -> EvalResult<Self> {
        self.map(|x| x.apply(op, scalar))
    }

    /// Inner product of two vectors of equal length.
    ///
    /// # Errors
    /// `DimensionMismatch` if the lengths differ, or `Overflow` for integer
    /// elements.
    pub fn dot(&self, rhs: &Self) -> EvalResult<T> {
        if self.len() != rhs.len() {
            return Err(RuntimeError::DimensionMismatch { operator: ArithmeticOp::Mul.symbol(),
                                                         left:     self.len().to_string(),
                                                         right:    rhs.len().to_string(), });
        }
        self.elements
            .iter()
            .zip(rhs.elements.iter())
            .try_fold(T::ZERO, |acc, (&l, &r)| {
                acc.apply(ArithmeticOp::Add, l.apply(ArithmeticOp::Mul, r)?)
            })
    }
}

impl<T: BitwiseOps> Vector<T> {
    /// Applies the bitwise `op` element by element.
    pub fn zip_bitwise(&self, op: BitwiseOp, rhs: &Self) -> EvalResult<Self> {
        self.zip_map(op.symbol(), rhs, |l, r| l.apply_bitwise(op, r))
    }

    /// Applies the bitwise `op` between every element and `scalar`.
    pub fn broadcast_bitwise(&self, op: BitwiseOp, scalar: T) -> EvalResult<Self> {
        self.map(|x| x.apply_bitwise(op, scalar))
    }
}

impl<T: Incrementable> Vector<T> {
    /// Adds one to every element.
    pub fn increment(&self) -> EvalResult<Self> {
        self.map(Incrementable::increment)
    }

    /// Subtracts one from every element.
    pub fn decrement(&self) -> EvalResult<Self> {
        self.map(Incrementable::decrement)
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type IntoIter = slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, value) in self.elements.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
