use std::cmp::Ordering;

use crate::interpreter::value::core::Value;

/// Orders values of the same kind.
///
/// Scalars and rationals compare numerically. Vectors and matrices compare
/// lexicographically by element, then by length. Values of differing kinds
/// are unordered, so every relational operator between them yields `false`.
///
/// # Example
/// ```
/// use arithmos::interpreter::value::{core::Value, rational::Rational};
///
/// let half = Value::<f64>::Rational(Rational::new(1, 2).unwrap());
/// let third = Value::<f64>::Rational(Rational::new(1, 3).unwrap());
/// assert!(half > third);
///
/// let scalar = Value::Scalar(0.5);
/// assert_eq!(half.partial_cmp(&scalar), None);
/// assert!(!(half < scalar) && !(half >= scalar));
/// ```
impl<T: PartialOrd> PartialOrd for Value<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => a.partial_cmp(b),
            (Self::Rational(a), Self::Rational(b)) => a.partial_cmp(b),
            (Self::Vector(a), Self::Vector(b)) => a.partial_cmp(b),
            (Self::Matrix(a), Self::Matrix(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::{rational::Rational, vector::Vector};

    #[test]
    fn cross_kind_values_are_neither_equal_nor_ordered() {
        let scalar = Value::Scalar(1_i64);
        let rational = Value::Rational(Rational::from_integer(1));
        assert_ne!(scalar, rational);
        assert_eq!(scalar.partial_cmp(&rational), None);
    }

    #[test]
    fn vectors_compare_lexicographically() {
        let a = Value::Vector(Vector::from(vec![1, 2, 3]));
        let b = Value::Vector(Vector::from(vec![1, 3]));
        assert!(a < b);
    }

    #[test]
    fn nan_scalars_are_unordered() {
        assert_eq!(Value::Scalar(f64::NAN).partial_cmp(&Value::Scalar(1.0)), None);
    }
}
