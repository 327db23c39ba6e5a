use crate::interpreter::{
    evaluator::EvalResult,
    value::{core::Value, element::Incrementable},
};

impl<T: Incrementable> Value<T> {
    /// Adds one to the value in place.
    ///
    /// Scalars step by one, rationals by one whole unit, vectors and matrices
    /// element-wise. If any element would overflow, nothing is changed.
    ///
    /// # Example
    /// ```
    /// use arithmos::interpreter::value::{core::Value, rational::Rational};
    ///
    /// let mut r = Value::<i64>::Rational(Rational::new(1, 2).unwrap());
    /// r.increment().unwrap();
    /// assert_eq!(r.to_string(), "3/2");
    /// ```
    pub fn increment(&mut self) -> EvalResult<()> {
        *self = match self {
            Self::Scalar(x) => Self::Scalar(x.increment()?),
            Self::Rational(r) => Self::Rational(r.increment()?),
            Self::Vector(v) => Self::Vector(v.increment()?),
            Self::Matrix(m) => Self::Matrix(m.increment()?),
        };
        Ok(())
    }

    /// Subtracts one from the value in place.
    ///
    /// The counterpart of [`Value::increment`].
    pub fn decrement(&mut self) -> EvalResult<()> {
        *self = match self {
            Self::Scalar(x) => Self::Scalar(x.decrement()?),
            Self::Rational(r) => Self::Rational(r.decrement()?),
            Self::Vector(v) => Self::Vector(v.decrement()?),
            Self::Matrix(m) => Self::Matrix(m.decrement()?),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::RuntimeError, interpreter::value::vector::Vector};

    #[test]
    fn vectors_step_element_wise() {
        let mut v = Value::Vector(Vector::from(vec![1_i8, 2, 3]));
        v.decrement().unwrap();
        assert_eq!(v, Value::Vector(Vector::from(vec![0, 1, 2])));
    }

    #[test]
    fn overflow_leaves_value_untouched() {
        let mut v = Value::Vector(Vector::from(vec![1_i8, i8::MAX]));
        assert_eq!(v.increment(), Err(RuntimeError::Overflow));
        assert_eq!(v, Value::Vector(Vector::from(vec![1, i8::MAX])));
    }

    #[test]
    fn floats_step_by_one() {
        let mut x = Value::Scalar(0.5);
        x.increment().unwrap();
        assert_eq!(x, Value::Scalar(1.5));
    }
}
