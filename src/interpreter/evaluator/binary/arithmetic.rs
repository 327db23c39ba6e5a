use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::EvalResult,
        value::{core::Value, element::Arithmetic, rational::Rational},
    },
    operator::ArithmeticOp,
};

/// Converts a rational to an element by taking its numerator.
///
/// Used when a rational is broadcast over a vector. The denominator is
/// discarded.
fn numerator_element<T: Arithmetic>(r: Rational) -> EvalResult<T> {
    T::from_i64(r.numerator()).ok_or(RuntimeError::Overflow)
}

impl<T: Arithmetic> Value<T> {
    /// Applies an arithmetic operator between two values.
    ///
    /// The pair of operand kinds selects the behavior:
    ///
    /// | left     | right    | result                                        |
    /// |----------|----------|-----------------------------------------------|
    /// | Scalar   | Scalar   | element arithmetic                            |
    /// | Rational | Rational | exact rational arithmetic                     |
    /// | Vector   | Scalar   | operator broadcast over every element         |
    /// | Vector   | Rational | broadcast of the numerator                    |
    /// | Vector   | Vector   | element-wise, lengths must match              |
    /// | Matrix   | Vector   | `*` is the matrix-vector product, the rest    |
    /// |          |          | apply the vector to every row                 |
    /// | Matrix   | Matrix   | `*` is the matrix product, the rest are       |
    /// |          |          | element-wise over equal shapes                |
    ///
    /// Every other pair fails with [`RuntimeError::UnsupportedOperand`]. The
    /// table is not symmetric: `vector * scalar` works while
    /// `scalar * vector` does not.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `rhs`: Right operand.
    ///
    /// # Returns
    /// A new value; neither operand is modified.
    ///
    /// # Example
    /// ```
    /// use arithmos::{
    ///     interpreter::value::{core::Value, vector::Vector},
    ///     operator::ArithmeticOp,
    /// };
    ///
    /// let v = Value::Vector(Vector::from(vec![1, 2, 3]));
    /// let result = v.apply(ArithmeticOp::Mul, &Value::Scalar(2)).unwrap();
    /// assert_eq!(result, Value::Vector(Vector::from(vec![2, 4, 6])));
    ///
    /// assert!(Value::Scalar(2).apply(ArithmeticOp::Mul, &v).is_err());
    /// ```
    pub fn apply(&self, op: ArithmeticOp, rhs: &Self) -> EvalResult<Self> {
        use Value::{Matrix, Rational, Scalar, Vector};

        match (self, rhs) {
            (Scalar(a), Scalar(b)) => a.apply(op, *b).map(Scalar),
            (Rational(a), Rational(b)) => a.apply(op, *b).map(Rational),

            (Vector(v), Scalar(s)) => v.broadcast(op, *s).map(Vector),
            (Vector(v), Rational(r)) => v.broadcast(op, numerator_element(*r)?).map(Vector),
            (Vector(a), Vector(b)) => a.zip_with(op, b).map(Vector),

            (Matrix(m), Vector(v)) => match op {
                ArithmeticOp::Mul => m.mul_vector(v).map(Vector),
                _ => m.rowwise(op, v).map(Matrix),
            },
            (Matrix(a), Matrix(b)) => match op {
                ArithmeticOp::Mul => a.matmul(b).map(Matrix),
                _ => a.zip_with(op, b).map(Matrix),
            },

            (Scalar(_), Rational(_) | Vector(_) | Matrix(_))
            | (Rational(_), Scalar(_) | Vector(_) | Matrix(_))
            | (Vector(_), Matrix(_))
            | (Matrix(_), Scalar(_) | Rational(_)) => {
                Err(RuntimeError::UnsupportedOperand { operator: op.symbol(),
                                                       left:     self.kind(),
                                                       right:    rhs.kind(), })
            },
        }
    }

    /// Applies an operator and stores the result in `self`.
    ///
    /// The compound assignment form of [`Value::apply`], such as `a += b`.
    /// On failure `self` is left exactly as it was.
    ///
    /// # Example
    /// ```
    /// use arithmos::{interpreter::value::core::Value, operator::ArithmeticOp};
    ///
    /// let mut total = Value::Scalar(10);
    /// total.apply_assign(ArithmeticOp::Sub, &Value::Scalar(3)).unwrap();
    /// assert_eq!(total, Value::Scalar(7));
    ///
    /// assert!(total.apply_assign(ArithmeticOp::Div, &Value::Scalar(0)).is_err());
    /// assert_eq!(total, Value::Scalar(7));
    /// ```
    pub fn apply_assign(&mut self, op: ArithmeticOp, rhs: &Self) -> EvalResult<()> {
        *self = self.apply(op, rhs)?;
        Ok(())
    }
}
