use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::EvalResult,
        value::{core::Value, element::BitwiseOps},
    },
    operator::BitwiseOp,
};

impl<T: BitwiseOps> Value<T> {
    /// Applies a bitwise operator between two values.
    ///
    /// Follows the same pairing rules as [`Value::apply`]: scalars combine
    /// directly, vectors broadcast scalars and combine element-wise with
    /// vectors of the same length, and matrices combine row-wise with vectors
    /// and element-wise with matrices of the same shape. Rationals support no
    /// bitwise operators at all.
    ///
    /// Only available when the element type implements [`BitwiseOps`], so
    /// `Value<f64>` has no such method.
    ///
    /// # Example
    /// ```
    /// use arithmos::{
    ///     interpreter::value::{core::Value, vector::Vector},
    ///     operator::BitwiseOp,
    /// };
    ///
    /// let v = Value::Vector(Vector::from(vec![0b1100_i64, 0b1010]));
    /// let masked = v.apply_bitwise(BitwiseOp::And, &Value::Scalar(0b1000)).unwrap();
    /// assert_eq!(masked, Value::Vector(Vector::from(vec![0b1000, 0b1000])));
    /// ```
    pub fn apply_bitwise(&self, op: BitwiseOp, rhs: &Self) -> EvalResult<Self> {
        use Value::{Matrix, Rational, Scalar, Vector};

        match (self, rhs) {
            (Scalar(a), Scalar(b)) => a.apply_bitwise(op, *b).map(Scalar),
            (Vector(v), Scalar(s)) => v.broadcast_bitwise(op, *s).map(Vector),
            (Vector(a), Vector(b)) => a.zip_bitwise(op, b).map(Vector),
            (Matrix(m), Vector(v)) => m.rowwise_bitwise(op, v).map(Matrix),
            (Matrix(a), Matrix(b)) => a.zip_bitwise(op, b).map(Matrix),

            (Rational(_), _)
            | (Scalar(_), Rational(_) | Vector(_) | Matrix(_))
            | (Vector(_), Rational(_) | Matrix(_))
            | (Matrix(_), Scalar(_) | Rational(_)) => {
                Err(RuntimeError::UnsupportedOperand { operator: op.symbol(),
                                                       left:     self.kind(),
                                                       right:    rhs.kind(), })
            },
        }
    }

    /// Applies a bitwise operator and stores the result in `self`.
    ///
    /// On failure `self` is left unchanged.
    pub fn apply_bitwise_assign(&mut self, op: BitwiseOp, rhs: &Self) -> EvalResult<()> {
        *self = self.apply_bitwise(op, rhs)?;
        Ok(())
    }
}
