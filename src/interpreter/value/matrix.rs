use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::EvalResult,
        value::{
            element::{Arithmetic, BitwiseOps, Incrementable},
            vector::Vector,
        },
    },
    operator::{ArithmeticOp, BitwiseOp},
};

/// A rectangular matrix stored as a sequence of row vectors.
///
/// All rows have the same length; construction rejects ragged input. Row and
/// column counts are derived from the rows rather than stored. A matrix
/// without columns has no rows either, so every shape has exactly one text
/// form.
#[derive(Debug, Clone, PartialEq, PartialOrd, Default)]
pub struct Matrix<T> {
    rows: Vec<Vector<T>>,
}

impl<T> Matrix<T> {
    /// Builds a matrix from its rows.
    ///
    /// Rows that are all empty collapse into the empty matrix.
    ///
    /// # Errors
    /// `RaggedMatrix` if the rows do not all have the same length.
    ///
    /// # Example
    /// ```
    /// use arithmos::interpreter::value::{matrix::Matrix, vector::Vector};
    ///
    /// let m = Matrix::new(vec![Vector::new(vec![1, 2]), Vector::new(vec![3, 4])]).unwrap();
    /// assert_eq!((m.row_count(), m.column_count()), (2, 2));
    ///
    /// assert!(Matrix::new(vec![Vector::new(vec![1, 2]), Vector::new(vec![3])]).is_err());
    /// ```
    pub fn new(rows: Vec<Vector<T>>) -> EvalResult<Self> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, found)) = rows.iter()
                                            .map(Vector::len)
                                            .enumerate()
                                            .find(|&(_, len)| len != expected)
            {
                return Err(RuntimeError::RaggedMatrix { row,
                                                        expected,
                                                        found });
            }
            if expected == 0 {
                return Ok(Self { rows: Vec::new() });
            }
        }
        Ok(Self { rows })
    }

    /// Builds a matrix from nested element vectors.
    pub fn from_rows(rows: Vec<Vec<T>>) -> EvalResult<Self> {
        Self::new(rows.into_iter().map(Vector::new).collect())
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns; zero for a matrix without rows.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vector::len)
    }

    /// Borrows the rows.
    #[must_use]
    pub fn rows(&self) -> &[Vector<T>] {
        &self.rows
    }

    /// Returns the element at `row`, `column`, if any.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Renders the shape as `rowsxcolumns`.
    #[must_use]
    pub fn shape(&self) -> String {
        format!("{}x{}", self.row_count(), self.column_count())
    }
}

impl<T: Arithmetic> Matrix<T> {
    /// A `rows` by `columns` matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, columns: usize) -> Self {
        let rows = if columns == 0 { 0 } else { rows };
        Self { rows: (0..rows).map(|_| Vector::zeros(columns)).collect() }
    }

    /// Returns the transposed matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let rows: Vec<Vector<T>> = (0..self.column_count()).map(|c| {
                                                               self.rows
                                                                   .iter()
                                                                   .filter_map(|row| row.get(c).copied())
                                                                   .collect::<Vector<T>>()
                                                           })
                                                           .collect();
        Self { rows }
    }

    fn mismatch(&self, operator: &'static str, right: String) -> RuntimeError {
        RuntimeError::DimensionMismatch { operator,
                                          left: self.shape(),
                                          right }
    }

    fn map_rows<F>(&self, f: F) -> EvalResult<Self>
        where F: Fn(&Vector<T>) -> EvalResult<Vector<T>>
    {
        let rows = self.rows.iter().map(f).collect::<EvalResult<Vec<_>>>()?;
        Ok(Self { rows })
    }

    /// Applies `op` element by element between two matrices of equal shape.
    ///
    /// # Errors
    /// `DimensionMismatch` if the shapes differ, or any element error.
    pub fn zip_with(&self, op: ArithmeticOp, rhs: &Self) -> EvalResult<Self> {
        if self.row_count() != rhs.row_count() || self.column_count() != rhs.column_count() {
            return Err(self.mismatch(op.symbol(), rhs.shape()));
        }
        let rows = self.rows
                       .iter()
                       .zip(rhs.rows.iter())
                       .map(|(l, r)| l.zip_with(op, r))
                       .collect::<EvalResult<Vec<_>>>()?;
        Ok(Self { rows })
    }

    /// Applies `op` between every row and `vector`.
    ///
    /// # Errors
    /// `DimensionMismatch` unless `vector` has one element per column.
    pub fn rowwise(&self, op: ArithmeticOp, vector: &Vector<T>) -> EvalResult<Self> {
        if self.column_count() != vector.len() {
            return Err(self.mismatch(op.symbol(), vector.len().to_string()));
        }
        self.map_rows(|row| row.zip_with(op, vector))
    }

    /// Standard matrix product.
    ///
    /// # Errors
    /// `DimensionMismatch` unless `cols(self) == rows(rhs)`.
    ///
    /// # Example
    /// ```
    /// use arithmos::interpreter::value::matrix::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
    ///
    /// assert_eq!(a.matmul(&b).unwrap(),
    ///            Matrix::from_rows(vec![vec![19, 22], vec![43, 50]]).unwrap());
    /// ```
    pub fn matmul(&self, rhs: &Self) -> EvalResult<Self> {
        if self.column_count() != rhs.row_count() {
            return Err(self.mismatch(ArithmeticOp::Mul.symbol(), rhs.shape()));
        }
        let columns = rhs.transpose();
        self.map_rows(|row| {
                columns.rows.iter().map(|column| row.dot(column)).collect::<EvalResult<_>>()
            })
    }

    /// Matrix·vector product.
    ///
    /// # Errors
    /// `DimensionMismatch` unless `vector` has one element per column.
    pub fn mul_vector(&self, vector: &Vector<T>) -> EvalResult<Vector<T>> {
        if self.column_count() != vector.len() {
            return Err(self.mismatch(ArithmeticOp::Mul.symbol(), vector.len().to_string()));
        }
        self.rows.iter().map(|row| row.dot(vector)).collect()
    }
}

impl<T: BitwiseOps> Matrix<T> {
    /// Applies the bitwise `op` element by element between equal shapes.
    pub fn zip_bitwise(&self, op: BitwiseOp, rhs: &Self) -> EvalResult<Self> {
        if self.row_count() != rhs.row_count() || self.column_count() != rhs.column_count() {
            return Err(self.mismatch(op.symbol(), rhs.shape()));
        }
        let rows = self.rows
                       .iter()
                       .zip(rhs.rows.iter())
                       .map(|(l, r)| l.zip_bitwise(op, r))
                       .collect::<EvalResult<Vec<_>>>()?;
        Ok(Self { rows })
    }

    /// Applies the bitwise `op` between every row and `vector`.
    pub fn rowwise_bitwise(&self, op: BitwiseOp, vector: &Vector<T>) -> EvalResult<Self> {
        if self.column_count() != vector.len() {
            return Err(self.mismatch(op.symbol(), vector.len().to_string()));
        }
        self.map_rows(|row| row.zip_bitwise(op, vector))
    }
}

impl<T: Incrementable> Matrix<T> {
    /// Adds one to every element.
    pub fn increment(&self) -> EvalResult<Self> {
        self.map_rows(Vector::increment)
    }

    /// Subtracts one from every element.
    pub fn decrement(&self) -> EvalResult<Self> {
        self.map_rows(Vector::decrement)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
