//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{Error, Result};
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A 2D matrix of 64-bit floating-point values (row-major storage).
///
/// Every matrix has at least one row and one column; constructors reject
/// empty shapes. The element at `(i, j)` lives at flat index
/// `i * cols + j`. No two handles ever share storage: constructors,
/// `clone`, `transpose`, and `matmul` all allocate fresh buffers.
///
/// In-place operations return `&mut Self` so calls can be chained;
/// operations documented as producing a new matrix leave their inputs
/// untouched.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let mut m = Matrix::zeros(2, 3).expect("2x3 is a valid shape");
/// m.set_inc();
/// assert_eq!(m.get(1, 2).expect("in bounds"), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Axis selector for reductions: rows are axis 0, columns axis 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Axis 0: the reduction runs over one row.
    Row,
    /// Axis 1: the reduction runs over one column.
    Col,
}

impl TryFrom<i64> for Axis {
    type Error = Error;

    fn try_from(axis: i64) -> Result<Self> {
        match axis {
            0 => Ok(Axis::Row),
            1 => Ok(Axis::Col),
            _ => Err(Error::InvalidAxis { axis }),
        }
    }
}

/// Right-hand side of matrix arithmetic.
///
/// A scalar applies to every element; a vector of length `cols`
/// broadcasts across every row; a same-shape matrix applies
/// element-wise. `From` impls let call sites pass `f64`, `&Vector`, or
/// `&Matrix` directly.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    /// Scalar applied to every element.
    Scalar(f64),
    /// Length-`cols` vector broadcast across rows.
    Vector(&'a Vector),
    /// Same-shape matrix applied element-wise.
    Matrix(&'a Matrix),
}

impl From<f64> for Operand<'static> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a> From<&'a Vector> for Operand<'a> {
    fn from(value: &'a Vector) -> Self {
        Operand::Vector(value)
    }
}

impl<'a> From<&'a Matrix> for Operand<'a> {
    fn from(value: &'a Matrix) -> Self {
        Operand::Matrix(value)
    }
}

impl Matrix {
    fn check_dims(rows: usize, cols: usize) -> Result<()> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        Ok(())
    }

    /// Creates a matrix of zeros.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::check_dims(rows, cols)?;
        Ok(Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        })
    }

    /// Creates a matrix of ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::check_dims(rows, cols)?;
        Ok(Self {
            data: vec![1.0; rows * cols],
            rows,
            cols,
        })
    }

    /// Creates an identity matrix: ones on the diagonal, zeros elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `n` is zero.
    pub fn eye(n: usize) -> Result<Self> {
        Self::check_dims(n, n)?;
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Ok(Self {
            data,
            rows: n,
            cols: n,
        })
    }

    /// Creates a matrix from a flat row-major vector of data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero,
    /// or [`Error::ShapeMismatch`] if the data length doesn't equal
    /// `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        Self::check_dims(rows, cols)?;
        if data.len() != rows * cols {
            return Err(Error::length_mismatch(rows * cols, data.len()));
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a `1 x len` matrix from a flat sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] on an empty sequence.
    pub fn from_flat(data: Vec<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::EmptyInput { what: "flat data" });
        }
        let cols = data.len();
        Ok(Self {
            data,
            rows: 1,
            cols,
        })
    }

    /// Creates a matrix from a row-of-rows sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] on an empty outer or first inner
    /// sequence, or [`Error::JaggedInput`] if any row's length differs
    /// from the first row's.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::EmptyInput { what: "rows" });
        }
        let cols = rows[0].len();
        if cols == 0 {
            return Err(Error::EmptyInput { what: "first row" });
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        let n_rows = rows.len();
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(Error::JaggedInput {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols,
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets the element at (row, col), checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either index is out of
    /// bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        if row >= self.rows {
            return Err(Error::index_out_of_range(row as isize, self.rows));
        }
        if col >= self.cols {
            return Err(Error::index_out_of_range(col as isize, self.cols));
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Sets the element at (row, col), checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either index is out of
    /// bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.rows {
            return Err(Error::index_out_of_range(row as isize, self.rows));
        }
        if col >= self.cols {
            return Err(Error::index_out_of_range(col as isize, self.cols));
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Returns a row as a fresh Vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `row_idx >= rows`.
    pub fn row(&self, row_idx: usize) -> Result<Vector> {
        if row_idx >= self.rows {
            return Err(Error::index_out_of_range(row_idx as isize, self.rows));
        }
        let start = row_idx * self.cols;
        Ok(Vector::from_slice(&self.data[start..start + self.cols]))
    }

    /// Returns a column as a fresh Vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `col_idx >= cols`.
    pub fn col(&self, col_idx: usize) -> Result<Vector> {
        if col_idx >= self.cols {
            return Err(Error::index_out_of_range(col_idx as isize, self.cols));
        }
        let data: Vec<f64> = (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect();
        Ok(Vector::from_vec(data))
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns a deep copy of the backing sequence, row-major.
    #[must_use]
    pub fn to_flat(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Returns a row-of-rows deep copy.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    /// Reshapes in place, preserving element values and row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either new dimension is
    /// zero, or [`Error::ShapeMismatch`] if the element count would
    /// change.
    pub fn reshape(&mut self, rows: usize, cols: usize) -> Result<&mut Self> {
        Self::check_dims(rows, cols)?;
        if rows * cols != self.rows * self.cols {
            return Err(Error::shape_mismatch((self.rows, self.cols), (rows, cols)));
        }
        self.rows = rows;
        self.cols = cols;
        Ok(self)
    }

    // ---- in-place fills ----------------------------------------------

    /// Sets every element to `value`.
    pub fn set_all(&mut self, value: f64) -> &mut Self {
        self.data.fill(value);
        self
    }

    /// Sets every element to 1.0.
    pub fn set_ones(&mut self) -> &mut Self {
        self.set_all(1.0)
    }

    /// Resets every element to 0.0.
    pub fn set_zeros(&mut self) -> &mut Self {
        self.set_all(0.0)
    }

    /// Fills with `0.0, 1.0, 2.0, ...` in row-major order, so element
    /// `(i, j)` becomes `i * cols + j`.
    pub fn set_inc(&mut self) -> &mut Self {
        for (i, x) in self.data.iter_mut().enumerate() {
            *x = i as f64;
        }
        self
    }

    /// Fills with uniform random values in `[0, 1)`.
    pub fn set_rand(&mut self) -> &mut Self {
        let mut rng = rand::thread_rng();
        for x in &mut self.data {
            *x = rng.gen::<f64>();
        }
        self
    }

    /// Fills with uniform random values in `[0, hi)`, or `(hi, 0]` when
    /// `hi` is negative.
    pub fn set_rand_max(&mut self, hi: f64) -> &mut Self {
        let mut rng = rand::thread_rng();
        for x in &mut self.data {
            // Scaling a [0, 1) sample by a negative bound lands in (hi, 0].
            *x = rng.gen::<f64>() * hi;
        }
        self
    }

    /// Fills with uniform random values in `[lo, hi)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when `lo >= hi`.
    pub fn set_rand_range(&mut self, lo: f64, hi: f64) -> Result<&mut Self> {
        if lo >= hi {
            return Err(Error::InvalidRange { lo, hi });
        }
        let mut rng = rand::thread_rng();
        for x in &mut self.data {
            *x = lo + rng.gen::<f64>() * (hi - lo);
        }
        Ok(self)
    }

    // ---- element-wise engine -----------------------------------------

    /// Replaces each element `x` with `f(x)`.
    pub fn map<F: FnMut(f64) -> f64>(&mut self, mut f: F) -> &mut Self {
        for x in &mut self.data {
            *x = f(*x);
        }
        self
    }

    /// Collects the elements for which `p` holds into a fresh `1 x k`
    /// matrix, in row-major order.
    ///
    /// Returns `None` when no element passes: zero-width matrices are
    /// not constructible, so absence is the representable outcome.
    pub fn filter<P: FnMut(f64) -> bool>(&self, mut p: P) -> Option<Matrix> {
        let kept: Vec<f64> = self.data.iter().copied().filter(|&x| p(x)).collect();
        if kept.is_empty() {
            return None;
        }
        let cols = kept.len();
        Some(Matrix {
            data: kept,
            rows: 1,
            cols,
        })
    }

    /// Returns true if `p` holds for every element.
    pub fn all<P: FnMut(f64) -> bool>(&self, mut p: P) -> bool {
        self.data.iter().all(|&x| p(x))
    }

    /// Returns true if `p` holds for at least one element.
    pub fn any<P: FnMut(f64) -> bool>(&self, mut p: P) -> bool {
        self.data.iter().any(|&x| p(x))
    }

    // ---- arithmetic --------------------------------------------------

    /// Adds the operand element-wise, in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if a vector RHS's length differs
    /// from `cols` or a matrix RHS's shape differs.
    pub fn add<'a, R: Into<Operand<'a>>>(&mut self, rhs: R) -> Result<&mut Self> {
        self.zip_apply(rhs.into(), |a, b| a + b)
    }

    /// Subtracts the operand element-wise, in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if a vector RHS's length differs
    /// from `cols` or a matrix RHS's shape differs.
    pub fn sub<'a, R: Into<Operand<'a>>>(&mut self, rhs: R) -> Result<&mut Self> {
        self.zip_apply(rhs.into(), |a, b| a - b)
    }

    /// Multiplies by the operand element-wise, in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if a vector RHS's length differs
    /// from `cols` or a matrix RHS's shape differs.
    pub fn mul<'a, R: Into<Operand<'a>>>(&mut self, rhs: R) -> Result<&mut Self> {
        self.zip_apply(rhs.into(), |a, b| a * b)
    }

    /// Divides by the operand element-wise, in place.
    ///
    /// The divisor is scanned for zeros before any element is written,
    /// so on failure the matrix is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if the scalar or any divisor
    /// element is zero, or [`Error::ShapeMismatch`] as for [`Matrix::add`].
    pub fn div<'a, R: Into<Operand<'a>>>(&mut self, rhs: R) -> Result<&mut Self> {
        let rhs = rhs.into();
        match rhs {
            Operand::Scalar(s) => {
                if s == 0.0 {
                    return Err(Error::DivisionByZero);
                }
            }
            Operand::Vector(v) => {
                if v.len() != self.cols {
                    return Err(Error::length_mismatch(self.cols, v.len()));
                }
                if v.as_slice().iter().any(|&x| x == 0.0) {
                    return Err(Error::DivisionByZero);
                }
            }
            Operand::Matrix(m) => {
                if m.shape() != self.shape() {
                    return Err(Error::shape_mismatch(self.shape(), m.shape()));
                }
                if m.data.iter().any(|&x| x == 0.0) {
                    return Err(Error::DivisionByZero);
                }
            }
        }
        self.zip_apply(rhs, |a, b| a / b)
    }

    /// Multiplies every element by `factor`. Equivalent to `mul(factor)`.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        for x in &mut self.data {
            *x *= factor;
        }
        self
    }

    fn zip_apply(&mut self, rhs: Operand<'_>, op: fn(f64, f64) -> f64) -> Result<&mut Self> {
        match rhs {
            Operand::Scalar(s) => {
                for x in &mut self.data {
                    *x = op(*x, s);
                }
            }
            Operand::Vector(v) => {
                if v.len() != self.cols {
                    return Err(Error::length_mismatch(self.cols, v.len()));
                }
                let rhs_row = v.as_slice();
                for row in self.data.chunks_mut(self.cols) {
                    for (x, &b) in row.iter_mut().zip(rhs_row) {
                        *x = op(*x, b);
                    }
                }
            }
            Operand::Matrix(m) => {
                if m.shape() != (self.rows, self.cols) {
                    return Err(Error::shape_mismatch((self.rows, self.cols), m.shape()));
                }
                for (x, &b) in self.data.iter_mut().zip(m.data.iter()) {
                    *x = op(*x, b);
                }
            }
        }
        Ok(self)
    }

    // ---- reductions --------------------------------------------------

    /// Sum of all elements.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Product of all elements.
    #[must_use]
    pub fn prod(&self) -> f64 {
        self.data.iter().product()
    }

    /// Arithmetic mean over all elements.
    #[must_use]
    pub fn avg(&self) -> f64 {
        self.sum() / self.data.len() as f64
    }

    /// Normalises a possibly negative axis index against `extent`.
    fn normalize_index(index: isize, extent: usize) -> Result<usize> {
        let normalized = if index < 0 {
            index + extent as isize
        } else {
            index
        };
        if normalized < 0 || normalized as usize >= extent {
            return Err(Error::index_out_of_range(index, extent));
        }
        Ok(normalized as usize)
    }

    /// Left-to-right fold over one row or column.
    fn axis_fold<F: FnMut(f64, f64) -> f64>(
        &self,
        axis: Axis,
        index: isize,
        init: f64,
        mut f: F,
    ) -> Result<f64> {
        match axis {
            Axis::Row => {
                let i = Self::normalize_index(index, self.rows)?;
                let row = &self.data[i * self.cols..(i + 1) * self.cols];
                Ok(row.iter().fold(init, |acc, &x| f(acc, x)))
            }
            Axis::Col => {
                let j = Self::normalize_index(index, self.cols)?;
                Ok((0..self.rows)
                    .map(|i| self.data[i * self.cols + j])
                    .fold(init, |acc, x| f(acc, x)))
            }
        }
    }

    fn axis_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.cols,
            Axis::Col => self.rows,
        }
    }

    /// Sum along one row (`Axis::Row`) or column (`Axis::Col`).
    ///
    /// A negative `index` counts from the end of the axis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the normalised index falls
    /// outside the axis.
    pub fn sum_axis(&self, axis: Axis, index: isize) -> Result<f64> {
        self.axis_fold(axis, index, 0.0, |acc, x| acc + x)
    }

    /// Product along one row or column. Negative `index` counts from the
    /// end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the normalised index falls
    /// outside the axis.
    pub fn prod_axis(&self, axis: Axis, index: isize) -> Result<f64> {
        self.axis_fold(axis, index, 1.0, |acc, x| acc * x)
    }

    /// Mean along one row or column. Negative `index` counts from the
    /// end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the normalised index falls
    /// outside the axis.
    pub fn avg_axis(&self, axis: Axis, index: isize) -> Result<f64> {
        Ok(self.sum_axis(axis, index)? / self.axis_len(axis) as f64)
    }

    /// Population standard deviation along one row or column: the square
    /// root of the mean squared deviation from the axis mean. Negative
    /// `index` counts from the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the normalised index falls
    /// outside the axis.
    pub fn std_axis(&self, axis: Axis, index: isize) -> Result<f64> {
        let mean = self.avg_axis(axis, index)?;
        let n = self.axis_len(axis) as f64;
        let sq_dev = self.axis_fold(axis, index, 0.0, |acc, x| acc + (x - mean) * (x - mean))?;
        Ok((sq_dev / n).sqrt())
    }

    // ---- linear algebra ----------------------------------------------

    /// Returns a new `cols x rows` matrix with `result[j, i] = self[i, j]`.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix-matrix multiplication, producing a new
    /// `self.rows x other.cols` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when `self.cols != other.rows`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(Error::ShapeMismatch {
                expected: format!("{}x{}", self.cols, other.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }

        let mut data = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                data[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Matrix-matrix multiplication with the outer row dimension
    /// partitioned across worker threads.
    ///
    /// Each worker writes a disjoint row stripe of the pre-allocated
    /// result, and the per-cell accumulation order matches
    /// [`Matrix::matmul`], so the result is deterministic and equal to
    /// the sequential product.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when `self.cols != other.rows`.
    pub fn matmul_par(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(Error::ShapeMismatch {
                expected: format!("{}x{}", self.cols, other.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }

        let mut data = vec![0.0; self.rows * other.cols];
        data.par_chunks_mut(other.cols)
            .enumerate()
            .for_each(|(i, out_row)| {
                for (j, out) in out_row.iter_mut().enumerate() {
                    let mut sum = 0.0;
                    for k in 0..self.cols {
                        sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                    }
                    *out = sum;
                }
            });

        Ok(Self {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    // ---- structural mutation -----------------------------------------

    /// Appends `v` as a new bottom row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `v.len() != cols`.
    pub fn append_row(&mut self, v: &Vector) -> Result<&mut Self> {
        if v.len() != self.cols {
            return Err(Error::length_mismatch(self.cols, v.len()));
        }
        self.data.extend_from_slice(v.as_slice());
        self.rows += 1;
        Ok(self)
    }

    /// Appends `v` as a new rightmost column, reflowing the row-major
    /// buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `v.len() != rows`.
    pub fn append_col(&mut self, v: &Vector) -> Result<&mut Self> {
        if v.len() != self.rows {
            return Err(Error::length_mismatch(self.rows, v.len()));
        }
        let new_cols = self.cols + 1;
        let mut data = Vec::with_capacity(self.rows * new_cols);
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            data.extend_from_slice(row);
            data.push(v[i]);
        }
        self.data = data;
        self.cols = new_cols;
        Ok(self)
    }

    /// Horizontal concatenation: appends `other`'s columns to the right
    /// of this matrix, reflowing the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the row counts differ.
    pub fn concat(&mut self, other: &Matrix) -> Result<&mut Self> {
        if other.rows != self.rows {
            return Err(Error::shape_mismatch(
                (self.rows, other.cols),
                (other.rows, other.cols),
            ));
        }
        let new_cols = self.cols + other.cols;
        let mut data = Vec::with_capacity(self.rows * new_cols);
        for (row, other_row) in self
            .data
            .chunks(self.cols)
            .zip(other.data.chunks(other.cols))
        {
            data.extend_from_slice(row);
            data.extend_from_slice(other_row);
        }
        self.data = data;
        self.cols = new_cols;
        Ok(self)
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod contract_tests;
