//! Vector type for 1D numeric data.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A 1D vector of 64-bit floating-point values.
///
/// Unlike [`Matrix`](super::Matrix), a `Vector` may be empty; its only
/// invariant is length-based. Mutating operations return `&mut Self` so
/// calls can be chained.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Vector;
///
/// let v = Vector::from_slice(&[3.0, 4.0]);
/// assert_eq!(v.len(), 2);
/// assert!((v.norm() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    data: Vec<f64>,
}

/// Right-hand side of vector arithmetic: a scalar applied to every
/// element, or an equal-length vector applied element-wise.
#[derive(Debug, Clone, Copy)]
pub enum VectorOperand<'a> {
    /// Scalar applied to every element.
    Scalar(f64),
    /// Equal-length vector applied element-wise.
    Vector(&'a Vector),
}

impl From<f64> for VectorOperand<'static> {
    fn from(value: f64) -> Self {
        VectorOperand::Scalar(value)
    }
}

impl<'a> From<&'a Vector> for VectorOperand<'a> {
    fn from(value: &'a Vector) -> Self {
        VectorOperand::Vector(value)
    }
}

impl Vector {
    /// Creates an empty vector.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a vector from an owned `Vec<f64>`.
    #[must_use]
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Creates a vector by copying a slice.
    #[must_use]
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Creates a vector of `n` zeros.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self {
            data: vec![0.0; n],
        }
    }

    /// Creates a vector of `n` ones.
    #[must_use]
    pub fn ones(n: usize) -> Self {
        Self {
            data: vec![1.0; n],
        }
    }

    /// Creates the vector `0.0, 1.0, ..., n-1`.
    #[must_use]
    pub fn inc(n: usize) -> Self {
        Self {
            data: (0..n).map(|i| i as f64).collect(),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns a deep copy of the underlying data.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Returns the element at `i`, checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `i >= len`.
    pub fn get(&self, i: usize) -> Result<f64> {
        self.data
            .get(i)
            .copied()
            .ok_or_else(|| Error::index_out_of_range(i as isize, self.data.len()))
    }

    /// Appends an element at the end.
    pub fn push(&mut self, value: f64) -> &mut Self {
        self.data.push(value);
        self
    }

    /// Prepends an element at the front.
    pub fn unshift(&mut self, value: f64) -> &mut Self {
        self.data.insert(0, value);
        self
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] on an empty vector.
    pub fn pop(&mut self) -> Result<f64> {
        self.data.pop().ok_or(Error::EmptyInput { what: "vector" })
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] on an empty vector.
    pub fn shift(&mut self) -> Result<f64> {
        if self.data.is_empty() {
            return Err(Error::EmptyInput { what: "vector" });
        }
        Ok(self.data.remove(0))
    }

    /// Truncates the vector so its length becomes `i`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `i >= len`.
    pub fn cut(&mut self, i: usize) -> Result<&mut Self> {
        if i >= self.data.len() {
            return Err(Error::index_out_of_range(i as isize, self.data.len()));
        }
        self.data.truncate(i);
        Ok(self)
    }

    /// Deletes the half-open range `[i, j)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `i >= len`, `j > len`, or
    /// `j <= i`.
    pub fn cut_range(&mut self, i: usize, j: usize) -> Result<&mut Self> {
        if i >= self.data.len() {
            return Err(Error::index_out_of_range(i as isize, self.data.len()));
        }
        if j > self.data.len() || j <= i {
            return Err(Error::index_out_of_range(j as isize, self.data.len()));
        }
        self.data.drain(i..j);
        Ok(self)
    }

    /// Sets every element to `value`.
    pub fn set_all(&mut self, value: f64) -> &mut Self {
        self.data.fill(value);
        self
    }

    /// Replaces each element `x` with `f(x)`.
    pub fn map<F: FnMut(f64) -> f64>(&mut self, mut f: F) -> &mut Self {
        for x in &mut self.data {
            *x = f(*x);
        }
        self
    }

    /// Returns true if `p` holds for every element.
    pub fn all<P: FnMut(f64) -> bool>(&self, mut p: P) -> bool {
        self.data.iter().all(|&x| p(x))
    }

    /// Returns true if `p` holds for at least one element.
    pub fn any<P: FnMut(f64) -> bool>(&self, mut p: P) -> bool {
        self.data.iter().any(|&x| p(x))
    }

    /// Sum of all elements (0.0 for an empty vector).
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Product of all elements (1.0 for an empty vector).
    #[must_use]
    pub fn prod(&self) -> f64 {
        self.data.iter().product()
    }

    /// Arithmetic mean: `sum / len`. NaN for an empty vector.
    #[must_use]
    pub fn avg(&self) -> f64 {
        self.sum() / self.data.len() as f64
    }

    /// Inner product with another vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        if self.data.len() != other.data.len() {
            return Err(Error::length_mismatch(self.data.len(), other.data.len()));
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Euclidean norm: square root of the sum of squares.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Adds a scalar or an equal-length vector element-wise, in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if a vector RHS has a different
    /// length.
    pub fn add<'a, R: Into<VectorOperand<'a>>>(&mut self, rhs: R) -> Result<&mut Self> {
        self.zip_apply(rhs.into(), |a, b| a + b)
    }

    /// Subtracts a scalar or an equal-length vector element-wise, in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if a vector RHS has a different
    /// length.
    pub fn sub<'a, R: Into<VectorOperand<'a>>>(&mut self, rhs: R) -> Result<&mut Self> {
        self.zip_apply(rhs.into(), |a, b| a - b)
    }

    /// Multiplies by a scalar or an equal-length vector element-wise,
    /// in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if a vector RHS has a different
    /// length.
    pub fn mul<'a, R: Into<VectorOperand<'a>>>(&mut self, rhs: R) -> Result<&mut Self> {
        self.zip_apply(rhs.into(), |a, b| a * b)
    }

    /// Divides by a scalar or an equal-length vector element-wise, in place.
    ///
    /// The divisor is scanned for zeros before any element is written, so
    /// on failure the vector is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if any divisor element is zero,
    /// or [`Error::ShapeMismatch`] if a vector RHS has a different length.
    pub fn div<'a, R: Into<VectorOperand<'a>>>(&mut self, rhs: R) -> Result<&mut Self> {
        let rhs = rhs.into();
        match rhs {
            VectorOperand::Scalar(s) => {
                if s == 0.0 {
                    return Err(Error::DivisionByZero);
                }
            }
            VectorOperand::Vector(v) => {
                if v.data.len() != self.data.len() {
                    return Err(Error::length_mismatch(self.data.len(), v.data.len()));
                }
                if v.data.iter().any(|&x| x == 0.0) {
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

    fn zip_apply(&mut self, rhs: VectorOperand<'_>, op: fn(f64, f64) -> f64) -> Result<&mut Self> {
        match rhs {
            VectorOperand::Scalar(s) => {
                for x in &mut self.data {
                    *x = op(*x, s);
                }
            }
            VectorOperand::Vector(v) => {
                if v.data.len() != self.data.len() {
                    return Err(Error::length_mismatch(self.data.len(), v.data.len()));
                }
                for (x, &b) in self.data.iter_mut().zip(v.data.iter()) {
                    *x = op(*x, b);
                }
            }
        }
        Ok(self)
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.data[index]
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
