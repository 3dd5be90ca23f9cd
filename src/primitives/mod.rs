//! Core numeric primitives (Vector, Matrix).
//!
//! These types are the foundation of the crate: a row-major, flat-backed
//! [`Matrix`] with limited broadcasting and axis reductions, and its 1D
//! [`Vector`] collaborator.

mod matrix;
mod vector;

pub use matrix::{Axis, Matrix, Operand};
pub use vector::{Vector, VectorOperand};
