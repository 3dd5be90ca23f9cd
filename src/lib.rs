//! Matriz: dense f64 matrix and vector primitives in pure Rust.
//!
//! Matriz provides an in-process, allocation-friendly dense numeric
//! container with ergonomic axis reductions, limited broadcasting, and
//! CSV persistence. Storage is always a flat row-major `Vec<f64>` owned
//! exclusively by its handle; every fallible operation validates its
//! preconditions before the first destructive write.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! // A 3x4 matrix filled with 0, 1, 2, ... in row-major order.
//! let mut a = Matrix::zeros(3, 4)?;
//! a.set_inc();
//!
//! // Broadcast a row vector across every row, then reduce.
//! let bias = Vector::ones(4);
//! a.add(&bias)?;
//! assert_eq!(a.sum_axis(Axis::Row, 0)?, 10.0);
//!
//! // Matrix product, sequential and parallel, agree exactly.
//! let b = a.transpose();
//! assert_eq!(a.matmul(&b)?, a.matmul_par(&b)?);
//! # Ok::<(), matriz::error::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core [`Matrix`](primitives::Matrix) and
//!   [`Vector`](primitives::Vector) types
//! - [`csv`]: Streaming CSV ingest and buffered CSV export for matrices
//! - [`error`]: The closed error set and crate [`Result`](error::Result)
//! - [`prelude`]: Convenience re-exports
//!
//! # Concurrency
//!
//! Every operation is synchronous except
//! [`Matrix::matmul_par`](primitives::Matrix::matmul_par), which
//! partitions the outer row dimension across rayon workers writing
//! disjoint stripes of a pre-allocated buffer. Distinct handles are safe
//! to use from distinct threads; a single handle is single-threaded.

pub mod csv;
pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{Error, Result};
pub use primitives::{Axis, Matrix, Vector};
