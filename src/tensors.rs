//! Methods for vector and matrix manipulation and linear algebra.

pub mod matrix;
pub mod vector;

pub use matrix::{Matrix, MatrixError};
pub use vector::Vector;
