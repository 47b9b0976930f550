//! Fixed-dimension vectors and the per-edge linear transforms applied to them.

pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
