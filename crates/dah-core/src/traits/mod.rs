pub mod extension;

pub use extension::{Contribution, Extension};
