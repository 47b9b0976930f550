//! # dah-combine
//!
//! Merges independent, non-negative contribution magnitudes into one number
//! under a diminishing-returns policy. Every per-factor aggregation in the
//! engine routes through [`combine`].
//!
//! Laws every policy satisfies: a single value comes back unchanged, zeros
//! are absorbed, the result is order-independent, monotone in each value,
//! and strictly below the plain sum once two or more values are positive.

pub mod breakdown;
pub mod formula;
pub mod policies;
pub mod vectors;

pub use breakdown::{combine_breakdown, CombineBreakdown, CombineTerm};
pub use formula::combine;
pub use vectors::{combine_factor, combine_vectors};
