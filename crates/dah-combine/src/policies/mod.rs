//! Closed forms selectable through [`CombinePolicy`].

pub mod rank_decay;
pub mod strongest_plus_weighted;

use dah_core::errors::CombineError;
use dah_core::CombinePolicy;

use crate::formula::Term;

/// Per-term contributions, aligned with `terms` (canonical order, len >= 2).
/// The combined magnitude is their sum.
pub fn contributions(policy: CombinePolicy, terms: &[Term]) -> Vec<f64> {
    match policy {
        CombinePolicy::RankDecay => rank_decay::contributions(terms),
        CombinePolicy::StrongestPlusWeighted => strongest_plus_weighted::contributions(terms),
    }
}

/// Reject inputs the policy cannot reduce while keeping the combine laws.
pub fn validate(policy: CombinePolicy, terms: &[Term]) -> Result<(), CombineError> {
    match policy {
        CombinePolicy::RankDecay => rank_decay::validate(terms),
        CombinePolicy::StrongestPlusWeighted => Ok(()),
    }
}
