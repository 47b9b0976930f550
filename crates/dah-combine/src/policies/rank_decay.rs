use dah_core::errors::CombineError;

use crate::formula::Term;

/// Geometric damping by rank.
///
/// Formula: `Σ_k v_(k) × w^k`, ranks taken in canonical (descending) order.
/// The strongest contribution counts fully; each weaker one counts less the
/// more contributions precede it.
pub fn contributions(terms: &[Term]) -> Vec<f64> {
    terms
        .iter()
        .enumerate()
        .map(|(rank, term)| term.value * term.weight.powi(rank as i32))
        .collect()
}

/// Every term must share one weight; with mixed weights, raising a value past
/// a neighbour can lower the total.
///
/// Reports the lowest-positioned term whose weight differs from the weight of
/// the lowest-positioned term overall.
pub fn validate(terms: &[Term]) -> Result<(), CombineError> {
    let Some(first) = terms.iter().min_by_key(|t| t.index) else {
        return Ok(());
    };
    match terms
        .iter()
        .filter(|t| t.weight.to_bits() != first.weight.to_bits())
        .min_by_key(|t| t.index)
    {
        Some(t) => Err(CombineError::MixedWeights {
            index: t.index,
            weight: t.weight,
            expected: first.weight,
        }),
        None => Ok(()),
    }
}
