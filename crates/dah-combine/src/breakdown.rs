use serde::{Deserialize, Serialize};

use dah_core::errors::CombineError;
use dah_core::Context;

use crate::formula;
use crate::policies;

/// One input's share of a combined magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombineTerm {
    /// Position in the caller's input slice.
    pub index: usize,
    pub value: f64,
    pub weight: f64,
    /// Rank in canonical order (0 = strongest).
    pub rank: usize,
    /// Amount this input adds to the combined magnitude.
    pub contribution: f64,
}

/// Combine result with each non-zero term's contribution, for debugging and audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombineBreakdown {
    pub terms: Vec<CombineTerm>,
    /// Plain sum of the inputs, the upper bound on `combined`.
    pub simple_sum: f64,
    pub combined: f64,
}

/// Compute [`formula::combine`] along with a per-term breakdown.
pub fn combine_breakdown<W>(
    ctx: &Context,
    values: &[f64],
    weight_fn: W,
) -> Result<CombineBreakdown, CombineError>
where
    W: Fn(usize, f64) -> f64,
{
    let terms = formula::prepare(values, weight_fn)?;
    let contributions = if terms.len() < 2 {
        terms.iter().map(|t| t.value).collect()
    } else {
        policies::validate(ctx.policy(), &terms)?;
        policies::contributions(ctx.policy(), &terms)
    };

    let combined: f64 = contributions.iter().sum();
    let terms = terms
        .iter()
        .zip(contributions)
        .enumerate()
        .map(|(rank, (term, contribution))| CombineTerm {
            index: term.index,
            value: term.value,
            weight: term.weight,
            rank,
            contribution,
        })
        .collect();

    Ok(CombineBreakdown {
        terms,
        simple_sum: values.iter().sum(),
        combined,
    })
}
