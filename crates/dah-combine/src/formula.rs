use dah_core::errors::CombineError;
use dah_core::Context;

use crate::policies;

/// A validated, non-zero input to the combine reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    /// Position in the caller's input slice.
    pub index: usize,
    pub value: f64,
    pub weight: f64,
}

/// Merge `values` into one magnitude using the context's combine policy.
///
/// `weight_fn(index, value)` supplies each value's weight; it is only
/// consulted when two or more values are non-zero, so a single value is
/// returned exactly whatever the weight function says.
pub fn combine<W>(ctx: &Context, values: &[f64], weight_fn: W) -> Result<f64, CombineError>
where
    W: Fn(usize, f64) -> f64,
{
    let terms = prepare(values, weight_fn)?;
    match terms.as_slice() {
        [] => Ok(0.0),
        [only] => Ok(only.value),
        _ => {
            policies::validate(ctx.policy(), &terms)?;
            Ok(policies::contributions(ctx.policy(), &terms).iter().sum::<f64>())
        }
    }
}

/// Validate inputs, drop zeros, attach weights, and sort into canonical order.
///
/// Canonical order is value descending, then weight descending. Equal keys
/// are interchangeable, so the reduction never depends on input order.
pub(crate) fn prepare<W>(values: &[f64], weight_fn: W) -> Result<Vec<Term>, CombineError>
where
    W: Fn(usize, f64) -> f64,
{
    if values.is_empty() {
        return Err(CombineError::EmptyInput);
    }

    let mut nonzero = Vec::with_capacity(values.len());
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(CombineError::InvalidContribution { index, value });
        }
        if value > 0.0 {
            nonzero.push((index, value));
        }
    }

    if nonzero.len() < 2 {
        return Ok(nonzero
            .into_iter()
            .map(|(index, value)| Term {
                index,
                value,
                weight: 1.0,
            })
            .collect());
    }

    let mut terms = Vec::with_capacity(nonzero.len());
    for (index, value) in nonzero {
        let weight = weight_fn(index, value);
        if !(weight > 0.0 && weight < 1.0) {
            return Err(CombineError::InvalidWeight { index, weight });
        }
        terms.push(Term {
            index,
            value,
            weight,
        });
    }

    terms.sort_by(|a, b| {
        b.value
            .total_cmp(&a.value)
            .then_with(|| b.weight.total_cmp(&a.weight))
    });
    Ok(terms)
}
