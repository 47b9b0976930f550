use dah_core::errors::{CombineError, DahResult, VectorError};
use dah_core::{Context, Vector};

use crate::formula::combine;

/// Combine magnitudes on one factor, weighted by that factor's `subscore_weight`.
pub fn combine_factor(ctx: &Context, factor_index: usize, values: &[f64]) -> DahResult<f64> {
    let weight = ctx
        .registry()
        .by_index(factor_index)
        .map(|f| f.subscore_weight)
        .ok_or(VectorError::DimensionMismatch {
            expected: ctx.factor_count(),
            actual: factor_index + 1,
        })?;
    Ok(combine(ctx, values, |_, _| weight)?)
}

/// Reduce score vectors factor by factor.
///
/// Used for every per-entry aggregation, and by extensions that merge several
/// emotions into one impact.
pub fn combine_vectors(ctx: &Context, vectors: &[Vector]) -> DahResult<Vector> {
    if vectors.is_empty() {
        return Err(CombineError::EmptyInput.into());
    }
    for vector in vectors {
        vector.check_dimension(ctx)?;
    }

    let mut out = Vec::with_capacity(ctx.factor_count());
    let mut column = Vec::with_capacity(vectors.len());
    for factor in ctx.factors() {
        column.clear();
        column.extend(vectors.iter().map(|v| v[factor.index]));
        out.push(combine(ctx, &column, |_, _| factor.subscore_weight)?);
    }
    Ok(Vector::from_values(out))
}
