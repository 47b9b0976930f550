use serde::{Deserialize, Serialize};

use super::Vector;
use crate::context::Context;
use crate::errors::{DahResult, VectorError};

/// Linear transform attached to a graph edge, mapping a score vector into
/// the same factor space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Matrix {
    /// Per-factor scalar multiplier.
    Diagonal(Vector),
    /// Dense square matrix, one row per output factor.
    Full(Vec<Vector>),
}

impl Matrix {
    /// Identity transform for the context's factor space.
    pub fn identity(ctx: &Context) -> Self {
        Self::scalar(ctx, 1.0)
    }

    /// Uniform scaling on every factor.
    pub fn scalar(ctx: &Context, k: f64) -> Self {
        Self::Diagonal(Vector::filled(ctx.factor_count(), k))
    }

    pub fn diagonal(scales: Vector) -> Self {
        Self::Diagonal(scales)
    }

    pub fn full(rows: Vec<Vector>) -> Self {
        Self::Full(rows)
    }

    /// Diagonal matrix passing `k` of the named factor and nothing else.
    pub fn on_factor(ctx: &Context, factor: &str, k: f64) -> DahResult<Self> {
        let index = ctx.factor(factor)?.index;
        let mut scales = Vector::zeros(ctx);
        scales.set(index, k)?;
        Ok(Self::Diagonal(scales))
    }

    /// Side length of the factor space this matrix operates on.
    pub fn dimension(&self) -> usize {
        match self {
            Self::Diagonal(scales) => scales.len(),
            Self::Full(rows) => rows.len(),
        }
    }

    /// Apply the transform to `vector`.
    pub fn apply(&self, vector: &Vector) -> Result<Vector, VectorError> {
        match self {
            Self::Diagonal(scales) => {
                VectorError::check(scales.len(), vector.len())?;
                Ok(scales
                    .iter()
                    .zip(vector.iter())
                    .map(|(k, v)| k * v)
                    .collect::<Vec<_>>()
                    .into())
            }
            Self::Full(rows) => {
                VectorError::check(rows.len(), vector.len())?;
                let out = rows
                    .iter()
                    .map(|row| row.dot(vector))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(out.into())
            }
        }
    }

    /// Fail unless this matrix is sized for `ctx`.
    pub fn check_dimension(&self, ctx: &Context) -> Result<(), VectorError> {
        match self {
            Self::Diagonal(scales) => scales.check_dimension(ctx),
            Self::Full(rows) => {
                VectorError::check(ctx.factor_count(), rows.len())?;
                rows.iter().try_for_each(|row| row.check_dimension(ctx))
            }
        }
    }
}
