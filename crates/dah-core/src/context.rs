//! The immutable handle every vector, matrix, and combine operation is sized against.

use serde::{Deserialize, Serialize};

use crate::errors::{FactorError, VectorError};
use crate::factor::{Factor, FactorRegistry};
use crate::math::Vector;

/// Closed form used by Combine to merge magnitudes on one factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinePolicy {
    /// Strongest contribution counts fully; the k-th strongest is damped by `w^k`.
    /// Every non-zero input must carry the same weight.
    RankDecay,
    /// Strongest contribution counts fully; every other one counts at its weight.
    #[default]
    StrongestPlusWeighted,
}

impl CombinePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RankDecay => "rank_decay",
            Self::StrongestPlusWeighted => "strongest_plus_weighted",
        }
    }
}

impl std::fmt::Display for CombinePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable view of the active factor set for one aggregation run.
///
/// Built once, then shared by reference. There is no process-wide registry,
/// so independent contexts can coexist.
#[derive(Debug, Clone)]
pub struct Context {
    registry: FactorRegistry,
    policy: CombinePolicy,
}

impl Context {
    /// Create a context with the default combine policy.
    pub fn new(registry: FactorRegistry) -> Self {
        Self::with_policy(registry, CombinePolicy::default())
    }

    pub fn with_policy(registry: FactorRegistry, policy: CombinePolicy) -> Self {
        Self { registry, policy }
    }

    /// Dimensionality of every vector and matrix in this context.
    pub fn factor_count(&self) -> usize {
        self.registry.len()
    }

    pub fn policy(&self) -> CombinePolicy {
        self.policy
    }

    pub fn registry(&self) -> &FactorRegistry {
        &self.registry
    }

    /// Look up a factor by name.
    pub fn factor(&self, name: &str) -> Result<&Factor, FactorError> {
        self.registry.get(name)
    }

    pub fn factors(&self) -> impl Iterator<Item = &Factor> {
        self.registry.iter()
    }

    /// Zero vector sized to this context.
    pub fn zero_vector(&self) -> Vector {
        Vector::zeros(self)
    }

    /// Build a vector from `(factor name, magnitude)` pairs; unnamed factors stay zero.
    /// A name given twice keeps its last value.
    pub fn vector_from(&self, values: &[(&str, f64)]) -> Result<Vector, FactorError> {
        let mut out = vec![0.0; self.factor_count()];
        for &(name, value) in values {
            out[self.factor(name)?.index] = value;
        }
        Ok(Vector::from_values(out))
    }

    /// Summarize a score vector as `Σ factor_weight_i · v_i`.
    pub fn overall_score(&self, vector: &Vector) -> Result<f64, VectorError> {
        vector.check_dimension(self)?;
        Ok(self
            .factors()
            .zip(vector.iter())
            .map(|(factor, v)| factor.factor_weight * v)
            .sum())
    }
}

/// Zero vector sized to `ctx`.
pub fn new_zero_vector(ctx: &Context) -> Vector {
    Vector::zeros(ctx)
}
