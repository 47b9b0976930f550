//! Factor catalog: named scoring dimensions and the registry that indexes them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::FactorError;

/// A factor catalog entry before an index has been assigned.
///
/// Produced by configuration (`[[factors]]`) and by extensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorDef {
    pub name: String,
    /// Scale applied when mapping a domain strength to a magnitude,
    /// and when summarizing a score vector into one number.
    pub factor_weight: f64,
    /// Weight handed to Combine when merging magnitudes on this factor.
    pub subscore_weight: f64,
}

impl FactorDef {
    pub fn new(name: impl Into<String>, factor_weight: f64, subscore_weight: f64) -> Self {
        Self {
            name: name.into(),
            factor_weight,
            subscore_weight,
        }
    }
}

/// A registered scoring dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    pub name: String,
    /// Position of this factor in every vector of the owning context.
    pub index: usize,
    pub factor_weight: f64,
    pub subscore_weight: f64,
}

impl Factor {
    /// Map a domain strength onto this factor's magnitude scale.
    pub fn map_magnitude(&self, strength: f64) -> f64 {
        strength * self.factor_weight
    }
}

/// Immutable mapping from factor name to [`Factor`].
///
/// Indices are contiguous in `[0, len)` and follow declaration order.
#[derive(Debug, Clone, Default)]
pub struct FactorRegistry {
    factors: Vec<Factor>,
    by_name: HashMap<String, usize>,
}

impl FactorRegistry {
    /// Build a registry from catalog entries, assigning indices in order.
    pub fn new<I>(defs: I) -> Result<Self, FactorError>
    where
        I: IntoIterator<Item = FactorDef>,
    {
        let mut registry = Self::default();
        for def in defs {
            validate_def(&def)?;
            if registry.by_name.contains_key(&def.name) {
                return Err(FactorError::DuplicateFactor { name: def.name });
            }
            let index = registry.factors.len();
            registry.by_name.insert(def.name.clone(), index);
            registry.factors.push(Factor {
                name: def.name,
                index,
                factor_weight: def.factor_weight,
                subscore_weight: def.subscore_weight,
            });
        }
        Ok(registry)
    }

    /// Number of registered factors.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Look up a factor by name.
    pub fn get(&self, name: &str) -> Result<&Factor, FactorError> {
        self.by_name
            .get(name)
            .map(|&idx| &self.factors[idx])
            .ok_or_else(|| FactorError::UnknownFactor {
                name: name.to_string(),
            })
    }

    /// Look up a factor by index.
    pub fn by_index(&self, index: usize) -> Option<&Factor> {
        self.factors.get(index)
    }

    /// All factors in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Factor> {
        self.factors.iter()
    }
}

fn validate_def(def: &FactorDef) -> Result<(), FactorError> {
    if !def.factor_weight.is_finite() || def.factor_weight < 0.0 {
        return Err(FactorError::InvalidWeight {
            name: def.name.clone(),
            field: "factor_weight",
            value: def.factor_weight,
        });
    }
    // Combine needs a strict (0, 1) weight to stay sub-additive.
    if !(def.subscore_weight > 0.0 && def.subscore_weight < 1.0) {
        return Err(FactorError::InvalidWeight {
            name: def.name.clone(),
            field: "subscore_weight",
            value: def.subscore_weight,
        });
    }
    Ok(())
}
