use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::errors::VectorError;

/// Ordered factor magnitudes; component `i` belongs to factor `i`.
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(Vec<f64>);

impl Vector {
    /// Zero vector sized to the context's factor count.
    pub fn zeros(ctx: &Context) -> Self {
        Self(vec![0.0; ctx.factor_count()])
    }

    /// Vector of `len` copies of `value`.
    pub fn filled(len: usize, value: f64) -> Self {
        Self(vec![value; len])
    }

    pub fn from_values(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Set one component. Only the owner touches a vector before it is
    /// attached to an impact or relation.
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), VectorError> {
        let len = self.0.len();
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(VectorError::DimensionMismatch {
                expected: len,
                actual: index + 1,
            }),
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Vector) -> Result<Vector, VectorError> {
        VectorError::check(self.len(), other.len())?;
        Ok(Self(
            self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect(),
        ))
    }

    /// Apply `f` to every component, returning a new vector.
    pub fn map<F>(&self, f: F) -> Vector
    where
        F: Fn(f64) -> f64,
    {
        Self(self.0.iter().map(|&v| f(v)).collect())
    }

    pub fn scale(&self, k: f64) -> Vector {
        self.map(|v| v * k)
    }

    /// Dot product with another vector of the same length.
    pub fn dot(&self, other: &Vector) -> Result<f64, VectorError> {
        VectorError::check(self.len(), other.len())?;
        Ok(self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum())
    }

    /// Fail unless this vector is sized for `ctx`.
    pub fn check_dimension(&self, ctx: &Context) -> Result<(), VectorError> {
        VectorError::check(ctx.factor_count(), self.len())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}
