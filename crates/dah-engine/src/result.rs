//! Aggregation output: one score vector per entry plus per-contribution provenance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dah_core::models::RelationSide;
use dah_core::{Context, DahResult, Id, Meta, Vector};

/// Where a contribution to an entry's score came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContributionSource {
    /// `Data.impacts[index]`, entry listed as a contributor.
    Impact { index: usize },
    /// `Data.relations[index]`, entry listed on `side`.
    Relation { index: usize, side: RelationSide },
    /// Score of child `id` carried through the parent's edge matrix.
    Child { id: Id },
}

/// One transformed vector that fed an entry's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub source: ContributionSource,
    /// The vector after the edge matrix was applied.
    pub contribution: Vector,
    /// Metadata of the impact, relation, or child entry, passed through untouched.
    #[serde(rename = "DAH_meta", default)]
    pub meta: Meta,
}

/// Result of one aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    /// Final score vector of every indexed entry.
    pub scores: BTreeMap<Id, Vector>,
    /// Contributions per entry, in gathering order (impacts, relations, children).
    pub provenance: BTreeMap<Id, Vec<Provenance>>,
}

impl AggregationResult {
    /// Score vector of `id`, if the entry was part of the snapshot.
    pub fn score(&self, id: &str) -> Option<&Vector> {
        self.scores.get(id)
    }

    /// Contributions that fed `id`.
    pub fn provenance(&self, id: &str) -> &[Provenance] {
        self.provenance.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of contributions across all entries.
    pub fn contribution_count(&self) -> usize {
        self.provenance.values().map(Vec::len).sum()
    }

    /// Summarize every score vector into `Σ factor_weight_i · v_i`.
    pub fn overall_scores(&self, ctx: &Context) -> DahResult<BTreeMap<Id, f64>> {
        self.scores
            .iter()
            .map(|(id, v)| Ok((id.clone(), ctx.overall_score(v)?)))
            .collect()
    }

    /// Entries ordered by overall score, highest first; ties by id.
    pub fn ranked(&self, ctx: &Context) -> DahResult<Vec<(Id, f64)>> {
        let mut ranked: Vec<(Id, f64)> = self.overall_scores(ctx)?.into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(ranked)
    }
}
