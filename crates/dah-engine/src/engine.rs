//! AggregationEngine: validates a snapshot and propagates scores children-first.

use std::collections::BTreeMap;
use std::time::Instant;

use dah_combine::combine_vectors;
use dah_core::config::EngineConfig;
use dah_core::errors::{DahErrorCode, GraphError};
use dah_core::{Context, Data, DahResult, Meta, Vector};
use dah_observability::events;

use crate::graph::dag_enforcement::evaluation_order;
use crate::graph::references::validate_references;
use crate::graph::EntryGraph;
use crate::result::{AggregationResult, ContributionSource, Provenance};

/// A contribution waiting to be merged into an entry's score.
struct Pending<'a> {
    source: ContributionSource,
    vector: Vector,
    meta: &'a Meta,
}

impl Pending<'_> {
    fn into_provenance(self) -> Provenance {
        Provenance {
            source: self.source,
            contribution: self.vector,
            meta: self.meta.clone(),
        }
    }
}

/// Pure function of `(Context, Data)`: the same inputs always produce
/// bit-identical scores.
#[derive(Debug, Clone, Default)]
pub struct AggregationEngine {
    config: EngineConfig,
}

impl AggregationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score every entry of `data`.
    ///
    /// Fails without partial output on dimension mismatches, dangling ids,
    /// cycles, and (when configured) duplicate entry ids.
    pub fn aggregate(&self, ctx: &Context, data: &Data) -> DahResult<AggregationResult> {
        let span = dah_observability::aggregation_span!(data.entries.len());
        let _guard = span.enter();
        let start = Instant::now();

        events::aggregation_started(
            data.entries.len(),
            data.impacts.len(),
            data.relations.len(),
            ctx.factor_count(),
        );

        let result = self.propagate(ctx, data);
        match &result {
            Ok(result) => events::aggregation_completed(
                result.scores.len(),
                result.contribution_count(),
                start.elapsed().as_millis() as u64,
            ),
            Err(e) => events::aggregation_failed(e.error_code(), &e.to_string()),
        }
        result
    }

    fn propagate(&self, ctx: &Context, data: &Data) -> DahResult<AggregationResult> {
        if self.config.reject_duplicate_ids {
            if let Some(id) = data.duplicate_ids().into_iter().next() {
                return Err(GraphError::DuplicateEntry { id }.into());
            }
        }
        data.check_dimensions(ctx)?;

        let index = data.index();
        validate_references(data, &index)?;
        let graph = EntryGraph::build(&index);
        let order = evaluation_order(&graph)?;

        let mut direct = gather_direct(data)?;
        let mut result = AggregationResult::default();

        for node in order {
            let Some(entry) = graph.entry(node) else {
                continue;
            };
            let span = dah_observability::entry_span!(entry.id);
            let _guard = span.enter();

            let mut pending = direct.remove(entry.id.as_str()).unwrap_or_default();
            for (child_id, matrix) in &entry.children {
                let dangling = || GraphError::DanglingReference {
                    id: child_id.clone(),
                    referrer: format!("entry '{}' child", entry.id),
                };
                let child = index.get(child_id.as_str()).copied().ok_or_else(dangling)?;
                let child_score = result.scores.get(child_id).ok_or_else(dangling)?;
                pending.push(Pending {
                    source: ContributionSource::Child {
                        id: child_id.clone(),
                    },
                    vector: matrix.apply(child_score)?,
                    meta: &child.meta,
                });
            }

            let score = if pending.is_empty() {
                ctx.zero_vector()
            } else {
                let vectors: Vec<Vector> = pending.iter().map(|p| p.vector.clone()).collect();
                combine_vectors(ctx, &vectors)?
            };
            tracing::debug!(contributions = pending.len(), "entry scored");

            result.scores.insert(entry.id.clone(), score);
            result.provenance.insert(
                entry.id.clone(),
                pending.into_iter().map(Pending::into_provenance).collect(),
            );
        }

        Ok(result)
    }
}

/// Impact and relation contributions keyed by the entry they feed,
/// each already transformed by its edge matrix.
fn gather_direct(data: &Data) -> DahResult<BTreeMap<&str, Vec<Pending<'_>>>> {
    let mut direct: BTreeMap<&str, Vec<Pending<'_>>> = BTreeMap::new();
    for (index, impact) in data.impacts.iter().enumerate() {
        for (id, matrix) in &impact.contributors {
            direct.entry(id.as_str()).or_default().push(Pending {
                source: ContributionSource::Impact { index },
                vector: matrix.apply(&impact.score)?,
                meta: &impact.meta,
            });
        }
    }
    for (index, relation) in data.relations.iter().enumerate() {
        for (side, id, matrix) in relation.edges() {
            direct.entry(id.as_str()).or_default().push(Pending {
                source: ContributionSource::Relation { index, side },
                vector: matrix.apply(&relation.score)?,
                meta: &relation.meta,
            });
        }
    }
    Ok(direct)
}

/// Convenience: score `data` with the default engine configuration.
pub fn aggregate(ctx: &Context, data: &Data) -> DahResult<AggregationResult> {
    AggregationEngine::default().aggregate(ctx, data)
}
