//! ScoringPipeline: resolve extensions, build the context, collect
//! contributions, and aggregate.

use dah_core::{Context, Contribution, DahConfig, DahResult, Data, Entry, Extension};
use dah_observability::events;

use crate::engine::AggregationEngine;
use crate::resolver::ExtensionResolver;
use crate::result::AggregationResult;

/// Everything one pipeline run produced.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Context built from configured factors followed by extension factors.
    pub context: Context,
    /// Snapshot handed to the engine.
    pub data: Data,
    /// Extension names in the order they contributed.
    pub extension_order: Vec<String>,
    pub result: AggregationResult,
}

/// Runs registered extensions against a configuration and scores the catalog.
pub struct ScoringPipeline {
    config: DahConfig,
    extensions: Vec<Box<dyn Extension>>,
}

impl ScoringPipeline {
    pub fn new(config: DahConfig) -> Self {
        Self {
            config,
            extensions: Vec::new(),
        }
    }

    /// Register an extension. Registration order breaks ties between
    /// extensions that do not depend on each other.
    pub fn with_extension(mut self, extension: Box<dyn Extension>) -> Self {
        self.extensions.push(extension);
        self
    }

    pub fn register(&mut self, extension: Box<dyn Extension>) {
        self.extensions.push(extension);
    }

    pub fn config(&self) -> &DahConfig {
        &self.config
    }

    /// Run the pipeline.
    ///
    /// `catalog` builds the entries once the context exists, so edge
    /// matrices can be sized against the final factor set.
    pub fn run<F>(&self, catalog: F) -> DahResult<PipelineOutput>
    where
        F: FnOnce(&Context) -> DahResult<Vec<Entry>>,
    {
        let span = dah_observability::pipeline_span!(self.extensions.len());
        let _guard = span.enter();

        let order = ExtensionResolver::resolve(&self.extensions)?;
        let extension_order: Vec<String> = order.iter().map(|e| e.name().to_string()).collect();
        events::extensions_resolved(&extension_order);

        let context = self
            .config
            .build_context(order.iter().flat_map(|e| e.factors()))?;

        let mut data = Data::new(catalog(&context)?, Vec::new(), Vec::new());
        for extension in &order {
            let contributions = extension.contribute(&context)?;
            let (mut impacts, mut relations) = (0usize, 0usize);
            for contribution in contributions {
                match contribution {
                    Contribution::Impact(impact) => {
                        impacts += 1;
                        data.impacts.push(impact);
                    }
                    Contribution::Relation(relation) => {
                        relations += 1;
                        data.relations.push(relation);
                    }
                }
            }
            events::extension_contributed(extension.name(), impacts, relations);
        }

        let engine = AggregationEngine::new(self.config.engine.clone());
        let result = engine.aggregate(&context, &data)?;

        Ok(PipelineOutput {
            context,
            data,
            extension_order,
            result,
        })
    }
}
