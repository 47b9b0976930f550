use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::errors::DahResult;
use crate::factor::FactorDef;
use crate::models::{Impact, Relation};

/// A value produced by an extension for the aggregation snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Contribution {
    Impact(Impact),
    Relation(Relation),
}

impl From<Impact> for Contribution {
    fn from(impact: Impact) -> Self {
        Self::Impact(impact)
    }
}

impl From<Relation> for Contribution {
    fn from(relation: Relation) -> Self {
        Self::Relation(relation)
    }
}

/// Producer of factor definitions and impact/relation contributions.
///
/// Extensions are opaque to the engine beyond this interface; the resolver
/// orders them purely by the names they declare.
pub trait Extension: Send + Sync {
    /// Unique extension name other extensions refer to.
    fn name(&self) -> &str;

    /// Names of extensions that must run before this one.
    fn dependencies(&self) -> Vec<String> {
        Vec::new()
    }

    /// Factor catalog entries this extension adds before the context is built.
    fn factors(&self) -> Vec<FactorDef> {
        Vec::new()
    }

    /// Produce impacts and relations against the finished context.
    fn contribute(&self, ctx: &Context) -> DahResult<Vec<Contribution>>;
}
