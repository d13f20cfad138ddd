//! Executor-owned storage for evaluated provider schemas.

use std::sync::Arc;

use indexmap::{IndexMap, map::Entry};
use stratum_types::SchemaBlock;

use crate::error::EvalError;

/// Normalized provider schemas keyed by provider name, in evaluation order.
///
/// Each provider's schema is assigned at most once per pass.
#[derive(Debug, Clone, Default)]
pub struct ProviderSchemas {
    schemas: IndexMap<String, Arc<SchemaBlock>>,
}

impl ProviderSchemas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the schema for `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::AlreadyAssigned`] when a schema is already stored
    /// for the provider; the existing value is kept.
    pub fn insert_once(&mut self, provider: impl Into<String>, schema: Arc<SchemaBlock>) -> Result<(), EvalError> {
        match self.schemas.entry(provider.into()) {
            Entry::Occupied(entry) => Err(EvalError::already_assigned(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(schema);
                Ok(())
            }
        }
    }

    pub fn get(&self, provider: &str) -> Option<&Arc<SchemaBlock>> {
        self.schemas.get(provider)
    }

    pub fn contains(&self, provider: &str) -> bool {
        self.schemas.contains_key(provider)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<SchemaBlock>)> {
        self.schemas.iter().map(|(name, schema)| (name.as_str(), schema))
    }
}
