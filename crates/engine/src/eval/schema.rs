//! Evaluation node that fetches a provider's top-level configuration schema.

use std::{fmt, sync::Arc};

use stratum_types::SchemaBlock;
use tracing::debug;

use super::{EvalContext, EvalNode};
use crate::{
    error::EvalError,
    provider::{ResourceProvider, sniff_schema_support},
};

/// Gets the schema for a provider's main configuration, as it would appear
/// inside a `provider` block.
#[derive(Clone)]
pub struct GetProviderSchema {
    /// Display name used in diagnostics.
    pub provider_name: String,
    pub provider: Arc<dyn ResourceProvider>,
}

impl GetProviderSchema {
    pub fn new(provider_name: impl Into<String>, provider: Arc<dyn ResourceProvider>) -> Self {
        Self {
            provider_name: provider_name.into(),
            provider,
        }
    }
}

impl fmt::Debug for GetProviderSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetProviderSchema")
            .field("provider_name", &self.provider_name)
            .finish_non_exhaustive()
    }
}

impl EvalNode for GetProviderSchema {
    type Output = Arc<SchemaBlock>;

    fn name(&self) -> String {
        format!("provider.{}.schema", self.provider_name)
    }

    /// Checks that the provider supports schema retrieval, fetches the schema,
    /// and normalizes an absent schema to an empty one.
    ///
    /// # Errors
    ///
    /// - [`EvalError::Capability`] when the provider does not declare schema support.
    /// - [`EvalError::Provider`] carrying the provider's error unchanged when the fetch fails.
    fn eval(&self, _ctx: &EvalContext) -> Result<Self::Output, EvalError> {
        let support = sniff_schema_support(self.provider.as_ref());
        if !support.supported {
            debug!(provider = %self.provider_name, evidence = ?support.evidence, "provider does not declare schema support");
            return Err(EvalError::capability(&self.provider_name));
        }

        let schema = self.provider.provider_schema()?;
        debug!(provider = %self.provider_name, returned_schema = schema.is_some(), "fetched provider schema");

        Ok(normalize_schema(schema))
    }
}

/// Promotes an absent schema to an empty one.
///
/// Providers signal "no schema" with `None`; downstream readers only ever see a
/// concrete block, so an empty schema and a missing one cannot be confused.
/// Concrete schemas are returned as the same allocation.
pub fn normalize_schema(schema: Option<Arc<SchemaBlock>>) -> Arc<SchemaBlock> {
    schema.unwrap_or_else(|| Arc::new(SchemaBlock::empty()))
}
