use std::sync::Arc;

use stratum_types::{DataSource, ResourceType, SchemaBlock};

use super::ResourceProvider;
use crate::error::ProviderError;

/// Provider that declares no resource types or data sources and returns no schema.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProvider;

impl ResourceProvider for NullProvider {
    fn resources(&self) -> Vec<ResourceType> {
        Vec::new()
    }

    fn data_sources(&self) -> Vec<DataSource> {
        Vec::new()
    }

    fn provider_schema(&self) -> Result<Option<Arc<SchemaBlock>>, ProviderError> {
        Ok(None)
    }
}
