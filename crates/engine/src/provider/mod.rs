//! Provider handles and capability detection.
//!
//! Modules:
//! - `capability`: Schema support sniffing from catalog declarations
//! - `null`: Provider that declares nothing, for tests and disabled scenarios

mod capability;
mod null;

use std::{fmt::Debug, sync::Arc};

pub use capability::{Evidence, SchemaSupport, sniff_schema_support, supports_schema};
pub use null::NullProvider;
use stratum_types::{DataSource, ResourceType, SchemaBlock};

use crate::error::ProviderError;

/// Interface to a provider implementation, usually reached through a plugin transport.
///
/// Handles are shared between the nodes of a graph pass as
/// `Arc<dyn ResourceProvider>`. Implementations must tolerate concurrent calls;
/// the engine never mutates provider state through this trait.
pub trait ResourceProvider: Send + Sync + Debug {
    /// Resource types the provider manages, in the provider's own order.
    fn resources(&self) -> Vec<ResourceType>;

    /// Data sources the provider exposes, in the provider's own order.
    fn data_sources(&self) -> Vec<DataSource>;

    /// Schema for the provider's own configuration block.
    ///
    /// `Ok(None)` means the provider returned no schema. This call may block on
    /// the transport; callers should check [`supports_schema`] first because
    /// older providers do not implement it.
    fn provider_schema(&self) -> Result<Option<Arc<SchemaBlock>>, ProviderError>;
}
