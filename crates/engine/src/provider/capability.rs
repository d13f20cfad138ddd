//! Schema capability sniffing.
//!
//! Schema retrieval was added to providers without a protocol version bump, so
//! there is no handshake that reports it. Providers built with schema support
//! instead set `schema_available` on the descriptors in their catalogs, and the
//! engine infers support from those declarations.

use tracing::debug;

use super::ResourceProvider;

/// Catalog entry a schema support decision was based on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    /// First resource type in the provider's catalog.
    ResourceType(String),
    /// First data source; only consulted when there are no resource types.
    DataSource(String),
    /// The provider declares neither resource types nor data sources.
    Undeclared,
}

/// Outcome of sniffing a provider for schema support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSupport {
    pub supported: bool,
    pub evidence: Evidence,
}

/// Determines whether a provider implementation supports schema retrieval.
///
/// The first resource type's `schema_available` flag decides. When the
/// provider has no resource types, the first data source decides. A provider
/// with neither is reported as unsupported; it would have nothing to describe.
///
/// All descriptors from one provider are assumed to share the same capability,
/// so entries after the first are never inspected, and resource types take
/// precedence over data sources even when they disagree.
///
/// Only catalog listings are consulted; the schema call itself is never made.
pub fn sniff_schema_support(provider: &dyn ResourceProvider) -> SchemaSupport {
    let support = if let Some(resource) = provider.resources().into_iter().next() {
        SchemaSupport {
            supported: resource.schema_available,
            evidence: Evidence::ResourceType(resource.name),
        }
    } else if let Some(data_source) = provider.data_sources().into_iter().next() {
        SchemaSupport {
            supported: data_source.schema_available,
            evidence: Evidence::DataSource(data_source.name),
        }
    } else {
        SchemaSupport {
            supported: false,
            evidence: Evidence::Undeclared,
        }
    };

    debug!(supported = support.supported, evidence = ?support.evidence, "sniffed provider schema support");
    support
}

/// Shorthand for `sniff_schema_support(provider).supported`.
pub fn supports_schema(provider: &dyn ResourceProvider) -> bool {
    sniff_schema_support(provider).supported
}
