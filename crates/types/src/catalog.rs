//! Catalog descriptors a provider publishes for its resource types and data sources.

use serde::{Deserialize, Serialize};

/// A resource type exposed by a provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ResourceType {
    /// Resource type name, conventionally prefixed with the provider name (`aws_instance`).
    pub name: String,
    /// Set by the provider implementation when it was built with schema support.
    ///
    /// Providers that predate schema support never set this, so it defaults to `false`.
    #[serde(default)]
    pub schema_available: bool,
}

impl ResourceType {
    pub fn new(name: impl Into<String>, schema_available: bool) -> Self {
        Self {
            name: name.into(),
            schema_available,
        }
    }
}

/// A data source exposed by a provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DataSource {
    /// Data source name.
    pub name: String,
    /// Same meaning as [`ResourceType::schema_available`].
    #[serde(default)]
    pub schema_available: bool,
}

impl DataSource {
    pub fn new(name: impl Into<String>, schema_available: bool) -> Self {
        Self {
            name: name.into(),
            schema_available,
        }
    }
}
