//! # Stratum Engine
//!
//! Provider capability negotiation and schema evaluation for the Stratum
//! provisioning engine.
//!
//! Providers are pluggable backends that publish resource types, data sources,
//! and a schema for their own configuration block. Older providers predate
//! schema retrieval and there is no protocol-level way to ask, so the engine
//! sniffs support from the providers' catalog declarations before calling in.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use stratum_engine::{EvalContext, EvalNode, GetProviderSchema, ManifestProvider, ProviderManifest};
//! use stratum_types::ResourceType;
//!
//! let provider = ManifestProvider::from(ProviderManifest {
//!     name: "aws".into(),
//!     resources: vec![ResourceType::new("aws_instance", true)],
//!     ..Default::default()
//! });
//!
//! let node = GetProviderSchema::new("aws", Arc::new(provider));
//! let schema = node.eval(&EvalContext::default())?;
//! assert!(schema.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **`provider`**: `ResourceProvider` trait and schema capability sniffing
//! - **`eval`**: Evaluation nodes, including the provider schema node
//! - **`executor`**: Runs schema nodes and stores their results
//! - **`manifest`**: File-backed providers loaded from YAML or JSON
//! - **`error`**: Provider and evaluation error types

pub mod error;
pub mod eval;
pub mod executor;
pub mod manifest;
pub mod provider;

// Re-export commonly used types for convenience
pub use error::{EvalError, ProviderError};
pub use eval::{EvalContext, EvalNode, GetProviderSchema, WalkOperation, normalize_schema};
pub use executor::{NodeResult, NodeStatus, ProviderSchemas, run_schema_node, run_schema_nodes};
pub use manifest::{ManifestProvider, ProviderManifest, default_manifest_dir, load_manifest, load_manifest_dir, load_manifests};
pub use provider::{Evidence, NullProvider, ResourceProvider, SchemaSupport, sniff_schema_support, supports_schema};
