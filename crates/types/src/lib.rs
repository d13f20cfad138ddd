//! Shared type definitions for the Stratum provisioning engine.
//!
//! The engine, provider manifests, and the CLI all exchange the same schema and
//! catalog descriptors. Keeping them in a dependency-light crate lets provider
//! implementations depend on the types without pulling in the engine.

pub mod catalog;
pub mod schema;

pub use catalog::{DataSource, ResourceType};
pub use schema::{Attribute, AttributeType, NestedBlock, NestingMode, SchemaBlock};
