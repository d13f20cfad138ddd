//! Block-structured configuration schema.
//!
//! A [`SchemaBlock`] describes the attributes and nested blocks accepted inside
//! a configuration block such as `provider "aws" { ... }`. Attribute and block
//! order follows authoring order (via `IndexMap`) so rendered output and
//! diagnostics stay stable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Description of the attributes and nested blocks allowed in one configuration block.
///
/// The `Default` value is the canonical empty schema: a block that accepts no
/// attributes and no nested blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SchemaBlock {
    /// Attributes keyed by name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, Attribute>,
    /// Nested block types keyed by block type name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub block_types: IndexMap<String, NestedBlock>,
}

impl SchemaBlock {
    /// Returns the empty schema.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the block declares neither attributes nor nested blocks.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.block_types.is_empty()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    pub fn with_block(mut self, name: impl Into<String>, block: NestedBlock) -> Self {
        self.block_types.insert(name.into(), block);
        self
    }
}

/// A single configuration attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attribute {
    /// Collection types are written as single-key maps (`{map: string}`) in both YAML and JSON.
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub r#type: AttributeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub optional: bool,
    /// Value is supplied by the provider rather than the configuration author.
    #[serde(default)]
    pub computed: bool,
    /// Value must be redacted in plan output and logs.
    #[serde(default)]
    pub sensitive: bool,
}

impl Attribute {
    pub fn required(attribute_type: AttributeType) -> Self {
        Self {
            r#type: attribute_type,
            description: None,
            required: true,
            optional: false,
            computed: false,
            sensitive: false,
        }
    }

    pub fn optional(attribute_type: AttributeType) -> Self {
        Self {
            required: false,
            optional: true,
            ..Self::required(attribute_type)
        }
    }

    pub fn computed(attribute_type: AttributeType) -> Self {
        Self {
            required: false,
            computed: true,
            ..Self::required(attribute_type)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// Value type of an attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Number,
    Bool,
    List(Box<AttributeType>),
    Set(Box<AttributeType>),
    Map(Box<AttributeType>),
    /// Type is decided by the provider at runtime.
    Dynamic,
}

/// A nested block type and the constraints on how often it may appear.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NestedBlock {
    #[serde(default)]
    pub nesting: NestingMode,
    #[serde(default)]
    pub block: SchemaBlock,
    #[serde(default)]
    pub min_items: u64,
    /// Zero means unbounded.
    #[serde(default)]
    pub max_items: u64,
}

impl NestedBlock {
    pub fn new(nesting: NestingMode, block: SchemaBlock) -> Self {
        Self {
            nesting,
            block,
            min_items: 0,
            max_items: 0,
        }
    }
}

/// How repeated occurrences of a nested block are collected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NestingMode {
    #[default]
    Single,
    List,
    Set,
    Map,
}
