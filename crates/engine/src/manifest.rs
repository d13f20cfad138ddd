//! File-backed providers.
//!
//! A provider manifest declares a provider's catalog and configuration schema
//! in YAML or JSON, which lets the schema pipeline run without a plugin
//! transport. Manifests live in `~/.config/stratum/providers` by default.

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result, bail};
use dirs_next::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use stratum_types::{DataSource, ResourceType, SchemaBlock};
use tracing::debug;

use crate::{error::ProviderError, provider::ResourceProvider};

/// Environment variable overriding the manifest directory.
pub const PROVIDER_DIR_ENV: &str = "STRATUM_PROVIDER_DIR";

const MANIFEST_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Serialized provider declaration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProviderManifest {
    /// Provider name, e.g. `aws`.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub resources: Vec<ResourceType>,
    #[serde(default)]
    pub data_sources: Vec<DataSource>,
    /// Configuration schema. Omitting it means the provider returns no schema.
    #[serde(default)]
    pub schema: Option<SchemaBlock>,
}

/// Provider backed by a parsed manifest.
#[derive(Debug, Clone)]
pub struct ManifestProvider {
    name: String,
    resources: Vec<ResourceType>,
    data_sources: Vec<DataSource>,
    schema: Option<Arc<SchemaBlock>>,
}

impl ManifestProvider {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<ProviderManifest> for ManifestProvider {
    fn from(manifest: ProviderManifest) -> Self {
        Self {
            name: manifest.name,
            resources: manifest.resources,
            data_sources: manifest.data_sources,
            schema: manifest.schema.map(Arc::new),
        }
    }
}

impl ResourceProvider for ManifestProvider {
    fn resources(&self) -> Vec<ResourceType> {
        self.resources.clone()
    }

    fn data_sources(&self) -> Vec<DataSource> {
        self.data_sources.clone()
    }

    fn provider_schema(&self) -> Result<Option<Arc<SchemaBlock>>, ProviderError> {
        Ok(self.schema.clone())
    }
}

/// Returns the directory provider manifests are loaded from by default.
pub fn default_manifest_dir() -> PathBuf {
    if let Ok(path) = env::var(PROVIDER_DIR_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    config_dir().unwrap_or_else(|| PathBuf::from(".")).join("stratum").join("providers")
}

/// Loads a single provider manifest from a YAML or JSON file.
///
/// # Errors
///
/// Fails when the file cannot be read, does not parse, or omits the provider name.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<ProviderManifest> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read provider manifest: {}", path.display()))?;

    let parsed = if is_json(path) {
        serde_json::from_str::<ProviderManifest>(&content).map_err(anyhow::Error::from)
    } else {
        serde_yaml::from_str::<ProviderManifest>(&content).map_err(anyhow::Error::from)
    };
    let mut manifest = parsed.with_context(|| format!("Failed to parse provider manifest: {}", path.display()))?;

    manifest.name = manifest.name.trim().to_string();
    if manifest.name.is_empty() {
        bail!("provider manifest {} is missing the required 'name' field", path.display());
    }

    debug!(
        provider = %manifest.name,
        path = %path.display(),
        resources = manifest.resources.len(),
        data_sources = manifest.data_sources.len(),
        "loaded provider manifest"
    );
    Ok(manifest)
}

/// Loads every manifest in `dir`, ordered by file name.
///
/// A missing directory yields no manifests.
///
/// # Errors
///
/// Fails on the first unreadable or invalid manifest, or when two manifests
/// declare the same provider name.
pub fn load_manifest_dir(dir: impl AsRef<Path>) -> Result<Vec<ProviderManifest>> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read manifest directory: {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && has_manifest_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    load_manifests(&paths)
}

/// Loads the given manifest files in order.
///
/// # Errors
///
/// Fails on the first invalid manifest or on duplicate provider names.
pub fn load_manifests(paths: &[PathBuf]) -> Result<Vec<ProviderManifest>> {
    let mut manifests: Vec<ProviderManifest> = Vec::with_capacity(paths.len());
    for path in paths {
        let manifest = load_manifest(path)?;
        if manifests.iter().any(|existing| existing.name == manifest.name) {
            bail!("duplicate provider name detected: '{}' ({})", manifest.name, path.display());
        }
        manifests.push(manifest);
    }
    Ok(manifests)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"))
}

fn has_manifest_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| MANIFEST_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str()))
}

fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    if trimmed == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = trimmed.strip_prefix("~/") {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(trimmed)
}
