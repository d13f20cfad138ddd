use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
};

use anyhow::Result;
use clap::Parser;
use indexmap::IndexMap;
use stratum_engine::{
    EvalContext, Evidence, GetProviderSchema, ManifestProvider, NodeStatus, ProviderManifest, WalkOperation, default_manifest_dir,
    load_manifest_dir, load_manifests, run_schema_nodes, sniff_schema_support,
};
use stratum_types::SchemaBlock;
use tracing::{debug, info};

mod cli;

use cli::{Args, Command};

/// One or more providers failed schema evaluation.
const EXIT_FAILURE: u8 = 1;
/// Manifests could not be loaded or output could not be rendered.
const EXIT_CONFIG_ERROR: u8 = 66;

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let outcome = match args.command {
        Command::Schema { manifests, compact } => run_schema(&manifests, compact, &mut io::stdout().lock(), &mut io::stderr().lock()),
        Command::Sniff { manifests } => run_sniff(&manifests, &mut io::stdout().lock()).map(|()| true),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_FAILURE),
        Err(error) => {
            eprintln!("stratum: error: {error:#}");
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_manifests(paths: &[PathBuf]) -> Result<Vec<ProviderManifest>> {
    if !paths.is_empty() {
        return load_manifests(paths);
    }
    let dir = default_manifest_dir();
    debug!(dir = %dir.display(), "loading manifests from provider directory");
    load_manifest_dir(&dir)
}

/// Writes the schemas of successful providers to `out` as a JSON object and
/// one line per failed provider to `err`.
///
/// Returns `Ok(false)` when at least one provider failed.
fn run_schema(paths: &[PathBuf], compact: bool, out: &mut impl Write, err: &mut impl Write) -> Result<bool> {
    let manifests = resolve_manifests(paths)?;
    let nodes: Vec<GetProviderSchema> = manifests
        .into_iter()
        .map(|manifest| {
            let name = manifest.name.clone();
            GetProviderSchema::new(name, Arc::new(ManifestProvider::from(manifest)))
        })
        .collect();

    let (store, results) = run_schema_nodes(&nodes, &EvalContext::new(WalkOperation::Validate));

    let mut failed = 0usize;
    for result in &results {
        if result.status == NodeStatus::Failed {
            failed += 1;
            writeln!(err, "{}: {}", result.id, result.error.as_deref().unwrap_or("failed"))?;
        }
    }

    let rendered: IndexMap<&str, &SchemaBlock> = store.iter().map(|(name, schema)| (name, schema.as_ref())).collect();
    let output = if compact {
        serde_json::to_string(&rendered)?
    } else {
        serde_json::to_string_pretty(&rendered)?
    };
    writeln!(out, "{output}")?;

    info!(providers = results.len(), failed, "schema evaluation finished");
    Ok(failed == 0)
}

fn run_sniff(paths: &[PathBuf], out: &mut impl Write) -> Result<()> {
    let manifests = resolve_manifests(paths)?;
    for manifest in manifests {
        let name = manifest.name.clone();
        let provider = ManifestProvider::from(manifest);
        let support = sniff_schema_support(&provider);
        let verdict = if support.supported { "supported" } else { "unsupported" };
        writeln!(out, "{name}\t{verdict}\t{}", describe_evidence(&support.evidence))?;
    }
    Ok(())
}

fn describe_evidence(evidence: &Evidence) -> String {
    match evidence {
        Evidence::ResourceType(name) => format!("first resource type '{name}'"),
        Evidence::DataSource(name) => format!("first data source '{name}'"),
        Evidence::Undeclared => "no resource types or data sources declared".to_string(),
    }
}
