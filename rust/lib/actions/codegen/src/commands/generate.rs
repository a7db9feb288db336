//! `actions-codegen generate`: write handler files for every target.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use actions_codegen_lib::Target;
use anyhow::{Context, Result};
use tracing::info;

use super::load_schema;
use crate::config::CodegenConfig;

pub fn run(schema_path: &Path, config: &CodegenConfig) -> Result<Vec<PathBuf>> {
    let schema = Arc::new(load_schema(schema_path, config.root.as_deref())?);
    let targets = resolve_targets(&config.targets)?;

    info!(
        "generating {} code for root {}",
        config.targets.join(", "),
        schema.root()
    );
    let generation = actions_codegen_lib::generate(&schema, &config.actions, &targets)?;

    std::fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("failed to create {}", config.out_dir.display()))?;

    let mut written = Vec::with_capacity(generation.files.len());
    for file in &generation.files {
        let path = config.out_dir.join(&file.path);
        std::fs::write(&path, &file.content).with_context(|| {
            format!(
                "failed to write {} ({} file(s) already written to {} are left in place)",
                path.display(),
                written.len(),
                config.out_dir.display()
            )
        })?;
        info!("wrote {}", path.display());
        written.push(path);
    }

    if !generation.is_complete() {
        anyhow::bail!(
            "Unknown action(s) on {}: {} ({} file(s) written for the others)",
            schema.root(),
            generation.missing.join(", "),
            written.len()
        );
    }
    Ok(written)
}

fn resolve_targets(names: &[String]) -> Result<Vec<Target>> {
    if names.is_empty() {
        anyhow::bail!("No target languages selected");
    }
    names
        .iter()
        .map(|name| {
            Target::by_name(name).ok_or_else(|| anyhow::anyhow!("Unsupported target: {}", name))
        })
        .collect()
}
