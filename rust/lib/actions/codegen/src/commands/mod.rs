pub mod generate;
pub mod inspect;

use std::path::Path;

use actions_codegen_lib::ActionSchema;
use anyhow::{Context, Result};

/// Read and load a schema file, with an optional explicit root type.
pub fn load_schema(path: &Path, root: Option<&str>) -> Result<ActionSchema> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schema {}", path.display()))?;
    let schema = match root {
        Some(root) => ActionSchema::parse_with_root(&source, root),
        None => ActionSchema::parse(&source),
    }
    .with_context(|| format!("failed to load schema {}", path.display()))?;
    Ok(schema)
}
