//! `actions-codegen inspect`: dump the enriched type map as JSON.

use std::path::Path;

use anyhow::Result;

use super::load_schema;

pub fn run(schema_path: &Path, root: Option<&str>) -> Result<String> {
    let schema = load_schema(schema_path, root)?;
    Ok(serde_json::to_string_pretty(&schema.inspect())?)
}
