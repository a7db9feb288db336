//! Generator configuration.
//!
//! Reads `actions-codegen.toml`; every key is optional and command-line
//! flags take precedence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Root type whose fields are the actions. When unset, the schema's
    /// `schema { mutation }` block or `Mutation` is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    /// Directory the handler files are written to.
    #[serde(rename = "out-dir")]
    pub out_dir: PathBuf,

    /// Target languages (`typescript`, `go`, `kotlin`).
    pub targets: Vec<String>,

    /// Actions to generate. Empty means every action on the root.
    pub actions: Vec<String>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            root: None,
            out_dir: PathBuf::from("generated"),
            targets: vec!["typescript".to_string(), "go".to_string()],
            actions: Vec::new(),
        }
    }
}

impl CodegenConfig {
    /// Default config file path: ./actions-codegen.toml.
    pub fn default_path() -> PathBuf {
        PathBuf::from("actions-codegen.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: CodegenConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply command-line overrides. Empty lists leave the file's values.
    pub fn merge_args(
        mut self,
        root: Option<String>,
        out_dir: Option<PathBuf>,
        targets: Vec<String>,
        actions: Vec<String>,
    ) -> Self {
        if root.is_some() {
            self.root = root;
        }
        if let Some(out_dir) = out_dir {
            self.out_dir = out_dir;
        }
        if !targets.is_empty() {
            self.targets = targets;
        }
        if !actions.is_empty() {
            self.actions = actions;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CodegenConfig::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, CodegenConfig::default());
        assert_eq!(config.targets, vec!["typescript", "go"]);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actions-codegen.toml");
        std::fs::write(&path, "root = \"Actions\"\ntargets = [\"kotlin\"]\n").unwrap();

        let config = CodegenConfig::load(&path).unwrap();
        assert_eq!(config.root.as_deref(), Some("Actions"));
        assert_eq!(config.targets, vec!["kotlin"]);
        assert_eq!(config.out_dir, PathBuf::from("generated"));
        assert!(config.actions.is_empty());
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actions-codegen.toml");
        std::fs::write(&path, "targets = \"go\"").unwrap();
        assert!(CodegenConfig::load(&path).is_err());
    }

    #[test]
    fn args_override_file() {
        let config = CodegenConfig {
            root: Some("Mutation".into()),
            out_dir: PathBuf::from("out"),
            targets: vec!["go".into()],
            actions: vec!["Greet".into()],
        };
        let merged = config.merge_args(
            None,
            Some(PathBuf::from("elsewhere")),
            vec!["typescript".into()],
            Vec::new(),
        );
        assert_eq!(merged.root.as_deref(), Some("Mutation"));
        assert_eq!(merged.out_dir, PathBuf::from("elsewhere"));
        assert_eq!(merged.targets, vec!["typescript"]);
        assert_eq!(merged.actions, vec!["Greet"]);
    }
}
