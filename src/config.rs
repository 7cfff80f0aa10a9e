// Copyright (c) 2025 Nicholas D. Crosbie
use crate::analysis::DEFAULT_CALL_OPERATOR;
use crate::error::ConfigError;
use crate::utils::{find_cargo_toml, parse_cargo_toml, read_file_to_string};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Manifest table holding the configuration: `[package.metadata.call-inspector]`.
pub const METADATA_KEY: &str = "call-inspector";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Functions that exist without a source file.
    pub builtins: Vec<String>,
    /// Method that makes an object invokable.
    pub call_operator: String,
    /// Directory names skipped while indexing.
    pub exclude_dirs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            builtins: Vec::new(),
            call_operator: DEFAULT_CALL_OPERATOR.to_string(),
            exclude_dirs: vec!["target".to_string()],
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = read_file_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads the metadata table of a parsed `Cargo.toml`, if it has one.
    pub fn from_manifest(manifest: &toml::Value) -> Result<Option<Self>, ConfigError> {
        let table = manifest
            .get("package")
            .and_then(|package| package.get("metadata"))
            .and_then(|metadata| metadata.get(METADATA_KEY));

        match table {
            Some(table) => Ok(Some(table.clone().try_into()?)),
            None => Ok(None),
        }
    }

    /// Uses the nearest `Cargo.toml` at or above `project_dir`, falling back
    /// to the defaults.
    pub fn discover(project_dir: &Path) -> Result<Self, ConfigError> {
        let Some(manifest_path) = find_cargo_toml(project_dir) else {
            debug!(dir = %project_dir.display(), "no Cargo.toml found, using default config");
            return Ok(Self::default());
        };

        let manifest = parse_cargo_toml(&manifest_path)?;
        match Self::from_manifest(&manifest)? {
            Some(config) => {
                debug!(manifest = %manifest_path.display(), "loaded config from manifest");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}
