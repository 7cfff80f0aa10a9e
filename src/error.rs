// Copyright (c) 2025 Nicholas D. Crosbie
use std::path::PathBuf;
use thiserror::Error;

/// Raised when a handle cannot be built.
#[derive(Debug, Error, PartialEq)]
pub enum InspectError {
    #[error("the provided argument is not callable: {0}")]
    InvalidArgument(String),
}

/// A failed lookup in the reflector. Never leaves the inspector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReflectionError {
    #[error("function {0} does not exist")]
    FunctionNotFound(String),

    #[error("type {0} does not exist")]
    TypeNotFound(String),

    #[error("method {type_name}::{method} does not exist")]
    MethodNotFound { type_name: String, method: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid [package.metadata.call-inspector] table: {0}")]
    Metadata(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },
}
