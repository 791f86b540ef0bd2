//! Error types for aggregation, input loading, and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Rejection of a whole aggregation call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("message #{index} from rule '{rule}' has neither filePath nor moduleId")]
    MissingFileKey { index: usize, rule: String },
}

/// Failure while reading rule messages from disk or stdin.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid input pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("input '{0}' does not exist")]
    MissingInput(String),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read messages from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("{origin} does not contain a valid message list: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure while loading a `lintfold.{toml,yaml,yml}` file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {}: {source}", path.display())]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse YAML config {}: {source}", path.display())]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type Result<T, E = AggregateError> = std::result::Result<T, E>;
