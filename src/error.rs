//! Application-wide error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading and validating a generator configuration.
///
/// Every variant is terminal: the first failure aborts the load and is
/// surfaced to the caller as-is.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(
        "the configuration file must have a version number; set `\"version\": \"1\"` at the top of the file"
    )]
    MissingVersion,

    #[error("invalid version number {0:?}; the only supported version is \"1\"")]
    UnknownVersion(String),

    #[error("no packages are configured")]
    NoPackages,

    #[error("package #{index} is missing a path")]
    NoPackagePath { index: usize },

    #[error("package #{index} is missing a name")]
    NoPackageName { index: usize },

    #[error(transparent)]
    Override(#[from] OverrideError),
}

/// Errors raised while resolving a single type override.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverrideError {
    #[error(
        "override specifying both `column` ({column:?}) and `postgres_type` ({db_type:?}) is not valid"
    )]
    BothTargets { column: String, db_type: String },

    #[error("override must specify one of either `column` or `postgres_type`")]
    NoTarget,

    #[error(
        "override `column` specifier {0:?} is not the proper format, expected '[catalog.][schema.]relation.column'"
    )]
    InvalidColumn(String),

    #[error(
        "override `go_type` specifier {0:?} is not the proper format, expected 'modulepath.TypeName', e.g. 'github.com/segmentio/ksuid.KSUID'"
    )]
    InvalidGoType(String),
}

impl ConfigError {
    /// Returns `true` when the document itself could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Json(_) | Self::Toml(_))
    }
}

/// Top-level error for the `sqlgen-config` binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("usage error: {0} (see --help)")]
    Usage(String),
}
