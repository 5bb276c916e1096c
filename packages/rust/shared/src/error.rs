//! Error types for modcatalog.
//!
//! Library crates use [`ModCatalogError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.
//!
//! Propagation policy: per-record failures (an unknown product slug, a date
//! that does not parse, a module file with broken YAML) are logged and
//! swallowed where they occur — they contribute nothing to the output but
//! never interrupt the batch. Structural failures (a required lookup table
//! or repository that cannot be read) surface as errors and abort the run
//! before any report is written.

use std::path::PathBuf;

/// Top-level error type for all modcatalog operations.
#[derive(Debug, thiserror::Error)]
pub enum ModCatalogError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Input parsing error (taxonomy JSON, mapping CSV, approver markdown,
    /// module YAML at the catalog level).
    #[error("parse error: {message}")]
    Parse { message: String },

    /// A required lookup table or table element is missing entirely.
    #[error("table error: {0}")]
    Table(String),

    /// Report rendering error.
    #[error("render error: {0}")]
    Render(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ModCatalogError>;

impl ModCatalogError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
