//! Error types for the bigo library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using bigo's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the layers around the analyzer.
///
/// The analyzer itself never fails; these cover reading input, loading
/// configuration and rendering output.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(String),
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        Self::Template(err.to_string())
    }
}

impl Error {
    /// Create a new config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
