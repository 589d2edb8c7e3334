//! Configuration loading and management.

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::highlight::DEFAULT_LANGUAGE;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,
    /// Highlighting configuration.
    pub highlight: HighlightConfig,
    /// HTML report configuration.
    pub report: ReportConfig,
}

impl Config {
    /// Load configuration from an explicit file path.
    ///
    /// Errors if the file does not exist. Use this for explicit `--config` flags.
    /// Env vars with `BIGO_` prefix override file values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file_exact(path))
            .merge(Env::prefixed("BIGO_").split("__"))
            .extract()
            .map_err(|e| Error::config(e.to_string()))
    }

    /// Load configuration from directory, looking for bigo.toml or .bigo/bigo.toml.
    ///
    /// Missing files are silently skipped (defaults are used).
    /// Env vars with `BIGO_` prefix override file/default values.
    pub fn load_default(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(dir.join("bigo.toml")))
            .merge(Toml::file(dir.join(".bigo/bigo.toml")))
            .merge(Env::prefixed("BIGO_").split("__"))
            .extract()
            .map_err(|e| Error::config(e.to_string()))
    }

    /// Shipped default config file content.
    pub fn default_toml() -> &'static str {
        include_str!("default_config.toml")
    }

    /// Serialize the effective configuration.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: OutputFormat,
    /// Color output.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// Highlighting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Language identifier passed to the highlighter.
    pub language: String,
    /// Emit token spans; when false the source is only escaped.
    pub enabled: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            enabled: true,
        }
    }
}

/// HTML report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Page title.
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Time Complexity Analysis".to_string(),
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// Markdown format.
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "md" | "markdown" => Ok(Self::Markdown),
            _ => Err(format!("Unknown format: {s}. Use 'text', 'json', or 'md'")),
        }
    }
}
