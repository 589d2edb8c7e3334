//! CLI implementation using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::OutputFormat as ConfigFormat;

/// bigo - Narrated time-complexity estimates for C-like snippets.
#[derive(Parser)]
#[command(name = "bigo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (overrides the configured default)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the time complexity of a snippet
    #[command(alias = "a")]
    Analyze(InputArgs),

    /// Analyze the built-in bubble sort sample
    Sample,

    /// Write an HTML page with the highlighted source and its analysis
    Report(ReportArgs),

    /// Print highlighted markup for a snippet
    #[command(alias = "hl")]
    Highlight(InputArgs),

    /// Show configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Source file; reads stdin when omitted or "-"
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output HTML file
    #[arg(short, long, default_value = "bigo-report.html")]
    pub output: PathBuf,

    /// Page title (overrides the configured title)
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Print the shipped default configuration instead of the effective one
    #[arg(long)]
    pub default: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Text,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Self::Json,
            OutputFormat::Markdown => Self::Markdown,
            OutputFormat::Text => Self::Text,
        }
    }
}
