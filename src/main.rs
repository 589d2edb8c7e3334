//! bigo CLI - Narrated time-complexity estimates for C-like snippets.

use std::io::{stdout, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bigo::analyzers::complexity::analyze;
use bigo::cli::{Cli, Command};
use bigo::config::{Config, OutputFormat};
use bigo::core::SourceFile;
use bigo::highlight;
use bigo::output::Format;
use bigo::report::{Presenter, Renderer};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the analysis
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_default(".")?,
    };

    let format: Format = cli
        .format
        .map(OutputFormat::from)
        .unwrap_or(config.output.format)
        .into();
    let color = config.output.color && !cli.no_color;
    if !color {
        colored::control::set_override(false);
    }

    let mut out = stdout().lock();

    match cli.command {
        Command::Analyze(args) => {
            let file = read_input(args.path.as_deref())?;
            tracing::debug!("Analyzing {} ({} lines)", file.display_name(), file.total_lines());
            format.write(&analyze(&file.content_str()), &mut out, color)?;
        }
        Command::Sample => {
            let mut presenter = Presenter::with_sample(
                highlight::for_config(&config.highlight),
                config.highlight.language.clone(),
            );
            if format == Format::Text {
                writeln!(out, "{}\n", presenter.source())?;
            }
            format.write(presenter.analyze(), &mut out, color)?;
        }
        Command::Report(args) => {
            let file = read_input(args.input.path.as_deref())?;
            let mut presenter = Presenter::new(
                highlight::for_config(&config.highlight),
                config.highlight.language.clone(),
            );
            presenter.set_source(file.content_str());

            let title = args.title.unwrap_or_else(|| config.report.title.clone());
            Renderer::new()?
                .write(&title, &file.display_name(), &mut presenter, &args.output)
                .with_context(|| format!("writing report to {}", args.output.display()))?;
            writeln!(out, "Report written to {}", args.output.display())?;
        }
        Command::Highlight(args) => {
            let file = read_input(args.path.as_deref())?;
            let highlighter = highlight::for_config(&config.highlight);
            writeln!(
                out,
                "{}",
                highlighter.highlight(&file.content_str(), &config.highlight.language)
            )?;
        }
        Command::Config(args) => {
            if args.default {
                write!(out, "{}", Config::default_toml())?;
            } else {
                write!(out, "{}", config.to_toml()?)?;
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<SourceFile> {
    SourceFile::load_or_stdin(path).with_context(|| match path {
        Some(p) => format!("reading {}", p.display()),
        None => "reading stdin".to_string(),
    })
}
