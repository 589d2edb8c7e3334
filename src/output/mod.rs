//! Output formatters for analysis results.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use crate::analyzers::complexity::{
    Analysis, AnalysisSignals, NarrationLine, EMPTY_INPUT_MESSAGE,
};
use crate::config::OutputFormat;
use crate::core::Result;

/// Output format enum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
    Markdown,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
            OutputFormat::Markdown => Self::Markdown,
        }
    }
}

/// Serialized shape of an analysis.
#[derive(Serialize)]
#[serde(untagged)]
enum Report<'a> {
    Empty {
        message: &'static str,
    },
    Narrated {
        signals: &'a AnalysisSignals,
        narration: &'a [NarrationLine],
        text: String,
    },
}

impl<'a> From<&'a Analysis> for Report<'a> {
    fn from(analysis: &'a Analysis) -> Self {
        match analysis {
            Analysis::Empty => Report::Empty {
                message: EMPTY_INPUT_MESSAGE,
            },
            Analysis::Narrated { signals, narration } => Report::Narrated {
                signals,
                narration: narration.lines(),
                text: narration.to_text(),
            },
        }
    }
}

impl Format {
    /// Write `analysis` in this format. `color` only affects text output.
    pub fn write<W: Write>(&self, analysis: &Analysis, writer: &mut W, color: bool) -> Result<()> {
        match self {
            Format::Text => format_text(analysis, writer, color),
            Format::Json => format_json(analysis, writer),
            Format::Markdown => format_markdown(analysis, writer),
        }
    }
}

fn format_json<W: Write>(analysis: &Analysis, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &Report::from(analysis))?;
    writeln!(writer)?;
    Ok(())
}

fn format_text<W: Write>(analysis: &Analysis, writer: &mut W, color: bool) -> Result<()> {
    let Some(narration) = analysis.narration() else {
        writeln!(writer, "{EMPTY_INPUT_MESSAGE}")?;
        return Ok(());
    };

    for line in narration.lines() {
        if line.section_break {
            writeln!(writer)?;
        }
        if !color {
            writeln!(writer, "{}", line.text)?;
        } else if line.text.contains("Time Complexity") || line.text.starts_with('→') {
            writeln!(writer, "{}", line.text.green().bold())?;
        } else if line.section_break {
            writeln!(writer, "{}", line.text.bold())?;
        } else {
            writeln!(writer, "{}", line.text)?;
        }
    }
    Ok(())
}

fn format_markdown<W: Write>(analysis: &Analysis, writer: &mut W) -> Result<()> {
    writeln!(writer, "# Complexity Analysis\n")?;

    let (Some(signals), Some(narration)) = (analysis.signals(), analysis.narration()) else {
        writeln!(writer, "_{EMPTY_INPUT_MESSAGE}_")?;
        return Ok(());
    };

    writeln!(writer, "| Signal | Value |")?;
    writeln!(writer, "| --- | --- |")?;
    writeln!(writer, "| Loops | {} |", signals.loop_count)?;
    writeln!(writer, "| Nesting Depth | {} |", signals.loop_depth)?;
    match &signals.recursion {
        Some(r) => writeln!(
            writer,
            "| Recursion | `{}` ({} calls) |",
            r.function_name, r.call_count
        )?,
        None => writeln!(writer, "| Recursion | - |")?,
    }
    writeln!(writer, "| Binary Search | {} |", yes_no(signals.is_binary_search))?;
    writeln!(writer, "| Linear Search | {} |", yes_no(signals.is_linear_search))?;

    writeln!(writer, "\n## Narration\n")?;
    writeln!(writer, "```text\n{}\n```", narration.to_text())?;
    Ok(())
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "Yes"
    } else {
        "No"
    }
}
