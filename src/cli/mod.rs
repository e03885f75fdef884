//! Command-line interface for coursekit.
//!
//! Provides commands for printing a course outline, dry-running a list of
//! edits against a course, and showing the resolved configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::config;
use crate::domain::Course;
use crate::plan::{self, apply_edits, OutputFormat};

/// coursekit - ordered course outlines
#[derive(Parser, Debug)]
#[command(name = "coursekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the outline of a course document
    Show {
        /// Course document (.yaml, .yml or .json)
        course: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Apply a list of edits to a course and print the result
    ///
    /// The course document is never modified.
    Apply {
        /// Course document (.yaml, .yml or .json)
        course: PathBuf,

        /// Edit list (.yaml, .yml or .json)
        edits: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Keep applying edits after one is rejected
        #[arg(short, long)]
        keep_going: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Output format for CLI (maps to OutputFormat)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Indented outline
    Text,

    /// JSON snapshot
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Show { course, format } => show_course(&course, format).await,
            Commands::Apply {
                course,
                edits,
                format,
                keep_going,
            } => apply_to_course(&course, &edits, format, keep_going).await,
            Commands::Config => show_config(),
        }
    }
}

fn output_format(arg: Option<FormatArg>) -> Result<OutputFormat> {
    match arg {
        Some(arg) => Ok(arg.into()),
        None => Ok(config::config()?.format),
    }
}

async fn load_course(path: &Path) -> Result<Course> {
    plan::load_course(path)
        .await
        .with_context(|| format!("Failed to load course: {}", path.display()))
}

fn print_outline(course: &Course, format: OutputFormat) -> Result<()> {
    let rendered = plan::render(course, format).context("Failed to render outline")?;
    print!("{}", rendered);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

/// Print the outline of a course document
async fn show_course(path: &Path, format: Option<FormatArg>) -> Result<()> {
    let format = output_format(format)?;
    let course = load_course(path).await?;

    print_outline(&course, format)
}

/// Apply an edit list to a course document and print the outcome
async fn apply_to_course(
    course_path: &Path,
    edits_path: &Path,
    format: Option<FormatArg>,
    keep_going: bool,
) -> Result<()> {
    let format = output_format(format)?;
    let keep_going = keep_going || config::config()?.keep_going;

    let mut course = load_course(course_path).await?;
    let edits = plan::load_edits(edits_path)
        .await
        .with_context(|| format!("Failed to load edits: {}", edits_path.display()))?;

    info!(edits = edits.len(), keep_going, "Applying edits");
    let report = apply_edits(&mut course, &edits, keep_going)?;

    print_outline(&course, format)?;

    eprintln!("\n[{} of {} edits applied]", report.applied, edits.len());
    for failure in &report.failures {
        eprintln!(
            "  edit #{} ({}): {} [{}]",
            failure.index,
            failure.op,
            failure.error,
            failure.error.name()
        );
    }

    if !report.is_clean() {
        anyhow::bail!("{} edit(s) rejected", report.failures.len());
    }

    Ok(())
}

/// Show resolved configuration
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("coursekit configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!("Output format: {}", cfg.format);
    println!("Log filter:    {}", cfg.log_filter);
    println!("Keep going:    {}", cfg.keep_going);

    Ok(())
}
