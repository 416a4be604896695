use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Submit a website for eco-analysis and show its grade.
    Analyze(AnalyzeArgs),
    /// Show the result screen for a saved analysis payload.
    Result(ResultArgs),
    /// Show green-coding advice for a grade.
    Advice(AdviceArgs),
    /// Play the green-coding knowledge quiz.
    Quiz(QuizArgs),
    /// Check that the analysis service is up.
    Health,
    /// Print JSON Schemas for wire and view types.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Website URL to analyze.
    pub url: String,

    /// Show the advice screen instead of the result screen.
    #[arg(long)]
    pub advice: bool,

    /// Write the raw analysis payload to this file (for `result --input`).
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ResultArgs {
    /// Analysis payload file, or `-` for stdin.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct AdviceArgs {
    /// Grade code (A-E). Unknown codes show the C advice.
    #[arg(short, long)]
    pub grade: Option<String>,

    /// Analysis payload file, or `-` for stdin.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct QuizArgs {
    /// Pause after each answer, in milliseconds (defaults to `quiz.feedback_delay_ms`).
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (see `--list`).
    #[arg(conflicts_with = "list", required_unless_present = "list")]
    pub name: Option<String>,

    /// List registered schema names.
    #[arg(long)]
    pub list: bool,
}
