use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `greencheck` binary.
#[derive(Debug, Parser)]
#[command(
    name = "greencheck",
    version,
    about = "Greencheck - eco-grading for websites and green-coding quiz"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract global flags, filling in `fallback` when `--format` is absent.
    #[must_use]
    pub fn global_flags(&self, fallback: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format: self.format.unwrap_or(fallback),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
