use clap::Parser;
use green_core::views::Redirect;

mod bootstrap;
mod cli;
mod commands;
mod output;
mod progress;
mod ui;

/// Printed after a [`Redirect`] so the user knows where to start over.
const ENTRY_HINT: &str =
    "Start from the entry screen: `greencheck analyze <url>` or `greencheck quiz`.";

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("greencheck error: {error:#}");
        if error.downcast_ref::<Redirect>().is_some() {
            eprintln!("{ENTRY_HINT}");
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    // Schema output is static; a broken config file must not block it.
    if let cli::Commands::Schema(args) = &cli.command {
        let flags = cli.global_flags(cli::OutputFormat::Json);
        ui::init(&flags);
        return commands::schema::handle(args, &flags);
    }

    let config = bootstrap::load_config()?;
    bootstrap::warn_unconfigured(&config);

    let flags = cli.global_flags(bootstrap::default_format(&config));
    ui::init(&flags);

    commands::dispatch::dispatch(cli.command, &config, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("GREENCHECK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
