use green_config::GreenConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &GreenConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => commands::analyze::handle(&args, config, flags).await,
        Commands::Result(args) => commands::result::handle(&args, flags),
        Commands::Advice(args) => commands::advice::handle(&args, flags),
        Commands::Quiz(args) => commands::quiz::handle(&args, config, flags).await,
        Commands::Health => commands::health::handle(config, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
