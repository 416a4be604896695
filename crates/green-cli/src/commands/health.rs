use anyhow::{Context, bail};
use green_client::AnalysisClient;
use green_config::GreenConfig;

use crate::cli::GlobalFlags;
use crate::output::output;
use crate::progress::Progress;

/// Handle `greencheck health`.
pub async fn handle(config: &GreenConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client =
        AnalysisClient::new(&config.analysis).context("failed to create analysis client")?;

    let spinner = Progress::spinner("Vérification du service d'analyse...");
    let status = client.health().await;
    spinner.finish_clear();
    let status = status?;

    output(&status, flags.format)?;
    if !status.is_ok() {
        bail!("analysis service reported status '{}'", status.status);
    }
    Ok(())
}
