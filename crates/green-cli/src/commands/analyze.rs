use anyhow::Context;
use green_client::AnalysisClient;
use green_config::GreenConfig;
use green_core::views::{AdviceView, ResultView};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::commands::shared::payload::save_analysis;
use crate::output::output;
use crate::progress::Progress;

/// Handle `greencheck analyze`.
pub async fn handle(
    args: &AnalyzeArgs,
    config: &GreenConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client =
        AnalysisClient::new(&config.analysis).context("failed to create analysis client")?;
    let url = args.url.trim();

    let spinner = Progress::spinner(&format!("Analyse de {url} en cours..."));
    let result = match client.analyze(url).await {
        Ok(result) => {
            spinner.finish_clear();
            result
        }
        Err(error) => {
            spinner.finish_err("analyse interrompue");
            return Err(error.into());
        }
    };

    if let Some(path) = &args.save {
        save_analysis(path, &result)?;
    }

    let view = ResultView::open(Some(&result), Some(url))?;
    if args.advice {
        let advice = AdviceView::open(Some(&view.advice_context()))?;
        return output(&advice, flags.format);
    }
    output(&view, flags.format)
}
