use anyhow::Context;
use clap::ValueEnum;
use green_config::GreenConfig;

use crate::cli::OutputFormat;

/// Load layered configuration, including a `.env` file when present.
pub fn load_config() -> anyhow::Result<GreenConfig> {
    GreenConfig::load_with_dotenv().context("failed to load greencheck configuration")
}

/// Output format from `general.default_format`. The value was validated at
/// load time; anything unparseable still falls back to the table view.
pub fn default_format(config: &GreenConfig) -> OutputFormat {
    OutputFormat::from_str(&config.general.default_format, true).unwrap_or_else(|_| {
        tracing::warn!(
            format = %config.general.default_format,
            "unknown general.default_format; using table"
        );
        OutputFormat::Table
    })
}

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &GreenConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &GreenConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let defaults = GreenConfig::default();

    let sections = [
        (
            "ANALYSIS",
            config.analysis == defaults.analysis,
            "GREENCHECK_ANALYSIS__ENDPOINT",
        ),
        (
            "QUIZ",
            config.quiz == defaults.quiz,
            "GREENCHECK_QUIZ__FEEDBACK_DELAY_MS",
        ),
        (
            "GENERAL",
            config.general == defaults.general,
            "GREENCHECK_GENERAL__DEFAULT_FORMAT",
        ),
    ];

    sections
        .into_iter()
        .filter(|(section, is_default, _)| {
            *is_default && has_single_underscore_key(&env_keys, section)
        })
        .map(|(section, _, example)| {
            format!(
                "{} config appears default while GREENCHECK_{section}* env vars exist. Use double underscores (example: {example}).",
                section.to_ascii_lowercase()
            )
        })
        .collect()
}

fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let prefix = format!("GREENCHECK_{section}");
    let nested = format!("{prefix}__");
    keys.iter()
        .any(|key| key.starts_with(&prefix) && !key.starts_with(&nested))
}
