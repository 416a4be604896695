//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use green_config::{ENV_PREFIX, GreenConfig};
use pretty_assertions::assert_eq;

fn base() -> Figment {
    Figment::from(Serialized::defaults(GreenConfig::default()))
}

#[test]
fn loads_analysis_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[analysis]
endpoint = "https://green.example.org/analyze/"
health_endpoint = "https://green.example.org/health/"
timeout_secs = 30
user_agent = "green-tests"
"#,
        )?;

        let config: GreenConfig = base().merge(Toml::file("config.toml")).extract()?;

        assert_eq!(config.analysis.endpoint, "https://green.example.org/analyze/");
        assert_eq!(
            config.analysis.health_endpoint,
            "https://green.example.org/health/"
        );
        assert_eq!(config.analysis.timeout_secs, 30);
        assert_eq!(config.analysis.user_agent, "green-tests");
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[quiz]
feedback_delay_ms = 250
",
        )?;

        let config: GreenConfig = base().merge(Toml::file("config.toml")).extract()?;

        assert_eq!(config.quiz.feedback_delay_ms, 250);
        assert_eq!(config.analysis, GreenConfig::default().analysis);
        assert_eq!(config.general.default_format, "table");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".greencheck")?;
        jail.create_file(
            ".greencheck/config.toml",
            r#"
[general]
default_format = "json"
"#,
        )?;

        let config = GreenConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.general.default_format, "json");
        Ok(())
    });
}

#[test]
fn invalid_value_fails_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".greencheck")?;
        jail.create_file(
            ".greencheck/config.toml",
            r"
[analysis]
timeout_secs = 0
",
        )?;

        let err = GreenConfig::load().unwrap_err();
        assert!(err.to_string().contains("analysis.timeout_secs"));
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[analysis]
endpoint = "http://from-toml/analyze/"
"#,
        )?;
        jail.set_env("GREENCHECK_ANALYSIS__ENDPOINT", "http://from-env/analyze/");

        let config: GreenConfig = base()
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        assert_eq!(config.analysis.endpoint, "http://from-env/analyze/");
        Ok(())
    });
}

#[test]
fn env_var_overrides_default() {
    Jail::expect_with(|jail| {
        jail.set_env("GREENCHECK_QUIZ__FEEDBACK_DELAY_MS", "0");

        let config: GreenConfig = base()
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        assert_eq!(config.quiz.feedback_delay_ms, 0);
        Ok(())
    });
}

#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("GREENCHECK_ANALYSIS__ENDPOINTT", "http://typo/");

        let config: GreenConfig = base()
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        assert_eq!(config.analysis, GreenConfig::default().analysis);
        Ok(())
    });
}

#[test]
fn full_env_provider_chain() {
    Jail::expect_with(|jail| {
        jail.set_env("GREENCHECK_ANALYSIS__ENDPOINT", "http://jail/analyze/");
        jail.set_env("GREENCHECK_ANALYSIS__HEALTH_ENDPOINT", "http://jail/health/");
        jail.set_env("GREENCHECK_ANALYSIS__TIMEOUT_SECS", "3");
        jail.set_env("GREENCHECK_QUIZ__FEEDBACK_DELAY_MS", "10");
        jail.set_env("GREENCHECK_GENERAL__DEFAULT_FORMAT", "raw");

        let config = GreenConfig::load().map_err(|e| e.to_string())?;

        assert_eq!(config.analysis.endpoint, "http://jail/analyze/");
        assert_eq!(config.analysis.health_endpoint, "http://jail/health/");
        assert_eq!(config.analysis.timeout_secs, 3);
        assert_eq!(config.quiz.feedback_delay_ms, 10);
        assert_eq!(config.general.default_format, "raw");
        Ok(())
    });
}
