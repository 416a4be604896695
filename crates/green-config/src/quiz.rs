//! Quiz pacing configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_feedback_delay_ms() -> u64 {
    1500
}

/// Upper bound on the feedback pause.
const MAX_FEEDBACK_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct QuizConfig {
    /// Pause between showing answer feedback and moving on.
    #[serde(default = "default_feedback_delay_ms")]
    pub feedback_delay_ms: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            feedback_delay_ms: default_feedback_delay_ms(),
        }
    }
}

impl QuizConfig {
    #[must_use]
    pub const fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.feedback_delay_ms > MAX_FEEDBACK_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                field: "quiz.feedback_delay_ms".to_string(),
                reason: format!("must be at most {MAX_FEEDBACK_DELAY_MS}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay_is_one_and_a_half_seconds() {
        assert_eq!(
            QuizConfig::default().feedback_delay(),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn zero_delay_is_allowed() {
        let config = QuizConfig {
            feedback_delay_ms: 0,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn excessive_delay_is_rejected() {
        let config = QuizConfig {
            feedback_delay_ms: 120_000,
        };
        assert!(config.validate().is_err());
    }
}
