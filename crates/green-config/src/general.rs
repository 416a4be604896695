//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Output formats the CLI understands.
pub const OUTPUT_FORMATS: [&str; 3] = ["json", "table", "raw"];

fn default_format() -> String {
    "table".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

impl GeneralConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let format = self.default_format.to_ascii_lowercase();
        if OUTPUT_FORMATS.contains(&format.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "general.default_format".to_string(),
                reason: format!(
                    "'{}' is not one of {}",
                    self.default_format,
                    OUTPUT_FORMATS.join(", ")
                ),
            })
        }
    }
}
