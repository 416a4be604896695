//! Wire contract of the external analysis service.
//!
//! The field names (`niveau`, `conseils`, `diagnostic`) are the canonical
//! contract. `conseils` is accepted either as a `;`-delimited string or as a
//! JSON array and is always normalized to an ordered list before it reaches
//! [`AdviceRepository`](crate::advice::AdviceRepository).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::advice::AdviceRepository;
use crate::classifier::classify_code;
use crate::errors::CoreError;
use crate::grade::Grade;

/// Separator used by the delimited form of `conseils`.
pub const ADVICE_DELIMITER: char = ';';

/// Body of `POST <endpoint>`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub url: String,
}

/// Page metrics computed by the analysis service. Display-only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DiagnosticReport {
    pub page_weight_kb: f64,
    pub request_count: u64,
    pub image_count: u64,
    pub large_image_count: u64,
    pub inline_script_kb: f64,
    pub third_party_requests: u64,
}

impl DiagnosticReport {
    /// Reject negative or non-finite sizes. Counts are unsigned by type.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("page_weight_kb", self.page_weight_kb),
            ("inline_script_kb", self.inline_script_kb),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Validation(format!(
                    "diagnostic.{field} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Shape of the `conseils` field: list or `;`-delimited string.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum AdviceField {
    List(Vec<String>),
    Delimited(String),
}

impl AdviceField {
    /// Normalize to an ordered list: items trimmed, blank items dropped.
    #[must_use]
    pub fn into_items(self) -> Vec<String> {
        let raw = match self {
            Self::List(items) => items,
            Self::Delimited(text) => text
                .split(ADVICE_DELIMITER)
                .map(str::to_string)
                .collect(),
        };
        raw.into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    }
}

/// Successful (2xx) analysis response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AnalysisResult {
    /// Raw grade code. Kept unparsed so unknown codes can fall back to `C`.
    #[serde(rename = "niveau", default)]
    pub level_code: String,

    #[serde(default)]
    pub message: String,

    #[serde(rename = "conseils", default, skip_serializing_if = "Option::is_none")]
    pub advice: Option<AdviceField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<DiagnosticReport>,
}

impl AnalysisResult {
    /// Validated grade; unrecognized codes become `C`.
    #[must_use]
    pub fn grade(&self) -> Grade {
        classify_code(&self.level_code)
    }

    /// Provided advice, normalized. Empty when the service sent none.
    #[must_use]
    pub fn advice_items(&self) -> Vec<String> {
        self.advice
            .clone()
            .map(AdviceField::into_items)
            .unwrap_or_default()
    }

    /// Advice to display: provided items, else the built-in table.
    #[must_use]
    pub fn resolved_advice(&self) -> Vec<String> {
        AdviceRepository::resolve(self.grade(), Some(&self.advice_items()))
    }

    /// Check the embedded diagnostic, if any.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if a metric is negative or non-finite.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.diagnostic
            .as_ref()
            .map_or(Ok(()), DiagnosticReport::validate)
    }
}

/// Non-2xx response body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Health endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DELIMITED_FIXTURE: &str = r#"{
        "niveau": "B",
        "message": "Bon score, quelques optimisations possibles.",
        "conseils": "Compressez davantage les images; Activez la minification ;; ",
        "diagnostic": {
            "page_weight_kb": 900.5,
            "request_count": 50,
            "image_count": 8,
            "large_image_count": 1,
            "inline_script_kb": 80.0,
            "third_party_requests": 5
        }
    }"#;

    const LIST_FIXTURE: &str = r#"{
        "niveau": "B",
        "message": "Bon score, quelques optimisations possibles.",
        "conseils": ["Compressez davantage les images", "Activez la minification"]
    }"#;

    #[test]
    fn parses_delimited_advice() {
        let result: AnalysisResult = serde_json::from_str(DELIMITED_FIXTURE).unwrap();
        assert_eq!(result.grade(), Grade::B);
        assert_eq!(
            result.advice_items(),
            vec![
                "Compressez davantage les images".to_string(),
                "Activez la minification".to_string(),
            ]
        );
        let diagnostic = result.diagnostic.unwrap();
        assert_eq!(diagnostic.image_count, 8);
        assert!((diagnostic.page_weight_kb - 900.5).abs() < f64::EPSILON);
    }

    #[test]
    fn both_advice_shapes_normalize_identically() {
        let delimited: AnalysisResult = serde_json::from_str(DELIMITED_FIXTURE).unwrap();
        let list: AnalysisResult = serde_json::from_str(LIST_FIXTURE).unwrap();
        assert_eq!(delimited.advice_items(), list.advice_items());
        assert!(list.diagnostic.is_none());
    }

    #[test]
    fn missing_advice_uses_grade_table() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"niveau": "D", "message": "Site lourd"}"#).unwrap();
        assert!(result.advice_items().is_empty());
        assert_eq!(
            result.resolved_advice(),
            AdviceRepository::resolve(Grade::D, None)
        );
    }

    #[test]
    fn invalid_level_falls_back_to_c_table() {
        let result: AnalysisResult = serde_json::from_str(r#"{"niveau": "Z"}"#).unwrap();
        assert_eq!(result.grade(), Grade::C);
        assert_eq!(
            result.resolved_advice(),
            AdviceRepository::resolve(Grade::C, None)
        );
    }

    #[test]
    fn blank_delimited_advice_counts_as_missing() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"niveau": "A", "conseils": " ; ;"}"#).unwrap();
        assert!(result.advice_items().is_empty());
        assert_eq!(
            result.resolved_advice(),
            AdviceRepository::resolve(Grade::A, None)
        );
    }

    #[test]
    fn null_advice_is_tolerated() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"niveau": "E", "conseils": null}"#).unwrap();
        assert!(result.advice.is_none());
    }

    #[test]
    fn negative_weight_fails_validation() {
        let report = DiagnosticReport {
            page_weight_kb: -1.0,
            request_count: 1,
            image_count: 0,
            large_image_count: 0,
            inline_script_kb: 0.0,
            third_party_requests: 0,
        };
        assert!(matches!(report.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn negative_count_is_rejected_by_serde() {
        let json = r#"{
            "page_weight_kb": 1.0, "request_count": -3, "image_count": 0,
            "large_image_count": 0, "inline_script_kb": 0.0, "third_party_requests": 0
        }"#;
        assert!(serde_json::from_str::<DiagnosticReport>(json).is_err());
    }

    #[test]
    fn health_status_ok_is_case_insensitive() {
        let status: HealthStatus = serde_json::from_str(r#"{"status": "OK"}"#).unwrap();
        assert!(status.is_ok());
    }
}
