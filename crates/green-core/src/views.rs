//! View value objects rendered by the CLI.
//!
//! Each view is built from an explicit context value rather than ambient
//! navigation state. Opening a view without its context yields
//! [`Redirect::Home`], and the caller returns to the entry screen.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::advice::{AdviceOrigin, AdviceRepository};
use crate::classifier::classify_code;
use crate::grade::Grade;
use crate::report::{AnalysisResult, DiagnosticReport};

/// Where to send the user when a view cannot be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Redirect {
    #[error("no {view} context available; returning to the entry screen")]
    Home { view: &'static str },
}

// ---------------------------------------------------------------------------
// ResultView
// ---------------------------------------------------------------------------

/// Analysis result screen.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ResultView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub grade: Grade,
    pub label: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<DiagnosticReport>,
    pub advice: Vec<String>,
    /// `true` when `advice` came from the analysis service.
    #[serde(default)]
    pub advice_provided: bool,
}

impl ResultView {
    /// Build the result screen from the analysis carried in `context`.
    ///
    /// # Errors
    ///
    /// Returns [`Redirect::Home`] when no analysis is available.
    pub fn open(context: Option<&AnalysisResult>, url: Option<&str>) -> Result<Self, Redirect> {
        let result = context.ok_or(Redirect::Home { view: "result" })?;
        let grade = result.grade();
        let message = if result.message.trim().is_empty() {
            grade.description().to_string()
        } else {
            result.message.clone()
        };
        let (advice, origin) =
            AdviceRepository::resolve_with_origin(grade, Some(&result.advice_items()));
        Ok(Self {
            url: url.map(str::to_string),
            grade,
            label: grade.label().to_string(),
            message,
            diagnostic: result.diagnostic,
            advice,
            advice_provided: origin == AdviceOrigin::Provided,
        })
    }

    /// Context handed to the advice screen. Built-in advice is not passed
    /// on, so the advice screen resolves it again for the same grade.
    #[must_use]
    pub fn advice_context(&self) -> AdviceContext {
        let provided = if self.advice_provided {
            self.advice.clone()
        } else {
            Vec::new()
        };
        AdviceContext {
            level_code: self.grade.as_str().to_string(),
            provided,
        }
    }
}

// ---------------------------------------------------------------------------
// AdviceView
// ---------------------------------------------------------------------------

/// Context required by the advice screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdviceContext {
    /// Raw grade code; unknown codes resolve like `C`.
    pub level_code: String,
    pub provided: Vec<String>,
}

impl From<&AnalysisResult> for AdviceContext {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            level_code: result.level_code.clone(),
            provided: result.advice_items(),
        }
    }
}

/// Advice screen.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AdviceView {
    pub grade: Grade,
    /// `true` when the list came from the analysis service.
    pub provided: bool,
    pub advice: Vec<String>,
}

impl AdviceView {
    /// Build the advice screen.
    ///
    /// # Errors
    ///
    /// Returns [`Redirect::Home`] when there is no context or the context
    /// carries no grade code at all.
    pub fn open(context: Option<&AdviceContext>) -> Result<Self, Redirect> {
        let context = context
            .filter(|ctx| !ctx.level_code.trim().is_empty())
            .ok_or(Redirect::Home { view: "advice" })?;
        let grade = classify_code(&context.level_code);
        let (advice, origin) =
            AdviceRepository::resolve_with_origin(grade, Some(&context.provided));
        Ok(Self {
            grade,
            provided: origin == AdviceOrigin::Provided,
            advice,
        })
    }
}

// ---------------------------------------------------------------------------
// QuizSummary
// ---------------------------------------------------------------------------

/// End-of-quiz screen.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct QuizSummary {
    pub score: u32,
    pub total: u32,
    pub percentage: f64,
    pub grade: Grade,
    pub message: String,
}
