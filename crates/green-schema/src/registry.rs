//! Central schema registry for Greencheck types.
//!
//! The `SchemaRegistry` builds JSON Schemas from green-core types at
//! construction time using [`schemars::schema_for!`] and validates values
//! with `jsonschema`.

use std::collections::HashMap;

use green_core::grade::Grade;
use green_core::quiz::{Answer, Question, QuizSession, QuizState};
use green_core::report::{
    AnalysisRequest, AnalysisResult, DiagnosticReport, ErrorBody, HealthStatus,
};
use green_core::views::{AdviceView, QuizSummary, ResultView};
use schemars::schema_for;

use crate::error::SchemaError;

/// Name → JSON Schema for every wire and view type.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::Value::from(schema_for!($ty)));
    };
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Domain ---
        register!(schemas, "grade", Grade);
        register!(schemas, "question", Question);
        register!(schemas, "answer", Answer);
        register!(schemas, "quiz_state", QuizState);
        register!(schemas, "quiz_session", QuizSession);

        // --- Analysis service wire contract ---
        register!(schemas, "analysis_request", AnalysisRequest);
        register!(schemas, "analysis_result", AnalysisResult);
        register!(schemas, "diagnostic_report", DiagnosticReport);
        register!(schemas, "error_body", ErrorBody);
        register!(schemas, "health_status", HealthStatus);

        // --- CLI views ---
        register!(schemas, "result_view", ResultView);
        register!(schemas, "advice_view", AdviceView);
        register!(schemas, "quiz_summary", QuizSummary);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Compile {
                schema: name.to_string(),
                reason: e.to_string(),
            })?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                schema: name.to_string(),
                errors,
            })
        }
    }

    /// All registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
