use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("no schema registered for payload `{0}`")]
    NotFound(String),

    /// The payload does not match its schema; one entry per violation.
    #[error("`{schema}` payload is invalid: {}", errors.join("; "))]
    ValidationFailed {
        schema: String,
        errors: Vec<String>,
    },

    #[error("schema `{schema}` does not compile: {reason}")]
    Compile { schema: String, reason: String },
}
