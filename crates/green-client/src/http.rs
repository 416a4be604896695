//! Shared HTTP response helpers for the analysis client.
//!
//! Status-code checks: any non-success response becomes
//! [`AnalysisError::Api`] carrying the body's `error` field.

use green_core::report::ErrorBody;

use crate::error::{AnalysisError, GENERIC_ANALYSIS_ERROR};

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success. Any other status, 429
/// included, becomes [`AnalysisError::Api`] carrying the body's `error`
/// field, or the generic message when the body is absent or not an error
/// object.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, AnalysisError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(AnalysisError::Api {
            status,
            message: error_message(&body),
        });
    }
    Ok(resp)
}

/// Extract the server's `error` string from a response body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|body| body.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| GENERIC_ANALYSIS_ERROR.to_string())
}
