//! # green-client
//!
//! HTTP client for the external Greencheck analysis service.
//!
//! - `POST <endpoint>` with `{"url": ...}` returns an
//!   [`AnalysisResult`](green_core::report::AnalysisResult) or an
//!   `{"error": ...}` body.
//! - `GET <health_endpoint>` returns a
//!   [`HealthStatus`](green_core::report::HealthStatus).
//!
//! Each client allows one submission in flight at a time. A second call
//! made while the first is outstanding fails fast with
//! [`AnalysisError::InFlight`]. Nothing is retried.

mod error;
mod http;

pub use error::{AnalysisError, CONNECTION_ERROR, GENERIC_ANALYSIS_ERROR};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use green_config::AnalysisConfig;
use green_core::report::{AnalysisRequest, AnalysisResult, HealthStatus};

// ── Client ─────────────────────────────────────────────────────────

/// Client for the analysis service. Clones share the in-flight guard.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: String,
    health_endpoint: String,
    in_flight: Arc<AtomicBool>,
}

impl AnalysisClient {
    /// Build a client from the `[analysis]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Client`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(AnalysisError::Client)?;
        Ok(Self {
            http,
            endpoint: config.endpoint.trim().to_string(),
            health_endpoint: config.health_endpoint.trim().to_string(),
            in_flight: Arc::new(AtomicBool::new(false)),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether a submission is currently outstanding.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit `url` for analysis.
    ///
    /// The URL is trimmed before sending. The returned result has already
    /// passed [`AnalysisResult::validate`].
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::EmptyUrl`] if `url` is blank (no request is made).
    /// - [`AnalysisError::InFlight`] if another submission is outstanding.
    /// - [`AnalysisError::Transport`] on connection failure or timeout.
    /// - [`AnalysisError::Api`] on a non-success status.
    /// - [`AnalysisError::Parse`] / [`AnalysisError::Invalid`] if the
    ///   success body is not a valid analysis result.
    pub async fn analyze(&self, url: &str) -> Result<AnalysisResult, AnalysisError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AnalysisError::EmptyUrl);
        }
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(AnalysisError::InFlight)?;

        tracing::debug!(endpoint = %self.endpoint, url, "submitting analysis");
        let request = AnalysisRequest {
            url: url.to_string(),
        };
        let resp = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(%e, "analysis request failed"))?;
        let resp = http::check_response(resp).await?;
        let result: AnalysisResult = resp.json().await?;
        result.validate()?;

        tracing::info!(url, level = %result.level_code, "analysis complete");
        Ok(result)
    }

    /// Ping the health endpoint.
    ///
    /// # Errors
    ///
    /// Same transport and status errors as [`AnalysisClient::analyze`].
    pub async fn health(&self) -> Result<HealthStatus, AnalysisError> {
        tracing::debug!(endpoint = %self.health_endpoint, "checking service health");
        let resp = self.http.get(&self.health_endpoint).send().await?;
        let resp = http::check_response(resp).await?;
        Ok(resp.json().await?)
    }
}

// ── In-flight guard ────────────────────────────────────────────────

/// Holds the client's in-flight flag; dropping it releases the flag on
/// every exit path, including errors and cancelled futures.
struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                flag: Arc::clone(flag),
            })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
