//! Analysis client error types.

use green_core::errors::CoreError;
use thiserror::Error;

/// Shown when a non-2xx response carries no usable `error` field.
pub const GENERIC_ANALYSIS_ERROR: &str = "Erreur lors de l'analyse. Veuillez réessayer.";

/// Shown when the analysis service cannot be reached at all.
pub const CONNECTION_ERROR: &str =
    "Impossible de se connecter au serveur. Vérifiez que le backend est démarré.";

/// Errors that can occur when talking to the analysis service.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection failure, timeout or other transport error. The user sees
    /// a generic message; the cause stays in the source chain.
    #[error("Impossible de se connecter au serveur. Vérifiez que le backend est démarré.")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// `error` field of the body, or [`GENERIC_ANALYSIS_ERROR`].
        message: String,
    },

    /// A success body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// The submitted URL was blank after trimming.
    #[error("Veuillez entrer une URL")]
    EmptyUrl,

    /// Another submission from this client has not finished yet.
    #[error("an analysis is already in progress")]
    InFlight,

    /// The decoded body failed domain validation.
    #[error("invalid analysis result: {0}")]
    Invalid(#[from] CoreError),
}

impl From<reqwest::Error> for AnalysisError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Parse(error.to_string())
        } else {
            Self::Transport(error)
        }
    }
}
