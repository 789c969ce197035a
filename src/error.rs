use crate::models::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Missing parameters 'from', 'to' or 'pointId'")]
    MissingParameters,

    #[error("BEARER_TOKEN is not configured in the environment")]
    MissingToken,

    #[error("Authorization failed (401/403). The BEARER_TOKEN appears to have expired.")]
    AuthExpired,

    #[error("Statistics API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("Malformed request body: {0}")]
    MalformedInput(String),

    #[error("Statistics API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Statistics API returned an unreadable body: {0}")]
    InvalidPayload(String),
}

impl StatsError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StatsError::MissingParameters => "MISSING_PARAMETERS",
            StatsError::MissingToken => "CONFIGURATION_ERROR",
            StatsError::AuthExpired => "AUTH_EXPIRED",
            StatsError::Upstream { .. } => "UPSTREAM_ERROR",
            StatsError::MalformedInput(_) => "MALFORMED_INPUT",
            StatsError::Transport(_) => "UPSTREAM_UNREACHABLE",
            StatsError::InvalidPayload(_) => "INVALID_UPSTREAM_PAYLOAD",
        }
    }
}

impl IntoResponse for StatsError {
    fn into_response(self) -> Response {
        tracing::error!(
            error = ?self,
            error_code = self.error_code(),
            "Request failed"
        );

        // The frontend only reads the message, every failure is a 500.
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
