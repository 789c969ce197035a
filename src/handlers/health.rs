use crate::models::StatusMessage;
use axum::{http::StatusCode, Json};

pub const STATUS_MESSAGE: &str = "Statistics server is running! Use a POST request to fetch data.";

pub async fn status() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: STATUS_MESSAGE.to_string(),
    })
}

/// CORS pre-flight. The headers themselves come from the CORS middleware.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
