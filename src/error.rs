use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong while relaying a contact submission.
///
/// Validation errors happen before any side effect; a delivery error means
/// the mail transport failed after validation passed. Delivery failures are
/// logged with their cause but surfaced to the caller as a generic message.
#[derive(Error, Debug)]
pub enum ContactError {
    #[error("missing required fields")]
    MissingFields,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("mail delivery failed: {0}")]
    Delivery(#[from] anyhow::Error),
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ContactError::MissingFields => {
                (StatusCode::BAD_REQUEST, "Missing required fields")
            }
            ContactError::InvalidEmail => (StatusCode::BAD_REQUEST, "Invalid email address"),
            ContactError::Delivery(err) => {
                tracing::error!(error = %err, "failed to send contact email");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email")
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
