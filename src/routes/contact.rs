use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::contact::ContactPayload;
use crate::email::build_notification;
use crate::error::ContactError;
use crate::routes::AppState;

/// POST /api/contact
///
/// Validates the submission and relays it to the mail transport. Each
/// request is independent and stateless; a delivery failure is terminal
/// for that request.
pub async fn action(
    State(app_state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> Result<impl IntoResponse, ContactError> {
    let message = payload.validate()?;

    let email = build_notification(&message)?;
    app_state.mailer.send(&email).await?;

    tracing::info!(
        from = %message.email,
        subject = %message.subject,
        "contact form submission relayed"
    );

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Email sent successfully" })),
    ))
}
