pub mod config;
pub mod contact;
pub mod content;
pub mod email;
pub mod error;
pub mod observability;
pub mod routes;

pub use routes::AppState;

use std::sync::Arc;

use email::MailTransport;

/// Create the app router with an injectable mail transport
///
/// Useful for integration testing the submission handler without a real
/// email provider.
pub fn create_app(mailer: Arc<dyn MailTransport>) -> axum::Router {
    routes::router(AppState { mailer })
}
