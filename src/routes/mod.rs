use std::sync::Arc;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::email::MailTransport;

mod assets;
mod contact;
mod health;
mod index;

pub use assets::AssetsService;

#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn MailTransport>,
}

pub(crate) fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render template");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to render template",
            )
                .into_response()
        }
    }
}

#[derive(Template)]
#[template(path = "404.html")]
struct NotFoundTemplate;

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index::page))
        .route("/health", get(health::health))
        .route("/api/contact", post(contact::action))
        .fallback(fallback)
        .nest_service("/static", AssetsService::new())
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
