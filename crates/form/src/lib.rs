//! Headless contact form controller.
//!
//! Owns the field values, the currently focused field and the submission
//! lifecycle of the contact form: one request in flight at a time, fields
//! cleared on success and preserved on failure, and a confirmation notice
//! that hides itself after a few seconds.

mod client;
mod controller;

pub use client::HttpSubmitClient;
pub use controller::{ContactForm, Field, FormNotice, SubmitOutcome, NOTICE_TTL};

use async_trait::async_trait;
use serde::Serialize;

/// Snapshot of the four form fields, as sent to the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The server rejected the submission (validation or delivery failure).
    #[error("submission rejected: {message}")]
    Rejected { status: u16, message: String },

    /// The request never completed.
    #[error("submission failed: {0}")]
    Transport(String),
}

/// Narrow seam between the form controller and whatever actually delivers
/// the submission, so the lifecycle logic is testable without a server.
#[async_trait]
pub trait SubmitContact {
    async fn submit(&self, fields: &ContactFields) -> Result<(), SubmitError>;
}
