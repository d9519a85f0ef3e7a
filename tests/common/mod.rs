#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use devfolio::email::{MailTransport, OutgoingEmail};

/// Mail transport double that records every email instead of sending it,
/// optionally failing to simulate a provider outage.
pub struct RecordingTransport {
    sent: Mutex<Vec<OutgoingEmail>>,
    fail: bool,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    /// Emails the handler attempted to deliver (including failed attempts).
    pub fn attempts(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(email.clone());
        if self.fail {
            anyhow::bail!("smtp: connection refused");
        }
        Ok(())
    }
}

pub fn create_test_app(transport: Arc<RecordingTransport>) -> Router {
    devfolio::create_app(transport)
}
