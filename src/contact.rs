use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::ContactError;

/// Basic `local@domain.tld` check, case-insensitive.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email regex must compile")
});

/// Raw contact form payload as posted by the client.
///
/// All fields are optional at the serde level so that an absent key lands
/// in [`ContactPayload::validate`] instead of being rejected by the JSON
/// extractor; missing and empty fields get the same answer.
#[derive(Debug, Default, Deserialize)]
pub struct ContactPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A validated contact message, alive for the duration of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    /// Validate in contract order: all four fields present and non-empty
    /// first, then the email format.
    pub fn validate(self) -> Result<ContactMessage, ContactError> {
        let name = self.name.filter(|v| !v.is_empty());
        let email = self.email.filter(|v| !v.is_empty());
        let subject = self.subject.filter(|v| !v.is_empty());
        let message = self.message.filter(|v| !v.is_empty());

        let (Some(name), Some(email), Some(subject), Some(message)) =
            (name, email, subject, message)
        else {
            return Err(ContactError::MissingFields);
        };

        if !EMAIL_RE.is_match(&email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(ContactMessage {
            name,
            email,
            subject,
            message,
        })
    }
}
