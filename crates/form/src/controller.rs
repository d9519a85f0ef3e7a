use std::time::{Duration, Instant};

use crate::{ContactFields, SubmitContact};

/// How long the "sent" confirmation stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// The four form fields, used for focus tracking and field updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// Result of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
    /// A previous submission is still in flight; no request was issued.
    InFlight,
}

/// What the form should currently display, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormNotice {
    Sent,
    Error,
}

/// Client-side contact form state.
///
/// The `submitting` flag is advisory UI state, not a lock: it keeps a
/// single client from issuing overlapping requests, nothing more.
#[derive(Debug, Default)]
pub struct ContactForm {
    fields: ContactFields,
    focused: Option<Field>,
    submitting: bool,
    sent_at: Option<Instant>,
    failed: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value. No client-side validation beyond what the
    /// rendered form's `required` attribute already enforces.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Subject => self.fields.subject = value,
            Field::Message => self.fields.message = value,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.fields.name,
            Field::Email => &self.fields.email,
            Field::Subject => &self.fields.subject,
            Field::Message => &self.fields.message,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn focus(&mut self, field: Field) {
        self.focused = Some(field);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Start a submission: returns a snapshot of the fields to send, or
    /// `None` when a previous submission is still in flight.
    pub fn try_begin_submit(&mut self) -> Option<ContactFields> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.failed = false;
        Some(self.fields.clone())
    }

    /// Record the outcome of the in-flight submission: clear the fields on
    /// success, keep them untouched on failure so the user can resubmit.
    pub fn finish_submit(&mut self, success: bool, now: Instant) {
        self.submitting = false;
        if success {
            self.fields = ContactFields::default();
            self.sent_at = Some(now);
            self.failed = false;
        } else {
            self.failed = true;
        }
    }

    /// Perform one submission through the given transport. A single failed
    /// attempt is terminal; resubmitting is up to the user.
    pub async fn submit<S: SubmitContact>(&mut self, api: &S) -> SubmitOutcome {
        let Some(fields) = self.try_begin_submit() else {
            return SubmitOutcome::InFlight;
        };

        let result = api.submit(&fields).await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, "contact form submission failed");
        }

        self.finish_submit(result.is_ok(), Instant::now());
        if result.is_ok() {
            SubmitOutcome::Sent
        } else {
            SubmitOutcome::Failed
        }
    }

    /// Current notice, if any. The sent confirmation auto-hides once
    /// [`NOTICE_TTL`] has elapsed; the error notice stays until the next
    /// submission attempt.
    pub fn notice(&self, now: Instant) -> Option<FormNotice> {
        if self.failed {
            return Some(FormNotice::Error);
        }
        match self.sent_at {
            Some(sent_at) if now.duration_since(sent_at) < NOTICE_TTL => Some(FormNotice::Sent),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "Ada");
        form.update_field(Field::Email, "ada@example.com");
        form.update_field(Field::Subject, "Hi");
        form.update_field(Field::Message, "Hello\nWorld");
        form
    }

    #[test]
    fn update_field_sets_each_field() {
        let form = filled_form();
        assert_eq!(form.field(Field::Name), "Ada");
        assert_eq!(form.field(Field::Email), "ada@example.com");
        assert_eq!(form.field(Field::Subject), "Hi");
        assert_eq!(form.field(Field::Message), "Hello\nWorld");
    }

    #[test]
    fn focus_is_tracked_per_field() {
        let mut form = ContactForm::new();
        assert_eq!(form.focused(), None);

        form.focus(Field::Email);
        assert_eq!(form.focused(), Some(Field::Email));

        form.focus(Field::Message);
        assert_eq!(form.focused(), Some(Field::Message));

        form.blur();
        assert_eq!(form.focused(), None);
    }

    #[test]
    fn second_begin_submit_is_refused_while_in_flight() {
        let mut form = filled_form();

        let first = form.try_begin_submit();
        assert!(first.is_some());
        assert!(form.is_submitting());

        // Still in flight: no second request may be issued.
        assert!(form.try_begin_submit().is_none());

        form.finish_submit(true, Instant::now());
        assert!(!form.is_submitting());
    }

    #[test]
    fn success_clears_fields_and_shows_transient_notice() {
        let mut form = filled_form();
        let snapshot = form.try_begin_submit().unwrap();
        assert_eq!(snapshot.name, "Ada");

        let now = Instant::now();
        form.finish_submit(true, now);

        assert_eq!(form.fields(), &ContactFields::default());
        assert_eq!(form.notice(now), Some(FormNotice::Sent));
        // Auto-hides after the TTL.
        assert_eq!(form.notice(now + NOTICE_TTL), None);
    }

    #[test]
    fn failure_preserves_fields_and_shows_error() {
        let mut form = filled_form();
        let before = form.fields().clone();

        form.try_begin_submit().unwrap();
        form.finish_submit(false, Instant::now());

        assert_eq!(form.fields(), &before);
        assert_eq!(form.notice(Instant::now()), Some(FormNotice::Error));
    }

    #[test]
    fn error_notice_clears_on_next_attempt() {
        let mut form = filled_form();
        form.try_begin_submit().unwrap();
        form.finish_submit(false, Instant::now());
        assert_eq!(form.notice(Instant::now()), Some(FormNotice::Error));

        form.try_begin_submit().unwrap();
        assert_eq!(form.notice(Instant::now()), None);
    }
}
