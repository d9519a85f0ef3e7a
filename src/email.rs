use anyhow::{Context, Result};
use askama::Template;
use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

use crate::config::EmailConfig;
use crate::contact::ContactMessage;

/// A rendered notification, ready to hand to a mail transport.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub reply_to_name: String,
    pub reply_to_email: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Contact notification HTML template
#[derive(Template)]
#[template(path = "emails/contact-notification.html")]
struct ContactHtmlTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message_lines: Vec<&'a str>,
}

/// Contact notification plain text template
#[derive(Template)]
#[template(path = "emails/contact-notification.txt")]
struct ContactTextTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// Render both bodies of the notification email for a validated message.
///
/// The plaintext body keeps the message's newlines; the HTML body escapes
/// the content and turns newlines into `<br />`.
pub fn build_notification(message: &ContactMessage) -> Result<OutgoingEmail> {
    let text_body = ContactTextTemplate {
        name: &message.name,
        email: &message.email,
        subject: &message.subject,
        message: &message.message,
    }
    .render()
    .context("Failed to render plain text email template")?;

    let html_body = ContactHtmlTemplate {
        name: &message.name,
        email: &message.email,
        subject: &message.subject,
        message_lines: message.message.split('\n').collect(),
    }
    .render()
    .context("Failed to render HTML email template")?;

    Ok(OutgoingEmail {
        reply_to_name: message.name.clone(),
        reply_to_email: message.email.clone(),
        subject: format!("Portfolio Contact: {}", message.subject),
        text_body,
        html_body,
    })
}

/// Narrow delivery seam so the submission handler can be tested without a
/// real email provider.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<()>;
}

/// SMTP delivery via lettre, addressed to the configured recipient.
#[derive(Clone)]
pub struct SmtpMailer {
    mailer: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig) -> Result<Self> {
        // For local dev (MailDev), don't use relay or credentials
        let mailer = if config.smtp_username.is_empty() && config.smtp_password.is_empty() {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            let credentials = Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            );

            // relay() uses STARTTLS by default, appropriate for port 587
            SmtpTransport::relay(&config.smtp_host)
                .context("Failed to create SMTP transport")?
                .port(config.smtp_port)
                .credentials(credentials)
                .build()
        };

        let from: Mailbox = format!("{} <{}>", config.from_name, config.from_email)
            .parse()
            .context("Failed to parse from email")?;

        let to: Mailbox = config
            .contact_address
            .parse()
            .context("Failed to parse contact address")?;

        Ok(Self { mailer, from, to })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        let reply_to: Mailbox = format!("{} <{}>", email.reply_to_name, email.reply_to_email)
            .parse()
            .context("Failed to parse reply-to email")?;

        let message = Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .to(self.to.clone())
            .subject(email.subject.clone())
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html_body.clone()),
                    ),
            )
            .context("Failed to build email message")?;

        self.mailer
            .send(&message)
            .context("Failed to send email via SMTP")?;

        info!(subject = %email.subject, "Contact notification sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello\nWorld".to_string(),
        }
    }

    #[test]
    fn test_text_body_keeps_literal_newlines() {
        let email = build_notification(&sample_message()).unwrap();
        assert!(email.text_body.contains("Hello\nWorld"));
        assert!(email.text_body.contains("Name: Ada"));
        assert!(email.text_body.contains("Email: ada@example.com"));
    }

    #[test]
    fn test_html_body_renders_newlines_as_breaks() {
        let email = build_notification(&sample_message()).unwrap();
        assert!(email.html_body.contains("Hello<br />World"));
        assert!(!email.html_body.contains("Hello\nWorld"));
    }

    #[test]
    fn test_html_body_escapes_user_content() {
        let mut message = sample_message();
        message.message = "<script>alert(1)</script>".to_string();
        let email = build_notification(&message).unwrap();
        // askama escapes angle brackets as numeric entities
        assert!(!email.html_body.contains("<script>"));
        assert!(email.html_body.contains("&#60;script&#62;alert(1)&#60;/script&#62;"));
    }

    #[test]
    fn test_html_body_keeps_trailing_newline_as_break() {
        let mut message = sample_message();
        message.message = "Hello\nWorld\n".to_string();
        let email = build_notification(&message).unwrap();
        assert!(email.html_body.contains("Hello<br />World<br />"));
    }

    #[test]
    fn test_subject_line_derived_from_submission() {
        let email = build_notification(&sample_message()).unwrap();
        assert_eq!(email.subject, "Portfolio Contact: Hi");
        assert_eq!(email.reply_to_email, "ada@example.com");
    }

    #[test]
    fn test_smtp_mailer_builds_from_default_config() {
        let mailer = SmtpMailer::new(&EmailConfig::default());
        assert!(mailer.is_ok());
    }
}
