//! Contact message checking and delivery.
//!
//! Submitted payloads are re-validated with the client's rule table before
//! delivery. Delivery goes through Resend when configured and falls back to
//! the trace log otherwise.

use folio_client::net::types::ContactRequest;
use folio_client::state::form::{FieldName, request_violations};
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use crate::config::Delivery;

const CONTACT_EMAIL_TEMPLATE: &str = include_str!("../../templates/contact_email.html");

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("{message}")]
    Invalid { field: FieldName, message: &'static str },
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// Reject the request with its first rule violation, in field order.
///
/// # Errors
///
/// Returns `ContactError::Invalid` naming the offending field.
pub fn check(request: &ContactRequest) -> Result<(), ContactError> {
    match request_violations(request).first() {
        Some(&(field, message)) => Err(ContactError::Invalid { field, message }),
        None => Ok(()),
    }
}

/// Destination for accepted messages.
#[derive(Debug, Clone)]
pub enum ContactSink {
    Resend { api_key: String, from: String, to: String },
    Log,
}

impl ContactSink {
    #[must_use]
    pub fn from_delivery(delivery: &Delivery) -> Self {
        match delivery {
            Delivery::Email { api_key, from, to } => {
                Self::Resend { api_key: api_key.clone(), from: from.clone(), to: to.clone() }
            }
            Delivery::Log => Self::Log,
        }
    }

    /// Deliver an already-checked request.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Delivery` if the email provider rejects the send.
    pub async fn deliver(&self, request: &ContactRequest) -> Result<(), ContactError> {
        match self {
            Self::Resend { api_key, from, to } => {
                let resend = Resend::new(api_key);
                let subject = email_subject(request);
                let html = render_contact_email(request);
                let email = CreateEmailBaseOptions::new(from, [to.as_str()], subject).with_html(&html);
                resend
                    .emails
                    .send(email)
                    .await
                    .map_err(|e| ContactError::Delivery(e.to_string()))?;
                tracing::info!(from = %request.email, "contact message emailed");
                Ok(())
            }
            Self::Log => {
                tracing::info!(
                    name = %full_name(request),
                    email = %request.email,
                    subject = %request.subject,
                    newsletter = request.newsletter,
                    message = %request.message,
                    "contact message received"
                );
                Ok(())
            }
        }
    }
}

fn full_name(request: &ContactRequest) -> String {
    format!("{} {}", request.first_name, request.last_name)
}

#[must_use]
pub fn email_subject(request: &ContactRequest) -> String {
    let topic = request.subject.trim();
    let topic = if topic.is_empty() { "general" } else { topic };
    format!("Portfolio contact ({topic}) from {}", full_name(request))
}

#[must_use]
pub fn render_contact_email(request: &ContactRequest) -> String {
    let subject = request.subject.trim();
    CONTACT_EMAIL_TEMPLATE
        .replace("{{NAME}}", &escape_html(&full_name(request)))
        .replace("{{EMAIL}}", &escape_html(&request.email))
        .replace("{{SUBJECT}}", &escape_html(if subject.is_empty() { "(none)" } else { subject }))
        .replace("{{NEWSLETTER}}", if request.newsletter { "yes" } else { "no" })
        .replace("{{MESSAGE}}", &escape_html(&request.message))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
