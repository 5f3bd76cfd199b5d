//! Wire DTOs for the contact-submission boundary.
//!
//! DESIGN
//! ======
//! These types are shared verbatim by the browser client and the server
//! route, so the JSON schema of `POST /api/contact` lives in one place.
//! Keys are camelCase to match the form control names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Shown after a message has been accepted for delivery.
pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. I'll get back to you within 24 hours.";
/// Shown when delivery failed for a reason the visitor cannot fix.
pub const FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again or contact me directly via email.";

/// Structured record submitted by the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Free-form topic picked from the subject dropdown; never validated.
    #[serde(default)]
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub newsletter: bool,
}

/// Body of every `/api/contact` response.
///
/// `ok == true` carries `message`; `ok == false` carries `error`, plus
/// `field` when a specific form field was rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ContactResponse {
    #[must_use]
    pub fn accepted(message: impl Into<String>) -> Self {
        Self { ok: true, message: Some(message.into()), ..Self::default() }
    }

    #[must_use]
    pub fn rejected(error: impl Into<String>, field: Option<&str>) -> Self {
        Self { ok: false, error: Some(error.into()), field: field.map(str::to_owned), ..Self::default() }
    }
}
