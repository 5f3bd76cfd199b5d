//! REST helpers for the contact endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `SubmitError::Unavailable` since the
//! endpoint is only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into `SubmitError`, whose `Display` text is safe to
//! show in the status banner. Transport details are logged, not displayed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContactRequest, ContactResponse, FAILURE_MESSAGE, SUCCESS_MESSAGE};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Failure modes of a contact submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced a response.
    #[error("{}", FAILURE_MESSAGE)]
    Transport { detail: String },
    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("{}", FAILURE_MESSAGE)]
    Unavailable,
}

/// Banner text for a non-success response. Prefers the server's own `error`.
#[cfg(any(test, feature = "hydrate"))]
fn rejection_message(status: u16, body: Option<ContactResponse>) -> String {
    if let Some(error) = body.and_then(|b| b.error).filter(|e| !e.trim().is_empty()) {
        return error;
    }
    match status {
        422 => crate::state::submission::INVALID_FORM_MESSAGE.to_owned(),
        _ => FAILURE_MESSAGE.to_owned(),
    }
}

/// Success text for an accepted response, falling back to the stock message.
#[cfg(any(test, feature = "hydrate"))]
fn accepted_message(body: Option<ContactResponse>) -> String {
    body.and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| SUCCESS_MESSAGE.to_owned())
}

/// Submit a contact request via `POST /api/contact`.
///
/// # Errors
///
/// Returns `Transport` if the request fails to send, `Rejected` on any
/// non-2xx status or an `ok: false` body.
pub async fn submit_contact(request: &ContactRequest) -> Result<String, SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(request)
            .map_err(|e| SubmitError::Transport { detail: e.to_string() })?
            .send()
            .await
            .map_err(|e| SubmitError::Transport { detail: e.to_string() })?;
        let status = resp.status();
        let body = resp.json::<ContactResponse>().await.ok();
        if !resp.ok() || body.as_ref().is_some_and(|b| !b.ok) {
            log::warn!("contact submission rejected: status={status}");
            return Err(SubmitError::Rejected { status, message: rejection_message(status, body) });
        }
        Ok(accepted_message(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(SubmitError::Unavailable)
    }
}
