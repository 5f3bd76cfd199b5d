//! Contact backend selection.
//!
//! DESIGN
//! ======
//! The contact page talks to a `ContactBackend` rather than calling the API
//! directly. `Http` posts to the server route and is the default. `Simulated`
//! fakes the round trip locally for static previews. The server picks the
//! kind and renders it onto `<html data-contact-backend>` so the hydrated
//! client follows the deployment's configuration.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use super::api;
use super::simulated::SimulatedBackend;
use super::types::ContactRequest;

/// Attribute on `<html>` that carries the configured backend kind.
pub const BACKEND_ATTRIBUTE: &str = "data-contact-backend";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    #[default]
    Http,
    Simulated,
}

impl BackendKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Simulated => "simulated",
        }
    }

    /// Case-insensitive parse of `http` / `simulated`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "http" => Some(Self::Http),
            "simulated" => Some(Self::Simulated),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub enum ContactBackend {
    Http,
    Simulated(SimulatedBackend),
}

impl ContactBackend {
    #[must_use]
    pub fn for_kind(kind: BackendKind, seed: u64) -> Self {
        match kind {
            BackendKind::Http => Self::Http,
            BackendKind::Simulated => Self::Simulated(SimulatedBackend::seeded(seed)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Http => BackendKind::Http,
            Self::Simulated(_) => BackendKind::Simulated,
        }
    }

    /// Backend configured on the current document; `Http` off the browser or
    /// when the attribute is missing or unrecognized.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let kind = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
                .and_then(|el| el.get_attribute(BACKEND_ATTRIBUTE))
                .and_then(|raw| BackendKind::parse(&raw))
                .unwrap_or_default();
            Self::for_kind(kind, entropy_seed())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::Http
        }
    }

    /// Resolve a submission to the banner text for either outcome.
    ///
    /// # Errors
    ///
    /// Returns the user-facing failure text.
    pub async fn submit(&self, request: &ContactRequest) -> Result<String, String> {
        match self {
            Self::Http => api::submit_contact(request).await.map_err(|e| {
                #[cfg(feature = "hydrate")]
                log::error!("contact submission failed: {e:?}");
                e.to_string()
            }),
            Self::Simulated(sim) => sim.submit(request).await,
        }
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn entropy_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
