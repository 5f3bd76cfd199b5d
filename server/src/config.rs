//! Server configuration parsed from environment variables.
//!
//! `.env` files are loaded by `main` via `dotenvy` before this runs, so
//! everything here reads the process environment only.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use folio_client::net::backend::BackendKind;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CONTACT_BACKEND must be `http` or `simulated`, got `{0}`")]
    InvalidBackend(String),
    #[error("{0} is required when RESEND_API_KEY is set")]
    MissingEmailSetting(&'static str),
}

/// Where accepted contact messages go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Send through Resend.
    Email { api_key: String, from: String, to: String },
    /// Write the message to the trace log only.
    Log,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Backend the hydrated client submits through.
    pub contact_backend: BackendKind,
    pub delivery: Delivery,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CONTACT_BACKEND`: `http` (default) or `simulated`
    /// - `RESEND_API_KEY`: enables email delivery; then `CONTACT_FROM_EMAIL`
    ///   and `CONTACT_TO_EMAIL` are required
    /// - `CONTACT_EMAIL_ENABLED`: set false to log messages even with a key
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown backend kind or incomplete email setup.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = var("PORT").and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT);

        let contact_backend = match var("CONTACT_BACKEND") {
            None => BackendKind::default(),
            Some(raw) => BackendKind::parse(&raw).ok_or(ConfigError::InvalidBackend(raw))?,
        };

        let email_enabled = var("CONTACT_EMAIL_ENABLED")
            .and_then(|raw| parse_bool(&raw))
            .unwrap_or(true);
        let delivery = match var("RESEND_API_KEY") {
            Some(api_key) if email_enabled => Delivery::Email {
                api_key,
                from: var("CONTACT_FROM_EMAIL").ok_or(ConfigError::MissingEmailSetting("CONTACT_FROM_EMAIL"))?,
                to: var("CONTACT_TO_EMAIL").ok_or(ConfigError::MissingEmailSetting("CONTACT_TO_EMAIL"))?,
            },
            _ => Delivery::Log,
        };

        Ok(Self { port, contact_backend, delivery })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
