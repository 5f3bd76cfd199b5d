//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! immutable after startup: handlers only read the config and the contact
//! sink.

use std::sync::Arc;

use crate::config::Config;
use crate::services::contact::ContactSink;

/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub contact: Arc<ContactSink>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let contact = ContactSink::from_delivery(&config.delivery);
        Self { config: Arc::new(config), contact: Arc::new(contact) }
    }
}
