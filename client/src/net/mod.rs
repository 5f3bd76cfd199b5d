//! Networking modules for the contact submission boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST call, `simulated` fakes it for previews, `backend`
//! chooses between them, and `types` defines the shared wire schema.

pub mod api;
pub mod backend;
pub mod simulated;
pub mod types;
