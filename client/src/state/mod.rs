//! Reactive-state models for client UI domains.
//!
//! SYSTEM CONTEXT
//! ==============
//! These structs are plain data wrapped in `RwSignal`s by the app root and the
//! pages. All transition logic lives here so it can be unit-tested without a
//! browser.

pub mod form;
pub mod nav;
pub mod newsletter;
pub mod submission;
pub mod ui;
