//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and interactive widgets while reading/writing
//! shared state from Leptos context providers.

pub mod contact_form;
pub mod copy_email;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod reveal;
pub mod stats;
pub mod tech_tag;
pub mod theme_toggle;
pub mod typewriter;
