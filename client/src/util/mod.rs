//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod animation;
pub mod clipboard;
pub mod ripple;
pub mod scroll;
pub mod storage;
pub mod theme;
pub mod visibility;
