//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped content and delegates interactive pieces to
//! `components`.

pub mod contact;
pub mod home;
