//! Domain services used by the HTTP route layer.

pub mod contact;
