//! Clipboard writes for the copy-email affordance.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Feedback text shown in place of the copied value.
pub const COPIED_LABEL: &str = "Copied to clipboard!";
pub const COPY_FEEDBACK_MS: u32 = 2000;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// `Unavailable` off the browser or without a window, `Rejected` when the
/// browser refuses the write (permissions, insecure context).
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ClipboardError::Unavailable)
    }
}
