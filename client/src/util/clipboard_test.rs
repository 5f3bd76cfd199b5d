use super::*;

#[test]
fn copy_off_browser_is_unavailable() {
    assert_eq!(futures::executor::block_on(copy_text("me@example.com")), Err(ClipboardError::Unavailable));
}

#[test]
fn error_messages_name_the_cause() {
    assert_eq!(ClipboardError::Unavailable.to_string(), "clipboard is not available");
    assert_eq!(
        ClipboardError::Rejected("NotAllowedError".to_owned()).to_string(),
        "clipboard write rejected: NotAllowedError"
    );
}
