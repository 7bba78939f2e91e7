#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn write_text_is_unavailable_off_browser() {
    let result = futures::executor::block_on(write_text("youremail@example.com"));
    assert_eq!(result, Err(ClipboardError::Unavailable));
}

#[test]
fn errors_render_readably() {
    assert_eq!(ClipboardError::Unavailable.to_string(), "clipboard API unavailable");
    assert_eq!(
        ClipboardError::Rejected("NotAllowedError".to_owned()).to_string(),
        "clipboard write rejected: NotAllowedError"
    );
}
