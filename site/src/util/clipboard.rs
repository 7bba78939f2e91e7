//! Clipboard writes.
//!
//! TRADE-OFFS
//! ==========
//! The async Clipboard API only exists in secure contexts, so its absence is
//! an ordinary error rather than a bug. Callers on this page log and drop it.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast as _, JsValue};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard API unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Write `text` to the system clipboard and wait for the browser to accept it.
///
/// # Errors
///
/// [`ClipboardError::Unavailable`] off-browser or when `navigator.clipboard`
/// is missing; [`ClipboardError::Rejected`] when the write promise rejects.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let navigator = window.navigator();
        let handle = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|_| ClipboardError::Unavailable)?;
        if handle.is_undefined() || handle.is_null() {
            return Err(ClipboardError::Unavailable);
        }
        let clipboard: web_sys::Clipboard = handle.unchecked_into();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map_err(|err| ClipboardError::Rejected(describe(&err)))?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ClipboardError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
