//! `requestAnimationFrame` handle.
//!
//! Dropping an [`AnimationFrame`] cancels the request if it has not fired,
//! so storing a new handle over an old one replaces the stale frame.

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

pub struct AnimationFrame {
    id: i32,
    _callback: Closure<dyn FnMut(f64)>,
}

impl AnimationFrame {
    /// Run `callback` on the next frame.
    ///
    /// # Errors
    ///
    /// Returns the browser error when there is no window or the request is
    /// refused; the callback is not run in that case.
    pub fn request(callback: impl FnOnce() + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure: Closure<dyn FnMut(f64)> = Closure::once(move |_timestamp: f64| callback());
        let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        Ok(Self { id, _callback: closure })
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.cancel_animation_frame(self.id) {
            log::debug!("cancelAnimationFrame({}) failed: {err:?}", self.id);
        }
    }
}
