//! DOM measurements for the pointer effects.

use effects::pointer::Bounds;

/// Viewport-relative bounding box of `element`.
pub fn element_bounds(element: &web_sys::Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Viewport-relative pointer position of a mouse event.
pub fn client_point(ev: &web_sys::MouseEvent) -> (f64, f64) {
    (f64::from(ev.client_x()), f64::from(ev.client_y()))
}
