//! Board input mapping and pointer helper utilities.

#[cfg(test)]
#[path = "board_input_test.rs"]
mod board_input_test;

use canvas::camera::Point;
use canvas::input::{Key, Modifiers, WheelDelta};

/// What a key press inside the memo editor means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Save,
    Cancel,
}

pub fn map_modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers { shift, ctrl, alt, meta }
}

pub fn map_key(code: String) -> Key {
    Key(code)
}

/// Wheel deltas arrive in pixels, lines or pages; only the sign matters to the
/// board so no normalisation happens here.
pub fn map_wheel(dx: f64, dy: f64) -> WheelDelta {
    WheelDelta { dx, dy }
}

/// Whether the board owns a wheel event. Ctrl+wheel is left to the browser's
/// page zoom; every other wheel is kept from scrolling the page.
pub fn board_owns_wheel(modifiers: Modifiers) -> bool {
    !modifiers.ctrl
}

/// Pointer position relative to the board container's top-left corner.
pub fn container_point(client_x: i32, client_y: i32, origin_left: f64, origin_top: f64) -> Point {
    Point::new(f64::from(client_x) - origin_left, f64::from(client_y) - origin_top)
}

/// Escape cancels; Ctrl/Cmd+Enter saves. Plain Enter stays a newline.
pub fn editor_key(key: &str, ctrl_or_meta: bool) -> Option<EditorKey> {
    match key {
        "Escape" => Some(EditorKey::Cancel),
        "Enter" if ctrl_or_meta => Some(EditorKey::Save),
        _ => None,
    }
}

#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent, container: Option<&web_sys::HtmlDivElement>) -> Point {
    let (left, top) = container.map_or((0.0, 0.0), |el| {
        let rect = el.get_bounding_client_rect();
        (rect.left(), rect.top())
    });
    container_point(ev.client_x(), ev.client_y(), left, top)
}
