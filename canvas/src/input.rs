//! Input model: modifier keys, keyboard codes, wheel deltas, and the drag
//! state tracked between pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Whether any modifier is held.
    #[must_use]
    pub fn any(self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// A keyboard key.
///
/// The inner string holds the physical key code as reported by the browser
/// (`KeyboardEvent.code`, e.g. `"ArrowLeft"`, `"Space"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// The arrow direction for this key, if it is an arrow key.
    #[must_use]
    pub fn arrow(&self) -> Option<Arrow> {
        match self.0.as_str() {
            "ArrowLeft" => Some(Arrow::Left),
            "ArrowRight" => Some(Arrow::Right),
            "ArrowUp" => Some(Arrow::Up),
            "ArrowDown" => Some(Arrow::Down),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_space(&self) -> bool {
        self.0 == "Space"
    }
}

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Left,
    Right,
    Up,
    Down,
}

impl Arrow {
    /// Unit offset direction. Arrow-left reveals content on the left, so the
    /// scene moves right (`+x`).
    #[must_use]
    pub fn unit(self) -> (f64, f64) {
        match self {
            Self::Left => (1.0, 0.0),
            Self::Right => (-1.0, 0.0),
            Self::Up => (0.0, 1.0),
            Self::Down => (0.0, -1.0),
        }
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Drag state.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No drag in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the board.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute the pan delta.
        last_screen: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }
}
