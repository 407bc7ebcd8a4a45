//! Inline style strings for board elements.
//!
//! Geometry comes from the `BoardFrame`; these helpers only format it so the
//! components stay declarative and the math stays testable.

#[cfg(test)]
#[path = "board_style_test.rs"]
mod board_style_test;

use canvas::camera::Point;
use canvas::grid::{GridAxis, GridLine};
use canvas::render::BoardFrame;

/// Width of a whole-card grid line; subdivision lines are half as wide.
const HEAVY_LINE_PX: u8 = 2;

/// Board box: padded size plus the camera transform.
pub fn board_box_style(frame: &BoardFrame) -> String {
    format!(
        "width: {}px; height: {}px; transform: {};",
        frame.board_width, frame.board_height, frame.transform
    )
}

/// Class list for the board box; the transition is dropped while dragging.
pub fn board_box_class(frame: &BoardFrame) -> &'static str {
    if frame.animate && !frame.dragging { "memo-board__box memo-board__box--animate" } else { "memo-board__box" }
}

pub fn scene_style(frame: &BoardFrame) -> String {
    format!("width: {}px; height: {}px;", frame.scene_width, frame.scene_height)
}

/// One overlay line, positioned in scene coordinates.
pub fn grid_line_style(line: &GridLine) -> String {
    let (width, border) = if line.heavy { (HEAVY_LINE_PX, "solid") } else { (1, "dashed") };
    match line.axis {
        GridAxis::Vertical => format!(
            "left: {}px; top: 0; height: {}px; border-left: {width}px {border};",
            line.position, line.length
        ),
        GridAxis::Horizontal => format!(
            "top: {}px; left: 0; width: {}px; border-top: {width}px {border};",
            line.position, line.length
        ),
    }
}

/// Card placement at a scene position.
pub fn card_style(position: Point, width: f64, height: f64) -> String {
    format!("left: {}px; top: {}px; width: {width}px; height: {height}px;", position.x, position.y)
}
