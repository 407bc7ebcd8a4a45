//! Alignment grid: quarter-card snapping and the overlay lines drawn while a
//! memo is being placed.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::camera::Point;
use crate::config::BoardConfig;

/// Tolerance for values that already sit on a cell boundary but come back
/// from the division a hair below the integer.
const SNAP_EPSILON: f64 = 1e-9;

/// Round a scene point down to the nearest cell corner.
#[must_use]
pub fn snap_to_cell(point: Point, config: &BoardConfig) -> Point {
    Point {
        x: floor_to(point.x, config.cell_width()),
        y: floor_to(point.y, config.cell_height()),
    }
}

/// Candidate top-left corner for a card under the pointer.
///
/// The snap anchor is subtracted first so the card's visual anchor, not its
/// top-left corner, follows the pointer.
#[must_use]
pub fn candidate_position(pointer_scene: Point, config: &BoardConfig) -> Point {
    let anchor = config.snap_anchor();
    snap_to_cell(Point::new(pointer_scene.x - anchor.x, pointer_scene.y - anchor.y), config)
}

fn floor_to(value: f64, cell: f64) -> f64 {
    (value / cell + SNAP_EPSILON).floor() * cell
}

/// Orientation of a grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    /// Runs top to bottom at a fixed `x`.
    Vertical,
    /// Runs left to right at a fixed `y`.
    Horizontal,
}

/// One overlay line in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub axis: GridAxis,
    /// `x` for vertical lines, `y` for horizontal lines.
    pub position: f64,
    /// Length along the line's axis (full scene height or width).
    pub length: f64,
    /// Whole-card boundary: drawn solid and thicker.
    pub heavy: bool,
}

/// Every grid line across the scene, verticals first.
///
/// Line `k` sits at `k * cell` for `k` in `1..=cells`; every
/// `grid_subdivisions`-th line is heavy.
#[must_use]
pub fn grid_lines(config: &BoardConfig) -> Vec<GridLine> {
    let period = config.grid_subdivisions.max(1);
    let columns = cell_count(config.scene_width(), config.cell_width());
    let rows = cell_count(config.scene_height(), config.cell_height());

    let verticals = (1..=columns).map(|k| GridLine {
        axis: GridAxis::Vertical,
        position: f64::from(k) * config.cell_width(),
        length: config.scene_height(),
        heavy: k % period == 0,
    });
    let horizontals = (1..=rows).map(|k| GridLine {
        axis: GridAxis::Horizontal,
        position: f64::from(k) * config.cell_height(),
        length: config.scene_width(),
        heavy: k % period == 0,
    });
    verticals.chain(horizontals).collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cell_count(extent: f64, cell: f64) -> u32 {
    (extent / cell + SNAP_EPSILON).floor().max(0.0) as u32
}
