//! View transform for the board: discrete zoom level, translation offset,
//! pan limits, and screen/scene coordinate conversion.
//!
//! The host lays the board box out at the viewport origin and applies
//! `scale(s) translate(x, y)` with the transform origin at the box centre.
//! Everything here mirrors that CSS so pointer positions can be mapped back
//! into scene units.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::config::BoardConfig;

/// A point in either screen or scene space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Camera state for the board.
///
/// `level` is the discrete zoom step in `[1, num_levels]`; `step` is the scale
/// contributed by one level, so `scale() == level * step` always holds.
/// `offset_x` / `offset_y` are in scene units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    level: u32,
    max_level: u32,
    step: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Camera {
    /// Camera at level 1 with the configured default offset.
    #[must_use]
    pub fn new(config: &BoardConfig) -> Self {
        let offset = config.default_offset();
        Self {
            level: 1,
            max_level: config.num_levels.max(1),
            step: config.min_scale(),
            offset_x: offset.x,
            offset_y: offset.y,
        }
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// The multiplicative scale applied at render time.
    #[must_use]
    pub fn scale(&self) -> f64 {
        f64::from(self.level) * self.step
    }

    /// Set the zoom level, clamping into `[1, max_level]`. Returns whether the
    /// level changed.
    pub fn set_level(&mut self, level: u32) -> bool {
        let clamped = level.clamp(1, self.max_level);
        let changed = clamped != self.level;
        self.level = clamped;
        changed
    }

    /// Step one level up. Returns `false` when already at the top.
    pub fn zoom_in(&mut self) -> bool {
        if self.level >= self.max_level {
            return false;
        }
        self.set_level(self.level + 1)
    }

    /// Step one level down. Returns `false` when already at level 1.
    pub fn zoom_out(&mut self) -> bool {
        if self.level <= 1 {
            return false;
        }
        self.set_level(self.level - 1)
    }

    /// Back to level 1 and the configured default offset.
    pub fn reset(&mut self, config: &BoardConfig) {
        let offset = config.default_offset();
        self.level = 1;
        self.offset_x = offset.x;
        self.offset_y = offset.y;
    }

    /// Apply a pointer drag delta (screen pixels).
    ///
    /// The delta is divided by the zoom *level*, not by `scale()`. At the
    /// default configuration the two coincide; with other step sizes this keeps
    /// drag speed tied to the level the user sees.
    pub fn drag_by(&mut self, dx: f64, dy: f64) {
        let level = f64::from(self.level);
        self.offset_x += dx / level;
        self.offset_y += dy / level;
    }

    /// Nudge by a fixed distance divided by the current scale.
    pub fn nudge(&mut self, dx: f64, dy: f64) {
        let scale = self.scale();
        self.offset_x += dx / scale;
        self.offset_y += dy / scale;
    }

    /// Clamp offsets into `bounds`. Returns whether either offset moved.
    ///
    /// The positive bound is applied first and the negative bound second, so
    /// when the range is empty (viewport larger than the scene) the negative
    /// bound wins.
    pub fn clamp_to(&mut self, bounds: &PanBounds) -> bool {
        let x = self.offset_x.min(bounds.pos_x).max(bounds.neg_x);
        let y = self.offset_y.min(bounds.pos_y).max(bounds.neg_y);
        let changed = x != self.offset_x || y != self.offset_y;
        self.offset_x = x;
        self.offset_y = y;
        changed
    }

    /// Convert a screen point (relative to the board's layout origin) to
    /// scene coordinates.
    #[must_use]
    pub fn screen_to_scene(&self, screen: Point, config: &BoardConfig) -> Point {
        let (box_w, box_h) = config.board_box();
        let scale = self.scale();
        let cx = box_w / 2.0;
        let cy = box_h / 2.0;
        let pad = config.border_padding / 2.0;
        Point {
            x: cx + (screen.x - cx) / scale - self.offset_x - pad,
            y: cy + (screen.y - cy) / scale - self.offset_y - pad,
        }
    }

    /// Convert a scene point to screen coordinates.
    #[cfg(test)]
    #[must_use]
    pub fn scene_to_screen(&self, scene: Point, config: &BoardConfig) -> Point {
        let (box_w, box_h) = config.board_box();
        let scale = self.scale();
        let cx = box_w / 2.0;
        let cy = box_h / 2.0;
        let pad = config.border_padding / 2.0;
        Point {
            x: cx + (scene.x + pad + self.offset_x - cx) * scale,
            y: cy + (scene.y + pad + self.offset_y - cy) * scale,
        }
    }

    /// CSS transform for the board box.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("scale({}) translate({}px, {}px)", self.scale(), self.offset_x, self.offset_y)
    }
}

/// Legal offset range for a given scale and viewport.
///
/// `pos_*` limit how far the scene can move right/down (its top-left edge
/// stays near the viewport's top-left); `neg_*` limit movement left/up and
/// also account for the viewport size, chrome and border padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanBounds {
    pub pos_x: f64,
    pub pos_y: f64,
    pub neg_x: f64,
    pub neg_y: f64,
}

impl PanBounds {
    #[must_use]
    pub fn compute(config: &BoardConfig, scale: f64, viewport_width: f64, viewport_height: f64) -> Self {
        let w = config.scene_width();
        let h = config.scene_height();
        let margin = config.clamp_margin / scale;
        Self {
            pos_x: w * (scale - 1.0) / (2.0 * scale) + margin,
            pos_y: h * (scale - 1.0) / (2.0 * scale) + margin,
            neg_x: viewport_width / scale - w * (scale + 1.0) / (2.0 * scale) - margin - config.border_padding,
            neg_y: viewport_height / scale
                - h * (scale + 1.0) / (2.0 * scale)
                - config.chrome_allowance / scale
                - margin
                - config.border_padding,
        }
    }

    /// Whether `x` and `y` both satisfy the bounds.
    #[cfg(test)]
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.neg_x && x <= self.pos_x && y >= self.neg_y && y <= self.pos_y
    }

    /// Whether the range is non-empty on both axes.
    #[must_use]
    pub fn is_satisfiable(&self) -> bool {
        self.neg_x <= self.pos_x && self.neg_y <= self.pos_y
    }
}
