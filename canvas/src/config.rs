//! Board configuration: every tunable dimension, zoom and pan constant.
//!
//! Values default to [`crate::consts`]. A host can override any subset from a
//! JSON object; keys it omits keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::camera::Point;
use crate::consts::{
    BORDER_PADDING, CARD_HEIGHT, CARD_WIDTH, CHROME_ALLOWANCE, CLAMP_DEBOUNCE_MS, CLAMP_MARGIN, GRID_SUBDIVISIONS,
    MAX_SCALE, NUM_LEVELS, PAN_STEP, SCENE_HEIGHT_CARDS, SCENE_WIDTH_CARDS, SNAP_ANCHOR_X_FRACTION,
    SNAP_ANCHOR_Y_FRACTION,
};

/// Errors raised while loading a [`BoardConfig`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    /// The JSON source could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// A field parsed but holds a value the board cannot work with.
    #[error("invalid config field {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Tunable board geometry and interaction constants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub card_width: f64,
    pub card_height: f64,
    /// Scene width in multiples of `card_width`.
    pub scene_width_cards: f64,
    /// Scene height in multiples of `card_height`.
    pub scene_height_cards: f64,
    pub num_levels: u32,
    pub max_scale: f64,
    pub border_padding: f64,
    pub pan_step: f64,
    pub clamp_margin: f64,
    /// Vertical screen space reserved for header and footer chrome.
    pub chrome_allowance: f64,
    pub clamp_debounce_ms: u32,
    pub grid_subdivisions: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
            scene_width_cards: SCENE_WIDTH_CARDS,
            scene_height_cards: SCENE_HEIGHT_CARDS,
            num_levels: NUM_LEVELS,
            max_scale: MAX_SCALE,
            border_padding: BORDER_PADDING,
            pan_step: PAN_STEP,
            clamp_margin: CLAMP_MARGIN,
            chrome_allowance: CHROME_ALLOWANCE,
            clamp_debounce_ms: CLAMP_DEBOUNCE_MS,
            grid_subdivisions: GRID_SUBDIVISIONS,
        }
    }
}

impl BoardConfig {
    /// Parse a (possibly partial) JSON object and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a field fails [`BoardConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the geometry degenerate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("card_width", self.card_width)?;
        positive("card_height", self.card_height)?;
        positive("scene_width_cards", self.scene_width_cards)?;
        positive("scene_height_cards", self.scene_height_cards)?;
        positive("max_scale", self.max_scale)?;
        non_negative("border_padding", self.border_padding)?;
        non_negative("pan_step", self.pan_step)?;
        non_negative("clamp_margin", self.clamp_margin)?;
        non_negative("chrome_allowance", self.chrome_allowance)?;
        if self.num_levels == 0 {
            return Err(ConfigError::Invalid { field: "num_levels", reason: "must be at least 1" });
        }
        if self.grid_subdivisions == 0 {
            return Err(ConfigError::Invalid { field: "grid_subdivisions", reason: "must be at least 1" });
        }
        Ok(())
    }

    // --- Derived geometry ---

    #[must_use]
    pub fn scene_width(&self) -> f64 {
        self.card_width * self.scene_width_cards
    }

    #[must_use]
    pub fn scene_height(&self) -> f64 {
        self.card_height * self.scene_height_cards
    }

    /// Scale factor of one zoom step; also the scale at level 1.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.max_scale / f64::from(self.num_levels)
    }

    /// Width of one snapping / grid cell.
    #[must_use]
    pub fn cell_width(&self) -> f64 {
        self.card_width / f64::from(self.grid_subdivisions)
    }

    /// Height of one snapping / grid cell.
    #[must_use]
    pub fn cell_height(&self) -> f64 {
        self.card_height / f64::from(self.grid_subdivisions)
    }

    /// Offset subtracted from the pointer so the snap lines up with the
    /// card's visual anchor instead of its top-left corner.
    #[must_use]
    pub fn snap_anchor(&self) -> Point {
        Point::new(self.card_width * SNAP_ANCHOR_X_FRACTION, self.card_height * SNAP_ANCHOR_Y_FRACTION)
    }

    /// Translation applied on first mount and on reset.
    #[must_use]
    pub fn default_offset(&self) -> Point {
        Point::new(-(self.border_padding / 2.0), -(self.border_padding / 2.0))
    }

    /// Untransformed size of the board box: the scene plus its border padding.
    #[must_use]
    pub fn board_box(&self) -> (f64, f64) {
        (self.scene_width() + self.border_padding, self.scene_height() + self.border_padding)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: "must be a positive number" })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: "must be zero or positive" })
    }
}
