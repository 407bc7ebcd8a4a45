//! Default numeric constants for the board. Every value here is a default for
//! a [`crate::config::BoardConfig`] field and can be overridden at runtime.

// ── Memo card ───────────────────────────────────────────────────

/// Memo card width in scene units.
pub const CARD_WIDTH: f64 = 256.0;

/// Memo card height in scene units.
pub const CARD_HEIGHT: f64 = 192.0;

// ── Scene ───────────────────────────────────────────────────────

/// Scene width expressed in card widths.
pub const SCENE_WIDTH_CARDS: f64 = 10.0;

/// Scene height expressed in card heights.
pub const SCENE_HEIGHT_CARDS: f64 = 7.5;

/// Padding between the board box edge and the scene, in scene units.
pub const BORDER_PADDING: f64 = 32.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Number of discrete zoom steps.
pub const NUM_LEVELS: u32 = 8;

/// Scale factor at the highest zoom level.
pub const MAX_SCALE: f64 = 8.0;

// ── Panning ─────────────────────────────────────────────────────

/// Distance an arrow key moves the view, before dividing by the scale.
pub const PAN_STEP: f64 = 96.0;

/// Screen-space margin kept between the scene edge and the viewport edge.
pub const CLAMP_MARGIN: f64 = 48.0;

/// Vertical screen space taken by the page header and footer.
pub const CHROME_ALLOWANCE: f64 = 112.0;

/// Delay after the last offset change before the clamp runs.
pub const CLAMP_DEBOUNCE_MS: u32 = 50;

// ── Grid ────────────────────────────────────────────────────────

/// Grid cells per card edge; also the heavy-line period.
pub const GRID_SUBDIVISIONS: u32 = 4;

/// Fraction of the card width subtracted from the pointer before snapping.
pub const SNAP_ANCHOR_X_FRACTION: f64 = 1.0 / 3.0;

/// Fraction of the card height subtracted from the pointer before snapping.
pub const SNAP_ANCHOR_Y_FRACTION: f64 = 1.0 / 8.0;
