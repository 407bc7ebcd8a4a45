//! Render snapshot: everything the host needs to draw one frame of the board.
//!
//! The host owns the DOM; this module only reads engine state and produces
//! plain data. Nothing here mutates application state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::camera::Point;
use crate::engine::EngineCore;
use crate::grid::{GridLine, grid_lines};
use crate::memo::{Memo, MemoKind};
use crate::posting::{MemoDraft, PostingPhase};

/// Key hint shown on the confirm strip.
pub const CONFIRM_KEY_HINT: &str = "space";

/// The memo being placed, drawn above the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewCard {
    pub kind: MemoKind,
    pub content: String,
    /// Top-left corner in scene coordinates.
    pub position: Point,
    /// Stuck to the board and waiting for submission.
    pub pasted: bool,
}

/// Confirm / cancel control shown while placing a memo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmStrip {
    pub label: &'static str,
    pub key_hint: &'static str,
    /// Highlighted while the view can still move.
    pub active: bool,
}

/// One frame of board state.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq)]
pub struct BoardFrame {
    /// CSS transform for the board box.
    pub transform: String,
    /// Untransformed board box size (scene plus border padding).
    pub board_width: f64,
    pub board_height: f64,
    pub scene_width: f64,
    pub scene_height: f64,
    /// Apply `transition-transform` to the board box.
    pub animate: bool,
    pub dragging: bool,
    pub level: u32,
    pub max_level: u32,
    pub show_zoom_controls: bool,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
    /// Empty outside posting mode.
    pub grid: Vec<GridLine>,
    pub preview: Option<PreviewCard>,
    pub confirm_strip: Option<ConfirmStrip>,
    /// Highlighted while the type picker is open or a memo is underway.
    pub add_button_active: bool,
    pub add_menu_open: bool,
    /// The draft being edited while the editor is open.
    pub editor: Option<MemoDraft>,
    pub show_ongoing_memo: bool,
    pub memos: Vec<Memo>,
}

/// Label for the confirm action in the given phase.
#[must_use]
pub fn confirm_label(phase: PostingPhase) -> &'static str {
    match phase {
        PostingPhase::Placed => "Post-it!",
        PostingPhase::PositionFixed => "Unfix",
        _ => "Fix view",
    }
}

/// Snapshot the engine for rendering.
#[must_use]
pub fn build_frame(core: &EngineCore) -> BoardFrame {
    let config = core.config();
    let camera = core.camera();
    let posting = core.posting();
    let phase = posting.phase();
    let (board_width, board_height) = config.board_box();

    let grid = if phase.is_posting_mode() { grid_lines(config) } else { Vec::new() };

    let preview = posting.draft().filter(|_| phase.is_posting_mode()).map(|draft| PreviewCard {
        kind: draft.kind,
        content: draft.content.clone(),
        position: draft.position,
        pasted: phase == PostingPhase::Placed,
    });

    let confirm_strip = phase.is_posting_mode().then(|| ConfirmStrip {
        label: confirm_label(phase),
        key_hint: CONFIRM_KEY_HINT,
        active: !phase.is_view_fixed(),
    });

    let zoom_unlocked = phase.is_idle();

    BoardFrame {
        transform: camera.css_transform(),
        board_width,
        board_height,
        scene_width: config.scene_width(),
        scene_height: config.scene_height(),
        animate: core.animate(),
        dragging: core.input().is_dragging(),
        level: camera.level(),
        max_level: camera.max_level(),
        show_zoom_controls: !phase.is_view_fixed(),
        can_zoom_in: zoom_unlocked && camera.level() < camera.max_level(),
        can_zoom_out: zoom_unlocked && camera.level() > 1,
        grid,
        preview,
        confirm_strip,
        add_button_active: posting.add_menu_open() || !phase.is_idle(),
        add_menu_open: posting.add_menu_open(),
        editor: posting.draft().filter(|_| posting.editor_open()).cloned(),
        show_ongoing_memo: posting.has_content(),
        memos: core.memos().sorted_memos().into_iter().cloned().collect(),
    }
}
