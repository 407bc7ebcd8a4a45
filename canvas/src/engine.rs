use crate::camera::{Camera, PanBounds, Point};
use crate::config::BoardConfig;
use crate::grid::candidate_position;
use crate::input::{InputState, Key, Modifiers, WheelDelta};
use crate::memo::{Memo, MemoKind, MemoStore};
use crate::posting::{ConfirmOutcome, MemoSubmitter, PostingFlow, PostingPhase, Prompt, PromptOutcome, SubmitError};
use crate::render::{self, BoardFrame};
use crate::schedule::ClampSchedule;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Something visible changed; re-read [`EngineCore::frame`].
    RenderNeeded,
    /// Start (or restart) the boundary-clamp timer. When it expires, call
    /// [`EngineCore::fire_clamp`] with `generation`.
    ScheduleClamp { generation: u64, delay_ms: u32 },
    /// Move keyboard focus back to the board element.
    FocusBoard,
    /// Ask the user a yes/no question, then call [`EngineCore::resolve_prompt`].
    Prompt(Prompt),
    /// The submitter accepted the memo.
    MemoPosted,
    /// The submitter failed; the memo is still placed and can be retried.
    SubmitFailed(SubmitError),
}

/// Core engine state: all board logic that doesn't depend on the DOM.
///
/// The host forwards input events here and acts on the returned
/// [`Action`]s; rendering reads a [`BoardFrame`] snapshot.
pub struct EngineCore {
    config: BoardConfig,
    camera: Camera,
    input: InputState,
    posting: PostingFlow,
    memos: MemoStore,
    clamp: ClampSchedule,
    viewport_width: f64,
    viewport_height: f64,
    animate: bool,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self {
            camera: Camera::new(&config),
            input: InputState::default(),
            posting: PostingFlow::new(),
            memos: MemoStore::new(),
            clamp: ClampSchedule::new(config.clamp_debounce_ms),
            viewport_width: 0.0,
            viewport_height: 0.0,
            animate: false,
            config,
        }
    }

    // --- Data inputs ---

    /// Replace the displayed memos.
    pub fn load_memos(&mut self, memos: Vec<Memo>) -> Vec<Action> {
        self.memos.load_snapshot(memos);
        vec![Action::RenderNeeded]
    }

    /// Update viewport dimensions (CSS pixels). The pan range depends on
    /// them, so a clamp is scheduled.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.viewport_width = width;
        self.viewport_height = height;
        let mut actions = Vec::new();
        self.schedule_clamp(&mut actions);
        actions
    }

    // --- Zoom ---

    pub fn zoom_in(&mut self) -> Vec<Action> {
        if !self.posting.phase().is_idle() || !self.camera.zoom_in() {
            return Vec::new();
        }
        self.view_changed(true)
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        if !self.posting.phase().is_idle() || !self.camera.zoom_out() {
            return Vec::new();
        }
        self.view_changed(true)
    }

    /// Back to level 1 and the default offset; any drag is dropped.
    pub fn reset_view(&mut self) -> Vec<Action> {
        self.reset_camera(true)
    }

    // --- Input events ---

    /// Wheel zoom. Ctrl+wheel belongs to the browser's page zoom.
    pub fn on_wheel(&mut self, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        if modifiers.ctrl {
            return Vec::new();
        }
        if delta.dy < 0.0 { self.zoom_in() } else { self.zoom_out() }
    }

    pub fn on_pointer_down(&mut self, screen: Point) -> Vec<Action> {
        if self.posting.phase().is_view_fixed() {
            return Vec::new();
        }
        self.clamp.cancel();
        self.input = InputState::Panning { last_screen: screen };
        self.animate = false;
        vec![Action::RenderNeeded]
    }

    /// Pointer moved over the board: pan while dragging, and feed the snapped
    /// candidate position to the posting flow.
    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        let mut actions = Vec::new();

        if let InputState::Panning { last_screen } = self.input {
            self.camera.drag_by(screen.x - last_screen.x, screen.y - last_screen.y);
            self.input = InputState::Panning { last_screen: screen };
            actions.push(Action::RenderNeeded);
        }

        let scene = self.camera.screen_to_scene(screen, &self.config);
        let candidate = candidate_position(scene, &self.config);
        if self.posting.track_pointer(candidate) && actions.is_empty() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Pointer released: ends the drag, closes the add-menu, and schedules a
    /// clamp if the board was being dragged.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        let was_dragging = self.input.is_dragging();
        self.input = InputState::Idle;

        if self.posting.add_menu_open() {
            self.posting.close_add_menu();
            actions.push(Action::RenderNeeded);
        }
        if was_dragging {
            self.schedule_clamp(&mut actions);
        }
        actions
    }

    /// Keyboard: space confirms in posting mode; arrows nudge the view while
    /// Idle with no modifier held. An empty result means the key was not
    /// handled.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if key.is_space() {
            if self.posting.phase().is_posting_mode() {
                return self.confirm();
            }
            return Vec::new();
        }

        let Some(arrow) = key.arrow() else {
            return Vec::new();
        };
        if modifiers.any() || !self.posting.phase().is_idle() {
            return Vec::new();
        }
        let (ux, uy) = arrow.unit();
        self.camera.nudge(ux * self.config.pan_step, uy * self.config.pan_step);
        self.animate = true;
        let mut actions = vec![Action::RenderNeeded];
        self.schedule_clamp(&mut actions);
        actions
    }

    // --- Posting flow ---

    /// Add button: toggles the type picker in Idle, otherwise asks to
    /// discard the memo in progress.
    pub fn press_add_button(&mut self) -> Vec<Action> {
        match self.posting.press_add_button() {
            Some(prompt) => vec![Action::Prompt(prompt)],
            None => vec![Action::RenderNeeded],
        }
    }

    /// Pick a memo type from the add-menu. Starts composing and resets the
    /// view; focus stays with the editor the host opens.
    pub fn choose_kind(&mut self, kind: MemoKind) -> Vec<Action> {
        if !self.posting.choose_kind(kind) {
            return Vec::new();
        }
        self.reset_camera(false)
    }

    /// Content from the editor. Entering posting mode resets the view again so
    /// the whole scene is visible for placement.
    pub fn commit_content(&mut self, content: String) -> Vec<Action> {
        let before = self.posting.phase();
        let after = self.posting.commit_content(content);
        if before == PostingPhase::Composing && after == PostingPhase::PositionSelecting {
            return self.reset_camera(true);
        }
        vec![Action::RenderNeeded]
    }

    pub fn reopen_editor(&mut self) -> Vec<Action> {
        if self.posting.reopen_editor() { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    pub fn close_editor(&mut self) -> Vec<Action> {
        self.posting.close_editor();
        vec![Action::RenderNeeded]
    }

    /// Explicit cancel of the memo in progress.
    pub fn cancel_posting(&mut self) -> Vec<Action> {
        match self.posting.cancel() {
            Some(prompt) => vec![Action::Prompt(prompt)],
            None => vec![Action::RenderNeeded],
        }
    }

    /// Confirm button or space key.
    pub fn confirm(&mut self) -> Vec<Action> {
        match self.posting.confirm() {
            ConfirmOutcome::Ignored => Vec::new(),
            ConfirmOutcome::Toggled(_) => {
                self.input = InputState::Idle;
                vec![Action::RenderNeeded]
            }
            ConfirmOutcome::Ask(prompt) => vec![Action::Prompt(prompt)],
        }
    }

    /// Click on the preview card.
    pub fn click_preview(&mut self) -> Vec<Action> {
        if self.posting.click_preview() { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    /// The user's answer to the last [`Action::Prompt`].
    pub fn resolve_prompt(&mut self, accepted: bool, submitter: &mut dyn MemoSubmitter) -> Vec<Action> {
        match self.posting.resolve_prompt(accepted, submitter) {
            PromptOutcome::Unchanged => Vec::new(),
            PromptOutcome::Discarded => vec![Action::RenderNeeded],
            PromptOutcome::Posted => vec![Action::MemoPosted, Action::RenderNeeded],
            PromptOutcome::Failed(err) => vec![Action::SubmitFailed(err), Action::RenderNeeded],
        }
    }

    // --- Boundary clamp ---

    /// Timer callback for an [`Action::ScheduleClamp`]. Stale generations
    /// and timers that land mid-drag are ignored.
    pub fn fire_clamp(&mut self, generation: u64) -> Vec<Action> {
        if !self.clamp.take(generation) || self.input.is_dragging() {
            return Vec::new();
        }
        if self.viewport_width <= 0.0 || self.viewport_height <= 0.0 {
            return Vec::new();
        }
        let bounds = self.pan_bounds();
        if !bounds.is_satisfiable() {
            log::trace!("clamp: viewport wider than the scene, pinning to the negative bound");
        }
        let (before_x, before_y) = (self.camera.offset_x, self.camera.offset_y);
        if !self.camera.clamp_to(&bounds) {
            return Vec::new();
        }
        log::trace!(
            "clamp: ({before_x:.1}, {before_y:.1}) -> ({:.1}, {:.1})",
            self.camera.offset_x,
            self.camera.offset_y
        );
        self.animate = true;
        vec![Action::RenderNeeded]
    }

    /// Drop any pending clamp. Returns whether one was pending.
    pub fn cancel_clamp(&mut self) -> bool {
        self.clamp.cancel()
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn posting(&self) -> &PostingFlow {
        &self.posting
    }

    #[must_use]
    pub fn phase(&self) -> PostingPhase {
        self.posting.phase()
    }

    #[must_use]
    pub fn memos(&self) -> &MemoStore {
        &self.memos
    }

    #[cfg(test)]
    #[must_use]
    pub fn viewport(&self) -> (f64, f64) {
        (self.viewport_width, self.viewport_height)
    }

    /// Whether the next transform change should be animated.
    #[must_use]
    pub fn animate(&self) -> bool {
        self.animate
    }

    /// Generation of the clamp currently waiting on a timer.
    #[cfg(test)]
    #[must_use]
    pub fn pending_clamp(&self) -> Option<u64> {
        self.clamp.pending()
    }

    /// Legal offset range at the current scale and viewport.
    #[must_use]
    pub fn pan_bounds(&self) -> PanBounds {
        PanBounds::compute(&self.config, self.camera.scale(), self.viewport_width, self.viewport_height)
    }

    /// Render snapshot of the whole board.
    #[must_use]
    pub fn frame(&self) -> BoardFrame {
        render::build_frame(self)
    }

    // --- Internals ---

    fn view_changed(&mut self, focus: bool) -> Vec<Action> {
        self.animate = true;
        let mut actions = vec![Action::RenderNeeded];
        if focus {
            actions.push(Action::FocusBoard);
        }
        self.schedule_clamp(&mut actions);
        actions
    }

    fn reset_camera(&mut self, focus: bool) -> Vec<Action> {
        self.camera.reset(&self.config);
        self.input = InputState::Idle;
        self.view_changed(focus)
    }

    fn schedule_clamp(&mut self, actions: &mut Vec<Action>) {
        if self.input.is_dragging() {
            return;
        }
        let ticket = self.clamp.arm();
        actions.push(Action::ScheduleClamp { generation: ticket.generation, delay_ms: ticket.delay_ms });
    }
}
