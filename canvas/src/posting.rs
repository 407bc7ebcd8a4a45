//! Posting flow: the staged "add a memo" workflow.
//!
//! ```text
//! Idle ──choose kind──▶ Composing ──content──▶ PositionSelecting
//!                                                  ▲        │ confirm
//!                                          confirm │        ▼
//!                                               PositionFixed ◀──click preview──▶ Placed
//!                                                                       │ confirm + accept
//!                                                                       ▼
//!                                                               submit ─▶ Idle
//! ```
//!
//! `PostingFlow` only tracks the flow itself. View side effects (resetting
//! the camera, locking zoom) are applied by [`crate::engine::EngineCore`]
//! based on the phase reported here.

#[cfg(test)]
#[path = "posting_test.rs"]
mod posting_test;

use crate::camera::Point;
use crate::memo::MemoKind;

/// Where the user is in the compose-and-place cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostingPhase {
    /// No memo in progress.
    #[default]
    Idle,
    /// A kind was chosen; the editor is collecting content.
    Composing,
    /// Content exists; the preview follows the pointer.
    PositionSelecting,
    /// The view is frozen and the preview stays where it was.
    PositionFixed,
    /// The preview is pasted at its final position.
    Placed,
}

impl PostingPhase {
    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }

    /// Posting mode: a draft with content exists and its preview is shown.
    #[must_use]
    pub fn is_posting_mode(self) -> bool {
        matches!(self, Self::PositionSelecting | Self::PositionFixed | Self::Placed)
    }

    /// Pan and zoom input is ignored.
    #[must_use]
    pub fn is_view_fixed(self) -> bool {
        matches!(self, Self::PositionFixed | Self::Placed)
    }
}

/// The memo being composed.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoDraft {
    pub kind: MemoKind,
    pub content: String,
    /// Grid-snapped top-left corner in scene coordinates.
    pub position: Point,
}

/// A question the host must put to the user before the flow can continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Throw away the memo in progress.
    DiscardDraft,
    /// Post the placed memo.
    Submit,
}

impl Prompt {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::DiscardDraft => "The memo you are writing will be discarded.",
            Self::Submit => "Post this memo?",
        }
    }
}

/// Failure reported by a [`MemoSubmitter`].
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The receiving side refused the memo.
    #[error("memo rejected: {0}")]
    Rejected(String),

    /// Nothing is available to receive the memo right now.
    #[error("memo submission unavailable")]
    Unavailable,
}

/// Receives finished memos. Implemented by the host.
pub trait MemoSubmitter {
    /// Hand over a placed memo.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] when the memo could not be accepted; the flow
    /// stays in [`PostingPhase::Placed`] so the user can retry.
    fn submit(&mut self, draft: &MemoDraft) -> Result<(), SubmitError>;
}

/// Result of answering a [`Prompt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// No prompt was pending, or the user declined.
    Unchanged,
    /// The draft was thrown away.
    Discarded,
    /// The submitter accepted the memo; the flow is back to Idle.
    Posted,
    /// The submitter failed; the flow stays in Placed.
    Failed(SubmitError),
}

/// Result of the confirm action (space key or confirm button).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Not in posting mode.
    Ignored,
    /// Moved between PositionSelecting and PositionFixed.
    Toggled(PostingPhase),
    /// Placed: ask before submitting.
    Ask(Prompt),
}

/// State machine for composing and placing one memo.
#[derive(Debug, Clone, Default)]
pub struct PostingFlow {
    phase: PostingPhase,
    draft: Option<MemoDraft>,
    add_menu_open: bool,
    editor_open: bool,
    pending_prompt: Option<Prompt>,
    last_candidate: Option<Point>,
}

impl PostingFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> PostingPhase {
        self.phase
    }

    #[must_use]
    pub fn draft(&self) -> Option<&MemoDraft> {
        self.draft.as_ref()
    }

    #[must_use]
    pub fn add_menu_open(&self) -> bool {
        self.add_menu_open
    }

    #[must_use]
    pub fn editor_open(&self) -> bool {
        self.editor_open
    }

    #[cfg(test)]
    #[must_use]
    pub fn pending_prompt(&self) -> Option<Prompt> {
        self.pending_prompt
    }

    /// Whether the draft has content (drives the ongoing-memo button).
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.draft.as_ref().is_some_and(|d| !d.content.trim().is_empty())
    }

    // --- Add menu ---

    /// Add-button press. In Idle this flips the type picker; otherwise the
    /// user is asked whether to discard the memo in progress.
    pub fn press_add_button(&mut self) -> Option<Prompt> {
        if self.phase.is_idle() {
            self.add_menu_open = !self.add_menu_open;
            None
        } else {
            Some(self.ask(Prompt::DiscardDraft))
        }
    }

    pub fn close_add_menu(&mut self) {
        self.add_menu_open = false;
    }

    /// Pick a memo kind from the add-menu. Starts composing; returns `false`
    /// outside Idle.
    pub fn choose_kind(&mut self, kind: MemoKind) -> bool {
        if !self.phase.is_idle() {
            return false;
        }
        let position = self.last_candidate.unwrap_or(Point::new(0.0, 0.0));
        self.draft = Some(MemoDraft { kind, content: String::new(), position });
        self.add_menu_open = false;
        self.editor_open = true;
        self.set_phase(PostingPhase::Composing);
        true
    }

    // --- Editor ---

    /// Content committed from the editor.
    ///
    /// Blank content (empty or whitespace only) discards the draft. Anything
    /// else closes the editor and, coming from Composing, enters posting
    /// mode. Returns the new phase.
    pub fn commit_content(&mut self, content: String) -> PostingPhase {
        let Some(draft) = self.draft.as_mut() else {
            return self.phase;
        };
        if content.trim().is_empty() {
            self.discard();
            return self.phase;
        }
        draft.content = content;
        self.editor_open = false;
        if self.phase == PostingPhase::Composing {
            if let Some(candidate) = self.last_candidate {
                draft.position = candidate;
            }
            self.set_phase(PostingPhase::PositionSelecting);
        }
        self.phase
    }

    /// Re-open the editor on a draft that already has content.
    pub fn reopen_editor(&mut self) -> bool {
        if !self.has_content() {
            return false;
        }
        self.add_menu_open = false;
        self.editor_open = true;
        true
    }

    /// Hide the editor. A draft that never got content is dropped.
    pub fn close_editor(&mut self) {
        self.editor_open = false;
        if self.draft.is_some() && !self.has_content() {
            self.discard();
        }
    }

    /// Explicit cancel. Asks first when there is content to lose.
    pub fn cancel(&mut self) -> Option<Prompt> {
        if self.has_content() {
            return Some(self.ask(Prompt::DiscardDraft));
        }
        if self.draft.is_some() {
            self.discard();
        }
        None
    }

    // --- Placement ---

    /// Pointer moved over the scene. Updates the preview position while
    /// selecting; returns whether it moved.
    pub fn track_pointer(&mut self, candidate: Point) -> bool {
        if self.phase == PostingPhase::Idle || self.phase == PostingPhase::Composing {
            self.last_candidate = Some(candidate);
            return false;
        }
        if self.phase != PostingPhase::PositionSelecting {
            return false;
        }
        self.last_candidate = Some(candidate);
        match self.draft.as_mut() {
            Some(draft) if draft.position != candidate => {
                draft.position = candidate;
                true
            }
            _ => false,
        }
    }

    /// Confirm action: fix or unfix the view, or ask to submit once placed.
    pub fn confirm(&mut self) -> ConfirmOutcome {
        match self.phase {
            PostingPhase::PositionSelecting => {
                self.set_phase(PostingPhase::PositionFixed);
                ConfirmOutcome::Toggled(self.phase)
            }
            PostingPhase::PositionFixed => {
                self.set_phase(PostingPhase::PositionSelecting);
                ConfirmOutcome::Toggled(self.phase)
            }
            PostingPhase::Placed => ConfirmOutcome::Ask(self.ask(Prompt::Submit)),
            PostingPhase::Idle | PostingPhase::Composing => ConfirmOutcome::Ignored,
        }
    }

    /// Click on the preview card: paste or un-paste it. Only meaningful once
    /// the view is fixed.
    pub fn click_preview(&mut self) -> bool {
        match self.phase {
            PostingPhase::PositionFixed => {
                self.set_phase(PostingPhase::Placed);
                true
            }
            PostingPhase::Placed => {
                self.set_phase(PostingPhase::PositionFixed);
                true
            }
            _ => false,
        }
    }

    // --- Prompts ---

    /// Apply the user's answer to the pending prompt.
    pub fn resolve_prompt(&mut self, accepted: bool, submitter: &mut dyn MemoSubmitter) -> PromptOutcome {
        let Some(prompt) = self.pending_prompt.take() else {
            return PromptOutcome::Unchanged;
        };
        if !accepted {
            return PromptOutcome::Unchanged;
        }
        match prompt {
            Prompt::DiscardDraft => {
                self.discard();
                PromptOutcome::Discarded
            }
            Prompt::Submit => {
                if self.phase != PostingPhase::Placed {
                    return PromptOutcome::Unchanged;
                }
                let Some(draft) = self.draft.as_ref() else {
                    return PromptOutcome::Unchanged;
                };
                match submitter.submit(draft) {
                    Ok(()) => {
                        self.discard();
                        PromptOutcome::Posted
                    }
                    Err(err) => {
                        log::warn!("posting: submission failed: {err}");
                        PromptOutcome::Failed(err)
                    }
                }
            }
        }
    }

    fn ask(&mut self, prompt: Prompt) -> Prompt {
        self.pending_prompt = Some(prompt);
        prompt
    }

    fn discard(&mut self) {
        self.draft = None;
        self.editor_open = false;
        self.add_menu_open = false;
        self.set_phase(PostingPhase::Idle);
    }

    fn set_phase(&mut self, phase: PostingPhase) {
        if self.phase != phase {
            log::debug!("posting: {:?} -> {:?}", self.phase, phase);
        }
        self.phase = phase;
    }
}
