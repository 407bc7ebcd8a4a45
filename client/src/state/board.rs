//! Board page UI state: the latest engine frame plus the bits of chrome the
//! engine does not model (editor text, last notice).

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use canvas::posting::SubmitError;
use canvas::render::BoardFrame;

/// Message shown to the user after a submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Posted,
    SubmitFailed(String),
}

impl Notice {
    pub fn submit_failed(err: &SubmitError) -> Self {
        Self::SubmitFailed(err.to_string())
    }

    pub fn message(&self) -> String {
        match self {
            Self::Posted => "Memo posted!".to_owned(),
            Self::SubmitFailed(reason) => format!("Could not post the memo: {reason}. Press space to try again."),
        }
    }
}

/// State for the board page.
#[derive(Clone, Debug)]
pub struct BoardUiState {
    pub frame: BoardFrame,
    /// Text in the memo editor; seeded from the draft each time it opens.
    pub editor_text: String,
    pub last_notice: Option<Notice>,
}

impl BoardUiState {
    pub fn new(frame: BoardFrame) -> Self {
        let editor_text = frame.editor.as_ref().map(|d| d.content.clone()).unwrap_or_default();
        Self { frame, editor_text, last_notice: None }
    }

    /// Replace the frame. Returns whether the editor just opened.
    pub fn apply_frame(&mut self, frame: BoardFrame) -> bool {
        let opened = self.frame.editor.is_none() && frame.editor.is_some();
        if let Some(draft) = frame.editor.as_ref().filter(|_| opened) {
            self.editor_text.clone_from(&draft.content);
        }
        self.frame = frame;
        opened
    }
}
