//! Local memo submitter: acknowledges every memo and logs it.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use canvas::posting::{MemoDraft, MemoSubmitter, SubmitError};
use uuid::Uuid;

/// Accepts memos in-process until a real endpoint exists. Nothing is kept;
/// each accepted memo is logged with a fresh id.
#[derive(Debug, Default)]
pub struct LocalSubmitter;

impl LocalSubmitter {
    pub fn new() -> Self {
        Self
    }
}

impl MemoSubmitter for LocalSubmitter {
    fn submit(&mut self, draft: &MemoDraft) -> Result<(), SubmitError> {
        // The board discards blank drafts before they can be placed; this
        // guards other callers.
        if draft.content.trim().is_empty() {
            return Err(SubmitError::Rejected("memo is empty".to_owned()));
        }
        log::info!(
            "submit: memo {} ({:?}) at ({}, {})",
            Uuid::new_v4(),
            draft.kind,
            draft.position.x,
            draft.position.y
        );
        Ok(())
    }
}
