//! Memo model: the cards laid out on the board and the in-memory store that
//! owns them.
//!
//! Memos arrive from the host as JSON (sample data today, a backend later).
//! The engine only reads them to place cards; creation and storage belong to
//! whoever feeds [`MemoStore::load_snapshot`].

#[cfg(test)]
#[path = "memo_test.rs"]
mod memo_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a memo.
pub type MemoId = Uuid;

/// Memo card variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoKind {
    /// Text memo with an optional title and multi-paragraph body.
    LongForm,
    /// One-liner memo.
    ShortForm,
}

impl MemoKind {
    /// Label shown in the add-menu.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LongForm => "Text memo",
            Self::ShortForm => "Short text memo",
        }
    }
}

/// A memo card as placed on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memo {
    pub id: MemoId,
    /// Left edge in scene coordinates.
    pub position_x: f64,
    /// Top edge in scene coordinates.
    pub position_y: f64,
    pub kind: MemoKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    /// Display name of the author.
    pub author: String,
    /// Creation timestamp as an RFC 3339 string.
    pub created_at: String,
    /// Voter ids. Carried through untouched.
    #[serde(default)]
    pub votes: Vec<Uuid>,
    /// Ids of memos this memo refers to. Carried through untouched.
    #[serde(default)]
    pub referenced_memos: Vec<MemoId>,
}

/// In-memory store of memos.
pub struct MemoStore {
    memos: HashMap<MemoId, Memo>,
}

impl MemoStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { memos: HashMap::new() }
    }

    /// Replace all memos with a full snapshot.
    pub fn load_snapshot(&mut self, memos: Vec<Memo>) {
        self.memos.clear();
        for memo in memos {
            self.memos.insert(memo.id, memo);
        }
    }

    /// All memos ordered by `(created_at, id)` so later cards draw on top.
    #[must_use]
    pub fn sorted_memos(&self) -> Vec<&Memo> {
        let mut memos: Vec<&Memo> = self.memos.values().collect();
        memos.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        memos
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.memos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.memos.is_empty()
    }
}

impl Default for MemoStore {
    fn default() -> Self {
        Self::new()
    }
}
