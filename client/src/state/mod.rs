//! Client-side state for the board page.

pub mod board;
pub mod sample_memos;
