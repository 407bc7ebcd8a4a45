//! UI components for the board page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `board` hosts the engine and owns all state. Every other component is a
//! leaf that renders props and reports clicks through callbacks.

pub mod add_memo_menu;
pub mod board;
pub mod confirm_strip;
pub mod grid_overlay;
pub mod memo_card;
pub mod memo_edit_dialog;
pub mod zoom_controls;
