//! Board engine for the memo whiteboard.
//!
//! This crate holds every piece of board logic that does not need a browser:
//! the pan/zoom camera, the staged "post a memo" flow, grid snapping, the
//! debounced boundary clamp, and a render snapshot. The host (the Leptos
//! client) wires DOM events to [`engine::EngineCore`], runs timers and
//! prompts on its behalf, and draws the [`render::BoardFrame`] it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EngineCore`] and the [`engine::Action`]s it returns |
//! | [`camera`] | Zoom level, offsets, pan bounds and coordinate conversions |
//! | [`posting`] | Compose, place and submit state machine |
//! | [`grid`] | Quarter-card snapping and overlay lines |
//! | [`schedule`] | Generation-counted debounce for the boundary clamp |
//! | [`memo`] | Memo cards and the in-memory store |
//! | [`input`] | Modifier keys, key codes, wheel deltas, drag state |
//! | [`render`] | Per-frame snapshot for the host |
//! | [`config`] | Runtime-tunable [`config::BoardConfig`] |
//! | [`consts`] | Default values for the config |

pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod grid;
pub mod input;
pub mod memo;
pub mod posting;
pub mod render;
pub mod schedule;
