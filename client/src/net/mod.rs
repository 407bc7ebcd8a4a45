//! Outbound memo delivery.
//!
//! There is no backend yet; submissions are acknowledged locally.

pub mod submit;
