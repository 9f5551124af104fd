//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::SceneAction`] and detects
//! quit keys. Independent of any UI framework.

pub mod map;

pub use synthwave_types as types;

pub use map::{handle_key_event, should_quit};
