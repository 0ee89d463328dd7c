//! Platform abstraction layer
//!
//! The window and its event loop live outside the game core. This module
//! defines the narrow surface the core consumes from them:
//! - Discrete input events (close, key press, key release)
//! - Held-key state with semantic control queries

pub mod input;

pub use input::{EventSource, InputEvent, InputState, Key, ScriptedEvents};
