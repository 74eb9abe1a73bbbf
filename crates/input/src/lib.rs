//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`InputAction`]s and provides a keyboard tilt
//! simulator that produces accelerometer samples for terminals (including
//! terminals without key-release events).

pub mod map;
pub mod tilt;

pub use charades_types as types;

pub use map::{handle_key_event, should_quit, InputAction};
pub use tilt::{KeyTilt, TiltDirection};
