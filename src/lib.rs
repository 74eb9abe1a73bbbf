//! Charades (workspace facade crate).
//!
//! The game logic, input mapping, sensor feed and terminal rendering live in
//! dedicated crates under `crates/`; this package re-exports them as
//! `charades::{core,input,sensor,term,types}` and adds the application layer
//! that wires them together.

pub use charades_core as core;
pub use charades_input as input;
pub use charades_sensor as sensor;
pub use charades_term as term;
pub use charades_types as types;

pub mod app;
pub mod config;

pub use app::{App, GameScreen, Screen, ScreenView};
pub use config::AppConfig;
