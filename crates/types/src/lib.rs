//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (session logic, terminal rendering, sensor feed).
//!
//! # Deck Size
//!
//! Every round deals at most [`DECK_SIZE`] cards (10). Categories with fewer
//! cards produce a shorter deck.
//!
//! # Tilt Orientation Convention
//!
//! The device is held in landscape, screen facing outward, roughly vertical
//! against the player's forehead. In that pose the accelerometer reads `z ≈ 0`.
//!
//! - Top edge tilted **away** from the face: `z` becomes positive → [`TiltEvent::Correct`]
//! - Top edge tilted **toward** the face: `z` becomes negative → [`TiltEvent::Skip`]
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `NEUTRAL_THRESHOLD` | 0.3 | `abs(z)` below this re-arms the recognizer |
//! | `TILT_THRESHOLD` | 0.7 | `abs(z)` above this fires a gesture |
//! | `SENSOR_INTERVAL_MS` | 100 | Accelerometer polling interval |
//!
//! # Examples
//!
//! ```
//! use charades_types::{GameCommand, TiltEvent, DECK_SIZE};
//!
//! let cmd = GameCommand::from_str("markCorrect").unwrap();
//! assert_eq!(cmd, GameCommand::MarkCorrect);
//! assert_eq!(GameCommand::from(TiltEvent::Skip), GameCommand::MarkSkip);
//! assert_eq!(DECK_SIZE, 10);
//! ```

/// Maximum number of cards dealt per round.
pub const DECK_SIZE: usize = 10;

/// `|z|` below this value counts as the neutral (upright) pose.
pub const NEUTRAL_THRESHOLD: f32 = 0.3;

/// `|z|` above this value counts as a deliberate tilt.
pub const TILT_THRESHOLD: f32 = 0.7;

/// Accelerometer polling interval in milliseconds.
pub const SENSOR_INTERVAL_MS: u32 = 100;

/// Fixed UI loop interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// `z` reported by the keyboard tilt simulator while a tilt key is held.
pub const SIMULATED_TILT_Z: f32 = 0.9;

/// Default time a simulated tilt stays held after the last key event.
///
/// Terminals without key-release events only send auto-repeat presses, whose
/// initial delay is usually ~500ms.
pub const DEFAULT_KEY_TILT_HOLD_MS: u32 = 600;

/// A word card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: &'static str,
    pub text: &'static str,
    pub category_id: &'static str,
}

/// A playable category.
///
/// `card_count` is declared alongside the catalog and is only a display hint;
/// it is not recomputed from the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub card_count: u32,
}

/// One accelerometer reading, in g.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccelSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AccelSample {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// A sample with only the `z` axis set.
    pub const fn from_z(z: f32) -> Self {
        Self { x: 0.0, y: 0.0, z }
    }
}

/// Discrete gesture emitted by the tilt recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TiltEvent {
    /// Top edge tilted away from the face.
    Correct,
    /// Top edge tilted toward the face.
    Skip,
}

impl TiltEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            TiltEvent::Correct => "correct",
            TiltEvent::Skip => "skip",
        }
    }
}

/// Commands accepted by the game screen.
///
/// Both gesture events and direct input are turned into commands and pushed
/// through the same queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Count the current card and move on
    MarkCorrect,
    /// Move on without scoring
    MarkSkip,
    /// Deal a fresh deck from the same category (game over only)
    PlayAgain,
    /// Leave the game screen
    Exit,
}

impl GameCommand {
    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use charades_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("markSkip"), Some(GameCommand::MarkSkip));
    /// assert_eq!(GameCommand::from_str("PLAYAGAIN"), Some(GameCommand::PlayAgain));
    /// assert_eq!(GameCommand::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "markcorrect" => Some(GameCommand::MarkCorrect),
            "markskip" => Some(GameCommand::MarkSkip),
            "playagain" => Some(GameCommand::PlayAgain),
            "exit" => Some(GameCommand::Exit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MarkCorrect => "markCorrect",
            GameCommand::MarkSkip => "markSkip",
            GameCommand::PlayAgain => "playAgain",
            GameCommand::Exit => "exit",
        }
    }
}

impl From<TiltEvent> for GameCommand {
    fn from(event: TiltEvent) -> Self {
        match event {
            TiltEvent::Correct => GameCommand::MarkCorrect,
            TiltEvent::Skip => GameCommand::MarkSkip,
        }
    }
}
