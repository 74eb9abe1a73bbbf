//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the card catalog, deck dealing, the tilt gesture
//! recognizer, and the round state machine. It has **no dependencies** on UI,
//! networking, or I/O, making it:
//!
//! - **Deterministic**: With a seeded [`SimpleRng`], the same seed deals the same decks
//! - **Testable**: Every rule is a plain method call
//! - **Portable**: Can run behind any presentation layer (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`catalog`]: Compiled-in categories and word cards
//! - [`deck`]: Fisher-Yates shuffling and dealing of 10-card decks
//! - [`rng`]: Injectable random sources
//! - [`tilt`]: Neutral-zone hysteresis tilt recognizer
//! - [`session`]: `Loading → Playing → GameOver` round state machine
//! - [`snapshot`]: Copyable read-only session view for renderers
//!
//! # Example
//!
//! ```
//! use charades_core::{GameSession, SimpleRng, TiltRecognizer};
//! use charades_types::{AccelSample, GameCommand};
//!
//! let mut session = GameSession::new(SimpleRng::new(12345));
//! session.start("animals");
//!
//! let mut tilt = TiltRecognizer::default();
//! for z in [0.0, 0.9, 0.9, 0.0, -0.9] {
//!     if let Some(event) = tilt.feed(AccelSample::from_z(z)) {
//!         session.apply(GameCommand::from(event));
//!     }
//! }
//!
//! assert_eq!(session.position(), 2);
//! assert_eq!(session.score(), 1);
//! ```

pub mod catalog;
pub mod deck;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod tilt;

pub use charades_types as types;

// Re-export commonly used types for convenience
pub use catalog::{cards_by_category, categories, find_category, ANIMALS};
pub use deck::{deal_deck, deal_from, shuffle_cards, Deck};
pub use rng::{CardRng, DeckRng, EntropyRng, SimpleRng};
pub use session::{GameSession, Phase};
pub use snapshot::SessionSnapshot;
pub use tilt::{TiltConfig, TiltRecognizer};
