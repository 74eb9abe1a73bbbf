//! Game session module - the round state machine
//!
//! A session owns the dealt deck, the current position, and the score. It moves
//! through three phases:
//!
//! ```text
//! Loading --start(non-empty deck)--> Playing --last card marked--> GameOver
//!    ^                                  |  ^                           |
//!    |                                  +--+ mark (not last card)      |
//!    +--start(empty deck)                  +--------play_again---------+
//! ```
//!
//! Operations called outside their phase are ignored and report `false`; the
//! session never errors. Every change bumps [`GameSession::revision`] so
//! observers can re-render only when something moved.

use tracing::debug;

use crate::catalog::find_category;
use crate::deck::{deal_deck, Deck};
use crate::rng::{CardRng, EntropyRng};
use crate::snapshot::SessionSnapshot;
use crate::types::{Card, GameCommand};

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No deck yet (or the category had no cards).
    Loading,
    /// A card is showing and can be marked.
    Playing,
    /// Every card has been marked.
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Loading => "loading",
            Phase::Playing => "playing",
            Phase::GameOver => "gameOver",
        }
    }
}

/// One live round of charades.
#[derive(Debug, Clone)]
pub struct GameSession<R = EntropyRng> {
    rng: R,
    category_id: Option<String>,
    deck: Deck,
    position: usize,
    score: usize,
    phase: Phase,
    /// Monotonic round id (increments on every deal).
    round: u32,
    /// Monotonic change counter.
    revision: u64,
}

impl GameSession<EntropyRng> {
    /// Create a session that shuffles with an OS-seeded source.
    pub fn with_entropy() -> Self {
        Self::new(EntropyRng::new())
    }
}

impl<R: CardRng> GameSession<R> {
    /// Create an empty session in [`Phase::Loading`].
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            category_id: None,
            deck: Deck::new(),
            position: 0,
            score: 0,
            phase: Phase::Loading,
            round: 0,
            revision: 0,
        }
    }

    /// Deal a deck for `category_id` and start playing.
    ///
    /// Unknown or empty categories leave the session in [`Phase::Loading`]
    /// with an empty deck.
    pub fn start(&mut self, category_id: &str) {
        self.deck = deal_deck(category_id, &mut self.rng);
        self.category_id = Some(category_id.to_string());
        self.position = 0;
        self.score = 0;
        self.round = self.round.wrapping_add(1);
        self.phase = if self.deck.is_empty() {
            Phase::Loading
        } else {
            Phase::Playing
        };
        self.touch();

        debug!(
            category = category_id,
            round = self.round,
            cards = self.deck.len(),
            phase = self.phase.as_str(),
            "session started"
        );
    }

    /// Score the current card and move on.
    pub fn mark_correct(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.score += 1;
        self.advance()
    }

    /// Move on without scoring.
    pub fn mark_skip(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.advance()
    }

    /// Step to the next card, or finish the round after the last one.
    pub fn advance(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        self.position += 1;
        if self.position >= self.deck.len() {
            self.position = self.deck.len();
            self.phase = Phase::GameOver;
            debug!(
                score = self.score,
                cards = self.deck.len(),
                round = self.round,
                "round over"
            );
        }
        self.touch();
        true
    }

    /// Deal a fresh deck from the same category (game over only).
    pub fn play_again(&mut self) -> bool {
        if self.phase != Phase::GameOver {
            return false;
        }
        let Some(category_id) = self.category_id.take() else {
            return false;
        };
        self.start(&category_id);
        true
    }

    /// Apply a queued command.
    ///
    /// [`GameCommand::Exit`] is a navigation concern and never changes the
    /// session.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MarkCorrect => self.mark_correct(),
            GameCommand::MarkSkip => self.mark_skip(),
            GameCommand::PlayAgain => self.play_again(),
            GameCommand::Exit => false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// A category was chosen but had nothing to deal.
    pub fn has_no_cards(&self) -> bool {
        self.category_id.is_some() && self.deck.is_empty()
    }

    pub fn category_id(&self) -> Option<&str> {
        self.category_id.as_deref()
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Card currently showing (only while playing).
    pub fn current_card(&self) -> Option<Card> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.deck.get(self.position).copied()
    }

    /// Score as a rounded percentage of the deck.
    pub fn percent(&self) -> Option<u32> {
        percent(self.score, self.deck.len())
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.phase = self.phase;
        out.category = self.category_id.as_deref().and_then(find_category);
        out.current_card = self.current_card();
        out.position = self.position;
        out.deck_len = self.deck.len();
        out.score = self.score;
        out.no_cards = self.has_no_cards();
        out.round = self.round;
        out.revision = self.revision;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// `round(score / total * 100)`, or `None` for an empty deck.
pub fn percent(score: usize, total: usize) -> Option<u32> {
    if total == 0 {
        return None;
    }
    Some(((score as f64 / total as f64) * 100.0).round() as u32)
}
