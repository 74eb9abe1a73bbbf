use crate::session::Phase;
use crate::types::{Card, Category};

/// Read-only view of a session, handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub category: Option<&'static Category>,
    pub current_card: Option<Card>,
    pub position: usize,
    pub deck_len: usize,
    pub score: usize,
    pub no_cards: bool,
    pub round: u32,
    pub revision: u64,
}

impl SessionSnapshot {
    /// Rounded score percentage, once there is a deck.
    pub fn percent(&self) -> Option<u32> {
        crate::session::percent(self.score, self.deck_len)
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            category: None,
            current_card: None,
            position: 0,
            deck_len: 0,
            score: 0,
            no_cards: false,
            round: 0,
            revision: 0,
        }
    }
}
