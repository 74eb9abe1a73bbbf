//! Deck module - shuffling and dealing
//!
//! A round's deck is the category's cards, shuffled with Fisher-Yates and cut
//! to the first [`DECK_SIZE`] cards. The deck lives on the stack.

use arrayvec::ArrayVec;

use crate::catalog::cards_by_category;
use crate::rng::CardRng;
use crate::types::{Card, DECK_SIZE};

/// Cards dealt for one round.
pub type Deck = ArrayVec<Card, DECK_SIZE>;

/// Shuffle a slice in place using Fisher-Yates.
///
/// Iterates `i` from `len - 1` down to `1`, swapping `i` with a uniform
/// `j ∈ [0, i]`.
pub fn shuffle_in_place<T, R: CardRng>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.next_index(i);
        slice.swap(i, j);
    }
}

/// Return a shuffled copy of `cards`. The input is left untouched.
pub fn shuffle_cards<R: CardRng>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffle_in_place(&mut shuffled, rng);
    shuffled
}

/// Deal a deck for `category_id`: shuffle all of its cards and keep the first
/// [`DECK_SIZE`].
///
/// Unknown categories yield an empty deck.
pub fn deal_deck<R: CardRng>(category_id: &str, rng: &mut R) -> Deck {
    deal_from(cards_by_category(category_id), rng)
}

/// Deal a deck from an explicit card list.
///
/// Lists shorter than [`DECK_SIZE`] produce a deck of the same length.
pub fn deal_from<R: CardRng>(cards: &[Card], rng: &mut R) -> Deck {
    let shuffled = shuffle_cards(cards, rng);
    shuffled.into_iter().take(DECK_SIZE).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ANIMALS, ANIMAL_CARDS};
    use crate::rng::SimpleRng;
    use proptest::prelude::*;

    fn sorted_ids(cards: &[Card]) -> Vec<&'static str> {
        let mut ids: Vec<_> = cards.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn shuffle_empty_is_empty() {
        let mut rng = SimpleRng::new(1);
        assert!(shuffle_cards(&[], &mut rng).is_empty());
    }

    #[test]
    fn shuffle_does_not_touch_input() {
        let input = ANIMAL_CARDS.to_vec();
        let mut rng = SimpleRng::new(1);
        let _ = shuffle_cards(&input, &mut rng);
        assert_eq!(input, ANIMAL_CARDS.to_vec());
    }

    #[test]
    fn shuffle_same_seed_same_order() {
        let a = shuffle_cards(&ANIMAL_CARDS, &mut SimpleRng::new(42));
        let b = shuffle_cards(&ANIMAL_CARDS, &mut SimpleRng::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_actually_reorders() {
        let shuffled = shuffle_cards(&ANIMAL_CARDS, &mut SimpleRng::new(42));
        assert_ne!(shuffled, ANIMAL_CARDS.to_vec());
    }

    #[test]
    fn deal_full_category_gives_ten_distinct_cards() {
        let deck = deal_deck(ANIMALS, &mut SimpleRng::new(5));
        assert_eq!(deck.len(), DECK_SIZE);
        assert!(deck.iter().all(|c| c.category_id == ANIMALS));

        let mut ids = sorted_ids(&deck);
        ids.dedup();
        assert_eq!(ids.len(), DECK_SIZE);
    }

    #[test]
    fn deal_unknown_category_is_empty() {
        assert!(deal_deck("nope", &mut SimpleRng::new(5)).is_empty());
    }

    #[test]
    fn deal_short_list_keeps_every_card() {
        let few = &ANIMAL_CARDS[..4];
        let deck = deal_from(few, &mut SimpleRng::new(5));
        assert_eq!(deck.len(), 4);
        assert_eq!(sorted_ids(&deck), sorted_ids(few));
    }

    #[test]
    fn shuffle_in_place_handles_short_slices() {
        let mut rng = SimpleRng::new(9);
        let mut one = [1u8];
        shuffle_in_place(&mut one, &mut rng);
        assert_eq!(one, [1]);

        let mut short: Vec<Card> = ANIMAL_CARDS[..3].to_vec();
        shuffle_in_place(&mut short, &mut rng);
        assert_eq!(sorted_ids(&short), sorted_ids(&ANIMAL_CARDS[..3]));
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(seed in any::<u32>(), len in 0usize..=50) {
            let input = &ANIMAL_CARDS[..len];
            let out = shuffle_cards(input, &mut SimpleRng::new(seed));
            prop_assert_eq!(sorted_ids(&out), sorted_ids(input));
        }

        #[test]
        fn deal_is_a_prefix_of_some_permutation(seed in any::<u32>()) {
            let deck = deal_deck(ANIMALS, &mut SimpleRng::new(seed));
            prop_assert_eq!(deck.len(), DECK_SIZE);
            for card in &deck {
                prop_assert!(ANIMAL_CARDS.contains(card));
            }
        }
    }
}
