//! Catalog module - the bundled categories and word cards
//!
//! Everything here is compiled in. Lookups never fail: an unknown category id
//! simply has no cards.

use crate::types::{Card, Category};

/// Category id of the bundled animals deck.
pub const ANIMALS: &str = "animals";

/// All playable categories, in display order.
pub static CATEGORIES: [Category; 1] = [Category {
    id: ANIMALS,
    name: "Animals",
    description: "Creatures from around the world",
    card_count: 50,
}];

const fn animal(id: &'static str, text: &'static str) -> Card {
    Card {
        id,
        text,
        category_id: ANIMALS,
    }
}

/// Cards of the `animals` category.
pub static ANIMAL_CARDS: [Card; 50] = [
    animal("1", "Lion"),
    animal("2", "Elephant"),
    animal("3", "Giraffe"),
    animal("4", "Monkey"),
    animal("5", "Penguin"),
    animal("6", "Kangaroo"),
    animal("7", "Bear"),
    animal("8", "Tiger"),
    animal("9", "Zebra"),
    animal("10", "Dolphin"),
    animal("11", "Shark"),
    animal("12", "Eagle"),
    animal("13", "Snake"),
    animal("14", "Crocodile"),
    animal("15", "Flamingo"),
    animal("16", "Gorilla"),
    animal("17", "Cheetah"),
    animal("18", "Hippopotamus"),
    animal("19", "Rhinoceros"),
    animal("20", "Panda"),
    animal("21", "Koala"),
    animal("22", "Sloth"),
    animal("23", "Octopus"),
    animal("24", "Jellyfish"),
    animal("25", "Seahorse"),
    animal("26", "Butterfly"),
    animal("27", "Bee"),
    animal("28", "Ladybug"),
    animal("29", "Spider"),
    animal("30", "Bat"),
    animal("31", "Owl"),
    animal("32", "Parrot"),
    animal("33", "Peacock"),
    animal("34", "Turkey"),
    animal("35", "Ostrich"),
    animal("36", "Camel"),
    animal("37", "Horse"),
    animal("38", "Pig"),
    animal("39", "Sheep"),
    animal("40", "Goat"),
    animal("41", "Cow"),
    animal("42", "Chicken"),
    animal("43", "Duck"),
    animal("44", "Rabbit"),
    animal("45", "Squirrel"),
    animal("46", "Raccoon"),
    animal("47", "Fox"),
    animal("48", "Wolf"),
    animal("49", "Deer"),
    animal("50", "Moose"),
];

/// All categories, in display order.
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

/// Look up a category by id.
pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// All cards of a category, in catalog order.
///
/// Returns an empty slice for unknown ids.
pub fn cards_by_category(id: &str) -> &'static [Card] {
    match id {
        ANIMALS => &ANIMAL_CARDS,
        _ => &[],
    }
}
