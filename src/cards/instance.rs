//! Card instances - per-deck card state.
//!
//! A `Card` is one of the two copies of a [`CardItem`](super::CardItem)
//! dealt onto the board. Its identity is its board position, assigned
//! when the deck is built and stable until the next level starts.

use serde::{Deserialize, Serialize};

use super::definition::{CardItem, Category};

/// Board position of a card; unique within a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub usize);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the board index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A dealt card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Board position.
    pub id: CardId,

    /// Symbol shared with exactly one other card in the deck.
    pub symbol: String,

    /// Item category.
    pub category: Category,

    /// Display name.
    pub name: String,

    /// Set once the pair is resolved as a match; never cleared.
    pub is_matched: bool,
}

impl Card {
    /// Deal a face-down, unmatched copy of `item` at `id`.
    #[must_use]
    pub fn new(id: CardId, item: &CardItem) -> Self {
        Self {
            id,
            symbol: item.symbol.clone(),
            category: item.category,
            name: item.name.clone(),
            is_matched: false,
        }
    }

    /// Whether two cards form a pair.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.symbol == other.symbol
    }
}
