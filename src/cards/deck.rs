//! Deck builder.
//!
//! Dealing a level:
//! 1. Pick `pairs` distinct items from the catalog (without replacement)
//! 2. Take two copies of each
//! 3. Fisher–Yates shuffle the `2 × pairs` cards
//! 4. Number the cards by their final board position
//!
//! The deck is stored in an `im::Vector` so snapshots handed to the
//! renderer share structure with the live board.

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::definition::CardItem;
use super::instance::{Card, CardId};
use super::registry::Catalog;
use crate::core::{GameError, GameRng, Result};
use crate::levels::LevelConfig;

/// The cards on the board for one level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Deal the deck for `level`.
    ///
    /// # Errors
    /// Returns `GameError::CatalogTooSmall` if the catalog cannot supply
    /// the level's pair count.
    pub fn deal(level: u32, catalog: &Catalog, rng: &mut GameRng) -> Result<Self> {
        Self::with_pairs(LevelConfig::for_level(level).pairs, catalog, rng)
    }

    /// Deal a deck of `pairs` pairs.
    ///
    /// # Errors
    /// Returns `GameError::CatalogTooSmall` if `pairs > catalog.len()`.
    pub fn with_pairs(pairs: usize, catalog: &Catalog, rng: &mut GameRng) -> Result<Self> {
        if pairs > catalog.len() {
            return Err(GameError::CatalogTooSmall {
                needed: pairs,
                available: catalog.len(),
            });
        }

        let selected: Vec<&CardItem> = rng
            .sample_indices(catalog.len(), pairs)
            .into_iter()
            .filter_map(|i| catalog.get(i))
            .collect();

        let mut doubled: Vec<&CardItem> = selected.iter().chain(selected.iter()).copied().collect();
        rng.shuffle(&mut doubled);

        let cards: Vector<Card> = doubled
            .into_iter()
            .enumerate()
            .map(|(index, item)| Card::new(CardId::new(index), item))
            .collect();

        debug!(pairs, cards = cards.len(), seed = rng.seed(), "dealt deck");

        Ok(Self { cards })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// The cards, in board order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Mark a card as matched. Returns false if the ID is not on the board.
    pub fn mark_matched(&mut self, id: CardId) -> bool {
        match self.cards.get_mut(id.index()) {
            Some(card) => {
                card.is_matched = true;
                true
            }
            None => false,
        }
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Number of pairs already matched.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    /// Whether every card has been matched. False for an empty deck.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.is_matched)
    }

    /// How many cards show each symbol.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.symbol.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Board position of the card pairing with `id`, if any.
    #[must_use]
    pub fn partner_of(&self, id: CardId) -> Option<CardId> {
        let card = self.get(id)?;
        self.cards
            .iter()
            .find(|other| card.pairs_with(other))
            .map(|other| other.id)
    }
}
