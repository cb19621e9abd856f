//! Card catalog.
//!
//! The `Catalog` holds every item a deck can be dealt from. The standard
//! catalog has 60 items, enough for the largest level (20 pairs) to be
//! dealt without repeats.

use rustc_hash::FxHashSet;

use super::definition::{CardItem, Category};
use crate::core::{GameError, Result};

const STANDARD_ITEMS: &[(&str, &str, Category)] = &[
    ("🐶", "Puppy", Category::Animals),
    ("🐱", "Kitty", Category::Animals),
    ("🦁", "Lion", Category::Animals),
    ("🐘", "Elephant", Category::Animals),
    ("🦒", "Giraffe", Category::Animals),
    ("🐵", "Monkey", Category::Animals),
    ("🐰", "Rabbit", Category::Animals),
    ("🦊", "Fox", Category::Animals),
    ("🐻", "Bear", Category::Animals),
    ("🐼", "Panda", Category::Animals),
    ("🐸", "Frog", Category::Animals),
    ("🐷", "Pig", Category::Animals),
    ("🐙", "Octopus", Category::Animals),
    ("🐢", "Turtle", Category::Animals),
    ("🐝", "Bee", Category::Animals),
    ("🦋", "Butterfly", Category::Animals),
    ("🍎", "Apple", Category::Food),
    ("🍌", "Banana", Category::Food),
    ("🍓", "Strawberry", Category::Food),
    ("🍇", "Grapes", Category::Food),
    ("🍉", "Watermelon", Category::Food),
    ("🍍", "Pineapple", Category::Food),
    ("🍒", "Cherry", Category::Food),
    ("🥑", "Avocado", Category::Food),
    ("🍕", "Pizza", Category::Food),
    ("🍔", "Burger", Category::Food),
    ("🍟", "Fries", Category::Food),
    ("🍦", "Ice Cream", Category::Food),
    ("🍩", "Donut", Category::Food),
    ("🍪", "Cookie", Category::Food),
    ("🍰", "Cake", Category::Food),
    ("🚗", "Car", Category::Vehicles),
    ("🚀", "Rocket", Category::Vehicles),
    ("✈️", "Airplane", Category::Vehicles),
    ("🚂", "Train", Category::Vehicles),
    ("🚁", "Helicopter", Category::Vehicles),
    ("🚢", "Ship", Category::Vehicles),
    ("🚲", "Bicycle", Category::Vehicles),
    ("🎨", "Palette", Category::Art),
    ("🎸", "Guitar", Category::Music),
    ("🎹", "Piano", Category::Music),
    ("🎺", "Trumpet", Category::Music),
    ("⚽", "Soccer Ball", Category::Sports),
    ("🏀", "Basketball", Category::Sports),
    ("🎾", "Tennis", Category::Sports),
    ("🧩", "Puzzle", Category::Games),
    ("🎮", "Video Game", Category::Games),
    ("🧸", "Teddy Bear", Category::Toys),
    ("🎁", "Gift", Category::Celebration),
    ("🎈", "Balloon", Category::Celebration),
    ("🌟", "Star", Category::Nature),
    ("🌈", "Rainbow", Category::Nature),
    ("☀️", "Sun", Category::Nature),
    ("🌙", "Moon", Category::Nature),
    ("☁️", "Cloud", Category::Nature),
    ("❄️", "Snowflake", Category::Nature),
    ("🔥", "Fire", Category::Nature),
    ("🌵", "Cactus", Category::Nature),
    ("🌴", "Palm Tree", Category::Nature),
    ("🌻", "Sunflower", Category::Nature),
];

/// Immutable pool of card items with unique symbols.
///
/// ## Example
///
/// ```
/// use magic_memory::cards::{Catalog, CardItem, Category};
///
/// let catalog = Catalog::new(vec![
///     CardItem::new("🐶", "Puppy", Category::Animals),
///     CardItem::new("🐱", "Kitty", Category::Animals),
/// ]).unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.find_by_symbol("🐱").unwrap().name, "Kitty");
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    items: Vec<CardItem>,
}

impl Catalog {
    /// Build a catalog from custom items.
    ///
    /// # Errors
    /// Returns `GameError::DuplicateSymbol` if two items share a symbol.
    pub fn new(items: Vec<CardItem>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        for item in &items {
            if !seen.insert(item.symbol.as_str()) {
                return Err(GameError::DuplicateSymbol(item.symbol.clone()));
            }
        }
        Ok(Self { items })
    }

    /// The built-in 60-item catalog.
    #[must_use]
    pub fn standard() -> Self {
        let items = STANDARD_ITEMS
            .iter()
            .map(|&(symbol, name, category)| CardItem::new(symbol, name, category))
            .collect();
        Self { items }
    }

    /// Get an item by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardItem> {
        self.items.get(index)
    }

    /// Find the item showing `symbol`.
    #[must_use]
    pub fn find_by_symbol(&self, symbol: &str) -> Option<&CardItem> {
        self.items.iter().find(|item| item.symbol == symbol)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardItem> {
        self.items.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
