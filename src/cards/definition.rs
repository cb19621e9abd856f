//! Card item definitions - static catalog data.
//!
//! A `CardItem` is one picture a pair of cards can show: the symbol
//! (an emoji), the name read aloud to the player, and a category.
//!
//! Per-deck data (position, matched flag) lives in
//! [`Card`](super::instance::Card).

use serde::{Deserialize, Serialize};

/// Grouping used for catalog browsing and fun-fact prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Animals,
    Food,
    Vehicles,
    Art,
    Music,
    Sports,
    Games,
    Toys,
    Celebration,
    Nature,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Animals => "Animals",
            Category::Food => "Food",
            Category::Vehicles => "Vehicles",
            Category::Art => "Art",
            Category::Music => "Music",
            Category::Sports => "Sports",
            Category::Games => "Games",
            Category::Toys => "Toys",
            Category::Celebration => "Celebration",
            Category::Nature => "Nature",
        };
        f.write_str(name)
    }
}

/// Static catalog entry.
///
/// ## Example
///
/// ```
/// use magic_memory::cards::{CardItem, Category};
///
/// let fox = CardItem::new("🦊", "Fox", Category::Animals);
/// assert_eq!(fox.name, "Fox");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardItem {
    /// Symbol shown on the card face. Unique within a catalog.
    pub symbol: String,

    /// Display name.
    pub name: String,

    /// Item category.
    pub category: Category,
}

impl CardItem {
    /// Create a new card item.
    #[must_use]
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_item_new() {
        let item = CardItem::new("🍎", "Apple", Category::Food);

        assert_eq!(item.symbol, "🍎");
        assert_eq!(item.name, "Apple");
        assert_eq!(item.category, Category::Food);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Celebration.to_string(), "Celebration");
        assert_eq!(format!("{}", Category::Nature), "Nature");
    }

    #[test]
    fn test_card_item_serialization() {
        let item = CardItem::new("🚀", "Rocket", Category::Vehicles);

        let json = serde_json::to_string(&item).unwrap();
        let deserialized: CardItem = serde_json::from_str(&json).unwrap();

        assert_eq!(item, deserialized);
    }
}
