//! Card system: catalog items, dealt cards, and the deck builder.
//!
//! ## Key Types
//!
//! - `CardItem`: Static catalog entry (symbol, name, category)
//! - `Catalog`: Pool of items with unique symbols
//! - `CardId`: Board position of a dealt card
//! - `Card`: Dealt card with its matched flag
//! - `Deck`: The shuffled `2 × pairs` cards of one level

pub mod definition;
pub mod deck;
pub mod instance;
pub mod registry;

pub use definition::{CardItem, Category};
pub use deck::Deck;
pub use instance::{Card, CardId};
pub use registry::Catalog;
