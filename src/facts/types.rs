//! Fun-fact data.

use serde::{Deserialize, Serialize};

/// A one-sentence fact about a card item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunFact {
    /// The fact, worded for a young child.
    pub text: String,
    /// The item the fact is about.
    pub topic: String,
}

impl FunFact {
    /// The canned fact used whenever the service cannot supply one.
    #[must_use]
    pub fn fallback(item_name: &str) -> Self {
        Self {
            text: format!("You found a {item_name}! Great job!"),
            topic: item_name.to_string(),
        }
    }
}
