//! Optional fun facts about matched items.
//!
//! An external text service is asked for a one-line fact. Failures of any
//! kind degrade to a canned sentence; the game never sees an error.

pub mod client;
pub mod error;
pub mod types;

pub use client::FunFactClient;
pub use error::FactError;
pub use types::FunFact;
