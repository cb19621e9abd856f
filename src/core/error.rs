//! Error types for the game engine.
//!
//! Card clicks never produce errors; a rejected click is reported through
//! [`FlipOutcome`](crate::game::FlipOutcome). Errors here come from misuse of
//! the navigation API, catalog construction, configuration and storage.

use thiserror::Error;

use crate::game::GamePhase;

/// Top-level error type for all game operations.
#[derive(Error, Debug)]
pub enum GameError {
    /// A navigation action was attempted from a phase that does not offer it.
    #[error("cannot {action} while in {phase} phase")]
    InvalidTransition {
        /// Phase the controller was in.
        phase: GamePhase,
        /// The rejected action.
        action: &'static str,
    },

    /// The requested level has not been unlocked yet.
    #[error("level {level} is locked (highest unlocked: {unlocked})")]
    LevelLocked {
        /// Requested level.
        level: u32,
        /// Current watermark.
        unlocked: u32,
    },

    /// The requested level is outside 1..=100.
    #[error("level {0} does not exist")]
    LevelOutOfRange(u32),

    /// The catalog cannot supply enough distinct items for a level.
    #[error("catalog has {available} items but {needed} pairs were requested")]
    CatalogTooSmall {
        /// Pairs requested.
        needed: usize,
        /// Items in the catalog.
        available: usize,
    },

    /// Two catalog entries share a symbol.
    #[error("duplicate catalog symbol: {0}")]
    DuplicateSymbol(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Progress storage failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, GameError>;
