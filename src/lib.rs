//! # magic-memory
//!
//! Game-state engine for a single-player memory-matching card game:
//! flip two cards, keep them if they match, clear the board, unlock the
//! next of 100 levels.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: `GameController` holds every piece of mutable state.
//!    Renderers read snapshots; nothing else writes.
//!
//! 2. **Virtual Time**: Resolution delays are deferred actions on a clock
//!    the caller advances. Tests run instantly and deterministically.
//!
//! 3. **Collaborators at the Edges**: Sound, storage and fun facts sit
//!    behind small traits or clients. Their failures never reach the
//!    player.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Catalog, dealt cards, deck builder
//! - `levels`: Difficulty tiers, unlock watermark, progress storage
//! - `game`: Controller, phases, cues, deferred actions
//! - `facts`: Optional fun-fact client

pub mod core;
pub mod cards;
pub mod levels;
pub mod game;
pub mod facts;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, Result, Timings};

pub use crate::cards::{Card, CardId, CardItem, Catalog, Category, Deck};

pub use crate::levels::{
    LevelConfig, LevelStatus, Progress, ProgressStore, FileStore, MemoryStore, MAX_LEVEL,
};

pub use crate::game::{
    Cue, CueSink, FlipOutcome, GameController, GamePhase, InteractionState, Rejection, Snapshot,
};

pub use crate::facts::{FunFact, FunFactClient};
