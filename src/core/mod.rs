//! Core engine types: RNG, configuration, errors.
//!
//! These are shared by every other module and carry no game rules.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::GameRng;
pub use config::{FactsConfig, GameConfig, Timings};
pub use error::{GameError, Result};
