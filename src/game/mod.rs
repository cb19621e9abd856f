//! Game state machine.
//!
//! - `GameController`: owns all mutable state; driven by clicks and clock
//! - `GamePhase` / `InteractionState`: screen and click gate
//! - `Cue` / `CueSink`: when to play sounds
//! - `DeferredQueue`: timed resolutions on a virtual clock

pub mod controller;
pub mod cue;
pub mod phase;
pub mod scheduler;

pub use controller::{FlipOutcome, GameController, Rejection, Snapshot};
pub use cue::{Cue, CueSink};
pub use phase::{GamePhase, InteractionState};
pub use scheduler::{Deferred, DeferredQueue, ScheduledTask, TaskId};
