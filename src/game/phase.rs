//! Screen phase and board interaction state.

use serde::{Deserialize, Serialize};

/// Which screen the game is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    /// Title screen.
    #[default]
    Start,
    /// Level picker.
    LevelSelect,
    /// A board is being played.
    Playing,
    /// The board was cleared.
    Victory,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Start => "START",
            GamePhase::LevelSelect => "LEVEL_SELECT",
            GamePhase::Playing => "PLAYING",
            GamePhase::Victory => "VICTORY",
        };
        f.write_str(name)
    }
}

/// Gate on card clicks while a flipped pair is being resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteractionState {
    /// Clicks are accepted.
    #[default]
    Idle,
    /// Two equal cards are face-up; waiting to mark them matched.
    ProcessingMatch,
    /// Two different cards are face-up; waiting to turn them back.
    ProcessingMismatch,
}

impl InteractionState {
    #[must_use]
    pub fn is_idle(self) -> bool {
        self == InteractionState::Idle
    }
}
