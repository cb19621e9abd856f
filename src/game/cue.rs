//! Audio/visual cue events.
//!
//! The controller tells an external sink *when* something audible
//! happens; how it sounds is the sink's business. Calls are
//! fire-and-forget.

use serde::{Deserialize, Serialize};

/// An abstract cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cue {
    /// A card was turned face-up, or a menu button was pressed.
    Flip,
    /// A pair was resolved as matching.
    Match,
    /// A mismatched pair turned face-down.
    Mismatch,
    /// The board was cleared.
    Victory,
    /// Entered the playing screen.
    BgmStart,
    /// Left the playing screen.
    BgmStop,
}

impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Cue::Flip => "flip",
            Cue::Match => "match",
            Cue::Mismatch => "mismatch",
            Cue::Victory => "victory",
            Cue::BgmStart => "bgm-start",
            Cue::BgmStop => "bgm-stop",
        };
        f.write_str(name)
    }
}

/// Receiver of cue events.
pub trait CueSink {
    fn emit(&mut self, cue: Cue);
}

/// Records cues in order.
impl CueSink for Vec<Cue> {
    fn emit(&mut self, cue: Cue) {
        self.push(cue);
    }
}
