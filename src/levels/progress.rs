//! Unlock watermark.
//!
//! `Progress` tracks the highest level the player may select. It starts at
//! 1, never decreases, never exceeds [`MAX_LEVEL`], and only advances when
//! the player clears the level sitting exactly on the watermark. Replaying
//! an older level cannot skip ahead.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::config::{FIRST_LEVEL, MAX_LEVEL};
use super::storage::ProgressStore;

/// Storage key for the watermark.
pub const PROGRESS_KEY: &str = "maxUnlockedLevel";

/// What the level-select screen shows for a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelStatus {
    /// Above the watermark; cannot be selected.
    Locked,
    /// The watermark level itself.
    Unlocked,
    /// Below the watermark; already cleared once.
    Cleared,
}

/// Highest unlocked level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    max_unlocked: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            max_unlocked: FIRST_LEVEL,
        }
    }
}

impl Progress {
    /// Fresh progress (level 1 unlocked).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Progress at a given watermark, clamped to `1..=MAX_LEVEL`.
    #[must_use]
    pub fn at(level: u32) -> Self {
        Self {
            max_unlocked: level.clamp(FIRST_LEVEL, MAX_LEVEL),
        }
    }

    /// Parse a stored value.
    ///
    /// Anything that is not a decimal integer in `1..=MAX_LEVEL` restores
    /// as a fresh profile.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<u32>() {
            Ok(level) if (FIRST_LEVEL..=MAX_LEVEL).contains(&level) => Self {
                max_unlocked: level,
            },
            _ => {
                debug!(value, "ignoring unusable stored progress");
                Self::new()
            }
        }
    }

    /// Restore from storage; read failures default to level 1.
    #[must_use]
    pub fn load(store: &impl ProgressStore) -> Self {
        match store.load(PROGRESS_KEY) {
            Ok(Some(value)) => Self::parse(&value),
            Ok(None) => Self::new(),
            Err(e) => {
                warn!(error = %e, "failed to read progress, starting at level 1");
                Self::new()
            }
        }
    }

    /// Persist the watermark. Failures are logged, never returned.
    pub fn store(&self, store: &mut impl ProgressStore) {
        if let Err(e) = store.save(PROGRESS_KEY, &self.max_unlocked.to_string()) {
            warn!(error = %e, level = self.max_unlocked, "failed to save progress");
        }
    }

    /// Highest unlocked level.
    #[must_use]
    pub fn max_unlocked(&self) -> u32 {
        self.max_unlocked
    }

    /// Whether `level` may be selected.
    #[must_use]
    pub fn is_unlocked(&self, level: u32) -> bool {
        (FIRST_LEVEL..=self.max_unlocked).contains(&level)
    }

    /// Record that `level` was cleared.
    ///
    /// Returns true if the watermark advanced.
    pub fn record_clear(&mut self, level: u32) -> bool {
        if level == self.max_unlocked && self.max_unlocked < MAX_LEVEL {
            self.max_unlocked += 1;
            true
        } else {
            false
        }
    }

    /// Level-select status of `level`.
    #[must_use]
    pub fn status(&self, level: u32) -> LevelStatus {
        if level > self.max_unlocked {
            LevelStatus::Locked
        } else if level < self.max_unlocked {
            LevelStatus::Cleared
        } else {
            LevelStatus::Unlocked
        }
    }

    /// Status of every level, 1 through `MAX_LEVEL`.
    #[must_use]
    pub fn statuses(&self) -> Vec<(u32, LevelStatus)> {
        (FIRST_LEVEL..=MAX_LEVEL)
            .map(|level| (level, self.status(level)))
            .collect()
    }
}
