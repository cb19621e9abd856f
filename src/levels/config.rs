//! Level configuration resolver.
//!
//! Difficulty is a pure function of the level number. Each tier fixes the
//! number of pairs dealt and a layout hint for the renderer:
//!
//! | Levels  | Pairs | Columns (compact / wide) |
//! |---------|-------|--------------------------|
//! | 1–5     | 2     | 2 / 2                    |
//! | 6–15    | 4     | 2 / 4                    |
//! | 16–30   | 6     | 3 / 4                    |
//! | 31–50   | 8     | 4 / 4                    |
//! | 51–75   | 12    | 3 / 4                    |
//! | 76–90   | 16    | 4 / 4                    |
//! | 91–100  | 20    | 4 / 5                    |

use serde::{Deserialize, Serialize};

/// Highest level in the game.
pub const MAX_LEVEL: u32 = 100;

/// First level, and the watermark of a fresh profile.
pub const FIRST_LEVEL: u32 = 1;

/// Grid hint for laying out the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Columns on narrow screens.
    pub compact_columns: u8,
    /// Columns on wide screens.
    pub wide_columns: u8,
}

impl Layout {
    #[must_use]
    pub const fn new(compact_columns: u8, wide_columns: u8) -> Self {
        Self {
            compact_columns,
            wide_columns,
        }
    }
}

/// Per-level configuration.
///
/// ```
/// use magic_memory::levels::LevelConfig;
///
/// let config = LevelConfig::for_level(42);
/// assert_eq!(config.pairs, 8);
/// assert_eq!(config.card_count(), 16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub level: u32,
    pub pairs: usize,
    pub layout: Layout,
}

impl LevelConfig {
    /// Resolve the tier for `level`.
    ///
    /// Callers only pass levels in `1..=MAX_LEVEL`; anything below the first
    /// tier gets the first tier, anything above the last gets the last.
    #[must_use]
    pub fn for_level(level: u32) -> Self {
        let (pairs, layout) = match level {
            91.. => (20, Layout::new(4, 5)),
            76..=90 => (16, Layout::new(4, 4)),
            51..=75 => (12, Layout::new(3, 4)),
            31..=50 => (8, Layout::new(4, 4)),
            16..=30 => (6, Layout::new(3, 4)),
            6..=15 => (4, Layout::new(2, 4)),
            _ => (2, Layout::new(2, 2)),
        };

        Self { level, pairs, layout }
    }

    /// Number of cards dealt (always even).
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pairs * 2
    }
}

/// Whether `level` is a playable level number.
#[must_use]
pub fn is_valid_level(level: u32) -> bool {
    (FIRST_LEVEL..=MAX_LEVEL).contains(&level)
}
