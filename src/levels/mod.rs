//! Levels: difficulty tiers, the unlock watermark, and its storage.
//!
//! - `LevelConfig`: pairs and layout hint per level (pure)
//! - `Progress`: highest unlocked level, monotonic, capped at 100
//! - `ProgressStore`: where the watermark is persisted

pub mod config;
pub mod progress;
pub mod storage;

pub use config::{is_valid_level, Layout, LevelConfig, FIRST_LEVEL, MAX_LEVEL};
pub use progress::{LevelStatus, Progress, PROGRESS_KEY};
pub use storage::{FileStore, MemoryStore, ProgressStore};
