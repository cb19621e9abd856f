//! The game controller.
//!
//! `GameController` owns every piece of mutable game state: the screen
//! phase, the dealt deck, the pending pair, the move counter, and the
//! unlock watermark. It is driven by two kinds of input:
//!
//! - user actions (`click`, `start`, `select_level`, `quit`, ...)
//! - clock advances (`advance`, `settle`), which run deferred resolutions
//!
//! Both happen on the caller's thread; nothing here blocks or spawns.
//!
//! ## Flip flow
//!
//! ```text
//! IDLE --2nd flip, equal-->   PROCESSING_MATCH    --match delay-->    IDLE
//! IDLE --2nd flip, unequal--> PROCESSING_MISMATCH --mismatch delay--> IDLE
//! ```
//!
//! Clearing the board schedules the victory announcement after a further
//! delay.
//!
//! ## Example
//!
//! ```
//! use magic_memory::core::GameConfig;
//! use magic_memory::game::{Cue, GameController, GamePhase};
//! use magic_memory::levels::MemoryStore;
//!
//! let mut game = GameController::new(GameConfig::new().with_seed(1), MemoryStore::new(), Vec::<Cue>::new());
//! game.start().unwrap();
//! game.select_level(1).unwrap();
//! assert_eq!(game.phase(), GamePhase::Playing);
//! assert_eq!(game.deck().len(), 4);
//! ```

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::cue::{Cue, CueSink};
use super::phase::{GamePhase, InteractionState};
use super::scheduler::{Deferred, DeferredQueue};
use crate::cards::{Card, CardId, Catalog, Deck};
use crate::core::{GameConfig, GameError, GameRng, Result};
use crate::levels::{
    is_valid_level, Layout, LevelConfig, LevelStatus, Progress, ProgressStore, FIRST_LEVEL, MAX_LEVEL,
};

/// Why a click was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// No board is in play.
    NotPlaying,
    /// A pair is being resolved.
    Resolving,
    /// Two cards are already face-up.
    PairPending,
    /// The index is not on the board.
    NoSuchCard,
    /// The card is already matched.
    AlreadyMatched,
    /// The card is already face-up in the pending pair.
    AlreadyFaceUp,
}

/// Result of a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// Ignored; no state changed.
    Rejected(Rejection),
    /// First card of a pair turned face-up.
    Flipped,
    /// Second card turned face-up and the pair matches.
    PairMatched,
    /// Second card turned face-up and the pair differs.
    PairMismatched,
}

impl FlipOutcome {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        !matches!(self, FlipOutcome::Rejected(_))
    }
}

/// Read-only copy of the board for a renderer.
///
/// Cloning is cheap: the card list shares structure with the live deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub interaction: InteractionState,
    pub level: u32,
    pub layout: Layout,
    pub moves: u32,
    pub max_unlocked_level: u32,
    pub cards: Vector<Card>,
    pub pending: SmallVec<[CardId; 2]>,
}

impl Snapshot {
    /// Whether a card shows its face (matched or pending).
    #[must_use]
    pub fn is_face_up(&self, id: CardId) -> bool {
        self.pending.contains(&id)
            || self.cards.get(id.index()).is_some_and(|c| c.is_matched)
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }
}

/// Owner of all game state.
pub struct GameController<S: ProgressStore, C: CueSink> {
    config: GameConfig,
    catalog: Catalog,
    rng: GameRng,
    store: S,
    cues: C,
    progress: Progress,

    phase: GamePhase,
    interaction: InteractionState,
    current_level: u32,
    deck: Deck,
    pending: SmallVec<[CardId; 2]>,
    moves: u32,
    last_match: Option<CardId>,

    clock: Duration,
    queue: DeferredQueue,
    /// Incremented whenever a board is dealt or abandoned.
    session: u64,
}

impl<S: ProgressStore, C: CueSink> GameController<S, C> {
    /// Create a controller with the standard catalog.
    ///
    /// The watermark is restored from `store`.
    pub fn new(config: GameConfig, store: S, cues: C) -> Self {
        Self::with_catalog(config, Catalog::standard(), store, cues)
    }

    /// Create a controller dealing from a custom catalog.
    pub fn with_catalog(config: GameConfig, catalog: Catalog, store: S, cues: C) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let progress = Progress::load(&store);
        info!(max_unlocked = progress.max_unlocked(), seed = rng.seed(), "game ready");

        Self {
            config,
            catalog,
            rng,
            store,
            cues,
            progress,
            phase: GamePhase::Start,
            interaction: InteractionState::Idle,
            current_level: FIRST_LEVEL,
            deck: Deck::default(),
            pending: SmallVec::new(),
            moves: 0,
            last_match: None,
            clock: Duration::ZERO,
            queue: DeferredQueue::new(),
            session: 0,
        }
    }

    // === Navigation ===

    /// Title screen → level select.
    pub fn start(&mut self) -> Result<()> {
        self.require(GamePhase::Start, "start")?;
        self.cues.emit(Cue::Flip);
        self.set_phase(GamePhase::LevelSelect);
        Ok(())
    }

    /// Level select → title screen.
    pub fn back_to_start(&mut self) -> Result<()> {
        self.require(GamePhase::LevelSelect, "go back")?;
        self.set_phase(GamePhase::Start);
        Ok(())
    }

    /// Level select → play `level`.
    ///
    /// # Errors
    /// The level must exist and be unlocked.
    pub fn select_level(&mut self, level: u32) -> Result<()> {
        self.require(GamePhase::LevelSelect, "select a level")?;
        if !is_valid_level(level) {
            return Err(GameError::LevelOutOfRange(level));
        }
        if !self.progress.is_unlocked(level) {
            return Err(GameError::LevelLocked {
                level,
                unlocked: self.progress.max_unlocked(),
            });
        }
        self.cues.emit(Cue::Flip);
        self.begin_level(level)
    }

    /// Abandon the board and return to level select.
    ///
    /// Resolutions still pending for the abandoned board are discarded.
    pub fn quit(&mut self) -> Result<()> {
        self.require(GamePhase::Playing, "quit")?;
        self.end_session();
        self.pending.clear();
        self.interaction = InteractionState::Idle;
        info!(level = self.current_level, moves = self.moves, "quit level");
        self.set_phase(GamePhase::LevelSelect);
        Ok(())
    }

    /// Victory → play the following level.
    pub fn next_level(&mut self) -> Result<()> {
        self.require(GamePhase::Victory, "continue")?;
        if self.current_level >= MAX_LEVEL {
            return Err(GameError::LevelOutOfRange(self.current_level + 1));
        }
        self.cues.emit(Cue::Flip);
        self.begin_level(self.current_level + 1)
    }

    /// Victory → play the same level again.
    pub fn replay(&mut self) -> Result<()> {
        self.require(GamePhase::Victory, "replay")?;
        self.cues.emit(Cue::Flip);
        self.begin_level(self.current_level)
    }

    /// Victory → level select.
    pub fn to_level_select(&mut self) -> Result<()> {
        self.require(GamePhase::Victory, "open the level menu")?;
        self.cues.emit(Cue::Flip);
        self.set_phase(GamePhase::LevelSelect);
        Ok(())
    }

    // === Board ===

    /// Click the card at `id`.
    ///
    /// Accepted only while playing, idle, with fewer than two cards
    /// face-up, on a card that is neither matched nor already face-up.
    /// A rejected click changes nothing.
    pub fn click(&mut self, id: CardId) -> FlipOutcome {
        if let Err(rejection) = self.check_click(id) {
            debug!(%id, ?rejection, "click rejected");
            return FlipOutcome::Rejected(rejection);
        }

        self.cues.emit(Cue::Flip);
        self.pending.push(id);
        debug!(%id, pending = self.pending.len(), "card flipped");

        let [first, second] = match self.pending.as_slice() {
            &[first, second] => [first, second],
            _ => return FlipOutcome::Flipped,
        };

        self.moves += 1;
        let matched = match (self.deck.get(first), self.deck.get(second)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        };

        if matched {
            self.interaction = InteractionState::ProcessingMatch;
            self.schedule(self.config.timings.match_delay(), Deferred::ResolveMatch { first, second });
            FlipOutcome::PairMatched
        } else {
            self.interaction = InteractionState::ProcessingMismatch;
            self.schedule(self.config.timings.mismatch_delay(), Deferred::ResolveMismatch);
            FlipOutcome::PairMismatched
        }
    }

    fn check_click(&self, id: CardId) -> std::result::Result<(), Rejection> {
        if self.phase != GamePhase::Playing {
            return Err(Rejection::NotPlaying);
        }
        if !self.interaction.is_idle() {
            return Err(Rejection::Resolving);
        }
        if self.pending.len() >= 2 {
            return Err(Rejection::PairPending);
        }
        let card = self.deck.get(id).ok_or(Rejection::NoSuchCard)?;
        if card.is_matched {
            return Err(Rejection::AlreadyMatched);
        }
        if self.pending.contains(&id) {
            return Err(Rejection::AlreadyFaceUp);
        }
        Ok(())
    }

    // === Clock ===

    /// Move the clock forward and run every resolution that comes due.
    ///
    /// Follow-up resolutions scheduled along the way are timed from the
    /// moment their parent ran, so one large step behaves like many small
    /// ones. Returns the number of resolutions applied.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let target = self.clock + elapsed;
        let mut applied = 0;

        while let Some(task) = self.queue.pop_due(target) {
            self.clock = self.clock.max(task.due);
            if task.session != self.session {
                debug!(id = %task.id, "dropping stale resolution");
                continue;
            }
            self.apply(task.action);
            applied += 1;
        }

        self.clock = target;
        applied
    }

    /// Run the queue until nothing is scheduled.
    pub fn settle(&mut self) -> usize {
        let mut applied = 0;
        while let Some(due) = self.queue.next_due() {
            applied += self.advance(due.saturating_sub(self.clock));
        }
        applied
    }

    /// Time until the next scheduled resolution.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.next_due().map(|due| due.saturating_sub(self.clock))
    }

    /// Current clock reading.
    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    fn schedule(&mut self, delay: Duration, action: Deferred) {
        let id = self.queue.schedule(self.session, self.clock + delay, action);
        debug!(%id, ?action, ?delay, "scheduled resolution");
    }

    fn apply(&mut self, action: Deferred) {
        match action {
            Deferred::ResolveMatch { first, second } => {
                self.deck.mark_matched(first);
                self.deck.mark_matched(second);
                self.cues.emit(Cue::Match);
                self.pending.clear();
                self.interaction = InteractionState::Idle;
                self.last_match = Some(first);

                if self.deck.all_matched() {
                    self.on_board_cleared();
                }
            }
            Deferred::ResolveMismatch => {
                self.cues.emit(Cue::Mismatch);
                self.pending.clear();
                self.interaction = InteractionState::Idle;
            }
            Deferred::AnnounceVictory => {
                self.cues.emit(Cue::Victory);
                self.set_phase(GamePhase::Victory);
            }
        }
    }

    fn on_board_cleared(&mut self) {
        info!(level = self.current_level, moves = self.moves, "level cleared");

        if self.progress.record_clear(self.current_level) {
            self.progress.store(&mut self.store);
            info!(max_unlocked = self.progress.max_unlocked(), "unlocked next level");
        }

        self.schedule(self.config.timings.victory_delay(), Deferred::AnnounceVictory);
    }

    // === Internals ===

    fn require(&self, phase: GamePhase, action: &'static str) -> Result<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(GameError::InvalidTransition {
                phase: self.phase,
                action,
            })
        }
    }

    fn begin_level(&mut self, level: u32) -> Result<()> {
        let deck = Deck::deal(level, &self.catalog, &mut self.rng)?;

        self.end_session();
        self.deck = deck;
        self.pending.clear();
        self.interaction = InteractionState::Idle;
        self.moves = 0;
        self.last_match = None;
        self.current_level = level;

        info!(level, pairs = self.deck.total_pairs(), "level started");
        self.set_phase(GamePhase::Playing);
        Ok(())
    }

    fn end_session(&mut self) {
        self.session += 1;
        let dropped = self.queue.retain_session(self.session);
        if dropped > 0 {
            debug!(dropped, "discarded resolutions of abandoned board");
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        let was_playing = self.phase == GamePhase::Playing;
        let is_playing = phase == GamePhase::Playing;
        debug!(from = %self.phase, to = %phase, "phase change");
        self.phase = phase;

        if is_playing && !was_playing {
            self.cues.emit(Cue::BgmStart);
        } else if was_playing && !is_playing {
            self.cues.emit(Cue::BgmStop);
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Level being played (or last played).
    #[must_use]
    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    #[must_use]
    pub fn level_config(&self) -> LevelConfig {
        LevelConfig::for_level(self.current_level)
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn max_unlocked_level(&self) -> u32 {
        self.progress.max_unlocked()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Cards face-up and awaiting resolution (0, 1 or 2).
    #[must_use]
    pub fn pending(&self) -> &[CardId] {
        &self.pending
    }

    /// Whether a card shows its face (matched or pending).
    #[must_use]
    pub fn is_face_up(&self, id: CardId) -> bool {
        self.pending.contains(&id) || self.deck.get(id).is_some_and(|c| c.is_matched)
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.deck.matched_pairs()
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.deck.total_pairs()
    }

    /// Matched share of the board, 0–100. Zero with no board.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        let total = self.total_pairs();
        if total == 0 {
            0.0
        } else {
            self.matched_pairs() as f64 / total as f64 * 100.0
        }
    }

    /// Level-select status of every level.
    #[must_use]
    pub fn level_statuses(&self) -> Vec<(u32, LevelStatus)> {
        self.progress.statuses()
    }

    /// The first card of the most recently matched pair on this board.
    #[must_use]
    pub fn last_match(&self) -> Option<&Card> {
        self.last_match.and_then(|id| self.deck.get(id))
    }

    /// Copy of the board for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            interaction: self.interaction,
            level: self.current_level,
            layout: self.level_config().layout,
            moves: self.moves,
            max_unlocked_level: self.progress.max_unlocked(),
            cards: self.deck.cards().clone(),
            pending: self.pending.clone(),
        }
    }

    #[must_use]
    pub fn cues(&self) -> &C {
        &self.cues
    }

    pub fn cues_mut(&mut self) -> &mut C {
        &mut self.cues
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
