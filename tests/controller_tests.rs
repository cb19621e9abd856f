//! Game controller integration tests.
//!
//! These tests drive the controller through its public API only:
//! - Click gating and pair resolution on the virtual clock
//! - Unlock watermark rules and persistence across sessions
//! - Screen navigation and sound cues

use std::time::Duration;

use magic_memory::cards::CardId;
use magic_memory::core::{GameConfig, GameError, Result, Timings};
use magic_memory::game::{Cue, FlipOutcome, GameController, GamePhase, InteractionState, Rejection};
use magic_memory::levels::{FileStore, LevelStatus, MemoryStore, ProgressStore, MAX_LEVEL, PROGRESS_KEY};

type Game<S> = GameController<S, Vec<Cue>>;

fn new_game<S: ProgressStore>(store: S) -> Game<S> {
    GameController::new(GameConfig::new().with_seed(1234), store, Vec::new())
}

fn instant_game<S: ProgressStore>(store: S) -> Game<S> {
    GameController::new(
        GameConfig::new().with_seed(1234).with_timings(Timings::instant()),
        store,
        Vec::new(),
    )
}

fn all_unlocked() -> MemoryStore {
    MemoryStore::with_value(PROGRESS_KEY, MAX_LEVEL.to_string())
}

fn enter_level<S: ProgressStore>(game: &mut Game<S>, level: u32) {
    game.start().unwrap();
    game.select_level(level).unwrap();
}

/// Match every remaining pair and let all resolutions run.
fn clear_board<S: ProgressStore>(game: &mut Game<S>) {
    for index in 0..game.deck().len() {
        let id = CardId::new(index);
        if game.deck().get(id).unwrap().is_matched {
            continue;
        }
        let partner = game.deck().partner_of(id).unwrap();
        game.click(id);
        game.click(partner);
        game.settle();
    }
}

/// A store whose writes always fail.
#[derive(Default)]
struct ReadOnlyStore {
    value: Option<String>,
}

impl ProgressStore for ReadOnlyStore {
    fn load(&self, _key: &str) -> Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(GameError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        )))
    }
}

// =============================================================================
// Click Gating
// =============================================================================

#[test]
fn test_third_click_rejected_while_resolving() {
    let mut game = new_game(all_unlocked());
    enter_level(&mut game, 10);

    game.click(CardId::new(0));
    game.click(CardId::new(1));
    let before = game.snapshot();

    let outcome = game.click(CardId::new(2));
    assert_eq!(outcome, FlipOutcome::Rejected(Rejection::Resolving));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_rejected_clicks_emit_no_cue() {
    let mut game = new_game(MemoryStore::new());
    enter_level(&mut game, 1);
    game.cues_mut().clear();

    game.click(CardId::new(0));
    game.click(CardId::new(0));
    game.click(CardId::new(99));

    assert_eq!(game.cues(), &vec![Cue::Flip]);
}

#[test]
fn test_every_level_is_playable_to_victory() {
    let mut game = instant_game(MemoryStore::with_value(PROGRESS_KEY, "100"));
    game.start().unwrap();

    for level in [1, 5, 6, 15, 16, 30, 31, 50, 51, 75, 76, 90, 91, 100] {
        game.select_level(level).unwrap();
        assert_eq!(game.deck().len(), game.level_config().card_count());

        clear_board(&mut game);
        assert_eq!(game.phase(), GamePhase::Victory, "level {}", level);
        assert_eq!(game.moves() as usize, game.total_pairs());
        game.to_level_select().unwrap();
    }
}

// =============================================================================
// Resolution Timing
// =============================================================================

#[test]
fn test_default_delays() {
    let mut game = new_game(MemoryStore::new());
    enter_level(&mut game, 1);

    let first = CardId::new(0);
    let partner = game.deck().partner_of(first).unwrap();
    game.click(first);
    game.click(partner);
    assert_eq!(game.next_deadline(), Some(Duration::from_millis(200)));

    game.advance(Duration::from_millis(200));
    let rest: Vec<CardId> = (0..4)
        .map(CardId::new)
        .filter(|&id| !game.deck().get(id).unwrap().is_matched)
        .collect();
    game.click(rest[0]);
    game.click(rest[1]);
    game.advance(Duration::from_millis(200));

    // Board cleared; victory follows after its own delay
    assert_eq!(game.next_deadline(), Some(Duration::from_millis(400)));
    game.advance(Duration::from_millis(399));
    assert_eq!(game.phase(), GamePhase::Playing);
    game.advance(Duration::from_millis(1));
    assert_eq!(game.phase(), GamePhase::Victory);
}

#[test]
fn test_one_large_advance_runs_chained_resolutions() {
    let mut game = new_game(MemoryStore::new());
    enter_level(&mut game, 1);

    let first = CardId::new(0);
    let partner = game.deck().partner_of(first).unwrap();
    game.click(first);
    game.click(partner);
    game.advance(Duration::from_millis(200));

    let rest: Vec<CardId> = (0..4)
        .map(CardId::new)
        .filter(|&id| !game.deck().get(id).unwrap().is_matched)
        .collect();
    game.click(rest[0]);
    game.click(rest[1]);

    // Match at +200, victory at +600
    assert_eq!(game.advance(Duration::from_secs(5)), 2);
    assert_eq!(game.phase(), GamePhase::Victory);
}

#[test]
fn test_mismatch_hides_both_cards() {
    let mut game = new_game(all_unlocked());
    enter_level(&mut game, 20);

    let first = CardId::new(0);
    let partner = game.deck().partner_of(first).unwrap();
    let other = (1..game.deck().len()).map(CardId::new).find(|&id| id != partner).unwrap();

    game.click(first);
    assert_eq!(game.click(other), FlipOutcome::PairMismatched);
    assert!(game.is_face_up(first));
    assert!(game.is_face_up(other));

    game.advance(Duration::from_millis(600));
    assert!(!game.is_face_up(first));
    assert!(!game.is_face_up(other));
    assert_eq!(game.interaction(), InteractionState::Idle);
    assert_eq!(game.matched_pairs(), 0);
}

// =============================================================================
// Watermark
// =============================================================================

#[test]
fn test_replay_of_cleared_level_keeps_watermark() {
    let mut game = instant_game(MemoryStore::with_value(PROGRESS_KEY, "5"));
    enter_level(&mut game, 3);

    clear_board(&mut game);
    assert_eq!(game.phase(), GamePhase::Victory);
    assert_eq!(game.max_unlocked_level(), 5);
    // Nothing written when the watermark did not move
    assert_eq!(game.store().get(PROGRESS_KEY), Some("5"));
}

#[test]
fn test_final_level_does_not_pass_cap() {
    let mut game = instant_game(MemoryStore::with_value(PROGRESS_KEY, "100"));
    enter_level(&mut game, MAX_LEVEL);

    clear_board(&mut game);
    assert_eq!(game.phase(), GamePhase::Victory);
    assert_eq!(game.max_unlocked_level(), MAX_LEVEL);
    assert!(matches!(game.next_level(), Err(GameError::LevelOutOfRange(101))));
    assert_eq!(game.phase(), GamePhase::Victory);
}

#[test]
fn test_out_of_range_stored_value_restores_first_level() {
    for raw in ["0", "-4", "101", "abc", ""] {
        let game = new_game(MemoryStore::with_value(PROGRESS_KEY, raw));
        assert_eq!(game.max_unlocked_level(), 1, "stored {:?}", raw);
    }
}

#[test]
fn test_save_failure_does_not_block_play() {
    let mut game = instant_game(ReadOnlyStore::default());
    enter_level(&mut game, 1);

    clear_board(&mut game);
    assert_eq!(game.phase(), GamePhase::Victory);
    assert_eq!(game.max_unlocked_level(), 2);

    game.next_level().unwrap();
    assert_eq!(game.current_level(), 2);
}

#[test]
fn test_watermark_persists_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");

    {
        let mut game = instant_game(FileStore::new(&path));
        enter_level(&mut game, 1);
        clear_board(&mut game);
        game.next_level().unwrap();
        clear_board(&mut game);
        assert_eq!(game.max_unlocked_level(), 3);
    }

    let game = new_game(FileStore::new(&path));
    assert_eq!(game.max_unlocked_level(), 3);
    let statuses = game.level_statuses();
    assert_eq!(statuses[0], (1, LevelStatus::Cleared));
    assert_eq!(statuses[2], (3, LevelStatus::Unlocked));
    assert_eq!(statuses[3], (4, LevelStatus::Locked));
}

// =============================================================================
// Navigation And Cues
// =============================================================================

#[test]
fn test_new_level_discards_pending_match() {
    let mut game = new_game(MemoryStore::with_value(PROGRESS_KEY, "10"));
    enter_level(&mut game, 4);

    let first = CardId::new(0);
    let partner = game.deck().partner_of(first).unwrap();
    game.click(first);
    game.click(partner);
    game.quit().unwrap();

    game.select_level(7).unwrap();
    assert_eq!(game.advance(Duration::from_secs(10)), 0);
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.current_level(), 7);
    assert_eq!(game.matched_pairs(), 0);
}

#[test]
fn test_music_follows_playing_phase() {
    let mut game = instant_game(MemoryStore::new());
    enter_level(&mut game, 1);
    assert_eq!(game.cues().iter().filter(|&&c| c == Cue::BgmStart).count(), 1);

    clear_board(&mut game);
    game.replay().unwrap();
    clear_board(&mut game);
    game.to_level_select().unwrap();

    let starts = game.cues().iter().filter(|&&c| c == Cue::BgmStart).count();
    let stops = game.cues().iter().filter(|&&c| c == Cue::BgmStop).count();
    assert_eq!(starts, 2);
    assert_eq!(stops, 2);
    assert_eq!(game.cues().iter().filter(|&&c| c == Cue::Victory).count(), 2);
}

#[test]
fn test_victory_cue_order() {
    let mut game = instant_game(MemoryStore::new());
    enter_level(&mut game, 1);
    game.cues_mut().clear();

    clear_board(&mut game);
    assert_eq!(
        game.cues(),
        &vec![
            Cue::Flip,
            Cue::Flip,
            Cue::Match,
            Cue::Flip,
            Cue::Flip,
            Cue::Match,
            Cue::Victory,
            Cue::BgmStop,
        ]
    );
}

#[test]
fn test_snapshot_serializes() {
    let mut game = new_game(MemoryStore::new());
    enter_level(&mut game, 1);
    game.click(CardId::new(1));

    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["phase"], "PLAYING");
    assert_eq!(json["level"], 1);
    assert_eq!(json["cards"].as_array().unwrap().len(), 4);
    assert_eq!(json["pending"].as_array().unwrap().len(), 1);
}
