//! Property-based tests for controller invariants.
//!
//! Random sequences of clicks, clock advances and navigation must never
//! break the board rules:
//! - At most two cards are pending, and only unmatched ones
//! - The move counter and matched cards never go backwards
//! - The unlock watermark is monotonic and stays within 1..=100
//! - Every deal holds each of its symbols exactly twice

use std::time::Duration;

use magic_memory::cards::{CardId, Catalog, Deck};
use magic_memory::core::{GameConfig, GameRng, Timings};
use magic_memory::game::{Cue, GameController, GamePhase};
use magic_memory::levels::{LevelConfig, MemoryStore, MAX_LEVEL, PROGRESS_KEY};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Step {
    Click(usize),
    Advance(u64),
    Settle,
    Quit,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => (0usize..44).prop_map(Step::Click),
        3 => (0u64..700).prop_map(Step::Advance),
        1 => Just(Step::Settle),
        1 => Just(Step::Quit),
    ]
}

type Game = GameController<MemoryStore, Vec<Cue>>;

fn matched_ids(game: &Game) -> Vec<CardId> {
    game.deck().iter().filter(|c| c.is_matched).map(|c| c.id).collect()
}

/// Get back onto a board after a quit or victory.
fn resume(game: &mut Game, level: u32) {
    match game.phase() {
        GamePhase::Victory => game.to_level_select().unwrap(),
        GamePhase::Start => game.start().unwrap(),
        _ => {}
    }
    if game.phase() == GamePhase::LevelSelect {
        let level = level.min(game.max_unlocked_level());
        game.select_level(level).unwrap();
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn board_invariants_hold(
        seed in any::<u64>(),
        level in 1u32..=MAX_LEVEL,
        steps in prop::collection::vec(step_strategy(), 1..120),
    ) {
        let store = MemoryStore::with_value(PROGRESS_KEY, "100");
        let mut game: Game = GameController::new(GameConfig::new().with_seed(seed), store, Vec::new());
        game.start().unwrap();
        game.select_level(level).unwrap();

        let mut moves = game.moves();
        let mut matched = matched_ids(&game);

        for step in steps {
            match step {
                Step::Click(index) => {
                    game.click(CardId::new(index));
                }
                Step::Advance(ms) => {
                    game.advance(Duration::from_millis(ms));
                }
                Step::Settle => {
                    game.settle();
                }
                Step::Quit => {
                    if game.phase() == GamePhase::Playing {
                        game.quit().unwrap();
                    }
                }
            }

            if game.phase() != GamePhase::Playing && game.phase() != GamePhase::Victory {
                prop_assert!(game.pending().is_empty());
                resume(&mut game, level);
                moves = game.moves();
                matched = matched_ids(&game);
                continue;
            }
            if game.phase() == GamePhase::Victory {
                prop_assert!(game.deck().all_matched());
                resume(&mut game, level);
                moves = game.moves();
                matched = matched_ids(&game);
                continue;
            }

            prop_assert!(game.pending().len() <= 2);
            for id in game.pending() {
                prop_assert!(!game.deck().get(*id).unwrap().is_matched);
            }
            if game.interaction().is_idle() {
                prop_assert!(game.pending().len() < 2);
            }

            prop_assert!(game.moves() >= moves);
            moves = game.moves();

            let now_matched = matched_ids(&game);
            for id in &matched {
                prop_assert!(now_matched.contains(id));
            }
            prop_assert_eq!(now_matched.len() % 2, 0);
            matched = now_matched;

            prop_assert!(game.matched_pairs() <= game.total_pairs());
        }
    }

    #[test]
    fn deck_holds_each_symbol_twice(seed in any::<u64>(), level in 1u32..=MAX_LEVEL) {
        let deck = Deck::deal(level, &Catalog::standard(), &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(deck.len(), LevelConfig::for_level(level).card_count());
        prop_assert!(deck.symbol_counts().values().all(|&n| n == 2));
        for (index, card) in deck.iter().enumerate() {
            prop_assert_eq!(card.id, CardId::new(index));
            prop_assert!(!card.is_matched);
        }
    }

    #[test]
    fn watermark_monotonic_and_capped(
        seed in any::<u64>(),
        start in 1u32..=MAX_LEVEL,
        rounds in 1usize..6,
        replay_mask in any::<u8>(),
    ) {
        let store = MemoryStore::with_value(PROGRESS_KEY, start.to_string());
        let config = GameConfig::new()
            .with_seed(seed)
            .with_timings(Timings::instant());
        let mut game: Game = GameController::new(config, store, Vec::new());
        game.start().unwrap();
        game.select_level(start).unwrap();

        let mut watermark = game.max_unlocked_level();
        prop_assert_eq!(watermark, start);

        for round in 0..rounds {
            let level = game.current_level();
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
            prop_assert_eq!(game.phase(), GamePhase::Victory);

            let expected = if level == watermark && watermark < MAX_LEVEL {
                watermark + 1
            } else {
                watermark
            };
            prop_assert_eq!(game.max_unlocked_level(), expected);
            prop_assert!(game.max_unlocked_level() >= watermark);
            prop_assert!(game.max_unlocked_level() <= MAX_LEVEL);
            watermark = game.max_unlocked_level();
            let stored = watermark.to_string();
            prop_assert_eq!(game.store().get(PROGRESS_KEY), Some(stored.as_str()));

            let replay = replay_mask & (1 << round) != 0;
            if replay || level == MAX_LEVEL {
                game.replay().unwrap();
            } else {
                game.next_level().unwrap();
            }
        }
    }
}
