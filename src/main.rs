//! Magic Memory - terminal driver
//!
//! Plays the game on stdin/stdout. Cues are printed as text, resolution
//! delays are real sleeps.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use magic_memory::{
    CardId, Cue, CueSink, FileStore, FunFactClient, GameConfig, GameController, GamePhase, LevelStatus,
    Result, MAX_LEVEL,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "magic-memory")]
#[command(about = "Magic Memory - flip cards, find pairs, unlock all 100 levels", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, value_name = "TOML")]
    config: Option<PathBuf>,

    /// Where to keep the unlocked-level watermark
    #[arg(long, value_name = "PATH", default_value = "magic-memory-progress.json")]
    progress: PathBuf,

    /// Fixed deal seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print a fun fact after each match (needs an API key in the config)
    #[arg(long)]
    fun_facts: bool,

    /// Debug logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Prints cues as text.
struct TerminalCues;

impl CueSink for TerminalCues {
    fn emit(&mut self, cue: Cue) {
        let text = match cue {
            Cue::Flip => return,
            Cue::Match => "✨ It's a match!",
            Cue::Mismatch => "🙈 Not a pair, try again.",
            Cue::Victory => "🎉 Hooray!",
            Cue::BgmStart => "♪ music on",
            Cue::BgmStop => "♪ music off",
        };
        println!("{text}");
    }
}

type Game = GameController<FileStore, TerminalCues>;

enum Flow {
    Continue,
    Exit,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.fun_facts {
        config.facts.enabled = true;
    }

    let facts = FunFactClient::new(config.facts.clone());
    let mut game: Game = GameController::new(config, FileStore::new(&cli.progress), TerminalCues);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    render(&game);
    loop {
        if let Some(wait) = game.next_deadline() {
            tokio::time::sleep(wait).await;
            let matched_before = game.matched_pairs();
            let phase_before = game.phase();
            game.advance(wait);

            if game.matched_pairs() > matched_before && facts.is_enabled() {
                if let Some(name) = game.last_match().map(|card| card.name.clone()) {
                    let fact = facts.fun_fact(&name).await;
                    println!("💡 {}", fact.text);
                }
            }
            if game.pending().is_empty() || game.phase() != phase_before {
                render(&game);
            }
            continue;
        }

        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match handle(&mut game, line.trim()) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => println!("{e}"),
        }
        render(&game);
    }

    Ok(())
}

fn handle(game: &mut Game, input: &str) -> Result<Flow> {
    if input == "exit" {
        return Ok(Flow::Exit);
    }

    match (game.phase(), input) {
        (GamePhase::Start, "" | "start") => game.start()?,
        (GamePhase::LevelSelect, "back") => game.back_to_start()?,
        (GamePhase::LevelSelect, level) => match level.parse::<u32>() {
            Ok(level) => game.select_level(level)?,
            Err(_) => println!("Type a level number, or 'back'."),
        },
        (GamePhase::Playing, "quit") => game.quit()?,
        (GamePhase::Playing, card) => match card.parse::<usize>() {
            Ok(n) if n >= 1 => {
                let outcome = game.click(CardId::new(n - 1));
                if !outcome.is_accepted() {
                    println!("You can't flip that card right now.");
                }
            }
            _ => println!("Type a card number, or 'quit'."),
        },
        (GamePhase::Victory, "next") => game.next_level()?,
        (GamePhase::Victory, "replay") => game.replay()?,
        (GamePhase::Victory, "menu") => game.to_level_select()?,
        _ => println!("Not sure what to do with '{input}'."),
    }

    Ok(Flow::Continue)
}

fn render(game: &Game) {
    match game.phase() {
        GamePhase::Start => {
            println!();
            println!("🧠 Magic Memory");
            println!("Can you unlock all {MAX_LEVEL} levels?");
            println!("Level {} reached! Press Enter to start.", game.max_unlocked_level());
        }
        GamePhase::LevelSelect => {
            println!();
            println!("Select Level ('back' to return)");
            for row in game.level_statuses().chunks(10) {
                let cells: Vec<String> = row
                    .iter()
                    .map(|&(level, status)| match status {
                        LevelStatus::Locked => "  🔒".to_string(),
                        LevelStatus::Cleared => format!("{level:>3}⭐"),
                        LevelStatus::Unlocked => format!("{level:>4}"),
                    })
                    .collect();
                println!("{}", cells.join(" "));
            }
        }
        GamePhase::Playing => {
            let snapshot = game.snapshot();
            println!();
            println!(
                "Level {} | {} moves | {}/{} pairs ({:.0}%)",
                snapshot.level,
                snapshot.moves,
                snapshot.matched_pairs(),
                snapshot.total_pairs(),
                game.progress_percent()
            );
            let columns = usize::from(snapshot.layout.wide_columns.max(1));
            let cells: Vec<String> = snapshot
                .cards
                .iter()
                .map(|card| {
                    if snapshot.is_face_up(card.id) {
                        format!("[ {} ]", card.symbol)
                    } else {
                        format!("[{:>3}]", card.id.index() + 1)
                    }
                })
                .collect();
            for row in cells.chunks(columns) {
                println!("{}", row.join(" "));
            }
        }
        GamePhase::Victory => {
            println!();
            println!("🏆 Level {} Cleared! You are a Memory Wizard! ✨", game.current_level());
            if game.current_level() < MAX_LEVEL {
                println!("'next' for the next level, 'replay' to play again, 'menu' for levels");
            } else {
                println!("'replay' to play again, 'menu' for levels");
            }
        }
    }
}
