mod config;
mod engine;
mod oracle;
mod session;
mod utils;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use oracle::DictionaryApiClient;
use session::{GameSession, TurnOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_rack=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting word-rack...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Dictionary oracle client
    let oracle = DictionaryApiClient::new(&config.oracle)?;
    tracing::info!("Dictionary client initialized");

    // Deal both players in
    let mut session = GameSession::new(oracle, config.game.clone())?;
    tracing::info!(session_id = %session.session_id, "Game session started");

    print_rules(&session);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut stdout = tokio::io::stdout();

    while !session.is_over() {
        let current = session.current_player();
        let prompt = format!(
            "\nPlayer {}'s tiles: {}\nScores  Player 1: {} | Player 2: {}\nTurn {}{} | Tiles left in bag: {}\nEnter a word (or SKIP/QUIT): ",
            current + 1,
            format_rack(&session.player(current).rack),
            session.player(0).score,
            session.player(1).score,
            session.turn() + 1,
            session
                .max_turns()
                .map(|max| format!("/{max}"))
                .unwrap_or_default(),
            session.tiles_remaining(),
        );
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim().to_uppercase();

        if input.is_empty() {
            continue;
        }
        if input == "QUIT" {
            break;
        }
        if input == "SKIP" {
            session.skip_turn()?;
            println!("Turn skipped.");
            continue;
        }
        if !input.chars().all(|ch| ch.is_ascii_alphabetic()) {
            println!("Please enter only letters.");
            continue;
        }

        match session.submit_word(&input).await? {
            TurnOutcome::WordScored { word, score } => {
                println!("Word '{word}' scored {score} points!");
            }
            TurnOutcome::WordRejected { reason } => {
                println!("{reason}");
            }
            TurnOutcome::TurnSkipped => {}
        }
    }

    let summary = session.summary();
    println!("\nGame Over!");
    println!("Player 1: {}", summary.player1_score);
    println!("Player 2: {}", summary.player2_score);
    println!("Winner: {}", summary.winner.label());
    println!("{}", serde_json::to_string_pretty(&summary)?);

    tracing::info!(session_id = %summary.session_id, winner = summary.winner.label(), "Game finished");

    Ok(())
}

fn print_rules(session: &GameSession<DictionaryApiClient>) {
    println!("Welcome to Word Rack!");
    println!("\nGame Rules:");
    println!("1. Each player holds 7 tiles");
    println!("2. Form words using your tiles");
    println!("3. Enter 'SKIP' to pass your turn");
    println!("4. Enter 'QUIT' to end the game");
    println!("5. Words are verified against a dictionary");
    println!("6. Tiles in bag: {}", session.tiles_remaining());
}

fn format_rack(rack: &[char]) -> String {
    rack.iter()
        .map(|ch| ch.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
