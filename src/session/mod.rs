use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::GameConfig;
use crate::engine::{BagError, Scorer, TileBag, WordValidator, RACK_SIZE};
use crate::oracle::WordOracle;

pub const PLAYER_COUNT: usize = 2;

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Bag(#[from] BagError),
    /// The rack could not supply a letter the validator already vouched
    /// for. This is an engine/caller desync, not a playable rejection.
    #[error("rack desync: letter '{letter}' of word '{word}' missing from rack")]
    RackDesync { word: String, letter: char },
}

/// Per-player state: held tiles and cumulative score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub rack: Vec<char>,
    pub score: i32,
}

/// What a single turn produced
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnOutcome {
    WordScored { word: String, score: i32 },
    WordRejected { reason: String },
    TurnSkipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    #[serde(rename = "Player 1")]
    Player1,
    #[serde(rename = "Player 2")]
    Player2,
    #[serde(rename = "Tie")]
    Tie,
}

impl Winner {
    pub fn label(&self) -> &'static str {
        match self {
            Winner::Player1 => "Player 1",
            Winner::Player2 => "Player 2",
            Winner::Tie => "Tie",
        }
    }
}

/// Structured end-of-game summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    pub session_id: Uuid,
    pub player1_score: i32,
    pub player2_score: i32,
    pub winner: Winner,
    pub turns_played: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// One two-player game: the tile bag, the word validator with its
/// per-session cache, both players, and the turn sequence.
pub struct GameSession<O: WordOracle> {
    pub session_id: Uuid,
    bag: TileBag,
    validator: WordValidator<O>,
    players: [PlayerState; PLAYER_COUNT],
    current: usize,
    turn: u32,
    config: GameConfig,
    started_at: DateTime<Utc>,
}

impl<O: WordOracle> GameSession<O> {
    /// Start a game: seed the bag and deal both players a full rack
    pub fn new(oracle: O, config: GameConfig) -> Result<Self, GameError> {
        let mut bag = TileBag::standard();
        let players = [
            PlayerState {
                rack: bag.draw(RACK_SIZE)?,
                score: 0,
            },
            PlayerState {
                rack: bag.draw(RACK_SIZE)?,
                score: 0,
            },
        ];

        Ok(Self {
            session_id: Uuid::new_v4(),
            bag,
            validator: WordValidator::new(oracle),
            players,
            current: 0,
            turn: 0,
            config,
            started_at: Utc::now(),
        })
    }

    pub fn current_player(&self) -> usize {
        self.current
    }

    pub fn player(&self, index: usize) -> &PlayerState {
        &self.players[index]
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn max_turns(&self) -> Option<u32> {
        self.config.max_turns
    }

    pub fn tiles_remaining(&self) -> usize {
        self.bag.remaining()
    }

    /// Play a word for the current player.
    ///
    /// On a valid word: score it, deduct the consumed tiles, replenish the
    /// rack. Rejections leave score and rack untouched. The turn advances
    /// either way.
    pub async fn submit_word(&mut self, raw: &str) -> Result<TurnOutcome, GameError> {
        let word = raw.trim().to_uppercase();
        let player = &self.players[self.current];

        let verdict = self.validator.validate(&word, &player.rack).await;
        if !verdict.is_valid() {
            tracing::info!(
                player = self.current + 1,
                word = %word,
                reason = verdict.reason(),
                "word rejected"
            );
            self.advance_turn();
            return Ok(TurnOutcome::WordRejected {
                reason: verdict.reason().to_string(),
            });
        }

        let score = Scorer::calculate_score(&word);
        let player = &mut self.players[self.current];
        player.score += score;
        remove_letters(&mut player.rack, &word)?;
        self.bag.replenish(&mut player.rack);

        tracing::info!(
            player = self.current + 1,
            word = %word,
            score,
            total = player.score,
            "word accepted"
        );

        self.advance_turn();
        Ok(TurnOutcome::WordScored { word, score })
    }

    /// Skip the current player's turn.
    ///
    /// With `skip_returns_rack` the rack goes back into the bag and a fresh
    /// one is drawn (clamped to supply); otherwise the turn simply passes.
    pub fn skip_turn(&mut self) -> Result<TurnOutcome, GameError> {
        if self.config.skip_returns_rack {
            let player = &mut self.players[self.current];
            let old_rack = std::mem::take(&mut player.rack);
            self.bag.return_tiles(&old_rack);
            let fresh = RACK_SIZE.min(self.bag.remaining());
            self.players[self.current].rack = self.bag.draw(fresh)?;
        }

        tracing::info!(player = self.current + 1, "turn skipped");
        self.advance_turn();
        Ok(TurnOutcome::TurnSkipped)
    }

    fn advance_turn(&mut self) {
        self.turn += 1;
        self.current = 1 - self.current;
    }

    /// Game over when the turn cap is hit (if configured) or when the bag
    /// and either player's rack are simultaneously empty.
    pub fn is_over(&self) -> bool {
        if let Some(max) = self.config.max_turns {
            if self.turn >= max {
                return true;
            }
        }
        self.bag.remaining() == 0 && self.players.iter().any(|p| p.rack.is_empty())
    }

    pub fn summary(&self) -> GameSummary {
        let p1 = self.players[0].score;
        let p2 = self.players[1].score;
        let winner = if p1 > p2 {
            Winner::Player1
        } else if p2 > p1 {
            Winner::Player2
        } else {
            Winner::Tie
        };

        GameSummary {
            session_id: self.session_id,
            player1_score: p1,
            player2_score: p2,
            winner,
            turns_played: self.turn,
            started_at: self.started_at,
            finished_at: Utc::now(),
        }
    }
}

/// Deduct a played word's letters from the rack.
///
/// The validator has already vouched for formability, so a missing letter
/// means the rack changed underneath us; surfaced as a fatal `RackDesync`.
fn remove_letters(rack: &mut Vec<char>, word: &str) -> Result<(), GameError> {
    for letter in word.chars() {
        let pos = rack
            .iter()
            .position(|&tile| tile == letter)
            .ok_or_else(|| GameError::RackDesync {
                word: word.to_string(),
                letter,
            })?;
        rack.remove(pos);
    }
    Ok(())
}
