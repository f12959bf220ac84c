use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub oracle: OracleConfig,
}

/// Game-rule options. The recognized variants of the game differ only in
/// these two knobs, so they live in configuration rather than in code.
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Total turn cap across both players; `None` plays until the tiles
    /// run out.
    pub max_turns: Option<u32>,
    /// Whether skipping returns the rack to the bag and redraws a full one,
    /// or simply passes the turn.
    pub skip_returns_rack: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OracleConfig {
    pub base_url: String,
    pub cooldown_ms: u64,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let max_turns: u32 = env::var("MAX_TURNS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .context("MAX_TURNS must be a number (0 disables the cap)")?;

        let game = GameConfig {
            max_turns: (max_turns > 0).then_some(max_turns),
            skip_returns_rack: env::var("SKIP_RETURNS_RACK")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .context("SKIP_RETURNS_RACK must be true or false")?,
        };

        let oracle = OracleConfig {
            base_url: env::var("ORACLE_BASE_URL")
                .unwrap_or_else(|_| "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()),
            cooldown_ms: env::var("ORACLE_COOLDOWN_MS")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .context("ORACLE_COOLDOWN_MS must be a number")?,
            timeout_secs: env::var("ORACLE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("ORACLE_TIMEOUT_SECS must be a number")?,
        };

        Ok(Config { game, oracle })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: Some(10),
            skip_returns_rack: true,
        }
    }
}
