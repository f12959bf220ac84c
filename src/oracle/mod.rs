use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::config::OracleConfig;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("dictionary request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("dictionary service returned unexpected status {0}")]
    Status(StatusCode),
}

/// External word-verification boundary.
///
/// Implementations answer whether a string is a recognized dictionary word.
/// Lookups are serialized through `&mut self`; the engine never issues
/// concurrent verifications.
#[async_trait]
pub trait WordOracle {
    async fn lookup(&mut self, word: &str) -> Result<bool, OracleError>;
}

/// Free Dictionary API client with a fixed-interval rate gate.
///
/// Before each request the client sleeps until `cooldown` has elapsed since
/// the previous one, keeping the call rate under the API's limit without
/// any timing logic leaking into the game engine.
pub struct DictionaryApiClient {
    http: reqwest::Client,
    base_url: String,
    cooldown: Duration,
    last_request: Option<Instant>,
}

impl DictionaryApiClient {
    pub fn new(config: &OracleConfig) -> Result<Self, OracleError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cooldown: Duration::from_millis(config.cooldown_ms),
            last_request: None,
        })
    }

    async fn wait_for_slot(&self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.cooldown {
                tokio::time::sleep(self.cooldown - elapsed).await;
            }
        }
    }
}

#[async_trait]
impl WordOracle for DictionaryApiClient {
    async fn lookup(&mut self, word: &str) -> Result<bool, OracleError> {
        self.wait_for_slot().await;

        let url = format!("{}/{}", self.base_url, word.to_lowercase());
        let result = self.http.get(&url).send().await;
        self.last_request = Some(Instant::now());

        let response = result?;
        let status = response.status();

        if status.is_success() {
            Ok(true)
        } else if status == StatusCode::NOT_FOUND {
            Ok(false)
        } else {
            Err(OracleError::Status(status))
        }
    }
}
