//! Table configuration.
//!
//! Values come from defaults, then an optional TOML file, then
//! `STRICTLY_WAGER_*` environment variables (a `.env` file is honored).

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Environment variable overriding the starting balance.
pub const ENV_STARTING_BALANCE: &str = "STRICTLY_WAGER_STARTING_BALANCE";
/// Environment variable overriding the opponent delay in milliseconds.
pub const ENV_OPPONENT_DELAY_MS: &str = "STRICTLY_WAGER_OPPONENT_DELAY_MS";
/// Environment variable overriding the storage key.
pub const ENV_STORAGE_KEY: &str = "STRICTLY_WAGER_STORAGE_KEY";
/// Environment variable fixing the opponent's random seed.
pub const ENV_OPPONENT_SEED: &str = "STRICTLY_WAGER_OPPONENT_SEED";

/// Configuration for a wager table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct WagerConfig {
    /// Balance each seat starts with and returns to on reset.
    #[serde(default = "default_starting_balance")]
    starting_balance: u64,

    /// Pause before the opponent's move is shown.
    #[serde(default = "default_opponent_delay_ms")]
    opponent_delay_ms: u64,

    /// Key the snapshot is stored under.
    #[serde(default = "default_storage_key")]
    storage_key: String,

    /// Seed for the random opponent; entropy when absent.
    #[serde(default)]
    opponent_seed: Option<u64>,
}

#[instrument]
fn default_starting_balance() -> u64 {
    1000
}

#[instrument]
fn default_opponent_delay_ms() -> u64 {
    450
}

#[instrument]
fn default_storage_key() -> String {
    "ticbet_state_v1".to_string()
}

impl Default for WagerConfig {
    fn default() -> Self {
        Self {
            starting_balance: default_starting_balance(),
            opponent_delay_ms: default_opponent_delay_ms(),
            storage_key: default_storage_key(),
            opponent_seed: None,
        }
    }
}

impl WagerConfig {
    /// Sets the starting balance.
    pub fn with_starting_balance(mut self, starting_balance: u64) -> Self {
        self.starting_balance = starting_balance;
        self
    }

    /// Sets the opponent delay.
    pub fn with_opponent_delay_ms(mut self, opponent_delay_ms: u64) -> Self {
        self.opponent_delay_ms = opponent_delay_ms;
        self
    }

    /// Sets the storage key.
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Fixes the opponent seed.
    pub fn with_opponent_seed(mut self, seed: u64) -> Self {
        self.opponent_seed = Some(seed);
        self
    }

    /// Pause before the opponent's move is shown.
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    /// Loads configuration from a TOML file. Missing keys use defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(
            starting_balance = config.starting_balance,
            storage_key = %config.storage_key,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the full configuration: defaults, the file if given, then the
    /// process environment (after reading `.env`).
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `STRICTLY_WAGER_*` overrides using the given lookup.
    #[instrument(skip(self, lookup))]
    pub fn apply_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(value) = lookup(ENV_STARTING_BALANCE) {
            self.starting_balance = parse_u64(ENV_STARTING_BALANCE, &value)?;
        }
        if let Some(value) = lookup(ENV_OPPONENT_DELAY_MS) {
            self.opponent_delay_ms = parse_u64(ENV_OPPONENT_DELAY_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_STORAGE_KEY) {
            if value.trim().is_empty() {
                return Err(ConfigError::new(format!("{} must not be empty", ENV_STORAGE_KEY)));
            }
            self.storage_key = value;
        }
        if let Some(value) = lookup(ENV_OPPONENT_SEED) {
            self.opponent_seed = Some(parse_u64(ENV_OPPONENT_SEED, &value)?);
        }
        debug!(config = ?self, "Overrides applied");
        Ok(self)
    }
}

fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::new(format!("{} must be a non-negative integer: {}", key, e)))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
