use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Game rules that vary per deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Pair count used when a start request omits `pairCount`
    pub default_pairs: usize,
    /// Upper bound on `pairCount` for custom decks; named regions are
    /// bounded by their catalog slice
    pub max_pairs: usize,
    /// Fixed RNG seed for reproducible decks; entropy when `None`
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_pairs: 8,
            max_pairs: 500,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Read `GAME_DEFAULT_PAIRS`, `GAME_MAX_PAIRS` and `GAME_RNG_SEED`.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let default_pairs = parse_var("GAME_DEFAULT_PAIRS")?.unwrap_or(defaults.default_pairs);
        let max_pairs = parse_var("GAME_MAX_PAIRS")?.unwrap_or(defaults.max_pairs);
        let rng_seed = parse_var("GAME_RNG_SEED")?;

        let config = Self {
            default_pairs,
            max_pairs,
            rng_seed,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_pairs == 0 {
            return Err(AppError::config("GAME_MAX_PAIRS must be at least 1"));
        }
        if self.default_pairs == 0 || self.default_pairs > self.max_pairs {
            return Err(AppError::config(format!(
                "GAME_DEFAULT_PAIRS must be in 1..={}, got {}",
                self.max_pairs, self.default_pairs
            )));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

/// Parse an optional environment variable; present-but-invalid is an error.
fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{name} has an invalid value: '{raw}'"))),
        Err(_) => Ok(None),
    }
}
