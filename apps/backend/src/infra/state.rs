use crate::config::GameConfig;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    game_config: GameConfig,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            game_config: GameConfig::default(),
        }
    }

    pub fn with_game_config(mut self, game_config: GameConfig) -> Self {
        self.game_config = game_config;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.game_config.rng_seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        self.game_config.validate()?;
        Ok(AppState::new(self.game_config))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
