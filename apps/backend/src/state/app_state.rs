use std::sync::Arc;

use crate::config::GameConfig;
use crate::services::SessionService;
use crate::store::SessionStore;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Game rules (default/max pair count, RNG seed)
    pub game: GameConfig,
    /// Session lifecycle service; owns the RNG and the session store handle
    pub sessions: Arc<SessionService>,
}

impl AppState {
    /// Create a new AppState with a fresh, empty session store
    pub fn new(game: GameConfig) -> Self {
        let store = Arc::new(SessionStore::new());
        let sessions = Arc::new(SessionService::new(store, &game));
        Self { game, sessions }
    }

    /// Number of sessions currently held in memory
    pub fn session_count(&self) -> usize {
        self.sessions.store().len()
    }

    /// Create a test AppState with default rules and a fixed seed
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(GameConfig::default().with_seed(7))
    }
}
