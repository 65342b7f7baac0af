//! Session lifecycle: start, look up, play and conceal.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::domain::deck::random_id;
use crate::domain::{build_deck, resolve_pair, sample, Card, CatalogEntry, Region, Session};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::store::SessionStore;

/// Response of an accepted move; `cards` is always the full deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairResult {
    pub is_match: bool,
    pub move_count: u32,
    pub message: String,
    pub is_session_over: bool,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSummary {
    pub region: Region,
    pub size: usize,
}

pub struct SessionService {
    store: Arc<SessionStore>,
    rng: Mutex<ChaCha20Rng>,
    max_pairs: usize,
}

impl SessionService {
    pub fn new(store: Arc<SessionStore>, config: &GameConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_rng(&mut rand::rng()),
        };
        Self {
            store,
            rng: Mutex::new(rng),
            max_pairs: config.max_pairs,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Create and store a session for `region` with `pair_count` pairs.
    ///
    /// Named regions draw a uniform sample from their catalog slice; `custom`
    /// takes the first `pair_count` caller entries in order. Only custom decks
    /// are capped by `max_pairs`, and a short list is reported before the cap.
    pub fn start_session(
        &self,
        region: Region,
        custom_entries: Option<Vec<CatalogEntry>>,
        pair_count: usize,
    ) -> Result<Session, DomainError> {
        if pair_count == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidPairCount,
                "Pair count must be at least 1, got 0",
            ));
        }

        let (cards, id) = match region {
            Region::Custom => {
                let entries = select_custom(custom_entries, pair_count, self.max_pairs)?;
                let mut rng = self.rng.lock();
                (build_deck(&entries, &mut *rng)?, random_id(&mut *rng))
            }
            named => {
                let regional = named.entries();
                if regional.len() < pair_count {
                    return Err(DomainError::insufficient_entries(format!(
                        "Region {named} has only {} entries, cannot build {pair_count} pairs",
                        regional.len()
                    )));
                }
                let mut rng = self.rng.lock();
                let entries = sample(regional, pair_count, &mut *rng)?;
                (build_deck(&entries, &mut *rng)?, random_id(&mut *rng))
            }
        };

        let mut session = Session::new(id, cards);
        while !self.store.insert(session.clone()) {
            session.id = random_id(&mut *self.rng.lock());
        }

        info!(
            session_id = %session.id,
            region = %region,
            pair_count,
            "session_started"
        );
        Ok(session)
    }

    /// Current state of a session, or `None` for unknown ids.
    pub fn get_session(&self, session_id: &str) -> Option<Session> {
        self.store.snapshot(session_id)
    }

    /// Apply one pairing attempt under the session's lock.
    pub fn resolve_pair(
        &self,
        session_id: &str,
        card_ids: &[String],
    ) -> Result<PairResult, DomainError> {
        let result = self
            .store
            .with_session_mut(session_id, |session| {
                let outcome = resolve_pair(session, card_ids)?;
                Ok::<_, DomainError>(PairResult {
                    is_match: outcome.is_match,
                    move_count: outcome.move_count,
                    message: outcome.message().to_string(),
                    is_session_over: outcome.is_session_over,
                    cards: session.cards.clone(),
                })
            })
            .ok_or_else(|| DomainError::session_not_found(session_id))?;

        match &result {
            Ok(pair) => {
                debug!(
                    session_id,
                    is_match = pair.is_match,
                    move_count = pair.move_count,
                    "pair_resolved"
                );
                if pair.is_match && pair.is_session_over {
                    info!(session_id, move_count = pair.move_count, "session_completed");
                }
            }
            Err(err) => debug!(session_id, error = %err, "pair_rejected"),
        }
        result
    }

    /// Turn revealed, unmatched cards face down. `moveCount` is unchanged.
    pub fn conceal(&self, session_id: &str) -> Result<Session, DomainError> {
        self.store
            .with_session_mut(session_id, |session| {
                let changed = session.conceal_unmatched();
                debug!(session_id, changed, "cards_concealed");
                session.clone()
            })
            .ok_or_else(|| DomainError::session_not_found(session_id))
    }

    /// Named regions with their catalog sizes.
    pub fn regions(&self) -> Vec<RegionSummary> {
        Region::NAMED
            .iter()
            .map(|region| RegionSummary {
                region: *region,
                size: region.entries().len(),
            })
            .collect()
    }
}

/// First `pair_count` caller entries, validated and renumbered 1..=n.
///
/// The list length is checked before `max_pairs`, so too few entries is
/// always `InsufficientEntries`.
fn select_custom(
    custom_entries: Option<Vec<CatalogEntry>>,
    pair_count: usize,
    max_pairs: usize,
) -> Result<Vec<CatalogEntry>, DomainError> {
    let supplied = custom_entries.unwrap_or_default();
    if supplied.len() < pair_count {
        return Err(DomainError::insufficient_entries(format!(
            "Custom mode requires at least {pair_count} entries, got {}",
            supplied.len()
        )));
    }
    if pair_count > max_pairs {
        return Err(DomainError::validation(
            ValidationKind::InvalidPairCount,
            format!("Custom decks are limited to {max_pairs} pairs, got {pair_count}"),
        ));
    }

    let mut seen = HashSet::with_capacity(pair_count);
    supplied
        .into_iter()
        .take(pair_count)
        .zip(1u32..)
        .map(|(entry, id)| {
            let name = entry.name.trim().to_string();
            let image_ref = entry.image_ref.trim().to_string();
            if name.is_empty() || image_ref.is_empty() {
                return Err(DomainError::validation(
                    ValidationKind::InvalidEntry,
                    format!("Custom entry {id} needs a name and an image reference"),
                ));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(DomainError::validation(
                    ValidationKind::DuplicateEntry,
                    format!("Custom entry '{name}' appears more than once"),
                ));
            }
            Ok(CatalogEntry {
                id,
                name,
                image_ref,
            })
        })
        .collect()
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("store", &self.store)
            .field("max_pairs", &self.max_pairs)
            .finish()
    }
}
