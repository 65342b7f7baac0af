//! In-memory session store.
//!
//! Sessions live in a `DashMap` keyed by session id; each session sits
//! behind its own mutex so that mutations of one session are serialized
//! while unrelated sessions proceed in parallel.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::domain::Session;

pub type SharedSession = Arc<Mutex<Session>>;

#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<String, SharedSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Store a new session. Returns `false` (and keeps the existing one)
    /// if the id is already taken.
    pub fn insert(&self, session: Session) -> bool {
        match self.sessions.entry(session.id.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => false,
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(session)));
                true
            }
        }
    }

    /// Handle to a stored session. The map shard lock is released before
    /// the caller locks the session.
    pub fn get(&self, id: &str) -> Option<SharedSession> {
        self.sessions.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Copy of the current session state.
    pub fn snapshot(&self, id: &str) -> Option<Session> {
        self.get(id).map(|shared| shared.lock().clone())
    }

    /// Run `f` with exclusive access to one session.
    pub fn with_session_mut<R>(&self, id: &str, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let shared = self.get(id)?;
        let mut guard = shared.lock();
        Some(f(&mut guard))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("sessions", &self.sessions.len())
            .finish()
    }
}
