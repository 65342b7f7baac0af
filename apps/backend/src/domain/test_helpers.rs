//! Shared builders for domain unit tests.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::catalog::CatalogEntry;
use super::deck::build_deck;
use super::session::Session;

pub fn entries(n: usize) -> Vec<CatalogEntry> {
    (1..=n as u32)
        .map(|id| CatalogEntry {
            id,
            name: format!("entry-{id}"),
            image_ref: format!("https://img.test/{id}.png"),
        })
        .collect()
}

pub fn session_with_pairs(n: usize, seed: u64) -> Session {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let cards = build_deck(&entries(n), &mut rng).expect("non-empty entries");
    Session::new("test-session".to_string(), cards)
}

/// Ids of the two cards carrying `label`.
pub fn pair_ids(session: &Session, label: &str) -> Vec<String> {
    session
        .cards
        .iter()
        .filter(|c| c.label == label)
        .map(|c| c.id.clone())
        .collect()
}

/// Two ids whose labels differ.
pub fn mismatched_ids(session: &Session) -> Vec<String> {
    let first = &session.cards[0];
    let other = session
        .cards
        .iter()
        .find(|c| c.label != first.label)
        .expect("deck has at least two labels");
    vec![first.id.clone(), other.id.clone()]
}
