//! Deck building: two cards per entry, uniformly shuffled.

use rand::Rng;
use uuid::{Builder, Uuid};

use super::catalog::CatalogEntry;
use super::session::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// Fisher-Yates shuffle; every permutation equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Uniform sample of `count` items without replacement (shuffle-then-take
/// on a copy).
pub fn sample<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    count: usize,
    rng: &mut R,
) -> Result<Vec<T>, DomainError> {
    if count > items.len() {
        return Err(DomainError::insufficient_entries(format!(
            "Cannot sample {count} entries from {}",
            items.len()
        )));
    }
    let mut copy = items.to_vec();
    shuffle(&mut copy, rng);
    copy.truncate(count);
    Ok(copy)
}

/// Random v4 UUID drawn from `rng`, so seeded RNGs give reproducible ids.
pub fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes[..]);
    let id: Uuid = Builder::from_random_bytes(bytes).into_uuid();
    id.to_string()
}

/// Build a shuffled deck with two face-down cards per entry.
pub fn build_deck<R: Rng + ?Sized>(
    entries: &[CatalogEntry],
    rng: &mut R,
) -> Result<Vec<Card>, DomainError> {
    if entries.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::EmptyDeck,
            "Cannot build a deck from an empty entry list",
        ));
    }

    let mut deck = Vec::with_capacity(entries.len() * 2);
    for entry in entries {
        for _ in 0..2 {
            deck.push(Card::new(random_id(rng), &entry.name, &entry.image_ref));
        }
    }

    shuffle(&mut deck, rng);
    Ok(deck)
}
