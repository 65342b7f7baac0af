//! Domain layer: pure game logic types and helpers.

pub mod catalog;
mod catalog_data;
pub mod deck;
pub mod pairing;
pub mod session;

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests_pairing;

// Re-exports for ergonomics
pub use catalog::{catalog, CatalogEntry, Region};
pub use deck::{build_deck, sample, shuffle};
pub use pairing::{resolve_pair, PairOutcome};
pub use session::{Card, Session};
