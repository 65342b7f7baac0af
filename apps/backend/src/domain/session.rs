//! Session and card state.

use serde::{Deserialize, Serialize};

/// One slot in the deck. Two cards in a deck always share a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub label: String,
    pub image_ref: String,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl Card {
    pub fn new(id: String, label: &str, image_ref: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            image_ref: image_ref.to_string(),
            is_flipped: false,
            is_matched: false,
        }
    }
}

/// One game instance. Also the wire projection `{ id, cards, moveCount }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub cards: Vec<Card>,
    pub move_count: u32,
}

impl Session {
    pub fn new(id: String, cards: Vec<Card>) -> Self {
        Self {
            id,
            cards,
            move_count: 0,
        }
    }

    /// Position of the card with `card_id`, if present.
    pub fn position(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }

    /// True once every card is matched.
    pub fn is_over(&self) -> bool {
        self.cards.iter().all(|c| c.is_matched)
    }

    pub fn pairs_matched(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    /// Turn every revealed, unmatched card face down. Returns how many
    /// cards changed.
    pub fn conceal_unmatched(&mut self) -> usize {
        let mut changed = 0;
        for card in self.cards.iter_mut().filter(|c| !c.is_matched && c.is_flipped) {
            card.is_flipped = false;
            changed += 1;
        }
        changed
    }
}
