//! Pairing engine: validate and apply a reveal-two-cards move.

use super::session::Session;
use crate::errors::domain::DomainError;

pub const MATCH_MESSAGE: &str = "It's a pair!";
pub const MISMATCH_MESSAGE: &str = "Not a pair, try again.";

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairOutcome {
    pub is_match: bool,
    pub move_count: u32,
    pub is_session_over: bool,
    /// Positions of the two touched cards in `session.cards`.
    pub positions: [usize; 2],
}

impl PairOutcome {
    pub fn message(&self) -> &'static str {
        if self.is_match {
            MATCH_MESSAGE
        } else {
            MISMATCH_MESSAGE
        }
    }
}

/// Reveal and compare two cards.
///
/// All validation runs before any mutation, so a rejected move leaves the
/// session untouched. A mismatched pair stays face up until the caller
/// conceals it. Cards already face up but unmatched may be picked again.
pub fn resolve_pair(session: &mut Session, card_ids: &[String]) -> Result<PairOutcome, DomainError> {
    let [first_id, second_id] = card_ids else {
        return Err(DomainError::invalid_move(format!(
            "Exactly two card ids are required, got {}",
            card_ids.len()
        )));
    };

    if first_id == second_id {
        return Err(DomainError::invalid_move("Both card ids are identical"));
    }

    let (Some(a), Some(b)) = (session.position(first_id), session.position(second_id)) else {
        return Err(DomainError::invalid_move(
            "Card id does not belong to this session",
        ));
    };

    if session.cards[a].is_matched || session.cards[b].is_matched {
        return Err(DomainError::invalid_move("Card is already matched"));
    }

    session.move_count += 1;
    let is_match = session.cards[a].label == session.cards[b].label;

    for pos in [a, b] {
        let card = &mut session.cards[pos];
        if is_match {
            card.is_matched = true;
            card.is_flipped = false;
        } else {
            card.is_flipped = true;
        }
    }

    Ok(PairOutcome {
        is_match,
        move_count: session.move_count,
        is_session_over: session.is_over(),
        positions: [a, b],
    })
}
