use super::pairing::{resolve_pair, MATCH_MESSAGE, MISMATCH_MESSAGE};
use super::test_helpers::{mismatched_ids, pair_ids, session_with_pairs};
use crate::errors::domain::DomainError;

#[test]
fn matching_pair_settles_both_cards() {
    let mut session = session_with_pairs(4, 1);
    let ids = pair_ids(&session, "entry-1");

    let outcome = resolve_pair(&mut session, &ids).unwrap();

    assert!(outcome.is_match);
    assert_eq!(outcome.move_count, 1);
    assert_eq!(outcome.message(), MATCH_MESSAGE);
    assert!(!outcome.is_session_over);
    for pos in outcome.positions {
        assert!(session.cards[pos].is_matched);
        assert!(!session.cards[pos].is_flipped);
    }
}

#[test]
fn mismatch_leaves_cards_face_up() {
    let mut session = session_with_pairs(4, 2);
    let ids = mismatched_ids(&session);

    let outcome = resolve_pair(&mut session, &ids).unwrap();

    assert!(!outcome.is_match);
    assert_eq!(outcome.move_count, 1);
    assert_eq!(outcome.message(), MISMATCH_MESSAGE);
    for pos in outcome.positions {
        assert!(session.cards[pos].is_flipped);
        assert!(!session.cards[pos].is_matched);
    }
}

#[test]
fn rejected_moves_do_not_mutate() {
    let mut session = session_with_pairs(3, 3);
    let before = session.clone();
    let first = session.cards[0].id.clone();

    let bad_inputs: Vec<Vec<String>> = vec![
        vec![],
        vec![first.clone()],
        vec![first.clone(), first.clone()],
        vec![first.clone(), "missing".to_string()],
        vec!["missing".to_string(), first.clone()],
        vec![first.clone(), session.cards[1].id.clone(), session.cards[2].id.clone()],
    ];

    for ids in bad_inputs {
        let err = resolve_pair(&mut session, &ids).unwrap_err();
        assert!(matches!(err, DomainError::InvalidMove(_)), "{ids:?}");
        assert_eq!(session, before);
    }
}

#[test]
fn matched_pair_is_rejected_every_time() {
    let mut session = session_with_pairs(3, 4);
    let ids = pair_ids(&session, "entry-2");
    resolve_pair(&mut session, &ids).unwrap();
    let after_match = session.clone();

    for _ in 0..3 {
        let err = resolve_pair(&mut session, &ids).unwrap_err();
        assert!(matches!(err, DomainError::InvalidMove(_)));
        assert_eq!(session, after_match);
    }
}

#[test]
fn matched_card_with_unmatched_partner_is_rejected() {
    let mut session = session_with_pairs(3, 5);
    let matched = pair_ids(&session, "entry-1");
    resolve_pair(&mut session, &matched).unwrap();

    let other = pair_ids(&session, "entry-3");
    let err = resolve_pair(&mut session, &[matched[0].clone(), other[0].clone()]).unwrap_err();
    assert!(matches!(err, DomainError::InvalidMove(_)));
    assert_eq!(session.move_count, 1);
}

#[test]
fn face_up_unmatched_cards_can_be_picked_again() {
    let mut session = session_with_pairs(3, 6);
    let ids = mismatched_ids(&session);
    resolve_pair(&mut session, &ids).unwrap();

    let outcome = resolve_pair(&mut session, &ids).unwrap();
    assert!(!outcome.is_match);
    assert_eq!(outcome.move_count, 2);
}

#[test]
fn final_pair_ends_the_session() {
    let mut session = session_with_pairs(3, 7);
    let mut last = None;
    for n in 1..=3 {
        let ids = pair_ids(&session, &format!("entry-{n}"));
        last = Some(resolve_pair(&mut session, &ids).unwrap());
    }

    let outcome = last.unwrap();
    assert!(outcome.is_match);
    assert!(outcome.is_session_over);
    assert_eq!(outcome.move_count, 3);
    assert!(session.is_over());
}
