use actix_web::test;
use memory_backend::infra::state::build_state;
use serde_json::{json, Value};

use crate::common::assert_problem_details_structure;
use crate::support::create_test_app;
use crate::support::game_helpers::{check, get, mismatched_pair, post_json, start_session};

#[actix_web::test]
async fn state_returns_the_stored_session() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_seed(31).build()?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let started = start_session(&app, json!({ "region": "johto", "pairCount": 4 })).await;
    let session_id = started["id"].as_str().expect("id");

    let resp = get(&app, &format!("/game/state/{session_id}")).await;
    assert_eq!(resp.status().as_u16(), 200);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, started);
    Ok(())
}

#[actix_web::test]
async fn state_for_unknown_session_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_seed(32).build()?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let resp = get(&app, "/game/state/no-such-session").await;
    assert_problem_details_structure(
        resp,
        404,
        "SESSION_NOT_FOUND",
        "Session no-such-session not found",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn conceal_turns_mismatched_cards_back_down() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_seed(33).build()?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let session = start_session(&app, json!({ "region": "hoenn", "pairCount": 4 })).await;
    let session_id = session["id"].as_str().expect("id").to_string();
    let (a, b) = mismatched_pair(&session);

    let resp = check(&app, &session_id, &a, &b).await;
    let body: Value = test::read_body_json(resp).await;
    let flipped = body["cards"]
        .as_array()
        .expect("cards")
        .iter()
        .filter(|c| c["isFlipped"] == true)
        .count();
    assert_eq!(flipped, 2, "a mismatched pair stays face up");

    let resp = post_json(&app, "/game/conceal", json!({ "sessionId": session_id })).await;
    assert_eq!(resp.status().as_u16(), 200);
    let concealed: Value = test::read_body_json(resp).await;
    assert_eq!(concealed["moveCount"], 1);
    assert!(concealed["cards"]
        .as_array()
        .expect("cards")
        .iter()
        .all(|c| c["isFlipped"] == false));
    Ok(())
}

#[actix_web::test]
async fn conceal_unknown_session_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_seed(34).build()?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let resp = post_json(&app, "/game/conceal", json!({ "sessionId": "ghost" })).await;
    assert_problem_details_structure(resp, 404, "SESSION_NOT_FOUND", "Session ghost not found")
        .await;
    Ok(())
}
