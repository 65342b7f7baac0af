use actix_web::test;
use memory_backend::infra::state::build_state;
use serde_json::{json, Value};

use crate::support::create_test_app;
use crate::support::game_helpers::{get, start_session};

#[actix_web::test]
async fn health_reports_version_and_session_count() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_seed(41).build()?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let resp = get(&app, "/health").await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["appVersion"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["sessions"], 0);
    assert!(body["time"].as_str().is_some_and(|t| t.contains('T')));

    start_session(&app, json!({ "region": "kanto", "pairCount": 2 })).await;

    let resp = get(&app, "/health").await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["sessions"], 1);
    Ok(())
}
