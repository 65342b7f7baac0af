use actix_web::test;
use memory_backend::infra::state::build_state;
use serde_json::{json, Value};

use crate::support::create_test_app;
use crate::support::game_helpers::get;

#[actix_web::test]
async fn regions_lists_named_regions_with_sizes() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build()?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let resp = get(&app, "/game/regions").await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(
        body,
        json!([
            { "region": "kanto", "size": 151 },
            { "region": "johto", "size": 100 },
            { "region": "hoenn", "size": 135 },
            { "region": "sinnoh", "size": 107 }
        ])
    );
    Ok(())
}
