use actix_web::http::StatusCode;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use memory_backend::infra::state::build_state;

use crate::common::assert_problem_details_structure;
use crate::support::create_test_app;
use crate::support::game_helpers::get;

#[actix_web::test]
async fn unknown_route_renders_problem_details() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build()?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let resp = get(&app, "/game/nowhere").await;
    assert_problem_details_structure(resp, 404, "NOT_FOUND", "No route for GET /game/nowhere")
        .await;
    Ok(())
}

#[actix_web::test]
async fn problem_title_is_humanized_code() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build()?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let resp = get(&app, "/game/state/abc").await;
    let problem = assert_problem_details_from_service_response(
        resp,
        "SESSION_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("abc"),
    )
    .await;
    assert_eq!(problem.title, "Session Not Found");
    assert_eq!(
        problem.type_,
        "https://memory-match.local/errors/SESSION_NOT_FOUND"
    );
    Ok(())
}
