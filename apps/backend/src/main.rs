use actix_web::{web, App, HttpServer};
use memory_backend::config::{GameConfig, ServerConfig};
use memory_backend::infra::state::build_state;
use memory_backend::middleware::cors::cors_middleware;
use memory_backend::middleware::request_trace::RequestTrace;
use memory_backend::middleware::structured_logger::StructuredLogger;
use memory_backend::middleware::trace_span::TraceSpan;
use memory_backend::routes;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let server = match ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            eprintln!("❌ Invalid server configuration: {e}");
            std::process::exit(1);
        }
    };

    let game = match GameConfig::from_env() {
        Ok(game) => game,
        Err(e) => {
            eprintln!("❌ Invalid game configuration: {e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_game_config(game).build() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!(
        host = %server.host,
        port = server.port,
        default_pairs = app_state.game.default_pairs,
        max_pairs = app_state.game.max_pairs,
        seeded = app_state.game.rng_seed.is_some(),
        "memory_backend_starting"
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
