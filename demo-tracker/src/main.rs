use axum::{Router, routing::get};
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use session_tracker::{SessionStore, spawn_sweeper};
use session_tracker_axum::session_router;

mod server;

use crate::server::spawn_http_server;

async fn index() -> &'static str {
    "Session tracker demo. Endpoints under /_session: GET /start, POST /heartbeat, POST /stop."
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = SessionStore::new();
    let sweeper = spawn_sweeper(store.clone());

    let app = Router::new()
        .route("/", get(index))
        .nest("/_session", session_router(store));

    let http_server = spawn_http_server(8767, app);

    tokio::try_join!(http_server, sweeper)?;
    Ok(())
}
