//! Router for the session lifecycle endpoints

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use session_tracker::SessionStore;

use crate::handlers::{heartbeat_handler, start_session_handler, stop_session_handler};

/// Create a router for the session lifecycle endpoints
///
/// The endpoints are relative to the mount point, so nesting under
/// `/_session` yields:
/// - `GET {prefix}/start`
/// - `POST {prefix}/heartbeat`
/// - `POST {prefix}/stop`
pub fn session_router(store: SessionStore) -> Router {
    session_router_no_trace(store).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Create a router for the session lifecycle endpoints without HTTP tracing
///
/// Use this if you want to add your own tracing middleware or if you don't
/// need HTTP request tracing.
pub fn session_router_no_trace(store: SessionStore) -> Router {
    Router::new()
        .route("/start", get(start_session_handler))
        .route("/heartbeat", post(heartbeat_handler))
        .route("/stop", post(stop_session_handler))
        .with_state(store)
}
