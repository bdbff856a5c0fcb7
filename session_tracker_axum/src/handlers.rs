use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
};
use axum_extra::{TypedHeader, headers};
use serde_json::{Value, json};

use session_tracker::{SessionStore, heartbeat, start_session, stop_session};

use crate::error::IntoResponseError;

/// Start (or refresh) a tracking session.
///
/// Never fails from the client's perspective: an unknown or absent session
/// cookie simply produces a fresh session. Both cookies are (re)issued.
pub(super) async fn start_session_handler(
    State(store): State<SessionStore>,
    cookies: Option<TypedHeader<headers::Cookie>>,
) -> Result<(HeaderMap, Json<Value>), (StatusCode, String)> {
    let headers = start_session(cookies.as_ref().map(|TypedHeader(c)| c), &store)
        .await
        .into_response_error()?;

    Ok((
        headers,
        Json(json!({"status": "success", "message": "Session started"})),
    ))
}

/// Record activity on a live session.
///
/// The CSRF guard runs first; a rejected request performs no store
/// mutation. 401 without a live session, 403 on a missing or wrong
/// `X-CSRF-Token` header.
pub(super) async fn heartbeat_handler(
    State(store): State<SessionStore>,
    headers: HeaderMap,
) -> Result<Json<Value>, (StatusCode, String)> {
    heartbeat(&headers, &store).await.into_response_error()?;

    Ok(Json(
        json!({"status": "success", "message": "Heartbeat received"}),
    ))
}

/// Stop a session, deleting its record and expiring both cookies.
pub(super) async fn stop_session_handler(
    State(store): State<SessionStore>,
    headers: HeaderMap,
) -> Result<(HeaderMap, Json<Value>), (StatusCode, String)> {
    let response_headers = stop_session(&headers, &store).await.into_response_error()?;

    Ok((
        response_headers,
        Json(json!({"status": "success", "message": "Session stopped"})),
    ))
}
