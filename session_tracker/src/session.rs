use chrono::Utc;
use headers::Cookie;
use http::header::HeaderMap;

use crate::config::{CSRF_COOKIE_NAME, SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME};
use crate::csrf::validate_csrf_header;
use crate::errors::SessionError;
use crate::store::SessionStore;
use crate::types::SessionRecord;
use crate::utils::{gen_token, header_clear_cookie, header_set_cookie};

/// Bounded retries for the defensive `DuplicateKey` path on create.
const MAX_CREATE_ATTEMPTS: usize = 3;

/// Start (or refresh) a tracking session.
///
/// A fresh CSRF token is generated on every call. If the presented session
/// cookie resolves to a live record the record is reused: its CSRF token
/// rotates and its activity is touched, invalidating the previous token.
/// Otherwise a new session id is generated and a record created. Either
/// way both cookies are (re)issued in the returned headers, so this never
/// fails from the caller's perspective short of an entropy failure.
pub async fn start_session(
    cookies: Option<&Cookie>,
    store: &SessionStore,
) -> Result<HeaderMap, SessionError> {
    let csrf_token = gen_token()?;
    let now = Utc::now();

    let existing = cookies.and_then(|c| c.get(SESSION_COOKIE_NAME.as_str()));

    let live_id = match existing {
        Some(session_id) => store.get(session_id).await.map(|_| session_id),
        None => None,
    };

    let session_id = match live_id {
        Some(session_id) => match store.set_csrf_token(session_id, &csrf_token, now).await {
            Ok(()) => {
                tracing::debug!("Reusing existing session, CSRF token rotated");
                session_id.to_string()
            }
            // The record can vanish between the liveness check and the
            // rotation (sweeper or a concurrent stop); start must still
            // yield a live session, so fall through to fresh creation.
            Err(SessionError::NotFound) => {
                tracing::debug!("Session deleted before rotation, creating a new one");
                create_new_session(store, &csrf_token, now).await?
            }
            Err(e) => return Err(e),
        },
        None => create_new_session(store, &csrf_token, now).await?,
    };

    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.as_str(),
        &session_id,
        *SESSION_COOKIE_MAX_AGE as i64,
        true,
    )?;
    header_set_cookie(
        &mut headers,
        CSRF_COOKIE_NAME.as_str(),
        &csrf_token,
        *SESSION_COOKIE_MAX_AGE as i64,
        false, // client script reads this to set the CSRF header
    )?;

    Ok(headers)
}

async fn create_new_session(
    store: &SessionStore,
    csrf_token: &str,
    now: chrono::DateTime<Utc>,
) -> Result<String, SessionError> {
    for attempt in 1..=MAX_CREATE_ATTEMPTS {
        let session_id = gen_token()?;
        match store
            .create(&session_id, SessionRecord::new(csrf_token.to_string(), now))
            .await
        {
            Ok(()) => {
                tracing::debug!("Created new session (attempt {})", attempt);
                return Ok(session_id);
            }
            Err(SessionError::DuplicateKey) => {
                tracing::warn!("Session id collision, regenerating (attempt {})", attempt);
            }
            Err(e) => return Err(e),
        }
    }
    Err(SessionError::DuplicateKey)
}

/// Record client activity on a live session.
///
/// Validated in header mode; touches `last_activity_at` only, with no
/// cookie reissue and no token rotation.
pub async fn heartbeat(headers: &HeaderMap, store: &SessionStore) -> Result<(), SessionError> {
    let session_id = validate_csrf_header(headers, store).await?;
    store.touch(&session_id, Utc::now()).await?;
    Ok(())
}

/// Stop a session: delete its record and expire both cookies.
///
/// Validated in header mode. Once the record is gone a repeated stop fails
/// `Unauthenticated`, since the cookie no longer resolves.
pub async fn stop_session(
    headers: &HeaderMap,
    store: &SessionStore,
) -> Result<HeaderMap, SessionError> {
    let session_id = validate_csrf_header(headers, store).await?;
    store.delete(&session_id).await;

    let mut response_headers = HeaderMap::new();
    header_clear_cookie(&mut response_headers, SESSION_COOKIE_NAME.as_str(), true)?;
    header_clear_cookie(&mut response_headers, CSRF_COOKIE_NAME.as_str(), false)?;

    Ok(response_headers)
}
