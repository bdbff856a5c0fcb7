use headers::Cookie;
use http::header::{COOKIE, HeaderMap};
use subtle::ConstantTimeEq;

use crate::config::{CSRF_COOKIE_NAME, CSRF_HEADER_NAME, SESSION_COOKIE_NAME};
use crate::errors::SessionError;
use crate::store::SessionStore;

/// Extract the session id from the request's `Cookie` header, if present.
pub fn session_id_from_headers(headers: &HeaderMap) -> Result<Option<&str>, SessionError> {
    let Some(cookie_header) = headers.get(COOKIE) else {
        tracing::debug!("No cookie header found");
        return Ok(None);
    };

    let cookie_str = cookie_header.to_str().map_err(|e| {
        tracing::error!("Invalid cookie header: {}", e);
        SessionError::Header("Invalid cookie header".to_string())
    })?;

    let cookie_name = SESSION_COOKIE_NAME.as_str();

    let session_id = cookie_str.split(';').map(|s| s.trim()).find_map(|s| {
        let mut parts = s.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(k), Some(v)) if k == cookie_name => Some(v),
            _ => None,
        }
    });

    if session_id.is_none() {
        tracing::debug!("No session cookie '{}' found in cookies", cookie_name);
    }

    Ok(session_id)
}

fn tokens_match(presented: &str, expected: &str) -> bool {
    presented.as_bytes().ct_eq(expected.as_bytes()).into()
}

/// Header-mode CSRF validation, the enforced mode for mutating endpoints.
///
/// Requires the session cookie to resolve to a live record and the
/// `X-CSRF-Token` header to match the record's current token. Browsers do
/// not attach custom headers cross-site, which closes the cookie-riding
/// gap cookie-pair mode leaves open.
///
/// Returns the validated session id for the caller to act on.
pub async fn validate_csrf_header(
    headers: &HeaderMap,
    store: &SessionStore,
) -> Result<String, SessionError> {
    let session_id = session_id_from_headers(headers)?.ok_or(SessionError::Unauthenticated)?;

    let record = store
        .get(session_id)
        .await
        .ok_or(SessionError::Unauthenticated)?;

    let Some(header_token) = headers.get(CSRF_HEADER_NAME).and_then(|h| h.to_str().ok()) else {
        tracing::debug!("No CSRF token header found");
        return Err(SessionError::CsrfMissing);
    };

    if !tokens_match(header_token, &record.csrf_token) {
        tracing::debug!("CSRF token mismatch");
        return Err(SessionError::CsrfMismatch);
    }

    Ok(session_id.to_string())
}

/// Cookie-pair CSRF validation: session cookie plus a separate CSRF cookie.
///
/// Kept for embedders that validate non-mutating requests, but not wired
/// into any mutating endpoint: a CSRF cookie is sent automatically by the
/// browser, so this mode does not stop same-site cookie riding.
pub async fn validate_csrf_cookie_pair(
    cookies: &Cookie,
    store: &SessionStore,
) -> Result<String, SessionError> {
    let session_id = cookies
        .get(SESSION_COOKIE_NAME.as_str())
        .ok_or(SessionError::Unauthenticated)?;

    let record = store
        .get(session_id)
        .await
        .ok_or(SessionError::Unauthenticated)?;

    let Some(csrf_cookie) = cookies.get(CSRF_COOKIE_NAME.as_str()) else {
        tracing::debug!("No CSRF cookie found");
        return Err(SessionError::CsrfMissing);
    };

    if !tokens_match(csrf_cookie, &record.csrf_token) {
        tracing::debug!("CSRF cookie mismatch");
        return Err(SessionError::CsrfMismatch);
    }

    Ok(session_id.to_string())
}
