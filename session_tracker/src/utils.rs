use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use http::header::{HeaderMap, SET_COOKIE};
use ring::rand::SecureRandom;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Cookie error: {0}")]
    Cookie(String),
}

/// Generate an opaque URL-safe token with 256 bits of entropy.
///
/// Tokens serve as both session identifiers and CSRF tokens; uniqueness
/// rests on entropy width, not on checking the store. An entropy-source
/// failure is not a recoverable condition for callers.
pub fn gen_token() -> Result<String, UtilError> {
    let rng = ring::rand::SystemRandom::new();
    let mut bytes = [0u8; 32];
    rng.fill(&mut bytes)
        .map_err(|_| UtilError::Crypto("Failed to generate random token".to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Append a `Set-Cookie` header for `name=value`.
///
/// The session cookie is `HttpOnly`; the CSRF cookie is not, since client
/// script must read it to populate the CSRF request header.
pub(crate) fn header_set_cookie<'a>(
    headers: &'a mut HeaderMap,
    name: &str,
    value: &str,
    max_age: i64,
    http_only: bool,
) -> Result<&'a HeaderMap, UtilError> {
    let http_only_attr = if http_only { " HttpOnly;" } else { "" };
    let cookie =
        format!("{name}={value}; SameSite=Lax; Secure;{http_only_attr} Path=/; Max-Age={max_age}");
    tracing::trace!("Set-Cookie: {}", cookie);
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| UtilError::Cookie("Failed to parse cookie".to_string()))?,
    );
    Ok(headers)
}

/// Append a `Set-Cookie` header that expires the named cookie.
pub(crate) fn header_clear_cookie<'a>(
    headers: &'a mut HeaderMap,
    name: &str,
    http_only: bool,
) -> Result<&'a HeaderMap, UtilError> {
    header_set_cookie(headers, name, "", -86400, http_only)
}
