use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// No session cookie, or the cookie does not resolve to a live session.
    #[error("Invalid or expired session")]
    Unauthenticated,

    /// The CSRF header (or cookie, in cookie-pair mode) is absent.
    #[error("CSRF token missing")]
    CsrfMissing,

    /// A CSRF token was presented but does not match the session's token.
    #[error("CSRF token mismatch")]
    CsrfMismatch,

    /// Store miss on an operation that requires the session to exist.
    #[error("Session not found")]
    NotFound,

    /// Defensive only: the generated session id collided with a live one.
    #[error("Duplicate session id")]
    DuplicateKey,

    #[error("Header error: {0}")]
    Header(String),

    /// Error from crypto/cookie helpers
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
