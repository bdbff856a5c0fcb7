//! Anonymous tracking-session management with CSRF protection.
//!
//! This crate owns the session lifecycle for a single server process:
//! issuing, refreshing and expiring opaque anonymous sessions, and
//! validating that mutating requests carry a CSRF proof matching the
//! session's current token. All state lives in an in-memory
//! [`SessionStore`]; a process restart invalidates every session and
//! clients recover by calling session-start again.
//!
//! The crate is transport-agnostic apart from `http`/`headers` types:
//! handlers get a [`SessionStore`] handle plus the request's headers or
//! cookies, and receive back a `HeaderMap` of `Set-Cookie` headers to
//! attach to the response. See the `session-tracker-axum` crate for the
//! axum wiring.

mod config;
mod csrf;
mod errors;
mod session;
mod store;
mod sweeper;
mod types;
mod utils;

pub use config::{
    CSRF_COOKIE_NAME, CSRF_HEADER_NAME, SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME,
    SESSION_IDLE_TIMEOUT, SWEEP_INTERVAL,
};
pub use csrf::{session_id_from_headers, validate_csrf_cookie_pair, validate_csrf_header};
pub use errors::SessionError;
pub use session::{heartbeat, start_session, stop_session};
pub use store::SessionStore;
pub use sweeper::spawn_sweeper;
pub use types::SessionRecord;
pub use utils::{UtilError, gen_token};
