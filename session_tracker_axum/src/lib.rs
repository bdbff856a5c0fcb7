//! Axum wiring for the `session-tracker` library.
//!
//! Exposes [`session_router`], which mounts the session lifecycle
//! endpoints (`GET /start`, `POST /heartbeat`, `POST /stop`) over a
//! [`SessionStore`](session_tracker::SessionStore) handle supplied as
//! router state. Mutating endpoints require the CSRF token in the
//! `X-CSRF-Token` header; failures map to 401/403 at this layer.

mod error;
mod handlers;
mod router;

pub use router::{session_router, session_router_no_trace};
