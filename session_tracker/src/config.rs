use std::sync::LazyLock;

/// Name of the CSRF token header checked on mutating endpoints.
pub const CSRF_HEADER_NAME: &str = "X-CSRF-Token";

pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SESSION_COOKIE_NAME")
        .ok()
        .unwrap_or("_tracker_session_id".to_string())
});

pub static CSRF_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("CSRF_COOKIE_NAME")
        .ok()
        .unwrap_or("_tracker_csrf_token".to_string())
});

pub static SESSION_COOKIE_MAX_AGE: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("SESSION_COOKIE_MAX_AGE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(86400) // Default to 24 hours if not set or invalid
});

/// Seconds of inactivity after which the sweeper removes a session.
pub static SESSION_IDLE_TIMEOUT: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("SESSION_IDLE_TIMEOUT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(86400)
});

/// Seconds between sweeper runs.
pub static SWEEP_INTERVAL: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("SWEEP_INTERVAL")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3600)
});
