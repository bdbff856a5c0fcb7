use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One anonymous tracking session, keyed in the store by its session id.
///
/// Presence in the [`SessionStore`](crate::SessionStore) is the
/// authoritative liveness signal; `active` is informational only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Rotated on every session-start call; only the latest token is valid.
    pub csrf_token: String,
    /// Set once at creation, never mutated.
    pub created_at: DateTime<Utc>,
    /// Monotonically non-decreasing while the record is live.
    pub last_activity_at: DateTime<Utc>,
    pub active: bool,
}

impl SessionRecord {
    pub fn new(csrf_token: String, now: DateTime<Utc>) -> Self {
        Self {
            csrf_token,
            created_at: now,
            last_activity_at: now,
            active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_timestamps() {
        let now = Utc::now();
        let record = SessionRecord::new("token".to_string(), now);

        assert_eq!(record.created_at, now);
        assert_eq!(record.last_activity_at, now);
        assert!(record.active);
        assert_eq!(record.csrf_token, "token");
    }

    #[test]
    fn test_record_serde_round_trip() {
        let record = SessionRecord::new("token".to_string(), Utc::now());
        let json = serde_json::to_string(&record).unwrap();
        let back: SessionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back.csrf_token, record.csrf_token);
        assert_eq!(back.created_at, record.created_at);
    }
}
