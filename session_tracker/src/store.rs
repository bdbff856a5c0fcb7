use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use crate::errors::SessionError;
use crate::types::SessionRecord;

/// In-memory session store, the process's only shared mutable state.
///
/// A cheap `Clone` handle over a mutex-guarded map; one instance is created
/// at startup and threaded into the request handlers and the sweeper. Every
/// operation takes the lock for a single bounded critical section, so
/// concurrent calls never observe a torn record.
#[derive(Clone, Default)]
pub struct SessionStore {
    entry: Arc<Mutex<HashMap<String, SessionRecord>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        tracing::info!("Creating new in-memory session store");
        Self {
            entry: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Insert a new record under `session_id`.
    ///
    /// `DuplicateKey` should not occur given the token entropy; callers
    /// recover by regenerating the id and retrying.
    pub async fn create(
        &self,
        session_id: &str,
        record: SessionRecord,
    ) -> Result<(), SessionError> {
        let mut entry = self.entry.lock().await;
        if entry.contains_key(session_id) {
            tracing::warn!("Session id collision on create");
            return Err(SessionError::DuplicateKey);
        }
        entry.insert(session_id.to_string(), record);
        Ok(())
    }

    pub async fn get(&self, session_id: &str) -> Option<SessionRecord> {
        self.entry.lock().await.get(session_id).cloned()
    }

    /// Update `last_activity_at`, keeping it monotonically non-decreasing.
    pub async fn touch(&self, session_id: &str, now: DateTime<Utc>) -> Result<(), SessionError> {
        let mut entry = self.entry.lock().await;
        let record = entry.get_mut(session_id).ok_or(SessionError::NotFound)?;
        record.last_activity_at = record.last_activity_at.max(now);
        Ok(())
    }

    /// Rotate the session's CSRF token and touch its activity.
    ///
    /// Only the latest token is tracked; the previous one stops validating
    /// the moment this returns.
    pub async fn set_csrf_token(
        &self,
        session_id: &str,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        let mut entry = self.entry.lock().await;
        let record = entry.get_mut(session_id).ok_or(SessionError::NotFound)?;
        record.csrf_token = token.to_string();
        record.last_activity_at = record.last_activity_at.max(now);
        Ok(())
    }

    /// Remove a session. Idempotent: succeeds silently when already absent.
    pub async fn delete(&self, session_id: &str) {
        self.entry.lock().await.remove(session_id);
    }

    /// Remove every session idle for longer than `idle_threshold`.
    ///
    /// Candidates are snapshotted under the lock, then each is re-checked
    /// under a fresh lock acquisition before removal, so the lock is never
    /// held across the whole scan and a heartbeat landing mid-sweep keeps
    /// its session alive.
    pub async fn sweep_expired(&self, idle_threshold: Duration, now: DateTime<Utc>) -> usize {
        let cutoff = now - idle_threshold;

        let candidates: Vec<String> = {
            let entry = self.entry.lock().await;
            entry
                .iter()
                .filter(|(_, record)| record.last_activity_at < cutoff)
                .map(|(id, _)| id.clone())
                .collect()
        };

        let mut removed = 0;
        for session_id in candidates {
            let mut entry = self.entry.lock().await;
            if let Some(record) = entry.get(&session_id) {
                if record.last_activity_at < cutoff {
                    entry.remove(&session_id);
                    removed += 1;
                }
            }
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.entry.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entry.lock().await.is_empty()
    }
}
