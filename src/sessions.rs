//! In-memory visitor sessions.
//!
//! Each visitor gets an opaque random id in a cookie, mapped to their own
//! `Workflow`. Nothing is persisted; idle sessions are purged after
//! `SESSION_TTL_HOURS`.

use crate::workflow::Workflow;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Session cookie name
pub const SESSION_COOKIE: &str = "mind_dump_session";

/// Idle time after which a session is dropped
pub const SESSION_TTL_HOURS: i64 = 24;

const SESSION_ID_LEN: usize = 32;

struct SessionEntry {
    workflow: Workflow,
    last_seen: DateTime<Utc>,
}

#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, SessionEntry>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh session and return its id.
    pub fn create(&self, now: DateTime<Utc>) -> String {
        let id: String = rand::thread_rng()
            .sample_iter(&rand::distributions::Alphanumeric)
            .take(SESSION_ID_LEN)
            .map(char::from)
            .collect();

        self.lock().insert(
            id.clone(),
            SessionEntry {
                workflow: Workflow::new(),
                last_seen: now,
            },
        );
        id
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Run `f` on the visitor's workflow, creating it if it was purged.
    pub fn with<R>(&self, id: &str, now: DateTime<Utc>, f: impl FnOnce(&mut Workflow) -> R) -> R {
        let mut sessions = self.lock();
        let entry = sessions
            .entry(id.to_string())
            .or_insert_with(|| SessionEntry {
                workflow: Workflow::new(),
                last_seen: now,
            });
        entry.last_seen = now;
        f(&mut entry.workflow)
    }

    /// Run `f` only if the session still exists. Does not count as activity.
    pub fn with_existing<R>(&self, id: &str, f: impl FnOnce(&mut Workflow) -> R) -> Option<R> {
        self.lock().get_mut(id).map(|entry| f(&mut entry.workflow))
    }

    /// Drop sessions idle for longer than the TTL. Returns how many were removed.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let cutoff = now - Duration::hours(SESSION_TTL_HOURS);
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_seen > cutoff);
        before - sessions.len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionEntry>> {
        // Workflow methods leave it valid between calls; poisoning is ignored
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }
}
