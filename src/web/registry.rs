//! Session Registry
//!
//! One `PaginationSession` per open gallery page.

use crate::session::state::PaginationSession;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Random identifier handed to a page when it opens a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

struct SessionEntry {
    session: Arc<PaginationSession>,
    last_seen: Instant,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            session: Arc::new(PaginationSession::new()),
            last_seen: Instant::now(),
        }
    }
}

/// Live sessions. Pages that vanish without closing theirs are evicted once
/// idle for longer than the configured limit.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<SessionId, SessionEntry>,
}

impl SessionRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Registers a fresh session and returns its id.
    pub fn open(&self) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id.clone(), SessionEntry::new());
        id
    }

    /// Looks up a session and marks it as seen. The returned handle outlives
    /// the map entry lock.
    pub fn get(&self, id: &SessionId) -> Option<Arc<PaginationSession>> {
        self.sessions.get_mut(id).map(|mut entry| {
            entry.last_seen = Instant::now();
            entry.session.clone()
        })
    }

    pub fn close(&self, id: &SessionId) -> bool {
        self.sessions.remove(id).is_some()
    }

    /// Drops every session not seen within `max_idle`. Returns how many went.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| entry.last_seen.elapsed() < max_idle);
        before.saturating_sub(self.sessions.len())
    }

    /// Runs `evict_idle` every `every` until the runtime shuts down.
    pub fn spawn_sweeper(self: Arc<Self>, every: Duration, max_idle: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);

            loop {
                interval.tick().await;
                let evicted = self.evict_idle(max_idle);
                if evicted > 0 {
                    tracing::info!(
                        "Evicted {} idle sessions, {} still open",
                        evicted,
                        self.len()
                    );
                }
            }
        })
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
