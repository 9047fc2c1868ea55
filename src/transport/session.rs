//! Session registry for the streamable HTTP transport

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use uuid::Uuid;

/// Header carrying the session id
pub const SESSION_HEADER: &str = "mcp-session-id";

/// Most sessions held at once; the least recently used one is evicted past this
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// Sessions idle longer than this are dropped
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// Tracks the sessions handed out by `initialize`
#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<RwLock<HashMap<String, Instant>>>,
    max_sessions: usize,
    ttl: Duration,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::with_limits(DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_TTL)
    }
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding at most `max_sessions`, each expiring after `ttl` idle
    pub fn with_limits(max_sessions: usize, ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
            ttl,
        }
    }

    /// Allocate a new session id
    pub fn create(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let now = Instant::now();

        let mut sessions = self.sessions.write();
        sessions.retain(|_, last_seen| now.duration_since(*last_seen) < self.ttl);

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, last_seen)| **last_seen)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(oldest) => {
                    sessions.remove(&oldest);
                    tracing::debug!("Session evicted: {}", oldest);
                }
                None => break,
            }
        }

        sessions.insert(id.clone(), now);
        tracing::debug!("Session opened: {}", id);
        id
    }

    /// Whether the session is live; refreshes its idle timer
    pub fn contains(&self, id: &str) -> bool {
        let now = Instant::now();
        let mut sessions = self.sessions.write();

        match sessions.get_mut(id) {
            Some(last_seen) if now.duration_since(*last_seen) < self.ttl => {
                *last_seen = now;
                true
            }
            Some(_) => {
                sessions.remove(id);
                tracing::debug!("Session expired: {}", id);
                false
            }
            None => false,
        }
    }

    /// Terminate a session; returns false if it was not known
    pub fn remove(&self, id: &str) -> bool {
        let removed = self.sessions.write().remove(id).is_some();
        if removed {
            tracing::debug!("Session closed: {}", id);
        }
        removed
    }

    /// Number of tracked sessions
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
