//! Process-wide session store with per-session locking.
//!
//! The store is the one shared mutable resource in the system. Lookups take a
//! read lock on the map; each session carries its own `Mutex`, so two
//! concurrent requests for the same id serialize on that session while
//! requests for different ids proceed independently. The session lock is an
//! async mutex because callers hold it across the upstream generate call.

use crate::core::role::JobRole;
use crate::session::entities::Session;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

/// In-memory map from session id to its locked [`Session`].
///
/// Sessions live for the process lifetime unless evicted by
/// [`evict_idle`](Self::evict_idle).
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a session by id.
    pub async fn get(&self, id: &str) -> Option<Arc<Mutex<Session>>> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Look up a session, creating it for `role` on first use.
    pub async fn get_or_create(&self, id: &str, role: &JobRole) -> Arc<Mutex<Session>> {
        if let Some(session) = self.get(id).await {
            return session;
        }
        let mut sessions = self.sessions.write().await;
        // Re-check under the write lock: another request may have won the race.
        sessions
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(Session::new(id, role.clone()))))
            .clone()
    }

    /// Drop a session, if present.
    pub async fn remove(&self, id: &str) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Remove sessions idle longer than `ttl`. Returns how many were dropped.
    ///
    /// A session whose lock is currently held has a request in flight and is
    /// never evicted, regardless of its timestamp.
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| match session.try_lock() {
            Ok(guard) => guard.idle_for() < ttl,
            Err(_) => true,
        });
        before - sessions.len()
    }
}
