use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::RwLock;

use crate::session::SessionId;

/// Sessions idle for longer than this are forgotten.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug)]
struct SessionEntry {
    courses: HashSet<String>,
    last_seen: Instant,
}

impl SessionEntry {
    fn new(now: Instant) -> Self {
        Self {
            courses: HashSet::new(),
            last_seen: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    enrollments: Arc<RwLock<HashMap<SessionId, SessionEntry>>>, // cloning shares the map
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            enrollments: Arc::default(),
            ttl,
        }
    }

    /// Returns `true` when the session was not enrolled yet.
    ///
    /// Sessions idle for longer than the store's ttl are dropped first.
    pub async fn enroll(&self, session: SessionId, course_id: &str) -> bool {
        self.enroll_at(session, course_id, Instant::now()).await
    }

    async fn enroll_at(&self, session: SessionId, course_id: &str, now: Instant) -> bool {
        let mut guard = self.enrollments.write().await;
        let evicted = prune_stale(&mut guard, now, self.ttl);
        if evicted > 0 {
            tracing::debug!(evicted, "dropped idle sessions");
        }

        let entry = guard
            .entry(session)
            .or_insert_with(|| SessionEntry::new(now));
        entry.last_seen = now;
        let inserted = entry.courses.insert(course_id.to_string());

        tracing::debug!(%session, course_id, inserted, "enroll");
        inserted
    }

    /// Returns `true` when the session was enrolled.
    pub async fn unenroll(&self, session: SessionId, course_id: &str) -> bool {
        let mut guard = self.enrollments.write().await;
        let removed = match guard.get_mut(&session) {
            Some(entry) => {
                let removed = entry.courses.remove(course_id);
                entry.last_seen = Instant::now();
                if entry.courses.is_empty() {
                    guard.remove(&session);
                }
                removed
            }
            None => false,
        };

        tracing::debug!(%session, course_id, removed, "unenroll");
        removed
    }

    pub async fn is_enrolled(&self, session: SessionId, course_id: &str) -> bool {
        self.enrollments
            .read()
            .await
            .get(&session)
            .is_some_and(|entry| entry.courses.contains(course_id))
    }

    pub async fn enrolled(&self, session: SessionId) -> HashSet<String> {
        self.enrollments
            .read()
            .await
            .get(&session)
            .map(|entry| entry.courses.clone())
            .unwrap_or_default()
    }

    pub async fn session_count(&self) -> usize {
        self.enrollments.read().await.len()
    }
}

fn prune_stale(map: &mut HashMap<SessionId, SessionEntry>, now: Instant, ttl: Duration) -> usize {
    let before = map.len();
    map.retain(|_, entry| now.saturating_duration_since(entry.last_seen) <= ttl);
    before - map.len()
}
