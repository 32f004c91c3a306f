//! In-memory cache of rendered listing views.
//!
//! Entries are keyed by view path and owner, so one owner's listing never
//! serves another's. Writers call [`ViewCache::invalidate`] with the path of
//! every view they make stale; readers fall back to the database on a miss.
//!
//! A reader takes [`ViewCache::epoch`] before querying and hands it back to
//! [`ViewCache::insert`]. If an invalidation ran in between, the snapshot may
//! predate the write that caused it and is not stored.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

struct CachedView {
    body: serde_json::Value,
    stored_at: Instant,
}

/// TTL-bounded cache of JSON view bodies.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared through [`AppState`](crate::state::AppState).
pub struct ViewCache {
    ttl: Duration,
    entries: RwLock<HashMap<(String, String), CachedView>>,
    /// Bumped by every invalidation, only while the write lock is held.
    epoch: AtomicU64,
}

impl ViewCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
            epoch: AtomicU64::new(0),
        }
    }

    /// Current invalidation epoch. Read it before building a body to insert.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Return the cached body for `(path, owner_id)` if present and fresh.
    pub async fn get(&self, path: &str, owner_id: &str) -> Option<serde_json::Value> {
        let entries = self.entries.read().await;
        entries
            .get(&(path.to_string(), owner_id.to_string()))
            .filter(|view| view.stored_at.elapsed() < self.ttl)
            .map(|view| view.body.clone())
    }

    /// Store a body for `(path, owner_id)`, evicting expired entries.
    ///
    /// `seen_epoch` is the [`epoch`](Self::epoch) read before the body was
    /// built. Returns `false` without storing if an invalidation has run
    /// since then.
    pub async fn insert(
        &self,
        path: &str,
        owner_id: &str,
        body: serde_json::Value,
        seen_epoch: u64,
    ) -> bool {
        let mut entries = self.entries.write().await;
        if self.epoch.load(Ordering::SeqCst) != seen_epoch {
            tracing::debug!(path, owner_id, "Skipped caching view built before invalidation");
            return false;
        }
        let ttl = self.ttl;
        entries.retain(|_, view| view.stored_at.elapsed() < ttl);
        entries.insert(
            (path.to_string(), owner_id.to_string()),
            CachedView {
                body,
                stored_at: Instant::now(),
            },
        );
        true
    }

    /// Mark the view at `path` stale for every owner.
    ///
    /// Returns the number of entries dropped.
    pub async fn invalidate(&self, path: &str) -> usize {
        let mut entries = self.entries.write().await;
        self.epoch.fetch_add(1, Ordering::SeqCst);
        let before = entries.len();
        entries.retain(|(cached_path, _), _| cached_path != path);
        let dropped = before - entries.len();
        tracing::debug!(path, dropped, "Invalidated cached view");
        dropped
    }

    /// Number of stored entries, fresh or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const PATH: &str = "/dashboard/forms";

    #[tokio::test]
    async fn get_returns_inserted_body() {
        let cache = ViewCache::new(Duration::from_secs(60));
        cache.insert(PATH, "alice", json!([1, 2]), 0).await;

        assert_eq!(cache.get(PATH, "alice").await, Some(json!([1, 2])));
        assert_eq!(cache.get(PATH, "bob").await, None);
        assert_eq!(cache.get("/other", "alice").await, None);
    }

    #[tokio::test]
    async fn insert_after_interleaved_invalidate_is_skipped() {
        let cache = ViewCache::new(Duration::from_secs(60));

        // Reader snapshots the epoch and starts its query...
        let seen = cache.epoch();
        // ...a writer persists a form and invalidates meanwhile...
        cache.invalidate(PATH).await;
        // ...so the reader's stale body must not be cached.
        assert!(!cache.insert(PATH, "alice", json!([]), seen).await);
        assert_eq!(cache.get(PATH, "alice").await, None);

        // A reader that started after the invalidation caches normally.
        let seen = cache.epoch();
        assert!(cache.insert(PATH, "alice", json!([1]), seen).await);
        assert_eq!(cache.get(PATH, "alice").await, Some(json!([1])));
    }

    #[tokio::test]
    async fn invalidate_drops_every_owner_for_path() {
        let cache = ViewCache::new(Duration::from_secs(60));
        cache.insert(PATH, "alice", json!([]), 0).await;
        cache.insert(PATH, "bob", json!([]), 0).await;
        cache.insert("/dashboard/settings", "alice", json!({}), 0).await;

        assert_eq!(cache.invalidate(PATH).await, 2);
        assert_eq!(cache.get(PATH, "alice").await, None);
        assert_eq!(cache.get(PATH, "bob").await, None);
        assert!(cache.get("/dashboard/settings", "alice").await.is_some());
    }

    #[tokio::test]
    async fn invalidate_unknown_path_is_noop() {
        let cache = ViewCache::new(Duration::from_secs(60));
        assert!(cache.is_empty().await);
        assert_eq!(cache.invalidate(PATH).await, 0);
    }

    #[tokio::test]
    async fn expired_entries_are_not_served() {
        let cache = ViewCache::new(Duration::ZERO);
        cache.insert(PATH, "alice", json!([]), 0).await;

        assert_eq!(cache.get(PATH, "alice").await, None);
    }

    #[tokio::test]
    async fn insert_evicts_expired_entries() {
        let cache = ViewCache::new(Duration::ZERO);
        cache.insert(PATH, "alice", json!([]), 0).await;
        cache.insert(PATH, "bob", json!([]), 0).await;

        assert_eq!(cache.len().await, 1, "only the latest insert remains");
    }
}
