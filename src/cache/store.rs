//! Bounded artifact storage.
//!
//! Holds completed artifacts keyed by their storage identity, with LRU
//! eviction. Expiry and invalidation policy beyond the size bound belong
//! to the embedding server; explicit drop hooks are provided for it.

use std::num::NonZeroUsize;
use std::sync::RwLock;

use lru::LruCache;

use crate::generate::Artifact;

use super::lock::{rw_read, rw_write};

const SOURCE: &str = "cache::store";

pub struct ArtifactStore {
    artifacts: RwLock<LruCache<String, Artifact>>,
}

impl ArtifactStore {
    pub fn new(limit: NonZeroUsize) -> Self {
        Self {
            artifacts: RwLock::new(LruCache::new(limit)),
        }
    }

    pub fn get(&self, key: &str) -> Option<Artifact> {
        rw_write(&self.artifacts, SOURCE, "get").get(key).cloned()
    }

    /// Store an artifact, returning the storage key evicted to make room,
    /// if any.
    pub fn insert(&self, key: String, artifact: Artifact) -> Option<String> {
        rw_write(&self.artifacts, SOURCE, "insert")
            .push(key, artifact)
            .map(|(evicted_key, _)| evicted_key)
    }

    pub fn invalidate(&self, key: &str) {
        rw_write(&self.artifacts, SOURCE, "invalidate").pop(key);
    }

    pub fn clear(&self) {
        rw_write(&self.artifacts, SOURCE, "clear").clear();
    }

    /// Number of stored artifacts.
    pub fn len(&self) -> usize {
        rw_read(&self.artifacts, SOURCE, "len").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::Arc;

    use crate::domain::Board;
    use crate::generate::BoardIndex;

    use super::*;

    fn sample_artifact(page: u32) -> Artifact {
        Artifact::BoardIndex(Arc::new(BoardIndex {
            board: Board::new(1, "lounge"),
            articles: Vec::new(),
            bottoms: Vec::new(),
            total_pages: 5,
            has_prev_page: page > 1,
            prev_page: page.saturating_sub(1),
            has_next_page: page < 5,
            next_page: page + 1,
            is_valid: true,
        }))
    }

    fn store(limit: usize) -> ArtifactStore {
        ArtifactStore::new(NonZeroUsize::new(limit).expect("limit"))
    }

    #[test]
    fn roundtrip_and_invalidate() {
        let store = store(4);
        assert!(store.get("bacheca:index/lounge/1").is_none());

        store.insert("bacheca:index/lounge/1".to_string(), sample_artifact(1));
        let cached = store.get("bacheca:index/lounge/1").expect("cached artifact");
        assert!(cached.is_valid());
        assert_eq!(store.len(), 1);

        store.invalidate("bacheca:index/lounge/1");
        assert!(store.get("bacheca:index/lounge/1").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn lru_eviction_drops_oldest() {
        let store = store(2);
        store.insert("k1".to_string(), sample_artifact(1));
        store.insert("k2".to_string(), sample_artifact(2));

        // Touch k1 so k2 becomes the eviction candidate
        assert!(store.get("k1").is_some());

        let evicted = store.insert("k3".to_string(), sample_artifact(3));
        assert_eq!(evicted.as_deref(), Some("k2"));
        assert!(store.get("k2").is_none());
        assert!(store.get("k1").is_some());
        assert!(store.get("k3").is_some());
    }

    #[test]
    fn clear_removes_everything() {
        let store = store(4);
        store.insert("k1".to_string(), sample_artifact(1));
        store.insert("k2".to_string(), sample_artifact(2));
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn recovers_from_poisoned_lock() {
        let store = store(4);

        let _ = catch_unwind(AssertUnwindSafe(|| {
            let _guard = store
                .artifacts
                .write()
                .expect("artifacts lock should be acquired");
            panic!("poison artifacts lock");
        }));

        store.insert("k1".to_string(), sample_artifact(1));
        assert!(store.get("k1").is_some());
    }
}
