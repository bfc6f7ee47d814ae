//! Best-score persistence
//!
//! One integer survives across runs. The backend is a small capability trait
//! so the simulation can persist through LocalStorage in the browser and an
//! in-memory store in tests and native builds. Values travel as text; an
//! absent or unparsable stored value reads as zero.

/// LocalStorage key for the persisted best score
pub const BEST_SCORE_KEY: &str = "best_score";

/// Capability interface: get/set one integer
pub trait ScoreStore {
    /// Stored best score; zero when absent or unparsable
    fn best(&self) -> u32;
    /// Overwrite the stored best score
    fn set_best(&mut self, score: u32);
}

/// Write-if-greater policy shared by every caller. Returns whether the
/// stored value changed. Never decreases the stored score.
pub fn record_score(store: &mut dyn ScoreStore, score: u32) -> bool {
    if score > store.best() {
        store.set_best(score);
        log::info!("Best score updated: {}", score);
        true
    } else {
        false
    }
}

/// In-memory store for native builds and tests. Holds the raw text form so
/// the parse-or-zero read path matches the browser backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with arbitrary raw text (tests)
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }
}

impl ScoreStore for MemoryStore {
    fn best(&self) -> u32 {
        self.raw
            .as_deref()
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }

    fn set_best(&mut self, score: u32) {
        self.raw = Some(score.to_string());
    }
}

/// Browser LocalStorage backend. Reads and writes are fire-and-forget;
/// a missing window or storage denial behaves like an empty store.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStore {
    fn best(&self) -> u32 {
        Self::storage()
            .and_then(|s| s.get_item(BEST_SCORE_KEY).ok())
            .flatten()
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }

    fn set_best(&mut self, score: u32) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(BEST_SCORE_KEY, &score.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn absent_value_reads_as_zero() {
        assert_eq!(MemoryStore::new().best(), 0);
    }

    #[test]
    fn unparsable_value_reads_as_zero() {
        assert_eq!(MemoryStore::with_raw("not a number").best(), 0);
        assert_eq!(MemoryStore::with_raw("").best(), 0);
        assert_eq!(MemoryStore::with_raw("-5").best(), 0);
    }

    #[test]
    fn whitespace_around_value_is_tolerated() {
        assert_eq!(MemoryStore::with_raw(" 17 ").best(), 17);
    }

    #[test]
    fn record_writes_only_when_strictly_greater() {
        let mut store = MemoryStore::new();
        assert!(record_score(&mut store, 10));
        assert_eq!(store.best(), 10);
        assert!(!record_score(&mut store, 10), "equal score must not write");
        assert!(!record_score(&mut store, 3));
        assert_eq!(store.best(), 10);
        assert!(record_score(&mut store, 11));
        assert_eq!(store.best(), 11);
    }

    #[test]
    fn record_is_idempotent() {
        let mut store = MemoryStore::new();
        record_score(&mut store, 25);
        let first = store.best();
        assert!(!record_score(&mut store, 25));
        assert_eq!(store.best(), first);
    }

    proptest! {
        #[test]
        fn stored_best_is_monotone(scores in proptest::collection::vec(0u32..10_000, 1..50)) {
            let mut store = MemoryStore::new();
            let mut last = store.best();
            for score in scores {
                record_score(&mut store, score);
                let now = store.best();
                prop_assert!(now >= last);
                prop_assert_eq!(now, last.max(score));
                last = now;
            }
        }
    }
}
