//! Capped, newest-first result history.

use std::sync::Arc;

use vf_core::{HISTORY_LIMIT, PredictionResult};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Key holding the serialized history snapshot.
pub const HISTORY_KEY: &str = "verifact-history";

/// Ordered history of past results, newest first, never longer than
/// [`HISTORY_LIMIT`].
///
/// The in-memory sequence is authoritative for the session. Every mutation
/// rewrites the full snapshot under [`HISTORY_KEY`].
pub struct HistoryStore {
    store: Arc<dyn KeyValueStore>,
    entries: Vec<PredictionResult>,
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl HistoryStore {
    /// Load the persisted snapshot.
    ///
    /// A missing snapshot yields an empty history. An unreadable or malformed
    /// snapshot is logged and also yields an empty history.
    #[must_use]
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let entries = match store.get(HISTORY_KEY) {
            Ok(Some(raw)) => parse_snapshot(&raw),
            Ok(None) => Vec::new(),
            Err(error) => {
                tracing::warn!(%error, "failed to read history snapshot; starting empty");
                Vec::new()
            }
        };
        Self { store, entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[PredictionResult] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn newest(&self) -> Option<&PredictionResult> {
        self.entries.first()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&PredictionResult> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Insert `result` at the front, evict anything past the cap, and persist.
    ///
    /// The in-memory history is updated even when persisting fails.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the snapshot cannot be written.
    pub fn prepend(&mut self, result: PredictionResult) -> Result<(), StoreError> {
        self.entries.insert(0, result);
        self.entries.truncate(HISTORY_LIMIT);
        self.persist()
    }

    /// Delete the persisted snapshot entirely, then empty the history.
    ///
    /// Returns how many entries were removed. Memory is left untouched when
    /// the key cannot be removed, so it keeps matching the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the snapshot key cannot be removed.
    pub fn clear(&mut self) -> Result<usize, StoreError> {
        self.store.remove(HISTORY_KEY)?;
        let removed = self.entries.len();
        self.entries.clear();
        Ok(removed)
    }

    fn persist(&self) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(&self.entries)?;
        self.store.set(HISTORY_KEY, &encoded)
    }
}

fn parse_snapshot(raw: &str) -> Vec<PredictionResult> {
    match serde_json::from_str::<Vec<PredictionResult>>(raw) {
        Ok(mut entries) => {
            entries.truncate(HISTORY_LIMIT);
            entries
        }
        Err(error) => {
            tracing::warn!(%error, "malformed history snapshot; starting empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use vf_core::{ArticleInput, Verdict};

    fn result(n: i64) -> PredictionResult {
        PredictionResult::new(
            n.to_string(),
            ArticleInput::new(format!("Title {n}"), "Author", "x".repeat(60)),
            if n % 2 == 0 { Verdict::Real } else { Verdict::Fake },
            85,
            Utc.timestamp_millis_opt(1_700_000_000_000 + n).unwrap(),
        )
    }

    fn ids(history: &HistoryStore) -> Vec<String> {
        history.entries().iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn empty_store_loads_empty() {
        let history = HistoryStore::load(Arc::new(MemoryStore::new()));
        assert!(history.is_empty());
        assert!(history.newest().is_none());
    }

    #[test]
    fn prepend_puts_newest_first() {
        let mut history = HistoryStore::load(Arc::new(MemoryStore::new()));
        history.prepend(result(1)).unwrap();
        history.prepend(result(2)).unwrap();
        assert_eq!(ids(&history), vec!["2", "1"]);
        assert_eq!(history.newest().map(|e| e.id.as_str()), Some("2"));
    }

    #[test]
    fn eleventh_insert_evicts_oldest() {
        let mut history = HistoryStore::load(Arc::new(MemoryStore::new()));
        for n in 1..=11 {
            history.prepend(result(n)).unwrap();
        }
        assert_eq!(history.len(), HISTORY_LIMIT);
        let expected: Vec<String> = (2..=11).rev().map(|n: i64| n.to_string()).collect();
        assert_eq!(ids(&history), expected);
        assert!(history.find("1").is_none());
    }

    #[test]
    fn prepend_persists_snapshot() {
        let store = Arc::new(MemoryStore::new());
        let mut history = HistoryStore::load(store.clone());
        history.prepend(result(7)).unwrap();

        let raw = store.get(HISTORY_KEY).unwrap().expect("snapshot written");
        let persisted: Vec<PredictionResult> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, history.entries().to_vec());
    }

    #[test]
    fn reload_roundtrips_entries() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut history = HistoryStore::load(store.clone());
        for n in 1..=4 {
            history.prepend(result(n)).unwrap();
        }

        let reloaded = HistoryStore::load(store);
        assert_eq!(reloaded.entries(), history.entries());
    }

    #[test]
    fn malformed_snapshot_loads_empty() {
        let store = MemoryStore::with_entries([(HISTORY_KEY, "{not json")]);
        let history = HistoryStore::load(Arc::new(store));
        assert!(history.is_empty());
    }

    #[test]
    fn oversized_snapshot_is_truncated() {
        let entries: Vec<PredictionResult> = (1..=14).map(result).collect();
        let raw = serde_json::to_string(&entries).unwrap();
        let store = MemoryStore::with_entries([(HISTORY_KEY, raw.as_str())]);
        let history = HistoryStore::load(Arc::new(store));
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.newest().map(|e| e.id.as_str()), Some("1"));
    }

    /// Delegates to a memory store but refuses to delete keys.
    struct UndeletableStore(MemoryStore);

    impl KeyValueStore for UndeletableStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get(key)
        }
        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.set(key, value)
        }
        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
    }

    #[test]
    fn failed_clear_keeps_memory_in_sync_with_snapshot() {
        let store: Arc<dyn KeyValueStore> = Arc::new(UndeletableStore(MemoryStore::new()));
        let mut history = HistoryStore::load(Arc::clone(&store));
        for n in 1..=3 {
            history.prepend(result(n)).unwrap();
        }

        assert!(history.clear().is_err());

        assert_eq!(history.len(), 3);
        assert!(history.find("2").is_some());
        assert_eq!(HistoryStore::load(store).entries(), history.entries());
    }

    #[test]
    fn clear_removes_key() {
        let store = Arc::new(MemoryStore::new());
        let mut history = HistoryStore::load(store.clone());
        for n in 1..=3 {
            history.prepend(result(n)).unwrap();
        }

        assert_eq!(history.clear().unwrap(), 3);
        assert!(history.is_empty());
        assert!(!store.contains(HISTORY_KEY));
    }
}
