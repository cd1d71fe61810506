//! Statistics store
//!
//! Holds the in-memory record and writes it through to storage after every
//! change. Storage failures never abort: the in-memory record stays
//! authoritative and the caller gets a `Persisted` value to decide whether to
//! warn.

use super::record::StatsRecord;
use super::storage::StatsStorage;
use crate::game::OutcomeRecorder;

/// Storage key of the statistics record
pub const STATS_KEY: &str = "wordleStats";

/// Outcome of a persistence operation
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persisted {
    Ok,
    StorageUnavailable { reason: String },
}

impl Persisted {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    fn from_io(result: std::io::Result<()>) -> Self {
        match result {
            Ok(()) => Self::Ok,
            Err(e) => Self::StorageUnavailable {
                reason: e.to_string(),
            },
        }
    }
}

pub struct StatsStore<S: StatsStorage> {
    storage: S,
    record: StatsRecord,
}

impl<S: StatsStorage> StatsStore<S> {
    /// Store with an all-zero record; nothing is read yet
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            record: StatsRecord::default(),
        }
    }

    /// Create a store and load the persisted record
    pub fn open(storage: S) -> (Self, Persisted) {
        let mut store = Self::new(storage);
        let persisted = store.load();
        (store, persisted)
    }

    /// Replace the in-memory record with the persisted one
    ///
    /// Missing keys default to zero. If the record cannot be read or parsed the
    /// in-memory record is left unchanged.
    pub fn load(&mut self) -> Persisted {
        let raw = match self.storage.read(STATS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Persisted::Ok,
            Err(e) => {
                return Persisted::StorageUnavailable {
                    reason: e.to_string(),
                };
            }
        };

        match serde_json::from_str::<StatsRecord>(&raw) {
            Ok(record) => {
                self.record = record;
                Persisted::Ok
            }
            Err(e) => Persisted::StorageUnavailable {
                reason: format!("unreadable statistics record: {e}"),
            },
        }
    }

    /// Count a win after `attempts` guesses and persist
    pub fn record_win(&mut self, attempts: u8) -> Persisted {
        self.record.add_win(attempts);
        self.save()
    }

    /// Count a failed game and persist
    pub fn record_fail(&mut self) -> Persisted {
        self.record.add_failure();
        self.save()
    }

    /// Zero every counter and delete the persisted record
    pub fn reset(&mut self) -> Persisted {
        self.record = StatsRecord::default();
        Persisted::from_io(self.storage.remove(STATS_KEY))
    }

    fn save(&mut self) -> Persisted {
        match serde_json::to_string(&self.record) {
            Ok(json) => Persisted::from_io(self.storage.write(STATS_KEY, &json)),
            Err(e) => Persisted::StorageUnavailable {
                reason: e.to_string(),
            },
        }
    }

    #[must_use]
    pub const fn record(&self) -> &StatsRecord {
        &self.record
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: StatsStorage> OutcomeRecorder for StatsStore<S> {
    fn record_win(&mut self, attempts: u8) -> Persisted {
        Self::record_win(self, attempts)
    }

    fn record_fail(&mut self) -> Persisted {
        Self::record_fail(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{FileStorage, MemoryStorage};
    use tempfile::tempdir;

    #[test]
    fn open_without_record_starts_at_zero() {
        let (store, persisted) = StatsStore::open(MemoryStorage::new());
        assert_eq!(persisted, Persisted::Ok);
        assert_eq!(store.record(), &StatsRecord::default());
    }

    #[test]
    fn record_win_persists_immediately() {
        let mut store = StatsStore::new(MemoryStorage::new());
        assert!(store.record_win(3).is_ok());

        let saved = store.storage().get(STATS_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(saved).unwrap();
        assert_eq!(value["3"], 1);
        assert_eq!(value["fail"], 0);
    }

    #[test]
    fn record_fail_persists_immediately() {
        let mut store = StatsStore::new(MemoryStorage::new());
        assert!(store.record_fail().is_ok());
        assert_eq!(store.record().failures(), 1);
        assert!(store.storage().get(STATS_KEY).unwrap().contains(r#""fail":1"#));
    }

    #[test]
    fn load_merges_with_defaults() {
        let storage = MemoryStorage::new().with_entry(STATS_KEY, r#"{"5":2}"#);
        let (store, _) = StatsStore::open(storage);
        assert_eq!(store.record().wins(5), 2);
        assert_eq!(store.record().wins(1), 0);
        assert_eq!(store.record().failures(), 0);
    }

    #[test]
    fn load_is_idempotent() {
        let storage = MemoryStorage::new().with_entry(STATS_KEY, r#"{"1":1,"fail":4,"x":true}"#);
        let (mut store, _) = StatsStore::open(storage);
        let first = store.record().clone();
        assert!(store.load().is_ok());
        assert_eq!(store.record(), &first);
    }

    #[test]
    fn unavailable_storage_keeps_memory_authoritative() {
        let (mut store, persisted) = StatsStore::open(MemoryStorage::unavailable());
        assert!(matches!(persisted, Persisted::StorageUnavailable { .. }));

        assert!(!store.record_win(2).is_ok());
        assert!(!store.record_fail().is_ok());
        assert_eq!(store.record().wins(2), 1);
        assert_eq!(store.record().failures(), 1);
    }

    #[test]
    fn corrupt_record_falls_back_to_defaults() {
        let storage = MemoryStorage::new().with_entry(STATS_KEY, "not json");
        let (store, persisted) = StatsStore::open(storage);
        assert!(!persisted.is_ok());
        assert_eq!(store.record(), &StatsRecord::default());
    }

    #[test]
    fn reset_clears_record_and_storage() {
        let mut store = StatsStore::new(MemoryStorage::new());
        let _ = store.record_win(1);
        assert!(store.reset().is_ok());
        assert_eq!(store.record().games_played(), 0);
        assert_eq!(store.storage().get(STATS_KEY), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempdir().unwrap();

        let (mut store, _) = StatsStore::open(FileStorage::with_dir(dir.path()));
        let _ = store.record_win(4);
        let _ = store.record_fail();

        let (reopened, persisted) = StatsStore::open(FileStorage::with_dir(dir.path()));
        assert!(persisted.is_ok());
        assert_eq!(reopened.record().wins(4), 1);
        assert_eq!(reopened.record().failures(), 1);
    }
}
