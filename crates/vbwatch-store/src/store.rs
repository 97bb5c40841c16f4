//! File-backed cache of one day's missions.
//!
//! The upstream page rotates missions once per day, with a short grace
//! window after midnight UTC while the new rotation propagates. A snapshot
//! therefore only counts as fresh when both it and the current time fall
//! after today's 00:10 UTC reset, on the same UTC calendar date. Before
//! 00:10 UTC no snapshot is ever fresh, which forces a refetch right after
//! the rotation.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use vbwatch_core::{CacheSnapshot, MissionRecord};

use crate::StoreError;

/// Minute-of-day (UTC) at which a new day's data becomes authoritative.
const DAILY_RESET_MINUTE: u32 = 10;

/// Returns `true` when a snapshot captured at `captured_at` is still the
/// authoritative data at `now`.
#[must_use]
pub fn snapshot_is_valid(captured_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let Some(today_reset) = now.date_naive().and_hms_opt(0, DAILY_RESET_MINUTE, 0) else {
        return false;
    };
    let today_reset = today_reset.and_utc();

    captured_at > today_reset
        && now > today_reset
        && captured_at.date_naive() == now.date_naive()
}

/// JSON-file store for the daily [`CacheSnapshot`].
///
/// Read failures of any kind degrade to a cache miss; the caller refetches
/// and overwrites, so the store is self-healing.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the persisted snapshot and judges its freshness against the
    /// current time.
    #[must_use]
    pub fn load(&self) -> (CacheSnapshot, bool) {
        self.load_at(Utc::now())
    }

    /// Loads the persisted snapshot and judges its freshness against `now`.
    ///
    /// A missing, unreadable, or corrupt cache file yields
    /// `(CacheSnapshot::empty(), false)` — never an error.
    #[must_use]
    pub fn load_at(&self, now: DateTime<Utc>) -> (CacheSnapshot, bool) {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %err,
                        "cache file unreadable, treating as miss"
                    );
                }
                return (CacheSnapshot::empty(), false);
            }
        };

        let snapshot: CacheSnapshot = match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "cache file corrupt, treating as miss"
                );
                return (CacheSnapshot::empty(), false);
            }
        };

        let valid = snapshot_is_valid(snapshot.captured_at, now);
        (snapshot, valid)
    }

    /// Persists `missions` timestamped with the current time, overwriting
    /// any prior snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the file cannot be written. Callers
    /// treat this as non-fatal: the in-memory result is still served.
    pub fn save(&self, missions: &[MissionRecord]) -> Result<(), StoreError> {
        self.save_at(missions, Utc::now())
    }

    /// Persists `missions` timestamped with `now`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the file cannot be written.
    pub fn save_at(&self, missions: &[MissionRecord], now: DateTime<Utc>) -> Result<(), StoreError> {
        let snapshot = CacheSnapshot {
            captured_at: now,
            missions: missions.to_vec(),
        };
        let data = serde_json::to_string(&snapshot)?;
        fs::write(&self.path, data).map_err(|source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}
