//! Domain types shared across the workspace.
//!
//! ## Observed shape of the upstream mission listing
//!
//! Each mission appears on the page as one free-text line like
//! `"500 80PL Defend in Stonewood"` or `"300 90 Survive the Storm in
//! Canny Valley"`. The page layout is uncontrolled and noisy: the power
//! level token sometimes has the mission type glued onto it (`80PL`),
//! sometimes not (`90`). All fields are therefore kept as raw strings and
//! only `power_level` is guaranteed to contain digits exclusively.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One parsed V-Bucks mission, in the order it appeared on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionRecord {
    /// Zone name, e.g. `"Stonewood"` or `"Canny Valley"`.
    pub area: String,

    /// Difficulty rating as digits only. Empty when the source token had
    /// no leading digits at all (malformed but tolerated input).
    pub power_level: String,

    /// Reward amount exactly as scraped. Expected to parse as a
    /// non-negative integer when summing totals, but never validated or
    /// rewritten here.
    pub amount: String,

    /// Mission category, e.g. `"Defend"` or `"Survive the Storm"`. May be
    /// empty when the source line carried no type words.
    pub mission_type: String,
}

/// One day's scrape result as persisted to the cache file.
///
/// Replaced wholesale on every refresh; must round-trip through JSON
/// exactly for the daily validity check to work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSnapshot {
    /// UTC instant the missions were fetched.
    pub captured_at: DateTime<Utc>,

    /// Missions in document order.
    pub missions: Vec<MissionRecord>,
}

impl CacheSnapshot {
    /// An empty snapshot dated at the UNIX epoch, used when no cache file
    /// exists or the existing one cannot be read.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            captured_at: DateTime::<Utc>::UNIX_EPOCH,
            missions: Vec::new(),
        }
    }
}
