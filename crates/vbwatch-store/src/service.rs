//! Get-or-refresh orchestration over the cache store and the scraper.

use tokio::sync::Mutex;

use vbwatch_core::MissionRecord;
use vbwatch_scraper::MissionsClient;

use crate::store::CacheStore;
use crate::StoreError;

/// Serves today's missions, refreshing from the upstream page only when
/// the cached snapshot is stale.
///
/// Refreshes are serialized behind a mutex so concurrent callers inside
/// the same stale window share one upstream fetch instead of racing to
/// overwrite the cache file.
pub struct MissionService {
    store: CacheStore,
    client: MissionsClient,
    missions_url: String,
    refresh_lock: Mutex<()>,
}

impl MissionService {
    #[must_use]
    pub fn new(store: CacheStore, client: MissionsClient, missions_url: String) -> Self {
        Self {
            store,
            client,
            missions_url,
            refresh_lock: Mutex::new(()),
        }
    }

    /// Returns today's missions, from cache when fresh, otherwise from a
    /// fresh fetch that is written back to the cache.
    ///
    /// A cache write failure is logged and swallowed: the fetched records
    /// are already in hand and remain correct for this call.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Fetch`] when the cache is stale and the
    /// upstream fetch fails.
    pub async fn missions(&self) -> Result<Vec<MissionRecord>, StoreError> {
        let (snapshot, valid) = self.store.load();
        if valid {
            tracing::debug!(count = snapshot.missions.len(), "serving missions from cache");
            return Ok(snapshot.missions);
        }

        let _guard = self.refresh_lock.lock().await;

        // Another caller may have refreshed while we waited on the lock.
        let (snapshot, valid) = self.store.load();
        if valid {
            return Ok(snapshot.missions);
        }

        let missions = self.client.fetch_missions(&self.missions_url).await?;
        tracing::info!(count = missions.len(), "refreshed missions from upstream");

        if let Err(err) = self.store.save(&missions) {
            tracing::warn!(error = %err, "failed to persist mission cache");
        }
        Ok(missions)
    }
}
