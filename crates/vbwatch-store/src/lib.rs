pub mod service;
pub mod store;

use thiserror::Error;

pub use service::MissionService;
pub use store::{snapshot_is_valid, CacheStore};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cache file error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cache serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Fetch(#[from] vbwatch_scraper::ScrapeError),
}
