//! Write-once memoization of provider lookups.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::{PlaceId, PlaceRecord};
use crate::ports::PlaceProvider;

/// Caches successfully fetched place records by identifier.
///
/// Entries are never evicted. Failed lookups are not stored, so they are retried
/// on the next request. Two concurrent misses for the same id may both reach the
/// provider; the first stored record is kept.
pub struct PlaceCache {
    provider: Arc<dyn PlaceProvider>,
    records: RwLock<HashMap<PlaceId, PlaceRecord>>,
}

impl PlaceCache {
    /// Create an empty cache in front of `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn PlaceProvider>) -> Self {
        Self {
            provider,
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached record for `id`, fetching and storing it on a miss.
    ///
    /// Provider errors are logged and reported as absence.
    pub async fn get_or_fetch(&self, id: &PlaceId) -> Option<PlaceRecord> {
        if let Some(record) = self.records.read().await.get(id) {
            tracing::debug!(place = %id, "place cache hit");
            return Some(record.clone());
        }

        match self.provider.place(id).await {
            Ok(record) => {
                let mut records = self.records.write().await;
                let stored = records.entry(id.clone()).or_insert(record);
                tracing::debug!(place = %id, provider = self.provider.name(), "place cached");
                Some(stored.clone())
            }
            Err(err) => {
                tracing::warn!(
                    place = %id,
                    provider = self.provider.name(),
                    error = %err,
                    "failed to fetch place"
                );
                None
            }
        }
    }

    /// Number of cached records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether nothing has been cached yet.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
