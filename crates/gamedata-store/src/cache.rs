//! Point-lookup cache contract.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use gamedata_types::{Region, StoreError};

use crate::tables::CacheTable;

/// Region-scoped key→serialized-record store. O(1) fetch and existence
/// check; the resolution engine only ever reads it.
#[async_trait]
pub trait PointCache: Send + Sync {
    /// The serialized record for `id`, or `None` when absent.
    async fn fetch_by_id(
        &self,
        region: Region,
        table: CacheTable,
        id: i32,
    ) -> Result<Option<Vec<u8>>, StoreError>;

    /// Existence check without paying deserialization.
    async fn exists(
        &self,
        region: Region,
        table: CacheTable,
        id: i32,
    ) -> Result<bool, StoreError>;
}

/// Fetch and decode a typed row from the cache.
pub async fn fetch_decoded<T: DeserializeOwned>(
    cache: &dyn PointCache,
    region: Region,
    table: CacheTable,
    id: i32,
) -> Result<Option<T>, StoreError> {
    match cache.fetch_by_id(region, table, id).await? {
        Some(bytes) => serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                table: table.name(),
                source,
            }),
        None => Ok(None),
    }
}
