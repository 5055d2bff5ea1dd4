//! Relational store contract for child collections.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use gamedata_types::{Region, StoreError};

use crate::tables::ChildTable;

/// Region-scoped normalized store for one-to-many child rows of a parent
/// key. Absence of children is an empty result, never an error.
#[async_trait]
pub trait RelationalStore: Send + Sync {
    /// First row under `key`, or `None`.
    async fn fetch_one(
        &self,
        region: Region,
        table: ChildTable,
        key: i32,
    ) -> Result<Option<Value>, StoreError>;

    /// All rows under `key`, in load order.
    async fn fetch_all(
        &self,
        region: Region,
        table: ChildTable,
        key: i32,
    ) -> Result<Vec<Value>, StoreError>;

    /// All rows under any of `keys`, concatenated in key order.
    async fn fetch_all_for_many(
        &self,
        region: Region,
        table: ChildTable,
        keys: &[i32],
    ) -> Result<Vec<Value>, StoreError>;
}

/// Decode one raw row into its typed form.
pub fn decode_row<T: DeserializeOwned>(table: ChildTable, row: Value) -> Result<T, StoreError> {
    serde_json::from_value(row).map_err(|source| StoreError::Decode {
        table: table.name(),
        source,
    })
}

/// Decode a batch of raw rows.
pub fn decode_rows<T: DeserializeOwned>(
    table: ChildTable,
    rows: Vec<Value>,
) -> Result<Vec<T>, StoreError> {
    rows.into_iter().map(|row| decode_row(table, row)).collect()
}
