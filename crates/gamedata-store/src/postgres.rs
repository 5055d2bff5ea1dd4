//! Postgres backend for both storage tiers.
//!
//! Layout: two JSONB tables, one per tier:
//! `gamedata.cache (region, tbl, id, data)` and
//! `gamedata.rows (region, tbl, key, seq, data)`. All SQL is runtime-checked
//! (`sqlx::query`, not `sqlx::query!`) to avoid a compile-time DB
//! requirement.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use gamedata_types::{Region, StoreError};

use crate::cache::PointCache;
use crate::relational::RelationalStore;
use crate::tables::{CacheTable, ChildTable};

pub struct PgBackend {
    pool: PgPool,
}

impl PgBackend {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn backend_err(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

#[async_trait]
impl PointCache for PgBackend {
    async fn fetch_by_id(
        &self,
        region: Region,
        table: CacheTable,
        id: i32,
    ) -> Result<Option<Vec<u8>>, StoreError> {
        let row: Option<(Value,)> = sqlx::query_as(
            r#"
            SELECT data
            FROM gamedata.cache
            WHERE region = $1 AND tbl = $2 AND id = $3
            "#,
        )
        .bind(region.as_str())
        .bind(table.name())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend_err)?;

        row.map(|(data,)| {
            serde_json::to_vec(&data)
                .map_err(|e| StoreError::Backend(format!("encode {}: {e}", table.name())))
        })
        .transpose()
    }

    async fn exists(
        &self,
        region: Region,
        table: CacheTable,
        id: i32,
    ) -> Result<bool, StoreError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM gamedata.cache
                WHERE region = $1 AND tbl = $2 AND id = $3
            )
            "#,
        )
        .bind(region.as_str())
        .bind(table.name())
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(backend_err)?;
        Ok(exists)
    }
}

#[async_trait]
impl RelationalStore for PgBackend {
    async fn fetch_one(
        &self,
        region: Region,
        table: ChildTable,
        key: i32,
    ) -> Result<Option<Value>, StoreError> {
        let row: Option<(Value,)> = sqlx::query_as(
            r#"
            SELECT data
            FROM gamedata.rows
            WHERE region = $1 AND tbl = $2 AND key = $3
            ORDER BY seq
            LIMIT 1
            "#,
        )
        .bind(region.as_str())
        .bind(table.name())
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend_err)?;
        Ok(row.map(|(data,)| data))
    }

    async fn fetch_all(
        &self,
        region: Region,
        table: ChildTable,
        key: i32,
    ) -> Result<Vec<Value>, StoreError> {
        let rows: Vec<(Value,)> = sqlx::query_as(
            r#"
            SELECT data
            FROM gamedata.rows
            WHERE region = $1 AND tbl = $2 AND key = $3
            ORDER BY seq
            "#,
        )
        .bind(region.as_str())
        .bind(table.name())
        .bind(key)
        .fetch_all(&self.pool)
        .await
        .map_err(backend_err)?;
        Ok(rows.into_iter().map(|(data,)| data).collect())
    }

    async fn fetch_all_for_many(
        &self,
        region: Region,
        table: ChildTable,
        keys: &[i32],
    ) -> Result<Vec<Value>, StoreError> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<(Value,)> = sqlx::query_as(
            r#"
            SELECT data
            FROM gamedata.rows
            WHERE region = $1 AND tbl = $2 AND key = ANY($3)
            ORDER BY array_position($3, key), seq
            "#,
        )
        .bind(region.as_str())
        .bind(table.name())
        .bind(keys)
        .fetch_all(&self.pool)
        .await
        .map_err(backend_err)?;
        Ok(rows.into_iter().map(|(data,)| data).collect())
    }
}
