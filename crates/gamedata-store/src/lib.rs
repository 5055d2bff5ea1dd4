//! Two-tier read-only storage for the game data resolution engine.
//!
//! The engine consumes two contracts:
//!
//! - [`PointCache`]: O(1) fetch/exists of serialized primary rows by id
//!   (leaf and mid-tier tables).
//! - [`RelationalStore`]: point and multi-row fetch of child-collection
//!   rows by parent key.
//!
//! Rows cross the store boundary as `serde_json::Value`; typed decoding
//! happens at assembly. The in-memory backend is populated per region
//! generation from a [`RegionPack`] and is immutable afterwards; a reload
//! builds a fresh backend and swaps it in wholesale. An optional Postgres
//! backend (`postgres` feature) provides the same contracts over JSONB
//! tables with runtime-checked queries.

pub mod cache;
pub mod memory;
pub mod pack;
pub mod relational;
pub mod tables;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use cache::{fetch_decoded, PointCache};
pub use memory::MemoryBackend;
pub use pack::RegionPack;
pub use relational::{decode_row, decode_rows, RelationalStore};
pub use tables::{CacheTable, ChildTable};

#[cfg(feature = "postgres")]
pub use postgres::PgBackend;
