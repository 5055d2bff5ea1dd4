//! Entity graph resolution engine.
//!
//! Resolves ids from a richly interconnected game dataset into composite
//! entities, with three transformations on top of the raw rows:
//!
//! - **Assembly**: one primary row plus its child collections, fetched
//!   fan-out/fan-in from the two storage tiers.
//! - **Forward expansion**: referenced sub-entities (skill/td level
//!   functions, function buffs, class passives) inlined eagerly, dangling
//!   ids silently filtered.
//! - **Reverse resolution**: the entities referencing a given one, walked
//!   over a precomputed adjacency index up to a caller-chosen depth, in one
//!   of three payload shapes.
//!
//! A fixed-point worklist closure resolves AI behavior trees. Data is
//! immutable within a generation; reloads swap whole [`RegionGeneration`]s
//! through the [`GenerationRegistry`].

mod adjacency;
mod ai;
mod assemble;
mod config;
mod engine;
mod expand;
mod generation;
mod reverse;

pub use adjacency::{AdjacencyIndex, AdjacencyRelation};
pub use config::EngineConfig;
pub use engine::ResolverEngine;
pub use generation::{GenerationRegistry, IdAliases, RegionGeneration};
