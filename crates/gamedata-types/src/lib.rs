//! Shared types for the game data resolution engine.
//!
//! Raw rows mirror the backing tables one to one; composite entities are the
//! assembled views the resolver produces, with explicit optional fields for
//! expansion and reverse attachments. Nothing here touches storage; the
//! `gamedata-store` and `gamedata-resolver` crates build on these types.

pub mod ai;
pub mod common;
pub mod entity;
pub mod error;
pub mod gameval;
pub mod rows;
pub mod summary;

pub use ai::{AiCollection, AiNode};
pub use common::{EntityKind, OutputShape, Region, ResolveOptions, ReverseDepth};
pub use entity::{
    BuffEntity, CommandCodeEntity, EventEntity, FunctionEntity, ItemEntity, MysticCodeEntity,
    QuestEntity, QuestPhaseEntity, ResolvedEntity, ReversedBuff, ReversedBuffPayload,
    ReversedFunction, ReversedFunctionPayload, ReversedSkillTd, ReversedSkillTdPayload,
    ServantEntity, ServantLore, SkillEntity, SkillLevel, TdEntity, TdLevel, WarEntity,
};
pub use error::{ResolveError, StoreError};
