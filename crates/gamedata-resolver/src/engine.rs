//! The resolution engine facade.
//!
//! One entry point per exposed contract: `resolve` for entity resolution
//! (assembly → forward expansion → reverse resolution, per flags) and
//! `resolve_ai_collection` for behavior-tree closure. The engine itself is
//! stateless; all data lives in the generation registry.

use std::sync::Arc;

use tracing::debug;

use gamedata_types::{
    EntityKind, OutputShape, Region, ResolveError, ResolveOptions, ResolvedEntity, ReverseDepth,
    ReversedBuffPayload, ReversedFunctionPayload, ReversedSkillTdPayload,
};

use gamedata_store::{PointCache, RelationalStore};

use crate::adjacency::AdjacencyIndex;
use crate::ai;
use crate::assemble;
use crate::config::EngineConfig;
use crate::expand::ExpandGuard;
use crate::generation::{GenerationRegistry, RegionGeneration};
use crate::reverse::{basic, nice, raw};

/// Borrowed resolution context: one region's generation plus engine config.
/// Every internal resolution function reads through this.
pub(crate) struct Ctx<'a> {
    pub region: Region,
    pub gen: &'a RegionGeneration,
    pub cfg: &'a EngineConfig,
}

impl<'a> Ctx<'a> {
    pub(crate) fn cache(&self) -> &dyn PointCache {
        self.gen.cache.as_ref()
    }

    pub(crate) fn store(&self) -> &dyn RelationalStore {
        self.gen.store.as_ref()
    }

    pub(crate) fn adjacency(&self) -> &AdjacencyIndex {
        &self.gen.adjacency
    }
}

pub struct ResolverEngine {
    registry: Arc<GenerationRegistry>,
    config: EngineConfig,
}

impl ResolverEngine {
    pub fn new(registry: Arc<GenerationRegistry>) -> Self {
        Self::with_config(registry, EngineConfig::default())
    }

    pub fn with_config(registry: Arc<GenerationRegistry>, config: EngineConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve one entity. NotFound when the primary id is absent in the
    /// region; reverse/expand requests on kinds without the relation are
    /// no-ops.
    pub async fn resolve(
        &self,
        region: Region,
        kind: EntityKind,
        id: i32,
        opts: &ResolveOptions,
    ) -> Result<ResolvedEntity, ResolveError> {
        let generation = self
            .registry
            .get(region)
            .await
            .ok_or(ResolveError::NotFound("region"))?;
        let ctx = Ctx {
            region,
            gen: generation.as_ref(),
            cfg: &self.config,
        };
        let depth = opts
            .reverse_depth
            .unwrap_or_else(|| ReverseDepth::natural_for(kind));
        debug!(%region, %kind, id, expand = opts.expand, reverse = opts.reverse, "resolving");

        match kind {
            EntityKind::Buff => {
                let mut entity = assemble::assemble_buff(&ctx, id).await?;
                if opts.reverse {
                    match opts.shape {
                        OutputShape::Raw => {
                            raw::attach_buff_reverse(&ctx, &mut entity, depth, opts.expand)
                                .await?;
                        }
                        OutputShape::Basic => {
                            entity.reverse = Some(ReversedBuffPayload::Basic(
                                basic::reversed_buff(&ctx, id, depth).await?,
                            ));
                        }
                        OutputShape::Nice => {
                            entity.reverse = Some(ReversedBuffPayload::Nice(
                                nice::reversed_buff(&ctx, id, depth).await?,
                            ));
                        }
                    }
                }
                Ok(ResolvedEntity::Buff(entity))
            }
            EntityKind::Function => {
                let mut entity =
                    assemble::assemble_function(&ctx, id, opts.expand, &ExpandGuard::root())
                        .await?;
                if opts.reverse && depth >= ReverseDepth::SkillTd {
                    match opts.shape {
                        OutputShape::Raw => {
                            raw::attach_function_reverse(&ctx, &mut entity, depth, opts.expand)
                                .await?;
                        }
                        OutputShape::Basic => {
                            entity.reverse = Some(Box::new(ReversedFunctionPayload::Basic(
                                basic::reversed_function(&ctx, id, depth).await?,
                            )));
                        }
                        OutputShape::Nice => {
                            entity.reverse = Some(Box::new(ReversedFunctionPayload::Nice(
                                nice::reversed_function(&ctx, id, depth).await?,
                            )));
                        }
                    }
                }
                Ok(ResolvedEntity::Function(entity))
            }
            EntityKind::Skill => {
                let mut entity = assemble::assemble_skill(&ctx, id, opts.expand).await?;
                if opts.reverse && depth >= ReverseDepth::Servant {
                    match opts.shape {
                        OutputShape::Raw => {
                            raw::attach_skill_reverse(&ctx, &mut entity, depth, opts.expand)
                                .await?;
                        }
                        OutputShape::Basic => {
                            entity.reverse = Some(Box::new(ReversedSkillTdPayload::Basic(
                                basic::reversed_skill(&ctx, id).await?,
                            )));
                        }
                        OutputShape::Nice => {
                            entity.reverse = Some(Box::new(ReversedSkillTdPayload::Nice(
                                nice::reversed_skill(&ctx, id).await?,
                            )));
                        }
                    }
                }
                Ok(ResolvedEntity::Skill(entity))
            }
            EntityKind::TreasureDevice => {
                let mut entity = assemble::assemble_td(&ctx, id, opts.expand).await?;
                if opts.reverse && depth >= ReverseDepth::Servant {
                    match opts.shape {
                        OutputShape::Raw => {
                            raw::attach_td_reverse(&ctx, &mut entity, depth, opts.expand).await?;
                        }
                        OutputShape::Basic => {
                            entity.reverse = Some(Box::new(ReversedSkillTdPayload::Basic(
                                basic::reversed_td(&ctx, id).await?,
                            )));
                        }
                        OutputShape::Nice => {
                            entity.reverse = Some(Box::new(ReversedSkillTdPayload::Nice(
                                nice::reversed_td(&ctx, id).await?,
                            )));
                        }
                    }
                }
                Ok(ResolvedEntity::TreasureDevice(entity))
            }
            EntityKind::Servant => {
                let id = generation.aliases.servant(id);
                let entity = assemble::assemble_servant(&ctx, id, opts.expand, opts.lore).await?;
                Ok(ResolvedEntity::Servant(entity))
            }
            EntityKind::MysticCode => {
                let entity = assemble::assemble_mystic_code(&ctx, id, opts.expand).await?;
                Ok(ResolvedEntity::MysticCode(entity))
            }
            EntityKind::CommandCode => {
                let id = generation.aliases.command_code(id);
                let entity = assemble::assemble_command_code(&ctx, id, opts.expand).await?;
                Ok(ResolvedEntity::CommandCode(entity))
            }
            EntityKind::Item => Ok(ResolvedEntity::Item(assemble::assemble_item(&ctx, id).await?)),
            EntityKind::War => Ok(ResolvedEntity::War(assemble::assemble_war(&ctx, id).await?)),
            EntityKind::Event => Ok(ResolvedEntity::Event(
                assemble::assemble_event(&ctx, id).await?,
            )),
            EntityKind::Quest => Ok(ResolvedEntity::Quest(
                assemble::assemble_quest(&ctx, id).await?,
            )),
            EntityKind::QuestPhase => {
                let phase = opts.phase.ok_or_else(|| {
                    ResolveError::InvalidRequest("quest phase resolution requires a phase".into())
                })?;
                Ok(ResolvedEntity::QuestPhase(
                    assemble::assemble_quest_phase(&ctx, id, phase).await?,
                ))
            }
            EntityKind::Ai => Ok(ResolvedEntity::Ai(
                ai::assemble_collection(&ctx, id, false).await?,
            )),
        }
    }

    /// Resolve a behavior tree from `root_id`. `is_field_ai` selects the
    /// battlefield-scoped table family over the unit-scoped one.
    pub async fn resolve_ai_collection(
        &self,
        region: Region,
        root_id: i32,
        is_field_ai: bool,
    ) -> Result<gamedata_types::AiCollection, ResolveError> {
        let generation = self
            .registry
            .get(region)
            .await
            .ok_or(ResolveError::NotFound("region"))?;
        let ctx = Ctx {
            region,
            gen: generation.as_ref(),
            cfg: &self.config,
        };
        debug!(%region, root_id, is_field_ai, "resolving ai collection");
        ai::assemble_collection(&ctx, root_id, is_field_ai).await
    }
}
