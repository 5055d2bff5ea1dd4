//! Forward expansion: inline referenced sub-entities, eagerly, at every
//! level encountered.
//!
//! Dangling foreign keys are filtered with an existence check before any
//! assembly and never fail the call. The forward reference graph is acyclic
//! by data convention; `ExpandGuard` enforces that per branch anyway, so a
//! malformed dump degrades to a truncated expansion instead of unbounded
//! recursion.

use futures::future::try_join_all;

use gamedata_types::gameval::func_vals_are_buffs;
use gamedata_types::{BuffEntity, EntityKind, FunctionEntity, ResolveError, SkillEntity, TdEntity};

use gamedata_store::CacheTable;

use crate::assemble;
use crate::engine::Ctx;

/// Ancestor stack of one expansion branch. Descending into a `(kind, id)`
/// already on the branch is refused.
#[derive(Debug, Clone, Default)]
pub(crate) struct ExpandGuard {
    stack: Vec<(EntityKind, i32)>,
}

impl ExpandGuard {
    pub(crate) fn root() -> Self {
        Self::default()
    }

    pub(crate) fn contains(&self, kind: EntityKind, id: i32) -> bool {
        self.stack.contains(&(kind, id))
    }

    /// A child guard extended with `(kind, id)`, or `None` when that pair is
    /// already an ancestor.
    pub(crate) fn descend(&self, kind: EntityKind, id: i32) -> Option<Self> {
        if self.contains(kind, id) {
            return None;
        }
        let mut child = self.clone();
        child.stack.push((kind, id));
        Some(child)
    }
}

/// Inline buff sub-entities from a buff-valued function's value list.
pub(crate) async fn expand_function(
    ctx: &Ctx<'_>,
    entity: &mut FunctionEntity,
    guard: &ExpandGuard,
) -> Result<(), ResolveError> {
    if !func_vals_are_buffs(entity.func.func_type) {
        return Ok(());
    }
    let Some(guard) = guard.descend(EntityKind::Function, entity.func.id) else {
        return Ok(());
    };
    let buffs: Vec<BuffEntity> = try_join_all(
        entity
            .func
            .vals
            .iter()
            .map(|&buff_id| expand_val_buff(ctx, buff_id, &guard)),
    )
    .await?
    .into_iter()
    .flatten()
    .collect();
    entity.expanded_vals = Some(buffs);
    Ok(())
}

async fn expand_val_buff(
    ctx: &Ctx<'_>,
    buff_id: i32,
    guard: &ExpandGuard,
) -> Result<Option<BuffEntity>, ResolveError> {
    if guard.contains(EntityKind::Buff, buff_id) {
        return Ok(None);
    }
    if !ctx
        .cache()
        .exists(ctx.region, CacheTable::Buff, buff_id)
        .await?
    {
        return Ok(None);
    }
    assemble::assemble_buff(ctx, buff_id).await.map(Some)
}

/// Inline function sub-entities into every skill level, each function itself
/// expanded for its buffs.
pub(crate) async fn expand_skill(
    ctx: &Ctx<'_>,
    entity: &mut SkillEntity,
    guard: &ExpandGuard,
) -> Result<(), ResolveError> {
    let Some(guard) = guard.descend(EntityKind::Skill, entity.skill.id) else {
        return Ok(());
    };
    for level in &mut entity.levels {
        let funcs: Vec<FunctionEntity> = try_join_all(
            level
                .row
                .func_ids
                .iter()
                .map(|&func_id| expand_level_func(ctx, func_id, &guard)),
        )
        .await?
        .into_iter()
        .flatten()
        .collect();
        level.expanded_funcs = Some(funcs);
    }
    Ok(())
}

/// Same shape as skill expansion, over treasure-device levels.
pub(crate) async fn expand_td(
    ctx: &Ctx<'_>,
    entity: &mut TdEntity,
    guard: &ExpandGuard,
) -> Result<(), ResolveError> {
    let Some(guard) = guard.descend(EntityKind::TreasureDevice, entity.td.id) else {
        return Ok(());
    };
    for level in &mut entity.levels {
        let funcs: Vec<FunctionEntity> = try_join_all(
            level
                .row
                .func_ids
                .iter()
                .map(|&func_id| expand_level_func(ctx, func_id, &guard)),
        )
        .await?
        .into_iter()
        .flatten()
        .collect();
        level.expanded_funcs = Some(funcs);
    }
    Ok(())
}

async fn expand_level_func(
    ctx: &Ctx<'_>,
    func_id: i32,
    guard: &ExpandGuard,
) -> Result<Option<FunctionEntity>, ResolveError> {
    if guard.contains(EntityKind::Function, func_id) {
        return Ok(None);
    }
    if !ctx
        .cache()
        .exists(ctx.region, CacheTable::Function, func_id)
        .await?
    {
        return Ok(None);
    }
    assemble::assemble_function(ctx, func_id, true, guard)
        .await
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_refuses_revisits_on_the_same_branch() {
        let root = ExpandGuard::root();
        let child = root.descend(EntityKind::Skill, 1).unwrap();
        let grandchild = child.descend(EntityKind::Function, 10).unwrap();
        assert!(grandchild.contains(EntityKind::Skill, 1));
        assert!(grandchild.descend(EntityKind::Function, 10).is_none());
    }

    #[test]
    fn guard_branches_are_independent() {
        let root = ExpandGuard::root();
        let left = root.descend(EntityKind::Function, 10).unwrap();
        // the sibling branch may still descend into the same function
        let right = root.descend(EntityKind::Function, 10).unwrap();
        assert!(left.contains(EntityKind::Function, 10));
        assert!(right.descend(EntityKind::Buff, 500).is_some());
    }
}
