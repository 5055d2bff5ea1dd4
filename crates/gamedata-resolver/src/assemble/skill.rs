//! Skill and treasure-device assembly.

use futures::future::try_join_all;

use gamedata_types::rows::{
    SkillDetailRow, SkillLevelRow, SkillRow, SvtSkillRow, SvtTdRow, TdDetailRow, TdLevelRow,
    TdRow,
};
use gamedata_types::{ResolveError, SkillEntity, SkillLevel, TdEntity, TdLevel};

use gamedata_store::{CacheTable, ChildTable};

use crate::engine::Ctx;
use crate::expand::{self, ExpandGuard};

use super::{cached, rows_of};

/// Assemble one skill, or `None` when the primary row is absent. Used by
/// many-assembly, where a dangling join id is dropped rather than failing
/// the whole call.
pub(crate) async fn assemble_skill_opt(
    ctx: &Ctx<'_>,
    id: i32,
    expand: bool,
) -> Result<Option<SkillEntity>, ResolveError> {
    let Some(skill) = cached::<SkillRow>(ctx, CacheTable::Skill, id).await? else {
        return Ok(None);
    };
    let (details, level_rows, svt_skills) = tokio::try_join!(
        rows_of::<SkillDetailRow>(ctx, ChildTable::SkillDetail, id),
        rows_of::<SkillLevelRow>(ctx, ChildTable::SkillLevel, id),
        rows_of::<SvtSkillRow>(ctx, ChildTable::SvtSkillBySkill, id),
    )?;
    let mut entity = SkillEntity {
        skill,
        details,
        levels: level_rows
            .into_iter()
            .map(|row| SkillLevel {
                row,
                expanded_funcs: None,
            })
            .collect(),
        svt_skills,
        reverse: None,
    };
    if expand {
        expand::expand_skill(ctx, &mut entity, &ExpandGuard::root()).await?;
    }
    Ok(Some(entity))
}

pub(crate) async fn assemble_skill(
    ctx: &Ctx<'_>,
    id: i32,
    expand: bool,
) -> Result<SkillEntity, ResolveError> {
    assemble_skill_opt(ctx, id, expand)
        .await?
        .ok_or(ResolveError::NotFound("skill"))
}

/// Assemble a batch of skills concurrently, dropping missing ids.
pub(crate) async fn assemble_skills(
    ctx: &Ctx<'_>,
    ids: &[i32],
    expand: bool,
) -> Result<Vec<SkillEntity>, ResolveError> {
    let assembled =
        try_join_all(ids.iter().map(|&id| assemble_skill_opt(ctx, id, expand))).await?;
    Ok(assembled.into_iter().flatten().collect())
}

pub(crate) async fn assemble_td_opt(
    ctx: &Ctx<'_>,
    id: i32,
    expand: bool,
) -> Result<Option<TdEntity>, ResolveError> {
    let Some(td) = cached::<TdRow>(ctx, CacheTable::TreasureDevice, id).await? else {
        return Ok(None);
    };
    let (details, level_rows, svt_tds) = tokio::try_join!(
        rows_of::<TdDetailRow>(ctx, ChildTable::TdDetail, id),
        rows_of::<TdLevelRow>(ctx, ChildTable::TdLevel, id),
        rows_of::<SvtTdRow>(ctx, ChildTable::SvtTdByTd, id),
    )?;
    let mut entity = TdEntity {
        td,
        details,
        levels: level_rows
            .into_iter()
            .map(|row| TdLevel {
                row,
                expanded_funcs: None,
            })
            .collect(),
        svt_tds,
        reverse: None,
    };
    if expand {
        expand::expand_td(ctx, &mut entity, &ExpandGuard::root()).await?;
    }
    Ok(Some(entity))
}

pub(crate) async fn assemble_td(
    ctx: &Ctx<'_>,
    id: i32,
    expand: bool,
) -> Result<TdEntity, ResolveError> {
    assemble_td_opt(ctx, id, expand)
        .await?
        .ok_or(ResolveError::NotFound("treasure device"))
}

pub(crate) async fn assemble_tds(
    ctx: &Ctx<'_>,
    ids: &[i32],
    expand: bool,
) -> Result<Vec<TdEntity>, ResolveError> {
    let assembled = try_join_all(ids.iter().map(|&id| assemble_td_opt(ctx, id, expand))).await?;
    Ok(assembled.into_iter().flatten().collect())
}
