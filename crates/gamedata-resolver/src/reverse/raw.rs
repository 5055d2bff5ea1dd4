//! Raw-shape reverse: each discovered neighbor is the full composite entity,
//! expanded when the caller asked for expansion.

use std::collections::BTreeSet;

use futures::future::try_join_all;

use gamedata_types::{
    BuffEntity, CommandCodeEntity, FunctionEntity, MysticCodeEntity, ResolveError, ReverseDepth,
    ReversedBuff, ReversedBuffPayload, ReversedFunction, ReversedFunctionPayload, ReversedSkillTd,
    ReversedSkillTdPayload, ServantEntity, SkillEntity, TdEntity,
};

use crate::assemble;
use crate::engine::Ctx;
use crate::expand::ExpandGuard;

use super::{check_fanout, ids};

pub(crate) async fn attach_buff_reverse(
    ctx: &Ctx<'_>,
    entity: &mut BuffEntity,
    depth: ReverseDepth,
    expand: bool,
) -> Result<(), ResolveError> {
    let func_ids = ids::functions_of_buff(ctx.adjacency(), entity.buff.id);
    let functions = reversed_functions(ctx, func_ids, depth, expand).await?;
    entity.reverse = Some(ReversedBuffPayload::Raw(ReversedBuff { functions }));
    Ok(())
}

pub(crate) async fn attach_function_reverse(
    ctx: &Ctx<'_>,
    entity: &mut FunctionEntity,
    depth: ReverseDepth,
    expand: bool,
) -> Result<(), ResolveError> {
    if depth < ReverseDepth::SkillTd {
        return Ok(());
    }
    let payload = reversed_function_payload(ctx, entity.func.id, depth, expand).await?;
    entity.reverse = Some(Box::new(ReversedFunctionPayload::Raw(payload)));
    Ok(())
}

pub(crate) async fn attach_skill_reverse(
    ctx: &Ctx<'_>,
    entity: &mut SkillEntity,
    depth: ReverseDepth,
    expand: bool,
) -> Result<(), ResolveError> {
    if depth < ReverseDepth::Servant {
        return Ok(());
    }
    let servant_ids = ids::servants_of_skill(ctx.adjacency(), &entity.svt_skills, entity.skill.id);
    let mc_ids = ids::mystic_codes_of_skill(ctx.adjacency(), entity.skill.id);
    let cc_ids = ids::command_codes_of_skill(ctx.adjacency(), entity.skill.id);
    let payload = reversed_holders(ctx, servant_ids, mc_ids, cc_ids, expand).await?;
    entity.reverse = Some(Box::new(ReversedSkillTdPayload::Raw(payload)));
    Ok(())
}

pub(crate) async fn attach_td_reverse(
    ctx: &Ctx<'_>,
    entity: &mut TdEntity,
    depth: ReverseDepth,
    expand: bool,
) -> Result<(), ResolveError> {
    if depth < ReverseDepth::Servant {
        return Ok(());
    }
    let servant_ids = ids::servants_of_td(&entity.svt_tds);
    // treasure devices have no mystic-code or command-code parents
    let payload = reversed_holders(ctx, servant_ids, BTreeSet::new(), BTreeSet::new(), expand)
        .await?;
    entity.reverse = Some(Box::new(ReversedSkillTdPayload::Raw(payload)));
    Ok(())
}

async fn reversed_functions(
    ctx: &Ctx<'_>,
    func_ids: BTreeSet<i32>,
    depth: ReverseDepth,
    expand: bool,
) -> Result<Vec<FunctionEntity>, ResolveError> {
    check_fanout(ctx.cfg, func_ids.len())?;
    try_join_all(
        func_ids
            .into_iter()
            .map(|func_id| reversed_function(ctx, func_id, depth, expand)),
    )
    .await
}

async fn reversed_function(
    ctx: &Ctx<'_>,
    func_id: i32,
    depth: ReverseDepth,
    expand: bool,
) -> Result<FunctionEntity, ResolveError> {
    let mut entity =
        assemble::assemble_function(ctx, func_id, expand, &ExpandGuard::root()).await?;
    if depth >= ReverseDepth::SkillTd {
        let payload = reversed_function_payload(ctx, func_id, depth, expand).await?;
        entity.reverse = Some(Box::new(ReversedFunctionPayload::Raw(payload)));
    }
    Ok(entity)
}

async fn reversed_function_payload(
    ctx: &Ctx<'_>,
    func_id: i32,
    depth: ReverseDepth,
    expand: bool,
) -> Result<ReversedFunction, ResolveError> {
    let skill_ids = ids::skills_of_function(ctx.adjacency(), func_id);
    let td_ids = ids::tds_of_function(ctx.adjacency(), func_id);
    check_fanout(ctx.cfg, skill_ids.len() + td_ids.len())?;
    let (skills, tds) = tokio::try_join!(
        try_join_all(
            skill_ids
                .into_iter()
                .map(|skill_id| reversed_skill(ctx, skill_id, depth, expand))
        ),
        try_join_all(
            td_ids
                .into_iter()
                .map(|td_id| reversed_td(ctx, td_id, depth, expand))
        ),
    )?;
    Ok(ReversedFunction { skills, tds })
}

async fn reversed_skill(
    ctx: &Ctx<'_>,
    skill_id: i32,
    depth: ReverseDepth,
    expand: bool,
) -> Result<SkillEntity, ResolveError> {
    let mut entity = assemble::assemble_skill(ctx, skill_id, expand).await?;
    attach_skill_reverse(ctx, &mut entity, depth, expand).await?;
    Ok(entity)
}

async fn reversed_td(
    ctx: &Ctx<'_>,
    td_id: i32,
    depth: ReverseDepth,
    expand: bool,
) -> Result<TdEntity, ResolveError> {
    let mut entity = assemble::assemble_td(ctx, td_id, expand).await?;
    attach_td_reverse(ctx, &mut entity, depth, expand).await?;
    Ok(entity)
}

/// Terminal tier: assemble every holder. Recursion stops here.
async fn reversed_holders(
    ctx: &Ctx<'_>,
    servant_ids: BTreeSet<i32>,
    mc_ids: BTreeSet<i32>,
    cc_ids: BTreeSet<i32>,
    expand: bool,
) -> Result<ReversedSkillTd, ResolveError> {
    check_fanout(ctx.cfg, servant_ids.len() + mc_ids.len() + cc_ids.len())?;
    let (servants, mystic_codes, command_codes): (
        Vec<ServantEntity>,
        Vec<MysticCodeEntity>,
        Vec<CommandCodeEntity>,
    ) = tokio::try_join!(
        try_join_all(
            servant_ids
                .into_iter()
                .map(|svt_id| assemble::assemble_servant(ctx, svt_id, expand, false))
        ),
        try_join_all(
            mc_ids
                .into_iter()
                .map(|mc_id| assemble::assemble_mystic_code(ctx, mc_id, expand))
        ),
        try_join_all(
            cc_ids
                .into_iter()
                .map(|cc_id| assemble::assemble_command_code(ctx, cc_id, expand))
        ),
    )?;
    Ok(ReversedSkillTd {
        servants,
        mystic_codes,
        command_codes,
    })
}
