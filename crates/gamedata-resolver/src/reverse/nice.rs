//! Nice-shape reverse: each discovered neighbor is the structurally
//! normalized form: trait ids lifted to objects, buff script fields
//! surfaced, buffs inlined on functions. Localized names stay with the
//! external projection layer. Traversal and depth gates are the same as the
//! other shapes.

use std::collections::BTreeSet;

use futures::future::try_join_all;

use gamedata_types::rows::{
    BuffRow, CommandCodeRow, EquipRow, FuncRow, SkillRow, SvtLimitRow, SvtRow, TdRow,
};
use gamedata_types::summary::{
    nice_traits, NiceBuff, NiceCommandCode, NiceFunction, NiceMysticCode, NiceReversedBuff,
    NiceReversedFunction, NiceReversedSkillTd, NiceServant, NiceSkill, NiceTd,
};
use gamedata_types::gameval::func_vals_are_buffs;
use gamedata_types::{ResolveError, ReverseDepth};

use gamedata_store::CacheTable;

use crate::assemble::cached;
use crate::engine::Ctx;

use super::{check_fanout, ids};

pub(crate) async fn reversed_buff(
    ctx: &Ctx<'_>,
    buff_id: i32,
    depth: ReverseDepth,
) -> Result<NiceReversedBuff, ResolveError> {
    let func_ids = ids::functions_of_buff(ctx.adjacency(), buff_id);
    check_fanout(ctx.cfg, func_ids.len())?;
    let functions = try_join_all(
        func_ids
            .into_iter()
            .map(|func_id| nice_function(ctx, func_id, depth)),
    )
    .await?;
    Ok(NiceReversedBuff { functions })
}

pub(crate) async fn reversed_function(
    ctx: &Ctx<'_>,
    func_id: i32,
    depth: ReverseDepth,
) -> Result<NiceReversedFunction, ResolveError> {
    let skill_ids = ids::skills_of_function(ctx.adjacency(), func_id);
    let td_ids = ids::tds_of_function(ctx.adjacency(), func_id);
    check_fanout(ctx.cfg, skill_ids.len() + td_ids.len())?;
    let (skills, tds) = tokio::try_join!(
        try_join_all(
            skill_ids
                .into_iter()
                .map(|skill_id| nice_skill(ctx, skill_id, depth))
        ),
        try_join_all(td_ids.into_iter().map(|td_id| nice_td(ctx, td_id, depth))),
    )?;
    Ok(NiceReversedFunction { skills, tds })
}

pub(crate) async fn reversed_skill(
    ctx: &Ctx<'_>,
    skill_id: i32,
) -> Result<NiceReversedSkillTd, ResolveError> {
    let servant_ids = ids::indexed_servants_of_skill(ctx.adjacency(), skill_id);
    let mc_ids = ids::mystic_codes_of_skill(ctx.adjacency(), skill_id);
    let cc_ids = ids::command_codes_of_skill(ctx.adjacency(), skill_id);
    reversed_holders(ctx, servant_ids, mc_ids, cc_ids).await
}

pub(crate) async fn reversed_td(
    ctx: &Ctx<'_>,
    td_id: i32,
) -> Result<NiceReversedSkillTd, ResolveError> {
    let servant_ids = ids::indexed_servants_of_td(ctx.adjacency(), td_id);
    reversed_holders(ctx, servant_ids, BTreeSet::new(), BTreeSet::new()).await
}

async fn reversed_holders(
    ctx: &Ctx<'_>,
    servant_ids: BTreeSet<i32>,
    mc_ids: BTreeSet<i32>,
    cc_ids: BTreeSet<i32>,
) -> Result<NiceReversedSkillTd, ResolveError> {
    check_fanout(ctx.cfg, servant_ids.len() + mc_ids.len() + cc_ids.len())?;
    let (servants, mystic_codes, command_codes) = tokio::try_join!(
        try_join_all(
            servant_ids
                .into_iter()
                .map(|svt_id| nice_servant(ctx, svt_id))
        ),
        try_join_all(mc_ids.into_iter().map(|mc_id| nice_mystic_code(ctx, mc_id))),
        try_join_all(cc_ids.into_iter().map(|cc_id| nice_command_code(ctx, cc_id))),
    )?;
    Ok(NiceReversedSkillTd {
        servants,
        mystic_codes,
        command_codes,
    })
}

async fn nice_function(
    ctx: &Ctx<'_>,
    func_id: i32,
    depth: ReverseDepth,
) -> Result<NiceFunction, ResolveError> {
    let row: FuncRow = cached(ctx, CacheTable::Function, func_id)
        .await?
        .ok_or(ResolveError::NotFound("function"))?;

    let (trait_vals, buffs) = if func_vals_are_buffs(row.func_type) {
        let mut buffs = Vec::new();
        for &buff_id in &row.vals {
            if let Some(buff) = cached::<BuffRow>(ctx, CacheTable::Buff, buff_id).await? {
                buffs.push(NiceBuff::from_row(&buff));
            }
        }
        (Vec::new(), buffs)
    } else {
        (nice_traits(&row.vals), Vec::new())
    };

    let mut entity = NiceFunction {
        func_id: row.id,
        func_type: row.func_type,
        target_type: row.target_type,
        apply_target: row.apply_target,
        func_tvals: nice_traits(&row.tvals),
        func_quest_tvals: nice_traits(&row.quest_tvals),
        trait_vals,
        buffs,
        reverse: None,
    };
    if depth >= ReverseDepth::SkillTd {
        entity.reverse = Some(Box::new(reversed_function(ctx, func_id, depth).await?));
    }
    Ok(entity)
}

async fn nice_skill(
    ctx: &Ctx<'_>,
    skill_id: i32,
    depth: ReverseDepth,
) -> Result<NiceSkill, ResolveError> {
    let row: SkillRow = cached(ctx, CacheTable::Skill, skill_id)
        .await?
        .ok_or(ResolveError::NotFound("skill"))?;
    let mut entity = NiceSkill {
        id: row.id,
        name: row.name,
        ruby: row.ruby,
        icon_id: row.icon_id,
        max_lv: row.max_lv,
        reverse: None,
    };
    if depth >= ReverseDepth::Servant {
        entity.reverse = Some(Box::new(reversed_skill(ctx, skill_id).await?));
    }
    Ok(entity)
}

async fn nice_td(
    ctx: &Ctx<'_>,
    td_id: i32,
    depth: ReverseDepth,
) -> Result<NiceTd, ResolveError> {
    let row: TdRow = cached(ctx, CacheTable::TreasureDevice, td_id)
        .await?
        .ok_or(ResolveError::NotFound("treasure device"))?;
    let mut entity = NiceTd {
        id: row.id,
        name: row.name,
        ruby: row.ruby,
        rank: row.rank,
        type_text: row.type_text,
        reverse: None,
    };
    if depth >= ReverseDepth::Servant {
        entity.reverse = Some(Box::new(reversed_td(ctx, td_id).await?));
    }
    Ok(entity)
}

async fn nice_servant(ctx: &Ctx<'_>, svt_id: i32) -> Result<NiceServant, ResolveError> {
    let svt: SvtRow = cached(ctx, CacheTable::Servant, svt_id)
        .await?
        .ok_or(ResolveError::NotFound("servant"))?;
    let limit: SvtLimitRow = cached(ctx, CacheTable::SvtLimit, svt_id)
        .await?
        .ok_or(ResolveError::NotFound("servant limit"))?;
    Ok(NiceServant {
        id: svt.id,
        collection_no: svt.collection_no,
        name: svt.name,
        class_id: svt.class_id,
        rarity: limit.rarity,
        atk_max: limit.atk_max,
        hp_max: limit.hp_max,
        cards: svt.card_ids,
    })
}

async fn nice_mystic_code(ctx: &Ctx<'_>, mc_id: i32) -> Result<NiceMysticCode, ResolveError> {
    let row: EquipRow = cached(ctx, CacheTable::Equip, mc_id)
        .await?
        .ok_or(ResolveError::NotFound("mystic code"))?;
    Ok(NiceMysticCode {
        id: row.id,
        name: row.name,
        detail: row.detail,
    })
}

async fn nice_command_code(ctx: &Ctx<'_>, cc_id: i32) -> Result<NiceCommandCode, ResolveError> {
    let row: CommandCodeRow = cached(ctx, CacheTable::CommandCode, cc_id)
        .await?
        .ok_or(ResolveError::NotFound("command code"))?;
    Ok(NiceCommandCode {
        id: row.id,
        collection_no: row.collection_no,
        name: row.name,
        rarity: row.rarity,
    })
}
