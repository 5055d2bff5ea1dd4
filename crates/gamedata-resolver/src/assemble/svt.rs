//! Servant, mystic-code, and command-code assembly.

use std::collections::{HashMap, HashSet};

use gamedata_types::gameval::{EXTRA_ATTACK_TD_ID, VOICE_ALIAS_PAIRS};
use gamedata_types::rows::{
    CombineLimitRow, CombineSkillRow, CommandCodeCommentRow, CommandCodeRow,
    CommandCodeSkillRow, CvRow, EquipExpRow, EquipRow, EquipSkillRow, FriendshipRow,
    IllustratorRow, SubtitleRow, SvtCardRow, SvtChangeRow, SvtCommentRow, SvtCostumeRow,
    SvtExpRow, SvtLimitAddRow, SvtLimitRow, SvtRow, SvtSkillRow, SvtTdRow, SvtVoiceRow,
    VoiceRelationRow,
};
use gamedata_types::{
    CommandCodeEntity, MysticCodeEntity, ResolveError, ServantEntity, ServantLore,
};

use gamedata_store::{CacheTable, ChildTable};

use crate::engine::Ctx;

use super::skill::{assemble_skills, assemble_tds};
use super::{cached, row_of, rows_of, rows_of_many};

pub(crate) async fn assemble_servant(
    ctx: &Ctx<'_>,
    id: i32,
    expand: bool,
    lore: bool,
) -> Result<ServantEntity, ResolveError> {
    let svt: SvtRow = cached(ctx, CacheTable::Servant, id)
        .await?
        .ok_or(ResolveError::NotFound("servant"))?;

    let (cards, limits, limit_adds, changes, costumes) = tokio::try_join!(
        rows_of::<SvtCardRow>(ctx, ChildTable::SvtCard, id),
        rows_of::<SvtLimitRow>(ctx, ChildTable::SvtLimit, id),
        rows_of::<SvtLimitAddRow>(ctx, ChildTable::SvtLimitAdd, id),
        rows_of::<SvtChangeRow>(ctx, ChildTable::SvtChange, id),
        rows_of::<SvtCostumeRow>(ctx, ChildTable::SvtCostume, id),
    )?;
    let (exp, friendships, combine_skills, combine_limits) = tokio::try_join!(
        rows_of::<SvtExpRow>(ctx, ChildTable::SvtExp, svt.exp_type),
        rows_of::<FriendshipRow>(ctx, ChildTable::Friendship, svt.friendship_id),
        rows_of::<CombineSkillRow>(ctx, ChildTable::CombineSkill, svt.combine_skill_id),
        rows_of::<CombineLimitRow>(ctx, ChildTable::CombineLimit, svt.combine_limit_id),
    )?;

    let skill_joins: Vec<SvtSkillRow> = rows_of(ctx, ChildTable::SvtSkillBySvt, id).await?;
    let skill_ids: Vec<i32> = skill_joins.iter().map(|join| join.skill_id).collect();

    let td_joins: Vec<SvtTdRow> = rows_of(ctx, ChildTable::SvtTdBySvt, id).await?;
    let td_ids: Vec<i32> = td_joins
        .iter()
        .map(|join| join.td_id)
        .filter(|&td_id| td_id != EXTRA_ATTACK_TD_ID)
        .collect();

    let (skills, tds) = tokio::try_join!(
        assemble_skills(ctx, &skill_ids, expand),
        assemble_tds(ctx, &td_ids, expand),
    )?;

    let expanded_class_passive = if expand {
        Some(assemble_skills(ctx, &svt.class_passive, true).await?)
    } else {
        None
    };

    let lore = if lore {
        Some(assemble_lore(ctx, &svt, &changes).await?)
    } else {
        None
    };

    Ok(ServantEntity {
        svt,
        cards,
        limits,
        limit_adds,
        changes,
        costumes,
        exp,
        friendships,
        combine_skills,
        combine_limits,
        skills,
        tds,
        expanded_class_passive,
        lore,
    })
}

/// Voice and subtitle collections are ordered to match the in-game voice
/// tab: the servant's own id first, then its form-change aliases, then the
/// enumerated split-form aliases, then any declared voice relations.
async fn assemble_lore(
    ctx: &Ctx<'_>,
    svt: &SvtRow,
    changes: &[SvtChangeRow],
) -> Result<ServantLore, ResolveError> {
    let (cv, illustrator, comments) = tokio::try_join!(
        row_of::<CvRow>(ctx, ChildTable::Cv, svt.cv_id),
        row_of::<IllustratorRow>(ctx, ChildTable::Illustrator, svt.illustrator_id),
        rows_of::<SvtCommentRow>(ctx, ChildTable::SvtComment, svt.id),
    )?;

    let mut voice_ids = vec![svt.id];
    voice_ids.extend(changes.iter().map(|change| change.svt_voice_id));
    for &(main_id, sub_id) in VOICE_ALIAS_PAIRS {
        if svt.id == main_id {
            voice_ids.push(sub_id);
        }
    }
    let relations: Vec<VoiceRelationRow> =
        rows_of_many(ctx, ChildTable::VoiceRelation, &voice_ids).await?;
    voice_ids.extend(relations.iter().map(|relation| relation.relation_svt_id));

    let mut seen = HashSet::new();
    voice_ids.retain(|voice_id| seen.insert(*voice_id));
    let order: HashMap<i32, usize> = voice_ids
        .iter()
        .enumerate()
        .map(|(position, &voice_id)| (voice_id, position))
        .collect();

    let (mut voices, mut subtitles) = tokio::try_join!(
        rows_of_many::<SvtVoiceRow>(ctx, ChildTable::SvtVoice, &voice_ids),
        rows_of_many::<SubtitleRow>(ctx, ChildTable::Subtitle, &voice_ids),
    )?;
    voices.sort_by_key(|voice| order.get(&voice.svt_id).copied().unwrap_or(usize::MAX));
    subtitles.sort_by_key(|sub| order.get(&sub.svt_id).copied().unwrap_or(usize::MAX));

    Ok(ServantLore {
        cv,
        illustrator,
        comments,
        voices,
        subtitles,
    })
}

pub(crate) async fn assemble_mystic_code(
    ctx: &Ctx<'_>,
    id: i32,
    expand: bool,
) -> Result<MysticCodeEntity, ResolveError> {
    let equip: EquipRow = cached(ctx, CacheTable::Equip, id)
        .await?
        .ok_or(ResolveError::NotFound("mystic code"))?;
    let (skill_joins, exp) = tokio::try_join!(
        rows_of::<EquipSkillRow>(ctx, ChildTable::EquipSkill, id),
        rows_of::<EquipExpRow>(ctx, ChildTable::EquipExp, id),
    )?;
    let skill_ids: Vec<i32> = skill_joins.iter().map(|join| join.skill_id).collect();
    let skills = assemble_skills(ctx, &skill_ids, expand).await?;
    Ok(MysticCodeEntity { equip, skills, exp })
}

pub(crate) async fn assemble_command_code(
    ctx: &Ctx<'_>,
    id: i32,
    expand: bool,
) -> Result<CommandCodeEntity, ResolveError> {
    let cc: CommandCodeRow = cached(ctx, CacheTable::CommandCode, id)
        .await?
        .ok_or(ResolveError::NotFound("command code"))?;
    let (skill_joins, comments) = tokio::try_join!(
        rows_of::<CommandCodeSkillRow>(ctx, ChildTable::CommandCodeSkill, id),
        rows_of::<CommandCodeCommentRow>(ctx, ChildTable::CommandCodeComment, id),
    )?;
    let skill_ids: Vec<i32> = skill_joins.iter().map(|join| join.skill_id).collect();
    let skills = assemble_skills(ctx, &skill_ids, expand).await?;

    let comment = comments.into_iter().next();
    let illustrator = match &comment {
        Some(comment) => {
            row_of::<IllustratorRow>(ctx, ChildTable::Illustrator, comment.illustrator_id).await?
        }
        None => None,
    };

    Ok(CommandCodeEntity {
        cc,
        skills,
        comment,
        illustrator,
    })
}
