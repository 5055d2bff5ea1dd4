//! War and quest assembly.

use std::collections::HashSet;

use gamedata_types::rows::{
    BgmRow, EventRow, MapRow, QuestPhaseRow, QuestReleaseRow, QuestRow, SpotRow, WarAddRow,
    WarRow,
};
use gamedata_types::{QuestEntity, QuestPhaseEntity, ResolveError, WarEntity};

use gamedata_store::{CacheTable, ChildTable};

use crate::engine::Ctx;

use super::{cached, row_of, rows_of, rows_of_many};

pub(crate) async fn assemble_war(ctx: &Ctx<'_>, id: i32) -> Result<WarEntity, ResolveError> {
    let war: WarRow = cached(ctx, CacheTable::War, id)
        .await?
        .ok_or(ResolveError::NotFound("war"))?;

    let (adds, maps) = tokio::try_join!(
        rows_of::<WarAddRow>(ctx, ChildTable::WarAdd, id),
        rows_of::<MapRow>(ctx, ChildTable::Map, id),
    )?;

    let map_ids: Vec<i32> = maps.iter().map(|map| map.id).collect();
    let spots: Vec<SpotRow> = rows_of_many(ctx, ChildTable::Spot, &map_ids).await?;

    let spot_ids: Vec<i32> = spots.iter().map(|spot| spot.id).collect();
    let quests: Vec<QuestRow> = rows_of_many(ctx, ChildTable::QuestBySpot, &spot_ids).await?;

    let mut bgm_ids: Vec<i32> = maps.iter().map(|map| map.bgm_id).collect();
    bgm_ids.push(war.bgm_id);
    let mut seen = HashSet::new();
    bgm_ids.retain(|bgm_id| seen.insert(*bgm_id));
    let bgms: Vec<BgmRow> = rows_of_many(ctx, ChildTable::Bgm, &bgm_ids).await?;

    let event: Option<EventRow> = cached(ctx, CacheTable::Event, war.event_id).await?;

    Ok(WarEntity {
        war,
        adds,
        maps,
        spots,
        bgms,
        quests,
        event,
    })
}

pub(crate) async fn assemble_quest(ctx: &Ctx<'_>, id: i32) -> Result<QuestEntity, ResolveError> {
    let quest: QuestRow = row_of(ctx, ChildTable::QuestById, id)
        .await?
        .ok_or(ResolveError::NotFound("quest"))?;
    let (releases, phase_rows) = tokio::try_join!(
        rows_of::<QuestReleaseRow>(ctx, ChildTable::QuestRelease, id),
        rows_of::<QuestPhaseRow>(ctx, ChildTable::QuestPhase, id),
    )?;
    let mut phases: Vec<i32> = phase_rows.iter().map(|row| row.phase).collect();
    phases.sort_unstable();
    Ok(QuestEntity {
        quest,
        releases,
        phases,
    })
}

pub(crate) async fn assemble_quest_phase(
    ctx: &Ctx<'_>,
    id: i32,
    phase: i32,
) -> Result<QuestPhaseEntity, ResolveError> {
    let quest = assemble_quest(ctx, id).await?;
    let phase_rows: Vec<QuestPhaseRow> = rows_of(ctx, ChildTable::QuestPhase, id).await?;
    let phase = phase_rows
        .into_iter()
        .find(|row| row.phase == phase)
        .ok_or(ResolveError::NotFound("quest phase"))?;
    Ok(QuestPhaseEntity { quest, phase })
}
