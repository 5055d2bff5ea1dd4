//! Event assembly.

use std::collections::HashSet;

use futures::future::try_join_all;

use gamedata_types::rows::{EventRewardRow, EventRow, GiftRow, ShopRow, WarRow};
use gamedata_types::{EventEntity, ResolveError};

use gamedata_store::{CacheTable, ChildTable};

use crate::engine::Ctx;

use super::{cached, rows_of};

pub(crate) async fn assemble_event(ctx: &Ctx<'_>, id: i32) -> Result<EventEntity, ResolveError> {
    let event: EventRow = cached(ctx, CacheTable::Event, id)
        .await?
        .ok_or(ResolveError::NotFound("event"))?;

    let (wars, shops, rewards) = tokio::try_join!(
        rows_of::<WarRow>(ctx, ChildTable::WarByEvent, id),
        rows_of::<ShopRow>(ctx, ChildTable::Shop, id),
        rows_of::<EventRewardRow>(ctx, ChildTable::EventReward, id),
    )?;

    let mut gift_ids: Vec<i32> = rewards.iter().map(|reward| reward.gift_id).collect();
    let mut seen = HashSet::new();
    gift_ids.retain(|gift_id| seen.insert(*gift_id));

    // dangling gift ids are dropped, not errors
    let gifts: Vec<GiftRow> = try_join_all(
        gift_ids
            .iter()
            .map(|&gift_id| cached::<GiftRow>(ctx, CacheTable::Gift, gift_id)),
    )
    .await?
    .into_iter()
    .flatten()
    .collect();

    Ok(EventEntity {
        event,
        wars,
        shops,
        rewards,
        gifts,
    })
}
