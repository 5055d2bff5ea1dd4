//! Entity assembly: one primary row plus its child collections.
//!
//! Assembly is a pure function of (region, kind, id) over the current
//! generation. Missing primary rows are NotFound; missing child collections
//! are empty, never errors. Independent child fetches within one assembly
//! fan out with `try_join!`.

pub(crate) mod event;
pub(crate) mod skill;
pub(crate) mod svt;
pub(crate) mod war;

pub(crate) use event::assemble_event;
pub(crate) use skill::{assemble_skill, assemble_td};
pub(crate) use svt::{assemble_command_code, assemble_mystic_code, assemble_servant};
pub(crate) use war::{assemble_quest, assemble_quest_phase, assemble_war};

use serde::de::DeserializeOwned;

use gamedata_types::rows::{BuffRow, FuncGroupRow, FuncRow, ItemRow};
use gamedata_types::{BuffEntity, FunctionEntity, ItemEntity, ResolveError};

use gamedata_store::{decode_rows, fetch_decoded, CacheTable, ChildTable};

use crate::engine::Ctx;
use crate::expand::{self, ExpandGuard};

// ── fetch helpers ────────────────────────────────────────────────

pub(crate) async fn cached<T: DeserializeOwned>(
    ctx: &Ctx<'_>,
    table: CacheTable,
    id: i32,
) -> Result<Option<T>, ResolveError> {
    Ok(fetch_decoded(ctx.cache(), ctx.region, table, id).await?)
}

pub(crate) async fn row_of<T: DeserializeOwned>(
    ctx: &Ctx<'_>,
    table: ChildTable,
    key: i32,
) -> Result<Option<T>, ResolveError> {
    let row = ctx.store().fetch_one(ctx.region, table, key).await?;
    Ok(row
        .map(|row| gamedata_store::decode_row(table, row))
        .transpose()?)
}

pub(crate) async fn rows_of<T: DeserializeOwned>(
    ctx: &Ctx<'_>,
    table: ChildTable,
    key: i32,
) -> Result<Vec<T>, ResolveError> {
    let rows = ctx.store().fetch_all(ctx.region, table, key).await?;
    Ok(decode_rows(table, rows)?)
}

pub(crate) async fn rows_of_many<T: DeserializeOwned>(
    ctx: &Ctx<'_>,
    table: ChildTable,
    keys: &[i32],
) -> Result<Vec<T>, ResolveError> {
    let rows = ctx
        .store()
        .fetch_all_for_many(ctx.region, table, keys)
        .await?;
    Ok(decode_rows(table, rows)?)
}

// ── leaf assembly ────────────────────────────────────────────────

pub(crate) async fn assemble_buff(ctx: &Ctx<'_>, id: i32) -> Result<BuffEntity, ResolveError> {
    let buff: BuffRow = cached(ctx, CacheTable::Buff, id)
        .await?
        .ok_or(ResolveError::NotFound("buff"))?;
    Ok(BuffEntity {
        buff,
        reverse: None,
    })
}

pub(crate) async fn assemble_function(
    ctx: &Ctx<'_>,
    id: i32,
    expand: bool,
    guard: &ExpandGuard,
) -> Result<FunctionEntity, ResolveError> {
    let func: FuncRow = cached(ctx, CacheTable::Function, id)
        .await?
        .ok_or(ResolveError::NotFound("function"))?;
    let groups: Vec<FuncGroupRow> = rows_of(ctx, ChildTable::FuncGroup, id).await?;
    let mut entity = FunctionEntity {
        func,
        groups,
        expanded_vals: None,
        reverse: None,
    };
    if expand {
        expand::expand_function(ctx, &mut entity, guard).await?;
    }
    Ok(entity)
}

pub(crate) async fn assemble_item(ctx: &Ctx<'_>, id: i32) -> Result<ItemEntity, ResolveError> {
    let item: ItemRow = cached(ctx, CacheTable::Item, id)
        .await?
        .ok_or(ResolveError::NotFound("item"))?;
    Ok(ItemEntity { item })
}
