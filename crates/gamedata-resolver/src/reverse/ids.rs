//! Id-tier discovery over the adjacency index.
//!
//! Pure lookups shared by all payload shapes; materialization happens in the
//! per-shape modules.

use std::collections::BTreeSet;

use gamedata_types::rows::{SvtSkillRow, SvtTdRow};

use crate::adjacency::{AdjacencyIndex, AdjacencyRelation};

pub(crate) fn functions_of_buff(adjacency: &AdjacencyIndex, buff_id: i32) -> BTreeSet<i32> {
    adjacency.parents_of(AdjacencyRelation::BuffToFunction, buff_id)
}

pub(crate) fn skills_of_function(adjacency: &AdjacencyIndex, func_id: i32) -> BTreeSet<i32> {
    adjacency.parents_of(AdjacencyRelation::FunctionToSkill, func_id)
}

pub(crate) fn tds_of_function(adjacency: &AdjacencyIndex, func_id: i32) -> BTreeSet<i32> {
    adjacency.parents_of(AdjacencyRelation::FunctionToTreasureDevice, func_id)
}

/// Active holders from the skill's own join rows, unioned with passive
/// holders from the adjacency index.
pub(crate) fn servants_of_skill(
    adjacency: &AdjacencyIndex,
    active_joins: &[SvtSkillRow],
    skill_id: i32,
) -> BTreeSet<i32> {
    let mut holders: BTreeSet<i32> = active_joins.iter().map(|join| join.svt_id).collect();
    holders.extend(adjacency.parents_of(AdjacencyRelation::PassiveSkillToServant, skill_id));
    holders
}

/// Active ∪ passive holders resolved purely from the index, for shapes that
/// never assemble the skill itself.
pub(crate) fn indexed_servants_of_skill(
    adjacency: &AdjacencyIndex,
    skill_id: i32,
) -> BTreeSet<i32> {
    let mut holders = adjacency.parents_of(AdjacencyRelation::ActiveSkillToServant, skill_id);
    holders.extend(adjacency.parents_of(AdjacencyRelation::PassiveSkillToServant, skill_id));
    holders
}

pub(crate) fn servants_of_td(joins: &[SvtTdRow]) -> BTreeSet<i32> {
    joins.iter().map(|join| join.svt_id).collect()
}

pub(crate) fn indexed_servants_of_td(adjacency: &AdjacencyIndex, td_id: i32) -> BTreeSet<i32> {
    adjacency.parents_of(AdjacencyRelation::TreasureDeviceToServant, td_id)
}

pub(crate) fn mystic_codes_of_skill(adjacency: &AdjacencyIndex, skill_id: i32) -> BTreeSet<i32> {
    adjacency.parents_of(AdjacencyRelation::SkillToMysticCode, skill_id)
}

pub(crate) fn command_codes_of_skill(adjacency: &AdjacencyIndex, skill_id: i32) -> BTreeSet<i32> {
    adjacency.parents_of(AdjacencyRelation::SkillToCommandCode, skill_id)
}
