//! Precomputed reverse multimaps.
//!
//! One `AdjacencyIndex` is built per region generation in a single pass over
//! the forward tables and is read-only afterwards. Reloads never mutate an
//! index in place; they build a fresh one and swap the whole generation.

use std::collections::{BTreeSet, HashMap};

use gamedata_types::gameval::func_vals_are_buffs;

use gamedata_store::RegionPack;

/// The reverse relations the resolver walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjacencyRelation {
    /// Buff id → functions carrying it in their value list.
    BuffToFunction,
    /// Function id → skills referencing it from a level row.
    FunctionToSkill,
    /// Function id → treasure devices referencing it from a level row.
    FunctionToTreasureDevice,
    /// Skill id → servants holding it as a class passive.
    PassiveSkillToServant,
    /// Skill id → servants holding it as an active skill.
    ActiveSkillToServant,
    /// Treasure device id → owning servants.
    TreasureDeviceToServant,
    /// Skill id → mystic codes granting it.
    SkillToMysticCode,
    /// Skill id → command codes granting it.
    SkillToCommandCode,
}

#[derive(Debug, Default)]
pub struct AdjacencyIndex {
    maps: HashMap<AdjacencyRelation, HashMap<i32, BTreeSet<i32>>>,
}

impl AdjacencyIndex {
    /// Single pass over the forward rows of one region pack.
    pub fn build(pack: &RegionPack) -> Self {
        let mut index = Self::default();

        // Trait-valued function types are skipped so trait ids never alias
        // into buff ids.
        for func in &pack.funcs {
            if func_vals_are_buffs(func.func_type) {
                for &buff_id in &func.vals {
                    index.insert(AdjacencyRelation::BuffToFunction, buff_id, func.id);
                }
            }
        }
        for level in &pack.skill_levels {
            for &func_id in &level.func_ids {
                index.insert(AdjacencyRelation::FunctionToSkill, func_id, level.skill_id);
            }
        }
        for level in &pack.td_levels {
            for &func_id in &level.func_ids {
                index.insert(
                    AdjacencyRelation::FunctionToTreasureDevice,
                    func_id,
                    level.td_id,
                );
            }
        }
        for svt in &pack.svts {
            for &skill_id in &svt.class_passive {
                index.insert(AdjacencyRelation::PassiveSkillToServant, skill_id, svt.id);
            }
        }
        for join in &pack.svt_skills {
            index.insert(
                AdjacencyRelation::ActiveSkillToServant,
                join.skill_id,
                join.svt_id,
            );
        }
        for join in &pack.svt_tds {
            index.insert(
                AdjacencyRelation::TreasureDeviceToServant,
                join.td_id,
                join.svt_id,
            );
        }
        for join in &pack.equip_skills {
            index.insert(
                AdjacencyRelation::SkillToMysticCode,
                join.skill_id,
                join.equip_id,
            );
        }
        for join in &pack.command_code_skills {
            index.insert(
                AdjacencyRelation::SkillToCommandCode,
                join.skill_id,
                join.cc_id,
            );
        }

        index
    }

    fn insert(&mut self, relation: AdjacencyRelation, child: i32, parent: i32) {
        self.maps
            .entry(relation)
            .or_default()
            .entry(child)
            .or_default()
            .insert(parent);
    }

    /// Parent ids referencing `child_id`; empty when nothing refers to it.
    pub fn parents_of(&self, relation: AdjacencyRelation, child_id: i32) -> BTreeSet<i32> {
        self.maps
            .get(&relation)
            .and_then(|map| map.get(&child_id))
            .cloned()
            .unwrap_or_default()
    }

    /// Total edge count, for load-time logging.
    pub fn edge_count(&self) -> usize {
        self.maps
            .values()
            .flat_map(|map| map.values())
            .map(BTreeSet::len)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamedata_types::gameval::func_type;
    use gamedata_types::rows::{FuncRow, SkillLevelRow, SvtSkillRow};

    fn func(id: i32, func_type: i32, vals: Vec<i32>) -> FuncRow {
        FuncRow {
            id,
            func_type,
            target_type: 0,
            apply_target: 0,
            vals,
            tvals: vec![],
            quest_tvals: vec![],
            popup_text: String::new(),
            popup_icon_id: 0,
        }
    }

    #[test]
    fn buff_membership_indexes_parents() {
        let mut pack = RegionPack::default();
        pack.funcs = vec![
            func(10, func_type::ADD_STATE, vec![500]),
            func(11, func_type::ADD_STATE_SHORT, vec![500, 501]),
        ];
        let index = AdjacencyIndex::build(&pack);
        let parents = index.parents_of(AdjacencyRelation::BuffToFunction, 500);
        assert_eq!(parents.into_iter().collect::<Vec<_>>(), vec![10, 11]);
    }

    #[test]
    fn trait_valued_functions_are_not_buff_parents() {
        let mut pack = RegionPack::default();
        pack.funcs = vec![func(12, func_type::SUB_STATE, vec![500])];
        let index = AdjacencyIndex::build(&pack);
        assert!(index
            .parents_of(AdjacencyRelation::BuffToFunction, 500)
            .is_empty());
    }

    #[test]
    fn unknown_child_is_an_empty_set() {
        let index = AdjacencyIndex::build(&RegionPack::default());
        assert!(index
            .parents_of(AdjacencyRelation::FunctionToSkill, 999)
            .is_empty());
    }

    #[test]
    fn duplicate_references_collapse() {
        let mut pack = RegionPack::default();
        pack.skill_levels = (1..=10)
            .map(|lv| SkillLevelRow {
                skill_id: 300,
                lv,
                func_ids: vec![10],
                svals: vec![],
            })
            .collect();
        let index = AdjacencyIndex::build(&pack);
        let parents = index.parents_of(AdjacencyRelation::FunctionToSkill, 10);
        assert_eq!(parents.len(), 1);
        assert!(parents.contains(&300));
    }

    #[test]
    fn active_holders_indexed_from_join_rows() {
        let mut pack = RegionPack::default();
        pack.svt_skills = vec![SvtSkillRow {
            svt_id: 100100,
            num: 1,
            priority: 0,
            skill_id: 300,
        }];
        let index = AdjacencyIndex::build(&pack);
        assert!(index
            .parents_of(AdjacencyRelation::ActiveSkillToServant, 300)
            .contains(&100100));
        assert_eq!(index.edge_count(), 1);
    }
}
