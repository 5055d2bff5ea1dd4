//! In-memory generation backend.
//!
//! Holds both storage tiers for any number of regions. A backend is built by
//! the loader, loaded once per region, and then only read; a data reload
//! builds a fresh backend and swaps the whole generation.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use gamedata_types::{Region, StoreError};

use crate::cache::PointCache;
use crate::pack::RegionPack;
use crate::relational::RelationalStore;
use crate::tables::{CacheTable, ChildTable};

#[derive(Debug, Default)]
pub struct MemoryBackend {
    cache: HashMap<(Region, CacheTable), HashMap<i32, Vec<u8>>>,
    rows: HashMap<(Region, ChildTable), HashMap<i32, Vec<Value>>>,
}

fn encode<T: Serialize>(table: &'static str, row: &T) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(row).map_err(|e| StoreError::Backend(format!("encode {table}: {e}")))
}

fn to_value<T: Serialize>(table: &'static str, row: &T) -> Result<Value, StoreError> {
    serde_json::to_value(row).map_err(|e| StoreError::Backend(format!("encode {table}: {e}")))
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn put_cache<T: Serialize>(
        &mut self,
        region: Region,
        table: CacheTable,
        items: &[T],
        key: impl Fn(&T) -> i32,
    ) -> Result<(), StoreError> {
        let slot = self.cache.entry((region, table)).or_default();
        for item in items {
            slot.insert(key(item), encode(table.name(), item)?);
        }
        Ok(())
    }

    fn put_rows<T: Serialize>(
        &mut self,
        region: Region,
        table: ChildTable,
        items: &[T],
        key: impl Fn(&T) -> i32,
    ) -> Result<(), StoreError> {
        let slot = self.rows.entry((region, table)).or_default();
        for item in items {
            slot.entry(key(item))
                .or_default()
                .push(to_value(table.name(), item)?);
        }
        Ok(())
    }

    /// Populate both tiers for one region from a decoded pack.
    pub fn load_region(&mut self, region: Region, pack: &RegionPack) -> Result<(), StoreError> {
        // point cache: primary rows by their own id
        self.put_cache(region, CacheTable::Buff, &pack.buffs, |r| r.id)?;
        self.put_cache(region, CacheTable::Function, &pack.funcs, |r| r.id)?;
        self.put_cache(region, CacheTable::Servant, &pack.svts, |r| r.id)?;
        self.put_cache(region, CacheTable::Skill, &pack.skills, |r| r.id)?;
        self.put_cache(region, CacheTable::TreasureDevice, &pack.tds, |r| r.id)?;
        self.put_cache(region, CacheTable::Equip, &pack.equips, |r| r.id)?;
        self.put_cache(region, CacheTable::CommandCode, &pack.command_codes, |r| {
            r.id
        })?;
        self.put_cache(region, CacheTable::Item, &pack.items, |r| r.id)?;
        self.put_cache(region, CacheTable::Gift, &pack.gifts, |r| r.id)?;
        self.put_cache(region, CacheTable::War, &pack.wars, |r| r.id)?;
        self.put_cache(region, CacheTable::Event, &pack.events, |r| r.id)?;

        // base limit row per servant: the lowest limit count wins
        let mut base_limits = HashMap::new();
        for limit in &pack.svt_limits {
            base_limits
                .entry(limit.svt_id)
                .and_modify(|kept: &mut &gamedata_types::rows::SvtLimitRow| {
                    if limit.limit_count < kept.limit_count {
                        *kept = limit;
                    }
                })
                .or_insert(limit);
        }
        let base_limits: Vec<_> = base_limits.into_values().cloned().collect();
        self.put_cache(region, CacheTable::SvtLimit, &base_limits, |r| r.svt_id)?;

        // relational child tables, one index family per access path
        self.put_rows(region, ChildTable::FuncGroup, &pack.func_groups, |r| {
            r.func_id
        })?;
        self.put_rows(region, ChildTable::SkillDetail, &pack.skill_details, |r| {
            r.id
        })?;
        self.put_rows(region, ChildTable::SkillLevel, &pack.skill_levels, |r| {
            r.skill_id
        })?;
        self.put_rows(region, ChildTable::SvtSkillBySkill, &pack.svt_skills, |r| {
            r.skill_id
        })?;
        self.put_rows(region, ChildTable::SvtSkillBySvt, &pack.svt_skills, |r| {
            r.svt_id
        })?;
        self.put_rows(region, ChildTable::TdDetail, &pack.td_details, |r| r.id)?;
        self.put_rows(region, ChildTable::TdLevel, &pack.td_levels, |r| r.td_id)?;
        self.put_rows(region, ChildTable::SvtTdByTd, &pack.svt_tds, |r| r.td_id)?;
        self.put_rows(region, ChildTable::SvtTdBySvt, &pack.svt_tds, |r| r.svt_id)?;
        self.put_rows(region, ChildTable::SvtCard, &pack.svt_cards, |r| r.svt_id)?;
        self.put_rows(region, ChildTable::SvtLimit, &pack.svt_limits, |r| r.svt_id)?;
        self.put_rows(region, ChildTable::SvtLimitAdd, &pack.svt_limit_adds, |r| {
            r.svt_id
        })?;
        self.put_rows(region, ChildTable::SvtChange, &pack.svt_changes, |r| {
            r.svt_id
        })?;
        self.put_rows(region, ChildTable::SvtCostume, &pack.svt_costumes, |r| {
            r.svt_id
        })?;
        self.put_rows(region, ChildTable::SvtExp, &pack.svt_exps, |r| r.exp_type)?;
        self.put_rows(region, ChildTable::Friendship, &pack.friendships, |r| r.id)?;
        self.put_rows(region, ChildTable::CombineSkill, &pack.combine_skills, |r| {
            r.id
        })?;
        self.put_rows(region, ChildTable::CombineLimit, &pack.combine_limits, |r| {
            r.id
        })?;
        self.put_rows(region, ChildTable::SvtComment, &pack.svt_comments, |r| {
            r.svt_id
        })?;
        self.put_rows(region, ChildTable::SvtVoice, &pack.svt_voices, |r| r.svt_id)?;
        self.put_rows(region, ChildTable::Subtitle, &pack.subtitles, |r| r.svt_id)?;
        self.put_rows(
            region,
            ChildTable::VoiceRelation,
            &pack.voice_relations,
            |r| r.svt_id,
        )?;
        self.put_rows(region, ChildTable::Cv, &pack.cvs, |r| r.id)?;
        self.put_rows(region, ChildTable::Illustrator, &pack.illustrators, |r| {
            r.id
        })?;
        self.put_rows(region, ChildTable::EquipSkill, &pack.equip_skills, |r| {
            r.equip_id
        })?;
        self.put_rows(region, ChildTable::EquipExp, &pack.equip_exps, |r| {
            r.equip_id
        })?;
        self.put_rows(
            region,
            ChildTable::CommandCodeSkill,
            &pack.command_code_skills,
            |r| r.cc_id,
        )?;
        self.put_rows(
            region,
            ChildTable::CommandCodeComment,
            &pack.command_code_comments,
            |r| r.cc_id,
        )?;
        self.put_rows(region, ChildTable::WarAdd, &pack.war_adds, |r| r.war_id)?;
        self.put_rows(region, ChildTable::WarByEvent, &pack.wars, |r| r.event_id)?;
        self.put_rows(region, ChildTable::Map, &pack.maps, |r| r.war_id)?;
        self.put_rows(region, ChildTable::Spot, &pack.spots, |r| r.map_id)?;
        self.put_rows(region, ChildTable::Bgm, &pack.bgms, |r| r.id)?;
        self.put_rows(region, ChildTable::QuestById, &pack.quests, |r| r.id)?;
        self.put_rows(region, ChildTable::QuestBySpot, &pack.quests, |r| r.spot_id)?;
        self.put_rows(
            region,
            ChildTable::QuestRelease,
            &pack.quest_releases,
            |r| r.quest_id,
        )?;
        self.put_rows(region, ChildTable::QuestPhase, &pack.quest_phases, |r| {
            r.quest_id
        })?;
        self.put_rows(region, ChildTable::Shop, &pack.shops, |r| r.event_id)?;
        self.put_rows(region, ChildTable::EventReward, &pack.event_rewards, |r| {
            r.event_id
        })?;
        self.put_rows(region, ChildTable::AiSvt, &pack.svt_ais, |r| r.id)?;
        self.put_rows(region, ChildTable::AiField, &pack.field_ais, |r| r.id)?;

        Ok(())
    }
}

#[async_trait]
impl PointCache for MemoryBackend {
    async fn fetch_by_id(
        &self,
        region: Region,
        table: CacheTable,
        id: i32,
    ) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self
            .cache
            .get(&(region, table))
            .and_then(|slot| slot.get(&id))
            .cloned())
    }

    async fn exists(
        &self,
        region: Region,
        table: CacheTable,
        id: i32,
    ) -> Result<bool, StoreError> {
        Ok(self
            .cache
            .get(&(region, table))
            .is_some_and(|slot| slot.contains_key(&id)))
    }
}

#[async_trait]
impl RelationalStore for MemoryBackend {
    async fn fetch_one(
        &self,
        region: Region,
        table: ChildTable,
        key: i32,
    ) -> Result<Option<Value>, StoreError> {
        Ok(self
            .rows
            .get(&(region, table))
            .and_then(|slot| slot.get(&key))
            .and_then(|rows| rows.first())
            .cloned())
    }

    async fn fetch_all(
        &self,
        region: Region,
        table: ChildTable,
        key: i32,
    ) -> Result<Vec<Value>, StoreError> {
        Ok(self
            .rows
            .get(&(region, table))
            .and_then(|slot| slot.get(&key))
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_all_for_many(
        &self,
        region: Region,
        table: ChildTable,
        keys: &[i32],
    ) -> Result<Vec<Value>, StoreError> {
        let slot = self.rows.get(&(region, table));
        let mut out = Vec::new();
        if let Some(slot) = slot {
            for key in keys {
                if let Some(rows) = slot.get(key) {
                    out.extend(rows.iter().cloned());
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamedata_types::rows::{BuffRow, SkillLevelRow, SvtLimitRow};

    fn buff(id: i32) -> BuffRow {
        BuffRow {
            id,
            buff_group: 0,
            buff_type: 1,
            name: format!("buff {id}"),
            detail: String::new(),
            icon_id: 1,
            vals: vec![],
            tvals: vec![],
            ck_self_indv: vec![],
            ck_op_indv: vec![],
            script: Value::Null,
        }
    }

    fn loaded() -> MemoryBackend {
        let mut pack = RegionPack::default();
        pack.buffs = vec![buff(1), buff(2)];
        pack.skill_levels = vec![
            SkillLevelRow {
                skill_id: 10,
                lv: 1,
                func_ids: vec![100],
                svals: vec![],
            },
            SkillLevelRow {
                skill_id: 10,
                lv: 2,
                func_ids: vec![100],
                svals: vec![],
            },
            SkillLevelRow {
                skill_id: 11,
                lv: 1,
                func_ids: vec![101],
                svals: vec![],
            },
        ];
        pack.svt_limits = vec![
            SvtLimitRow {
                svt_id: 7,
                limit_count: 4,
                rarity: 5,
                atk_base: 1,
                atk_max: 2,
                hp_base: 3,
                hp_max: 4,
            },
            SvtLimitRow {
                svt_id: 7,
                limit_count: 0,
                rarity: 5,
                atk_base: 10,
                atk_max: 20,
                hp_base: 30,
                hp_max: 40,
            },
        ];
        let mut backend = MemoryBackend::new();
        backend.load_region(Region::Jp, &pack).unwrap();
        backend
    }

    #[tokio::test]
    async fn cache_fetch_and_exists() {
        let backend = loaded();
        assert!(backend.exists(Region::Jp, CacheTable::Buff, 1).await.unwrap());
        assert!(!backend.exists(Region::Jp, CacheTable::Buff, 9).await.unwrap());
        assert!(!backend.exists(Region::Na, CacheTable::Buff, 1).await.unwrap());

        let bytes = backend
            .fetch_by_id(Region::Jp, CacheTable::Buff, 2)
            .await
            .unwrap()
            .unwrap();
        let row: BuffRow = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(row.id, 2);
    }

    #[tokio::test]
    async fn rows_preserve_load_order() {
        let backend = loaded();
        let rows = backend
            .fetch_all(Region::Jp, ChildTable::SkillLevel, 10)
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["lv"], 1);
        assert_eq!(rows[1]["lv"], 2);
    }

    #[tokio::test]
    async fn fetch_all_for_many_concatenates_in_key_order() {
        let backend = loaded();
        let rows = backend
            .fetch_all_for_many(Region::Jp, ChildTable::SkillLevel, &[11, 10])
            .await
            .unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["skill_id"], 11);
    }

    #[tokio::test]
    async fn base_limit_is_the_lowest_limit_count() {
        let backend = loaded();
        let bytes = backend
            .fetch_by_id(Region::Jp, CacheTable::SvtLimit, 7)
            .await
            .unwrap()
            .unwrap();
        let row: SvtLimitRow = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(row.limit_count, 0);
        assert_eq!(row.atk_max, 20);
    }

    #[tokio::test]
    async fn missing_children_are_empty_not_errors() {
        let backend = loaded();
        let rows = backend
            .fetch_all(Region::Jp, ChildTable::SvtCard, 12345)
            .await
            .unwrap();
        assert!(rows.is_empty());
        let one = backend
            .fetch_one(Region::Jp, ChildTable::Cv, 9)
            .await
            .unwrap();
        assert!(one.is_none());
    }
}
