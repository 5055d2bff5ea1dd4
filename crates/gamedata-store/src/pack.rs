//! Decoded per-region table collections.
//!
//! A `RegionPack` is what the external bulk loader hands over after parsing
//! a game-data dump: plain typed rows, one `Vec` per table. The engine never
//! sees the dump format itself.

use gamedata_types::ai::AiNode;
use gamedata_types::rows::*;

#[derive(Debug, Clone, Default)]
pub struct RegionPack {
    pub buffs: Vec<BuffRow>,
    pub funcs: Vec<FuncRow>,
    pub func_groups: Vec<FuncGroupRow>,
    pub skills: Vec<SkillRow>,
    pub skill_details: Vec<SkillDetailRow>,
    pub skill_levels: Vec<SkillLevelRow>,
    pub svt_skills: Vec<SvtSkillRow>,
    pub tds: Vec<TdRow>,
    pub td_details: Vec<TdDetailRow>,
    pub td_levels: Vec<TdLevelRow>,
    pub svt_tds: Vec<SvtTdRow>,
    pub svts: Vec<SvtRow>,
    pub svt_cards: Vec<SvtCardRow>,
    pub svt_limits: Vec<SvtLimitRow>,
    pub svt_limit_adds: Vec<SvtLimitAddRow>,
    pub svt_changes: Vec<SvtChangeRow>,
    pub svt_costumes: Vec<SvtCostumeRow>,
    pub svt_exps: Vec<SvtExpRow>,
    pub friendships: Vec<FriendshipRow>,
    pub combine_skills: Vec<CombineSkillRow>,
    pub combine_limits: Vec<CombineLimitRow>,
    pub svt_comments: Vec<SvtCommentRow>,
    pub svt_voices: Vec<SvtVoiceRow>,
    pub subtitles: Vec<SubtitleRow>,
    pub voice_relations: Vec<VoiceRelationRow>,
    pub cvs: Vec<CvRow>,
    pub illustrators: Vec<IllustratorRow>,
    pub equips: Vec<EquipRow>,
    pub equip_skills: Vec<EquipSkillRow>,
    pub equip_exps: Vec<EquipExpRow>,
    pub command_codes: Vec<CommandCodeRow>,
    pub command_code_skills: Vec<CommandCodeSkillRow>,
    pub command_code_comments: Vec<CommandCodeCommentRow>,
    pub items: Vec<ItemRow>,
    pub gifts: Vec<GiftRow>,
    pub wars: Vec<WarRow>,
    pub war_adds: Vec<WarAddRow>,
    pub maps: Vec<MapRow>,
    pub spots: Vec<SpotRow>,
    pub bgms: Vec<BgmRow>,
    pub quests: Vec<QuestRow>,
    pub quest_releases: Vec<QuestReleaseRow>,
    pub quest_phases: Vec<QuestPhaseRow>,
    pub events: Vec<EventRow>,
    pub shops: Vec<ShopRow>,
    pub event_rewards: Vec<EventRewardRow>,
    pub svt_ais: Vec<AiNode>,
    pub field_ais: Vec<AiNode>,
}
