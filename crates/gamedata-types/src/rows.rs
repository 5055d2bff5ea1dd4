//! Raw table rows.
//!
//! One struct per backing table, trimmed to the columns the resolution paths
//! read. Serialized field names are the Rust names; the loader owns both
//! sides of the encoding.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Buff master row. `vals`/`tvals` and the indv lists are trait-id lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuffRow {
    pub id: i32,
    pub buff_group: i32,
    pub buff_type: i32,
    pub name: String,
    pub detail: String,
    pub icon_id: i32,
    pub vals: Vec<i32>,
    pub tvals: Vec<i32>,
    pub ck_self_indv: Vec<i32>,
    pub ck_op_indv: Vec<i32>,
    /// Free-form script blob carried through as-is.
    #[serde(default)]
    pub script: Value,
}

/// Function master row. Whether `vals` holds buff ids or trait/event values
/// depends on `func_type` (see `gameval::FUNC_VALS_NOT_BUFF`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncRow {
    pub id: i32,
    pub func_type: i32,
    pub target_type: i32,
    pub apply_target: i32,
    pub vals: Vec<i32>,
    pub tvals: Vec<i32>,
    pub quest_tvals: Vec<i32>,
    pub popup_text: String,
    pub popup_icon_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncGroupRow {
    pub func_id: i32,
    pub event_id: i32,
    pub icon_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRow {
    pub id: i32,
    pub skill_type: i32,
    pub name: String,
    pub ruby: String,
    pub icon_id: i32,
    pub max_lv: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDetailRow {
    pub id: i32,
    pub detail: String,
}

/// One skill level; `func_ids` is the forward edge into functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLevelRow {
    pub skill_id: i32,
    pub lv: i32,
    pub func_ids: Vec<i32>,
    pub svals: Vec<String>,
}

/// Active-skill join row: which servant holds which skill in which slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvtSkillRow {
    pub svt_id: i32,
    pub num: i32,
    pub priority: i32,
    pub skill_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TdRow {
    pub id: i32,
    pub name: String,
    pub ruby: String,
    pub rank: String,
    pub type_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TdDetailRow {
    pub id: i32,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TdLevelRow {
    pub td_id: i32,
    pub lv: i32,
    pub func_ids: Vec<i32>,
    pub svals: Vec<String>,
}

/// Treasure-device join row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvtTdRow {
    pub svt_id: i32,
    pub num: i32,
    pub priority: i32,
    pub td_id: i32,
    pub card_id: i32,
}

/// Servant master row. `class_passive` is the passive-skill forward edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvtRow {
    pub id: i32,
    pub collection_no: i32,
    pub name: String,
    pub svt_type: i32,
    pub flag: i32,
    pub class_id: i32,
    pub gender_type: i32,
    pub cost: i32,
    pub class_passive: Vec<i32>,
    pub card_ids: Vec<i32>,
    pub exp_type: i32,
    pub combine_skill_id: i32,
    pub combine_limit_id: i32,
    pub friendship_id: i32,
    pub cv_id: i32,
    pub illustrator_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvtCardRow {
    pub svt_id: i32,
    pub card_id: i32,
    pub normal_damage: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvtLimitRow {
    pub svt_id: i32,
    pub limit_count: i32,
    pub rarity: i32,
    pub atk_base: i32,
    pub atk_max: i32,
    pub hp_base: i32,
    pub hp_max: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvtLimitAddRow {
    pub svt_id: i32,
    pub limit_count: i32,
    pub individuality: Vec<i32>,
}

/// Alternate-form row; `svt_voice_id` is the voice alias of the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvtChangeRow {
    pub svt_id: i32,
    pub priority: i32,
    pub name: String,
    pub svt_voice_id: i32,
    pub limit_count: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvtCostumeRow {
    pub svt_id: i32,
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvtExpRow {
    pub exp_type: i32,
    pub lv: i32,
    pub exp: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendshipRow {
    pub id: i32,
    pub rank: i32,
    pub friendship: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombineSkillRow {
    pub id: i32,
    pub skill_lv: i32,
    pub item_ids: Vec<i32>,
    pub item_nums: Vec<i32>,
    pub qp: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombineLimitRow {
    pub id: i32,
    pub svt_limit: i32,
    pub item_ids: Vec<i32>,
    pub item_nums: Vec<i32>,
    pub qp: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvtCommentRow {
    pub svt_id: i32,
    pub comment_no: i32,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvtVoiceRow {
    pub svt_id: i32,
    pub voice_prefix: i32,
    pub voice_type: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtitleRow {
    pub id: String,
    pub svt_id: i32,
    pub serif: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceRelationRow {
    pub svt_id: i32,
    pub relation_svt_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvRow {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IllustratorRow {
    pub id: i32,
    pub name: String,
}

/// Mystic code master row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipRow {
    pub id: i32,
    pub name: String,
    pub detail: String,
    pub max_lv: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipSkillRow {
    pub equip_id: i32,
    pub num: i32,
    pub skill_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipExpRow {
    pub equip_id: i32,
    pub lv: i32,
    pub exp: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandCodeRow {
    pub id: i32,
    pub collection_no: i32,
    pub name: String,
    pub rarity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandCodeSkillRow {
    pub cc_id: i32,
    pub num: i32,
    pub skill_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandCodeCommentRow {
    pub cc_id: i32,
    pub comment_no: i32,
    pub comment: String,
    pub illustrator_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRow {
    pub id: i32,
    pub item_type: i32,
    pub name: String,
    pub icon_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftRow {
    pub id: i32,
    pub gift_type: i32,
    pub obj_id: i32,
    pub num: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarRow {
    pub id: i32,
    pub event_id: i32,
    pub coordinates: Vec<Vec<i32>>,
    pub age: String,
    pub name: String,
    pub long_name: String,
    pub bgm_id: i32,
    pub flag: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarAddRow {
    pub war_id: i32,
    pub add_type: i32,
    pub target_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRow {
    pub id: i32,
    pub war_id: i32,
    pub bgm_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotRow {
    pub id: i32,
    pub map_id: i32,
    pub name: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BgmRow {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestRow {
    pub id: i32,
    pub spot_id: i32,
    pub quest_type: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestReleaseRow {
    pub quest_id: i32,
    pub cond_type: i32,
    pub target_id: i32,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestPhaseRow {
    pub quest_id: i32,
    pub phase: i32,
    pub class_ids: Vec<i32>,
    pub individuality: Vec<i32>,
    pub battle_bg_id: i32,
}

/// Event master row; `war_ids` is denormalized at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRow {
    pub id: i32,
    pub event_type: i32,
    pub name: String,
    pub notice_at: i64,
    pub started_at: i64,
    pub ended_at: i64,
    pub finished_at: i64,
    pub war_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopRow {
    pub id: i32,
    pub event_id: i32,
    pub purchase_type: i32,
    pub target_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRewardRow {
    pub event_id: i32,
    pub point: i32,
    pub gift_id: i32,
}
