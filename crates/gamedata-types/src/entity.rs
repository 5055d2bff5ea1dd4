//! Composite entities.
//!
//! An assembled entity is the parent row plus its child-collection rows.
//! Expansion and reverse subgraphs attach through explicit `Option` fields:
//! `None` means "not requested", never "empty result". Stripping every
//! attachment back out of an expanded entity reproduces the plain assembly.

use serde::{Deserialize, Serialize};

use crate::ai::AiCollection;
use crate::rows::*;
use crate::summary::{
    BasicReversedBuff, BasicReversedFunction, BasicReversedSkillTd, NiceReversedBuff,
    NiceReversedFunction, NiceReversedSkillTd,
};

// ── reverse payloads ─────────────────────────────────────────────

/// Functions referencing a buff, one payload shape per resolution call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReversedBuffPayload {
    Raw(ReversedBuff),
    Basic(BasicReversedBuff),
    Nice(NiceReversedBuff),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReversedBuff {
    pub functions: Vec<FunctionEntity>,
}

/// Skills and treasure devices referencing a function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReversedFunctionPayload {
    Raw(ReversedFunction),
    Basic(BasicReversedFunction),
    Nice(NiceReversedFunction),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReversedFunction {
    pub skills: Vec<SkillEntity>,
    pub tds: Vec<TdEntity>,
}

/// Holders of a skill or treasure device. Treasure devices never have
/// mystic-code or command-code parents; those lists stay empty for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReversedSkillTdPayload {
    Raw(ReversedSkillTd),
    Basic(BasicReversedSkillTd),
    Nice(NiceReversedSkillTd),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReversedSkillTd {
    pub servants: Vec<ServantEntity>,
    pub mystic_codes: Vec<MysticCodeEntity>,
    pub command_codes: Vec<CommandCodeEntity>,
}

// ── assembled entities ───────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuffEntity {
    pub buff: BuffRow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<ReversedBuffPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionEntity {
    pub func: FuncRow,
    pub groups: Vec<FuncGroupRow>,
    /// Buff sub-entities inlined from `func.vals`, dangling ids filtered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded_vals: Option<Vec<BuffEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<Box<ReversedFunctionPayload>>,
}

/// One skill level with its optional function expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub row: SkillLevelRow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded_funcs: Option<Vec<FunctionEntity>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntity {
    pub skill: SkillRow,
    pub details: Vec<SkillDetailRow>,
    pub levels: Vec<SkillLevel>,
    /// Active-holder join rows, also the raw source of servant-tier reverse.
    pub svt_skills: Vec<SvtSkillRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<Box<ReversedSkillTdPayload>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TdLevel {
    pub row: TdLevelRow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded_funcs: Option<Vec<FunctionEntity>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TdEntity {
    pub td: TdRow,
    pub details: Vec<TdDetailRow>,
    pub levels: Vec<TdLevel>,
    pub svt_tds: Vec<SvtTdRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<Box<ReversedSkillTdPayload>>,
}

/// Auxiliary lore collections; voices and subtitles are ordered by the fixed
/// voice priority (own id, change aliases, enumerated split-form aliases,
/// declared relations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServantLore {
    pub cv: Option<CvRow>,
    pub illustrator: Option<IllustratorRow>,
    pub comments: Vec<SvtCommentRow>,
    pub voices: Vec<SvtVoiceRow>,
    pub subtitles: Vec<SubtitleRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServantEntity {
    pub svt: SvtRow,
    pub cards: Vec<SvtCardRow>,
    pub limits: Vec<SvtLimitRow>,
    pub limit_adds: Vec<SvtLimitAddRow>,
    pub changes: Vec<SvtChangeRow>,
    pub costumes: Vec<SvtCostumeRow>,
    pub exp: Vec<SvtExpRow>,
    pub friendships: Vec<FriendshipRow>,
    pub combine_skills: Vec<CombineSkillRow>,
    pub combine_limits: Vec<CombineLimitRow>,
    pub skills: Vec<SkillEntity>,
    pub tds: Vec<TdEntity>,
    /// Passive skills inlined from `svt.class_passive` when expanding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded_class_passive: Option<Vec<SkillEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lore: Option<ServantLore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MysticCodeEntity {
    pub equip: EquipRow,
    pub skills: Vec<SkillEntity>,
    pub exp: Vec<EquipExpRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandCodeEntity {
    pub cc: CommandCodeRow,
    pub skills: Vec<SkillEntity>,
    pub comment: Option<CommandCodeCommentRow>,
    pub illustrator: Option<IllustratorRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEntity {
    pub item: ItemRow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarEntity {
    pub war: WarRow,
    pub adds: Vec<WarAddRow>,
    pub maps: Vec<MapRow>,
    pub spots: Vec<SpotRow>,
    pub bgms: Vec<BgmRow>,
    pub quests: Vec<QuestRow>,
    pub event: Option<EventRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestEntity {
    pub quest: QuestRow,
    pub releases: Vec<QuestReleaseRow>,
    /// Phase numbers present for this quest, ascending.
    pub phases: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestPhaseEntity {
    pub quest: QuestEntity,
    pub phase: QuestPhaseRow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEntity {
    pub event: EventRow,
    pub wars: Vec<WarRow>,
    pub shops: Vec<ShopRow>,
    pub rewards: Vec<EventRewardRow>,
    pub gifts: Vec<GiftRow>,
}

/// Closed result type of the resolution entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolvedEntity {
    Buff(BuffEntity),
    Function(FunctionEntity),
    Skill(SkillEntity),
    TreasureDevice(TdEntity),
    Servant(ServantEntity),
    MysticCode(MysticCodeEntity),
    CommandCode(CommandCodeEntity),
    Item(ItemEntity),
    War(WarEntity),
    Event(EventEntity),
    Quest(QuestEntity),
    QuestPhase(QuestPhaseEntity),
    Ai(AiCollection),
}
