//! Table registries for the two storage tiers.

/// Point-lookup cache tables: primary rows keyed by their own id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheTable {
    Buff,
    Function,
    Servant,
    Skill,
    TreasureDevice,
    Equip,
    CommandCode,
    Item,
    Gift,
    War,
    Event,
    /// Base limit row per servant, keyed by servant id.
    SvtLimit,
}

impl CacheTable {
    pub fn name(self) -> &'static str {
        match self {
            CacheTable::Buff => "buff",
            CacheTable::Function => "func",
            CacheTable::Servant => "svt",
            CacheTable::Skill => "skill",
            CacheTable::TreasureDevice => "td",
            CacheTable::Equip => "equip",
            CacheTable::CommandCode => "command_code",
            CacheTable::Item => "item",
            CacheTable::Gift => "gift",
            CacheTable::War => "war",
            CacheTable::Event => "event",
            CacheTable::SvtLimit => "svt_limit",
        }
    }
}

/// Relational child tables. Each entry is one index family: the same rows
/// may be registered under two entries when the resolution paths address
/// them by different keys (quests by id and by spot, join rows from either
/// side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildTable {
    /// Func group rows by function id.
    FuncGroup,
    /// Skill detail rows by skill id.
    SkillDetail,
    /// Skill level rows by skill id.
    SkillLevel,
    /// Active-skill join rows by skill id.
    SvtSkillBySkill,
    /// Active-skill join rows by servant id.
    SvtSkillBySvt,
    /// Treasure-device detail rows by td id.
    TdDetail,
    /// Treasure-device level rows by td id.
    TdLevel,
    /// Treasure-device join rows by td id.
    SvtTdByTd,
    /// Treasure-device join rows by servant id.
    SvtTdBySvt,
    /// Card rows by servant id.
    SvtCard,
    /// All limit rows by servant id.
    SvtLimit,
    /// Limit-add rows by servant id.
    SvtLimitAdd,
    /// Form-change rows by servant id.
    SvtChange,
    /// Costume rows by servant id.
    SvtCostume,
    /// Exp curve rows by exp-type id.
    SvtExp,
    /// Friendship rows by friendship id.
    Friendship,
    /// Skill-combine rows by combine id.
    CombineSkill,
    /// Limit-combine rows by combine id.
    CombineLimit,
    /// Profile comment rows by servant id.
    SvtComment,
    /// Voice rows by servant id.
    SvtVoice,
    /// Subtitle rows by servant id.
    Subtitle,
    /// Voice relation rows by servant id.
    VoiceRelation,
    /// Voice actor rows by cv id.
    Cv,
    /// Illustrator rows by illustrator id.
    Illustrator,
    /// Mystic-code skill join rows by equip id.
    EquipSkill,
    /// Mystic-code exp rows by equip id.
    EquipExp,
    /// Command-code skill join rows by command-code id.
    CommandCodeSkill,
    /// Command-code comment rows by command-code id.
    CommandCodeComment,
    /// War addition rows by war id.
    WarAdd,
    /// War rows by event id.
    WarByEvent,
    /// Map rows by war id.
    Map,
    /// Spot rows by map id.
    Spot,
    /// Bgm rows by bgm id.
    Bgm,
    /// Quest rows by quest id.
    QuestById,
    /// Quest rows by spot id.
    QuestBySpot,
    /// Quest release rows by quest id.
    QuestRelease,
    /// Quest phase rows by quest id.
    QuestPhase,
    /// Shop rows by event id.
    Shop,
    /// Event reward rows by event id.
    EventReward,
    /// Unit-scoped AI rows by AI id.
    AiSvt,
    /// Battlefield-scoped AI rows by AI id.
    AiField,
}

impl ChildTable {
    pub fn name(self) -> &'static str {
        match self {
            ChildTable::FuncGroup => "func_group",
            ChildTable::SkillDetail => "skill_detail",
            ChildTable::SkillLevel => "skill_level",
            ChildTable::SvtSkillBySkill => "svt_skill_by_skill",
            ChildTable::SvtSkillBySvt => "svt_skill_by_svt",
            ChildTable::TdDetail => "td_detail",
            ChildTable::TdLevel => "td_level",
            ChildTable::SvtTdByTd => "svt_td_by_td",
            ChildTable::SvtTdBySvt => "svt_td_by_svt",
            ChildTable::SvtCard => "svt_card",
            ChildTable::SvtLimit => "svt_limit",
            ChildTable::SvtLimitAdd => "svt_limit_add",
            ChildTable::SvtChange => "svt_change",
            ChildTable::SvtCostume => "svt_costume",
            ChildTable::SvtExp => "svt_exp",
            ChildTable::Friendship => "friendship",
            ChildTable::CombineSkill => "combine_skill",
            ChildTable::CombineLimit => "combine_limit",
            ChildTable::SvtComment => "svt_comment",
            ChildTable::SvtVoice => "svt_voice",
            ChildTable::Subtitle => "subtitle",
            ChildTable::VoiceRelation => "voice_relation",
            ChildTable::Cv => "cv",
            ChildTable::Illustrator => "illustrator",
            ChildTable::EquipSkill => "equip_skill",
            ChildTable::EquipExp => "equip_exp",
            ChildTable::CommandCodeSkill => "command_code_skill",
            ChildTable::CommandCodeComment => "command_code_comment",
            ChildTable::WarAdd => "war_add",
            ChildTable::WarByEvent => "war_by_event",
            ChildTable::Map => "map",
            ChildTable::Spot => "spot",
            ChildTable::Bgm => "bgm",
            ChildTable::QuestById => "quest_by_id",
            ChildTable::QuestBySpot => "quest_by_spot",
            ChildTable::QuestRelease => "quest_release",
            ChildTable::QuestPhase => "quest_phase",
            ChildTable::Shop => "shop",
            ChildTable::EventReward => "event_reward",
            ChildTable::AiSvt => "ai_svt",
            ChildTable::AiField => "ai_field",
        }
    }
}
