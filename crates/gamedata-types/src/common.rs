//! Region namespaces and resolution flags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Independent dataset namespace. Ids are only meaningful within one region;
/// no lookup ever crosses regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Jp,
    Na,
}

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Region::Jp => "JP",
            Region::Na => "NA",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of resolvable entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Buff,
    Function,
    Skill,
    TreasureDevice,
    Servant,
    MysticCode,
    CommandCode,
    Item,
    War,
    Event,
    Quest,
    QuestPhase,
    Ai,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Buff => "buff",
            EntityKind::Function => "function",
            EntityKind::Skill => "skill",
            EntityKind::TreasureDevice => "treasure device",
            EntityKind::Servant => "servant",
            EntityKind::MysticCode => "mystic code",
            EntityKind::CommandCode => "command code",
            EntityKind::Item => "item",
            EntityKind::War => "war",
            EntityKind::Event => "event",
            EntityKind::Quest => "quest",
            EntityKind::QuestPhase => "quest phase",
            EntityKind::Ai => "ai",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reverse resolution ceiling. The ordering is load-bearing: a tier gate is
/// `depth >= tier`, and comparisons are closed over this enum: a depth is
/// never compared against anything else.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ReverseDepth {
    Function,
    SkillTd,
    Servant,
}

impl ReverseDepth {
    /// The first tier applicable to a kind, used when a caller requests
    /// reverse resolution without naming a depth.
    pub fn natural_for(kind: EntityKind) -> ReverseDepth {
        match kind {
            EntityKind::Buff => ReverseDepth::Function,
            EntityKind::Function => ReverseDepth::SkillTd,
            _ => ReverseDepth::Servant,
        }
    }
}

/// Payload density for reverse-discovered neighbors. Traversal is identical
/// for all three; only the per-neighbor payload differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputShape {
    #[default]
    Raw,
    Basic,
    Nice,
}

/// Flags for one resolution call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Inline referenced sub-entities (functions, buffs, class passives).
    #[serde(default)]
    pub expand: bool,
    /// Attach the reverse subgraph.
    #[serde(default)]
    pub reverse: bool,
    /// Reverse ceiling; `None` means the kind's natural tier.
    #[serde(default)]
    pub reverse_depth: Option<ReverseDepth>,
    /// Pull auxiliary lore collections (comments, voices, subtitles).
    #[serde(default)]
    pub lore: bool,
    /// Payload shape for reverse neighbors.
    #[serde(default)]
    pub shape: OutputShape,
    /// Phase selector, required for quest-phase resolution only.
    #[serde(default)]
    pub phase: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_depth_is_totally_ordered() {
        assert!(ReverseDepth::Function < ReverseDepth::SkillTd);
        assert!(ReverseDepth::SkillTd < ReverseDepth::Servant);
        assert!(ReverseDepth::Servant >= ReverseDepth::Function);
    }

    #[test]
    fn natural_depth_per_kind() {
        assert_eq!(
            ReverseDepth::natural_for(EntityKind::Buff),
            ReverseDepth::Function
        );
        assert_eq!(
            ReverseDepth::natural_for(EntityKind::Function),
            ReverseDepth::SkillTd
        );
        assert_eq!(
            ReverseDepth::natural_for(EntityKind::Skill),
            ReverseDepth::Servant
        );
        assert_eq!(
            ReverseDepth::natural_for(EntityKind::TreasureDevice),
            ReverseDepth::Servant
        );
    }

    #[test]
    fn default_options_are_plain_assembly() {
        let opts = ResolveOptions::default();
        assert!(!opts.expand);
        assert!(!opts.reverse);
        assert_eq!(opts.shape, OutputShape::Raw);
        assert!(opts.reverse_depth.is_none());
    }

    #[test]
    fn region_display() {
        assert_eq!(Region::Jp.to_string(), "JP");
        assert_eq!(Region::Na.to_string(), "NA");
    }
}
