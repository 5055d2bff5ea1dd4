//! Basic and nice payload forms for reverse-discovered neighbors.
//!
//! Basic forms are minimal display summaries; nice forms are structurally
//! normalized (trait ids lifted to objects, buff script fields surfaced,
//! buffs inlined on functions). Localized names and the full enum-name
//! tables stay with the external projection layer. Each shape's nesting is
//! closed over itself: a basic neighbor only ever nests basic neighbors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rows::BuffRow;

// ── basic summaries ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicBuff {
    pub id: i32,
    pub name: String,
    pub icon_id: i32,
    pub buff_type: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicFunction {
    pub func_id: i32,
    pub func_type: i32,
    pub target_type: i32,
    pub apply_target: i32,
    /// Trait values for trait-valued function types; empty otherwise.
    pub trait_vals: Vec<i32>,
    /// Inlined buff summaries for buff-valued function types.
    pub buffs: Vec<BasicBuff>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<Box<BasicReversedFunction>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicSkill {
    pub id: i32,
    pub name: String,
    pub ruby: String,
    pub icon_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<Box<BasicReversedSkillTd>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicTd {
    pub id: i32,
    pub name: String,
    pub ruby: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<Box<BasicReversedSkillTd>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicServant {
    pub id: i32,
    pub collection_no: i32,
    pub name: String,
    pub svt_type: i32,
    pub flag: i32,
    pub class_id: i32,
    pub rarity: i32,
    pub atk_max: i32,
    pub hp_max: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicMysticCode {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicCommandCode {
    pub id: i32,
    pub collection_no: i32,
    pub name: String,
    pub rarity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicReversedBuff {
    pub functions: Vec<BasicFunction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicReversedFunction {
    pub skills: Vec<BasicSkill>,
    pub tds: Vec<BasicTd>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicReversedSkillTd {
    pub servants: Vec<BasicServant>,
    pub mystic_codes: Vec<BasicMysticCode>,
    pub command_codes: Vec<BasicCommandCode>,
}

// ── nice (normalized) forms ──────────────────────────────────────

/// A trait reference with the negation flag lifted out of the sign bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NiceTrait {
    pub id: i32,
    pub negative: bool,
}

impl NiceTrait {
    pub fn from_raw(id: i32) -> NiceTrait {
        if id < 0 {
            NiceTrait {
                id: -id,
                negative: true,
            }
        } else {
            NiceTrait {
                id,
                negative: false,
            }
        }
    }
}

pub fn nice_traits(ids: &[i32]) -> Vec<NiceTrait> {
    ids.iter().copied().map(NiceTrait::from_raw).collect()
}

/// Buff script fields the engine surfaces without interpretation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NiceBuffScript {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_release: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individuality: Option<NiceTrait>,
}

impl NiceBuffScript {
    /// Lift the recognised fields out of a raw script blob.
    pub fn from_raw(script: &Value) -> NiceBuffScript {
        let release_text = script
            .get("ReleaseText")
            .and_then(Value::as_str)
            .map(str::to_owned);
        let damage_release = script.get("DamageRelease").and_then(Value::as_i64);
        let individuality = script
            .get("INDIVIDUALITIE")
            .and_then(Value::as_i64)
            .map(|id| NiceTrait::from_raw(id as i32));
        NiceBuffScript {
            release_text,
            damage_release,
            individuality,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NiceBuff {
    pub id: i32,
    pub name: String,
    pub detail: String,
    pub icon_id: i32,
    pub buff_type: i32,
    pub script: NiceBuffScript,
    pub vals: Vec<NiceTrait>,
    pub tvals: Vec<NiceTrait>,
    pub ck_self_indv: Vec<NiceTrait>,
    pub ck_op_indv: Vec<NiceTrait>,
}

impl NiceBuff {
    pub fn from_row(row: &BuffRow) -> NiceBuff {
        NiceBuff {
            id: row.id,
            name: row.name.clone(),
            detail: row.detail.clone(),
            icon_id: row.icon_id,
            buff_type: row.buff_type,
            script: NiceBuffScript::from_raw(&row.script),
            vals: nice_traits(&row.vals),
            tvals: nice_traits(&row.tvals),
            ck_self_indv: nice_traits(&row.ck_self_indv),
            ck_op_indv: nice_traits(&row.ck_op_indv),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NiceFunction {
    pub func_id: i32,
    pub func_type: i32,
    pub target_type: i32,
    pub apply_target: i32,
    pub func_tvals: Vec<NiceTrait>,
    pub func_quest_tvals: Vec<NiceTrait>,
    pub trait_vals: Vec<NiceTrait>,
    pub buffs: Vec<NiceBuff>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<Box<NiceReversedFunction>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NiceSkill {
    pub id: i32,
    pub name: String,
    pub ruby: String,
    pub icon_id: i32,
    pub max_lv: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<Box<NiceReversedSkillTd>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NiceTd {
    pub id: i32,
    pub name: String,
    pub ruby: String,
    pub rank: String,
    pub type_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<Box<NiceReversedSkillTd>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NiceServant {
    pub id: i32,
    pub collection_no: i32,
    pub name: String,
    pub class_id: i32,
    pub rarity: i32,
    pub atk_max: i32,
    pub hp_max: i32,
    pub cards: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NiceMysticCode {
    pub id: i32,
    pub name: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NiceCommandCode {
    pub id: i32,
    pub collection_no: i32,
    pub name: String,
    pub rarity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NiceReversedBuff {
    pub functions: Vec<NiceFunction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NiceReversedFunction {
    pub skills: Vec<NiceSkill>,
    pub tds: Vec<NiceTd>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NiceReversedSkillTd {
    pub servants: Vec<NiceServant>,
    pub mystic_codes: Vec<NiceMysticCode>,
    pub command_codes: Vec<NiceCommandCode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn negative_trait_ids_are_lifted() {
        assert_eq!(
            NiceTrait::from_raw(-300),
            NiceTrait {
                id: 300,
                negative: true
            }
        );
        assert_eq!(
            NiceTrait::from_raw(105),
            NiceTrait {
                id: 105,
                negative: false
            }
        );
    }

    #[test]
    fn buff_script_passthrough() {
        let script = json!({
            "ReleaseText": "released",
            "DamageRelease": 1,
            "INDIVIDUALITIE": -200
        });
        let nice = NiceBuffScript::from_raw(&script);
        assert_eq!(nice.release_text.as_deref(), Some("released"));
        assert_eq!(nice.damage_release, Some(1));
        assert_eq!(
            nice.individuality,
            Some(NiceTrait {
                id: 200,
                negative: true
            })
        );
    }

    #[test]
    fn empty_script_maps_to_defaults() {
        let nice = NiceBuffScript::from_raw(&json!({}));
        assert_eq!(nice, NiceBuffScript::default());
    }
}
