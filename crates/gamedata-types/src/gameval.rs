//! Closed game-value categories the resolution paths depend on.
//!
//! Only the codes the engine itself branches on live here; the full
//! enum-name tables belong to the projection layer.

/// Function type codes.
pub mod func_type {
    pub const NONE: i32 = 0;
    pub const ADD_STATE: i32 = 1;
    pub const SUB_STATE: i32 = 2;
    pub const DAMAGE: i32 = 4;
    pub const ADD_STATE_SHORT: i32 = 6;
    pub const EVENT_POINT_UP: i32 = 31;
    pub const EVENT_DROP_UP: i32 = 32;
    pub const ENEMY_ENCOUNT_COPY_RATE_UP: i32 = 33;
    pub const ENEMY_ENCOUNT_RATE_UP: i32 = 34;
    pub const ENEMY_PROB_DOWN: i32 = 35;
    pub const USER_EQUIP_EXP_UP: i32 = 51;
    pub const CLASS_DROP_UP: i32 = 52;
    pub const SERVANT_FRIENDSHIP_UP: i32 = 53;
    pub const EXP_UP: i32 = 55;
    pub const QP_DROP_UP: i32 = 56;
}

/// Function types whose value list carries trait or event values rather than
/// buff ids. Everything else is treated as buff-valued for expansion and for
/// buff→function adjacency.
pub const FUNC_VALS_NOT_BUFF: &[i32] = &[
    func_type::SUB_STATE,
    func_type::EVENT_POINT_UP,
    func_type::EVENT_DROP_UP,
    func_type::ENEMY_ENCOUNT_COPY_RATE_UP,
    func_type::ENEMY_ENCOUNT_RATE_UP,
    func_type::ENEMY_PROB_DOWN,
    func_type::USER_EQUIP_EXP_UP,
    func_type::CLASS_DROP_UP,
    func_type::SERVANT_FRIENDSHIP_UP,
    func_type::EXP_UP,
    func_type::QP_DROP_UP,
];

pub fn func_vals_are_buffs(func_type: i32) -> bool {
    !FUNC_VALS_NOT_BUFF.contains(&func_type)
}

/// Servant type codes.
pub mod svt_type {
    pub const NORMAL: i32 = 1;
    pub const HEROINE: i32 = 2;
    pub const COMBINE_MATERIAL: i32 = 3;
    pub const ENEMY: i32 = 4;
    pub const ENEMY_COLLECTION: i32 = 5;
    pub const SERVANT_EQUIP: i32 = 6;
    pub const STATUS_UP: i32 = 7;
    pub const ENEMY_COLLECTION_DETAIL: i32 = 9;
}

/// True for rows addressable by servant collection number.
pub fn is_playable_servant(svt_type: i32) -> bool {
    matches!(svt_type, svt_type::NORMAL | svt_type::HEROINE)
}

/// True for craft-essence rows addressable by equip collection number.
pub fn is_equip(svt_type: i32) -> bool {
    svt_type == svt_type::SERVANT_EQUIP
}

/// The shared extra-attack treasure device attached to every servant;
/// excluded from servant assembly.
pub const EXTRA_ATTACK_TD_ID: i32 = 100;

/// Split-form identity aliases: `(main id, hidden sub id)`. The sub form
/// shares the main form's data family but carries its own voice rows. These
/// are enumerated, never inferred.
pub const VOICE_ALIAS_PAIRS: &[(i32, i32)] = &[(600700, 600710), (800100, 800101)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buff_valued_function_types() {
        assert!(func_vals_are_buffs(func_type::ADD_STATE));
        assert!(func_vals_are_buffs(func_type::ADD_STATE_SHORT));
        assert!(!func_vals_are_buffs(func_type::SUB_STATE));
        assert!(!func_vals_are_buffs(func_type::EVENT_DROP_UP));
    }

    #[test]
    fn servant_type_classes() {
        assert!(is_playable_servant(svt_type::NORMAL));
        assert!(is_playable_servant(svt_type::HEROINE));
        assert!(!is_playable_servant(svt_type::SERVANT_EQUIP));
        assert!(is_equip(svt_type::SERVANT_EQUIP));
        assert!(!is_equip(svt_type::ENEMY));
    }
}
