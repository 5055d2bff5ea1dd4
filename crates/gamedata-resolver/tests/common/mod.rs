#![allow(dead_code)]

//! Shared fixture pack for resolver integration tests.
//!
//! The graph under test:
//!
//! - buff 500 is carried by functions 10 and 11; function 12 is trait-valued
//!   and must never count as a buff parent.
//! - function 10 is referenced by skill 1000, which servant 100100 holds as
//!   a class passive and servants 100100/100200 hold actively; mystic code
//!   110 and command code 210 also grant it.
//! - function 11 has no skill parents at all.
//! - skill 1002 references function 13 plus the dangling id 19.
//! - treasure device 500100 belongs to servant 100100; td 100 is the shared
//!   extra-attack device.
//! - servant 600700 carries the voice fixture (change form, split-form
//!   alias, declared relation).
//! - AI 100 and 200 jump at each other; AI 400 jumps into a hole.

use std::sync::Arc;

use serde_json::Value;

use gamedata_resolver::{EngineConfig, GenerationRegistry, RegionGeneration, ResolverEngine};
use gamedata_store::RegionPack;
use gamedata_types::ai::AiNode;
use gamedata_types::gameval::{func_type, svt_type};
use gamedata_types::rows::*;
use gamedata_types::Region;

pub fn buff(id: i32) -> BuffRow {
    BuffRow {
        id,
        buff_group: 0,
        buff_type: 1,
        name: format!("buff {id}"),
        detail: format!("buff {id} detail"),
        icon_id: 300,
        vals: vec![3012],
        tvals: vec![],
        ck_self_indv: vec![],
        ck_op_indv: vec![],
        script: Value::Null,
    }
}

pub fn func(id: i32, func_type: i32, vals: Vec<i32>) -> FuncRow {
    FuncRow {
        id,
        func_type,
        target_type: 1,
        apply_target: 3,
        vals,
        tvals: vec![],
        quest_tvals: vec![],
        popup_text: format!("func {id}"),
        popup_icon_id: 400,
    }
}

pub fn skill(id: i32, name: &str) -> SkillRow {
    SkillRow {
        id,
        skill_type: 1,
        name: name.into(),
        ruby: name.into(),
        icon_id: 1,
        max_lv: 10,
    }
}

pub fn skill_level(skill_id: i32, lv: i32, func_ids: Vec<i32>) -> SkillLevelRow {
    SkillLevelRow {
        skill_id,
        lv,
        func_ids,
        svals: vec!["[100]".into()],
    }
}

pub fn svt(id: i32, collection_no: i32, class_passive: Vec<i32>) -> SvtRow {
    SvtRow {
        id,
        collection_no,
        name: format!("servant {id}"),
        svt_type: svt_type::NORMAL,
        flag: 0,
        class_id: 1,
        gender_type: 1,
        cost: 16,
        class_passive,
        card_ids: vec![1, 1, 1, 2, 3],
        exp_type: 1,
        combine_skill_id: 1,
        combine_limit_id: 1,
        friendship_id: 1,
        cv_id: 1,
        illustrator_id: 1,
    }
}

pub fn svt_limit(svt_id: i32, limit_count: i32) -> SvtLimitRow {
    SvtLimitRow {
        svt_id,
        limit_count,
        rarity: 3,
        atk_base: 1000,
        atk_max: 6000,
        hp_base: 1500,
        hp_max: 9000,
    }
}

pub fn ai_node(id: i32, idx: i32, jump: i32) -> AiNode {
    AiNode {
        id,
        idx,
        priority: 1,
        probability: 100,
        cond: 0,
        vals: vec![],
        avals: vec![jump],
        info_text: format!("ai {id}:{idx}"),
    }
}

pub fn fixture_pack() -> RegionPack {
    let mut pack = RegionPack::default();

    pack.buffs = vec![buff(500), buff(501), buff(502)];
    pack.funcs = vec![
        func(10, func_type::ADD_STATE, vec![500]),
        func(11, func_type::ADD_STATE, vec![500, 999]),
        func(12, func_type::SUB_STATE, vec![500]),
        func(13, func_type::ADD_STATE_SHORT, vec![501]),
        func(20, func_type::ADD_STATE, vec![501]),
    ];
    pack.func_groups = vec![FuncGroupRow {
        func_id: 10,
        event_id: 0,
        icon_id: 400,
    }];

    pack.skills = vec![skill(1000, "magic resistance"), skill(1002, "ruptured rite")];
    pack.skill_details = vec![SkillDetailRow {
        id: 1000,
        detail: "resists magic".into(),
    }];
    pack.skill_levels = vec![
        skill_level(1000, 1, vec![10]),
        skill_level(1000, 2, vec![10]),
        skill_level(1002, 1, vec![13, 19]),
        skill_level(1002, 2, vec![13, 19]),
    ];
    pack.svt_skills = vec![
        SvtSkillRow {
            svt_id: 100100,
            num: 1,
            priority: 0,
            skill_id: 1000,
        },
        SvtSkillRow {
            svt_id: 100200,
            num: 1,
            priority: 0,
            skill_id: 1000,
        },
    ];

    pack.tds = vec![
        TdRow {
            id: 500100,
            name: "excalibur".into(),
            ruby: "excalibur".into(),
            rank: "A++".into(),
            type_text: "anti-fortress".into(),
        },
        TdRow {
            id: 100,
            name: "extra attack".into(),
            ruby: String::new(),
            rank: "-".into(),
            type_text: String::new(),
        },
    ];
    pack.td_details = vec![TdDetailRow {
        id: 500100,
        detail: "sword of promised victory".into(),
    }];
    pack.td_levels = vec![TdLevelRow {
        td_id: 500100,
        lv: 1,
        func_ids: vec![20],
        svals: vec!["[300]".into()],
    }];
    pack.svt_tds = vec![
        SvtTdRow {
            svt_id: 100100,
            num: 1,
            priority: 0,
            td_id: 500100,
            card_id: 4,
        },
        SvtTdRow {
            svt_id: 100100,
            num: 1,
            priority: 0,
            td_id: 100,
            card_id: 4,
        },
    ];

    pack.svts = vec![
        svt(100100, 2, vec![1000]),
        svt(100200, 3, vec![]),
        svt(600700, 150, vec![]),
    ];
    pack.svt_cards = vec![SvtCardRow {
        svt_id: 100100,
        card_id: 1,
        normal_damage: vec![100],
    }];
    pack.svt_limits = vec![
        svt_limit(100100, 0),
        svt_limit(100100, 4),
        svt_limit(100200, 0),
        svt_limit(600700, 0),
    ];
    pack.svt_limit_adds = vec![SvtLimitAddRow {
        svt_id: 100100,
        limit_count: 0,
        individuality: vec![2001],
    }];
    pack.svt_changes = vec![SvtChangeRow {
        svt_id: 600700,
        priority: 1,
        name: "changed form".into(),
        svt_voice_id: 600720,
        limit_count: 3,
    }];
    pack.svt_costumes = vec![SvtCostumeRow {
        svt_id: 100100,
        id: 11,
        name: "formal wear".into(),
    }];
    pack.svt_exps = vec![
        SvtExpRow {
            exp_type: 1,
            lv: 1,
            exp: 0,
        },
        SvtExpRow {
            exp_type: 1,
            lv: 2,
            exp: 100,
        },
    ];
    pack.friendships = vec![FriendshipRow {
        id: 1,
        rank: 1,
        friendship: 10,
    }];
    pack.combine_skills = vec![CombineSkillRow {
        id: 1,
        skill_lv: 1,
        item_ids: vec![6001],
        item_nums: vec![2],
        qp: 10000,
    }];
    pack.combine_limits = vec![CombineLimitRow {
        id: 1,
        svt_limit: 0,
        item_ids: vec![7001],
        item_nums: vec![4],
        qp: 30000,
    }];
    pack.svt_comments = vec![SvtCommentRow {
        svt_id: 100100,
        comment_no: 1,
        comment: "a king".into(),
    }];
    pack.svt_voices = vec![
        SvtVoiceRow {
            svt_id: 800100,
            voice_prefix: 0,
            voice_type: 1,
        },
        SvtVoiceRow {
            svt_id: 600720,
            voice_prefix: 0,
            voice_type: 1,
        },
        SvtVoiceRow {
            svt_id: 600700,
            voice_prefix: 0,
            voice_type: 1,
        },
        SvtVoiceRow {
            svt_id: 600710,
            voice_prefix: 0,
            voice_type: 1,
        },
    ];
    pack.subtitles = vec![
        SubtitleRow {
            id: "600710_1".into(),
            svt_id: 600710,
            serif: "hidden line".into(),
        },
        SubtitleRow {
            id: "600700_1".into(),
            svt_id: 600700,
            serif: "main line".into(),
        },
    ];
    pack.voice_relations = vec![VoiceRelationRow {
        svt_id: 600700,
        relation_svt_id: 800100,
    }];
    pack.cvs = vec![CvRow {
        id: 1,
        name: "voice actor".into(),
    }];
    pack.illustrators = vec![IllustratorRow {
        id: 1,
        name: "illustrator".into(),
    }];

    pack.equips = vec![EquipRow {
        id: 110,
        name: "chaldea uniform".into(),
        detail: "standard issue".into(),
        max_lv: 10,
    }];
    pack.equip_skills = vec![EquipSkillRow {
        equip_id: 110,
        num: 1,
        skill_id: 1000,
    }];
    pack.equip_exps = vec![EquipExpRow {
        equip_id: 110,
        lv: 1,
        exp: 0,
    }];

    pack.command_codes = vec![CommandCodeRow {
        id: 210,
        collection_no: 7,
        name: "mage's lesson".into(),
        rarity: 3,
    }];
    pack.command_code_skills = vec![CommandCodeSkillRow {
        cc_id: 210,
        num: 1,
        skill_id: 1000,
    }];
    pack.command_code_comments = vec![CommandCodeCommentRow {
        cc_id: 210,
        comment_no: 1,
        comment: "a lesson".into(),
        illustrator_id: 1,
    }];

    pack.items = vec![ItemRow {
        id: 94000,
        item_type: 1,
        name: "event ticket".into(),
        icon_id: 94000,
    }];
    pack.gifts = vec![GiftRow {
        id: 30001,
        gift_type: 1,
        obj_id: 94000,
        num: 1,
    }];

    pack.wars = vec![WarRow {
        id: 8100,
        event_id: 80000,
        coordinates: vec![vec![0, 0], vec![100, 100]],
        age: "2020".into(),
        name: "summer war".into(),
        long_name: "the long summer war".into(),
        bgm_id: 1,
        flag: 0,
    }];
    pack.war_adds = vec![WarAddRow {
        war_id: 8100,
        add_type: 1,
        target_id: 81001,
    }];
    pack.maps = vec![MapRow {
        id: 81001,
        war_id: 8100,
        bgm_id: 2,
    }];
    pack.spots = vec![SpotRow {
        id: 810011,
        map_id: 81001,
        name: "beach".into(),
        x: 10,
        y: 20,
    }];
    pack.bgms = vec![
        BgmRow {
            id: 1,
            name: "war theme".into(),
        },
        BgmRow {
            id: 2,
            name: "map theme".into(),
        },
    ];
    pack.quests = vec![QuestRow {
        id: 91000,
        spot_id: 810011,
        quest_type: 1,
        name: "beach volley".into(),
    }];
    pack.quest_releases = vec![QuestReleaseRow {
        quest_id: 91000,
        cond_type: 1,
        target_id: 0,
        value: 0,
    }];
    pack.quest_phases = vec![
        QuestPhaseRow {
            quest_id: 91000,
            phase: 1,
            class_ids: vec![1],
            individuality: vec![],
            battle_bg_id: 1,
        },
        QuestPhaseRow {
            quest_id: 91000,
            phase: 3,
            class_ids: vec![2],
            individuality: vec![],
            battle_bg_id: 1,
        },
    ];

    pack.events = vec![EventRow {
        id: 80000,
        event_type: 12,
        name: "summer event".into(),
        notice_at: 1,
        started_at: 2,
        ended_at: 3,
        finished_at: 4,
        war_ids: vec![8100],
    }];
    pack.shops = vec![ShopRow {
        id: 1,
        event_id: 80000,
        purchase_type: 1,
        target_ids: vec![94000],
    }];
    pack.event_rewards = vec![
        EventRewardRow {
            event_id: 80000,
            point: 100,
            gift_id: 30001,
        },
        EventRewardRow {
            event_id: 80000,
            point: 200,
            gift_id: 30002,
        },
    ];

    pack.svt_ais = vec![
        ai_node(100, 0, 200),
        ai_node(100, 1, 0),
        ai_node(200, 0, 100),
        ai_node(400, 0, 999),
    ];
    pack.field_ais = vec![ai_node(300, 0, 0)];

    pack
}

pub async fn engine() -> ResolverEngine {
    engine_with_config(EngineConfig::default()).await
}

pub async fn engine_with_config(config: EngineConfig) -> ResolverEngine {
    let registry = Arc::new(GenerationRegistry::new());
    let generation = RegionGeneration::from_pack(Region::Jp, &fixture_pack()).unwrap();
    registry.swap(Region::Jp, Arc::new(generation)).await;
    ResolverEngine::with_config(registry, config)
}
