//! Forward expansion behavior.

mod common;

use gamedata_types::{
    EntityKind, FunctionEntity, Region, ResolveOptions, ResolvedEntity, SkillEntity,
};

fn expand_opts() -> ResolveOptions {
    ResolveOptions {
        expand: true,
        ..Default::default()
    }
}

async fn resolve_skill(engine: &gamedata_resolver::ResolverEngine, id: i32, opts: &ResolveOptions) -> SkillEntity {
    match engine
        .resolve(Region::Jp, EntityKind::Skill, id, opts)
        .await
        .unwrap()
    {
        ResolvedEntity::Skill(skill) => skill,
        other => panic!("expected skill, got {other:?}"),
    }
}

async fn resolve_function(
    engine: &gamedata_resolver::ResolverEngine,
    id: i32,
    opts: &ResolveOptions,
) -> FunctionEntity {
    match engine
        .resolve(Region::Jp, EntityKind::Function, id, opts)
        .await
        .unwrap()
    {
        ResolvedEntity::Function(func) => func,
        other => panic!("expected function, got {other:?}"),
    }
}

#[tokio::test]
async fn dangling_function_ids_are_dropped_per_level() {
    let engine = common::engine().await;
    // skill 1002 lists functions [13, 19] per level; 19 does not exist
    let skill = resolve_skill(&engine, 1002, &expand_opts()).await;
    assert_eq!(skill.levels.len(), 2);
    for level in &skill.levels {
        let funcs = level.expanded_funcs.as_ref().unwrap();
        assert_eq!(funcs.len(), 1);
        assert_eq!(funcs[0].func.id, 13);
    }
}

#[tokio::test]
async fn function_expansion_inlines_existing_buffs_only() {
    let engine = common::engine().await;
    // function 11 lists buffs [500, 999]; 999 does not exist
    let func = resolve_function(&engine, 11, &expand_opts()).await;
    let buffs = func.expanded_vals.as_ref().unwrap();
    assert_eq!(buffs.len(), 1);
    assert_eq!(buffs[0].buff.id, 500);
}

#[tokio::test]
async fn trait_valued_functions_are_not_buff_expanded() {
    let engine = common::engine().await;
    let func = resolve_function(&engine, 12, &expand_opts()).await;
    assert!(func.expanded_vals.is_none());
}

#[tokio::test]
async fn expansion_reaches_buffs_through_skill_levels() {
    let engine = common::engine().await;
    let skill = resolve_skill(&engine, 1000, &expand_opts()).await;
    let funcs = skill.levels[0].expanded_funcs.as_ref().unwrap();
    assert_eq!(funcs[0].func.id, 10);
    let buffs = funcs[0].expanded_vals.as_ref().unwrap();
    assert_eq!(buffs[0].buff.id, 500);
}

#[tokio::test]
async fn expansion_is_additive() {
    let engine = common::engine().await;
    let plain = resolve_skill(&engine, 1000, &ResolveOptions::default()).await;
    let mut expanded = resolve_skill(&engine, 1000, &expand_opts()).await;

    // stripping the attachments back out reproduces the plain assembly
    for level in &mut expanded.levels {
        level.expanded_funcs = None;
    }
    assert_eq!(expanded, plain);
}

#[tokio::test]
async fn assembly_is_deterministic() {
    let engine = common::engine().await;
    let first = resolve_skill(&engine, 1000, &expand_opts()).await;
    let second = resolve_skill(&engine, 1000, &expand_opts()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_primary_id_is_not_found() {
    let engine = common::engine().await;
    let err = engine
        .resolve(Region::Jp, EntityKind::Skill, 424242, &ResolveOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), 404);
}
