//! AI behavior-tree closure.

mod common;

use gamedata_types::Region;

#[tokio::test]
async fn closure_visits_each_id_once_on_a_cycle() {
    let engine = common::engine().await;
    // AI 100 jumps to 200; AI 200 jumps back to 100
    let collection = engine
        .resolve_ai_collection(Region::Jp, 100, false)
        .await
        .unwrap();

    assert_eq!(collection.main_ais.len(), 2);
    assert!(collection.main_ais.iter().all(|node| node.id == 100));
    // exactly the nodes of id 200, with 100 never re-fetched
    assert_eq!(collection.related_ais.len(), 1);
    assert_eq!(collection.related_ais[0].id, 200);
}

#[tokio::test]
async fn missing_jump_targets_are_tolerated() {
    let engine = common::engine().await;
    // AI 400 jumps to 999, which has no rows
    let collection = engine
        .resolve_ai_collection(Region::Jp, 400, false)
        .await
        .unwrap();
    assert_eq!(collection.main_ais.len(), 1);
    assert!(collection.related_ais.is_empty());
}

#[tokio::test]
async fn missing_root_is_not_found() {
    let engine = common::engine().await;
    let err = engine
        .resolve_ai_collection(Region::Jp, 55555, false)
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), 404);
}

#[tokio::test]
async fn field_flag_selects_the_field_table_family() {
    let engine = common::engine().await;
    // AI 300 only exists in the battlefield-scoped table
    let collection = engine
        .resolve_ai_collection(Region::Jp, 300, true)
        .await
        .unwrap();
    assert_eq!(collection.main_ais.len(), 1);
    assert!(collection.related_ais.is_empty());

    let err = engine
        .resolve_ai_collection(Region::Jp, 300, false)
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), 404);
}
