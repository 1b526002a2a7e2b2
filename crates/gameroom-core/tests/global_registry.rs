mod common;

use std::sync::Arc;

use gameroom_core::config::RegistryConfig;
use gameroom_core::global;

#[test]
fn init_and_instance_agree() {
    common::init_tracing();
    let cfg = RegistryConfig {
        initial_capacity: 4,
        ..RegistryConfig::default()
    };
    let a = global::init(&cfg);
    let b = global::instance();
    let c = global::init(&RegistryConfig::default());
    assert!(std::ptr::eq(a, b));
    assert!(std::ptr::eq(b, c));
}

#[test]
fn creations_are_visible_through_every_access() {
    common::init_tracing();
    let created = global::instance().create_or_get("global-visibility");
    let found = global::instance()
        .get_by_name("global-visibility")
        .expect("game created through the global registry");
    assert!(Arc::ptr_eq(&created, &found));
    assert!(Arc::ptr_eq(
        &global::instance().get_by_id(created.id()).unwrap(),
        &created
    ));
}

#[test]
fn concurrent_create_through_global_yields_one_game() {
    common::init_tracing();
    let games = common::run_simultaneously(24, |_| global::instance().create_or_get("global-race"));

    for g in &games {
        assert!(Arc::ptr_eq(g, &games[0]));
    }
    let reg = global::instance();
    let matching = reg
        .games()
        .iter()
        .filter(|g| g.name() == "global-race")
        .count();
    assert_eq!(matching, 1);
}
