use super::*;

#[test]
fn defaults_match_constants() {
    let config = Config::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.scroll_threshold, 50.0);
    assert_eq!(config.header_offset, 80.0);
    assert_eq!(config.section_offset, 100.0);
    assert_eq!(config.debounce_wait_ms, 20);
    assert_eq!(config.scroll_depth_marks, vec![25, 50, 75, 90, 100]);
    assert_eq!(config.time_on_page_marks, vec![30, 60, 120, 300]);
    assert!(config.analytics_enabled);
    assert_eq!(config.analytics_global, "gtag");
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "headerOffset": 64, "storageKey": "site-theme" }"#)
        .expect("config should parse");
    assert_eq!(config.header_offset, 64.0);
    assert_eq!(config.storage_key, "site-theme");
    assert_eq!(config.section_offset, 100.0);
}

#[test]
fn invalid_json_is_an_error() {
    assert!(matches!(Config::from_json("{ nope"), Err(UiError::Config(_))));
}

#[test]
fn load_or_default_falls_back_on_garbage() {
    assert_eq!(Config::load_or_default(Some("[1, 2")), Config::default());
    assert_eq!(Config::load_or_default(Some("   ")), Config::default());
    assert_eq!(Config::load_or_default(None), Config::default());
}

#[test]
fn validate_sorts_dedupes_and_clamps_marks() {
    let config = Config::from_json(r#"{ "scrollDepthMarks": [100, 0, 50, 50, 150, 25], "timeOnPageMarks": [60, 0, 30, 60] }"#)
        .expect("config should parse");
    assert_eq!(config.scroll_depth_marks, vec![25, 50, 100]);
    assert_eq!(config.time_on_page_marks, vec![30, 60]);
}

#[test]
fn empty_storage_key_restores_default() {
    let config = Config::from_json(r#"{ "storageKey": "" }"#).expect("config should parse");
    assert_eq!(config.storage_key, "theme");
}

#[test]
fn log_level_parses_or_defaults() {
    let mut config = Config::default();
    assert_eq!(config.log_level(), log::Level::Info);
    config.log_level = "debug".to_owned();
    assert_eq!(config.log_level(), log::Level::Debug);
    config.log_level = "loud".to_owned();
    assert_eq!(config.log_level(), log::Level::Info);
}
