use super::*;
use serde_json::json;

fn engagement() -> Engagement<RecordingSink> {
    Engagement::new(RecordingSink::new(), &[25, 50, 75, 90, 100], &[30, 60, 120, 300])
}

// =============================================================
// Event builders
// =============================================================

#[test]
fn nav_and_theme_events_carry_params() {
    let nav = AnalyticsEvent::nav_click("projects");
    assert_eq!(nav.name, "navigation_click");
    assert_eq!(nav.param("section"), Some(&json!("projects")));

    let theme = AnalyticsEvent::theme_toggle(Theme::Dark);
    assert_eq!(theme.param("theme"), Some(&json!("dark")));
}

#[test]
fn menu_toggle_action_uses_state_before_click() {
    assert_eq!(AnalyticsEvent::menu_toggle(false).param("action"), Some(&json!("open")));
    assert_eq!(AnalyticsEvent::menu_toggle(true).param("action"), Some(&json!("close")));
}

#[test]
fn cta_click_trims_text_and_defaults_section() {
    let event = AnalyticsEvent::cta_click("  View my work \n", true, Some("hero"));
    assert_eq!(event.param("text"), Some(&json!("View my work")));
    assert_eq!(event.param("button_type"), Some(&json!("primary")));
    assert_eq!(event.param("section"), Some(&json!("hero")));

    let orphan = AnalyticsEvent::cta_click("Contact", false, None);
    assert_eq!(orphan.param("button_type"), Some(&json!("secondary")));
    assert_eq!(orphan.param("section"), Some(&json!("unknown")));

    let unnamed = AnalyticsEvent::cta_click("Contact", false, Some(""));
    assert_eq!(unnamed.param("section"), Some(&json!("unknown")));
}

#[test]
fn outbound_click_includes_category() {
    let event = AnalyticsEvent::outbound_click("https://github.com/someone");
    assert_eq!(event.param("url"), Some(&json!("https://github.com/someone")));
    assert_eq!(event.param("category"), Some(&json!("github")));
}

#[test]
fn event_serializes_as_name_and_params() {
    let event = AnalyticsEvent::scroll_depth(50);
    let value = serde_json::to_value(&event).expect("serialize");
    assert_eq!(value, json!({ "name": "scroll_depth", "params": { "percent": 50 } }));
}

// =============================================================
// Link classification
// =============================================================

#[test]
fn linkedin_wins_over_pdf() {
    assert_eq!(LinkCategory::classify("https://www.linkedin.com/in/me/resume.pdf"), LinkCategory::Linkedin);
}

#[test]
fn classification_follows_precedence() {
    assert_eq!(LinkCategory::classify("https://twitter.com/me"), LinkCategory::Twitter);
    assert_eq!(LinkCategory::classify("https://twitter.com/files/cv.pdf"), LinkCategory::Twitter);
    assert_eq!(LinkCategory::classify("/assets/resume.pdf"), LinkCategory::Resume);
    assert_eq!(LinkCategory::classify("https://github.com/me/cv.pdf"), LinkCategory::Resume);
    assert_eq!(LinkCategory::classify("https://github.com/me"), LinkCategory::Github);
    assert_eq!(LinkCategory::classify("https://medium.com/@me"), LinkCategory::Medium);
    assert_eq!(LinkCategory::classify("https://example.org"), LinkCategory::External);
}

#[test]
fn category_names() {
    assert_eq!(LinkCategory::Linkedin.as_str(), "linkedin");
    assert_eq!(LinkCategory::Resume.as_str(), "resume");
    assert_eq!(LinkCategory::External.as_str(), "external");
}

// =============================================================
// Scroll depth
// =============================================================

#[test]
fn scroll_percent_rounds() {
    assert_eq!(scroll_percent(0.0, 800.0, 4000.0), 20);
    assert_eq!(scroll_percent(1599.0, 800.0, 4000.0), 60);
    assert_eq!(scroll_percent(3200.0, 800.0, 4000.0), 100);
    assert_eq!(scroll_percent(100.0, 800.0, 0.0), 0);
}

#[test]
fn sixty_then_eighty_fires_each_mark_once() {
    let mut engagement = engagement();
    // (1600 + 800) / 4000 = 60%
    assert_eq!(engagement.on_scroll(1600.0, 800.0, 4000.0), vec![25, 50]);
    // (2400 + 800) / 4000 = 80%
    assert_eq!(engagement.on_scroll(2400.0, 800.0, 4000.0), vec![75]);
    assert_eq!(engagement.on_scroll(1600.0, 800.0, 4000.0), Vec::<u32>::new());

    let percents: Vec<Value> = engagement
        .sink()
        .events()
        .iter()
        .filter_map(|event| event.param("percent").cloned())
        .collect();
    assert_eq!(percents, vec![json!(25), json!(50), json!(75)]);
    assert_eq!(engagement.scroll_depth.fired(), vec![25, 50, 75]);
}

#[test]
fn jumping_to_bottom_fires_all_remaining_marks() {
    let mut depth = ScrollDepth::new(&[25, 50, 75, 90, 100]);
    assert_eq!(depth.record(30), vec![25]);
    assert_eq!(depth.record(100), vec![50, 75, 90, 100]);
    assert!(depth.record(100).is_empty());
}

// =============================================================
// Time on page
// =============================================================

#[test]
fn schedule_is_computed_up_front() {
    let time = TimeOnPage::new(&[30, 60, 120, 300]);
    assert_eq!(time.schedule(), &[(30_000, 30), (60_000, 60), (120_000, 120), (300_000, 300)]);
    assert_eq!(time.delays(), vec![30_000, 30_000, 60_000, 180_000]);
}

#[test]
fn marks_fire_in_order_and_stop_after_last() {
    let mut engagement = engagement();
    assert!(engagement.on_elapsed(29_999).is_empty());
    assert_eq!(engagement.on_elapsed(30_000), vec![30]);
    assert!(engagement.on_elapsed(30_000).is_empty());
    assert_eq!(engagement.on_elapsed(125_000), vec![60, 120]);
    assert!(!engagement.time_on_page.is_finished());
    assert_eq!(engagement.on_elapsed(300_000), vec![300]);
    assert!(engagement.time_on_page.is_finished());
    assert!(engagement.on_elapsed(900_000).is_empty());
    assert_eq!(engagement.sink().names(), vec!["time_on_page"; 4]);
}

#[test]
fn unordered_marks_still_fire_on_time() {
    let mut engagement = Engagement::new(RecordingSink::new(), &[], &[60, 30, 60]);
    assert_eq!(engagement.time_on_page.schedule(), &[(30_000, 30), (60_000, 60)]);
    assert_eq!(engagement.on_elapsed(30_000), vec![30]);
    assert_eq!(engagement.on_elapsed(60_000), vec![60]);
    assert!(engagement.time_on_page.is_finished());
}

// =============================================================
// Section views
// =============================================================

#[test]
fn each_section_reports_once() {
    let mut engagement = engagement();
    assert!(engagement.on_section_visible("about"));
    assert!(!engagement.on_section_visible("about"));
    assert!(engagement.on_section_visible("projects"));
    assert!(engagement.section_views.seen("about"));
    let sections: Vec<Value> = engagement
        .sink()
        .events()
        .iter()
        .filter_map(|event| event.param("section").cloned())
        .collect();
    assert_eq!(sections, vec![json!("about"), json!("projects")]);
}

// =============================================================
// Sinks
// =============================================================

#[test]
fn null_sink_accepts_events() {
    let engagement = Engagement::new(NullSink, &[], &[]);
    engagement.track(&AnalyticsEvent::nav_click("home"));
}

#[test]
fn boxed_sink_forwards() {
    let engagement = Engagement::new(Box::new(RecordingSink::new()), &[50], &[]);
    engagement.track(&AnalyticsEvent::nav_click("home"));
    assert_eq!(engagement.sink().names(), vec!["navigation_click"]);
    engagement.sink().clear();
    assert!(engagement.sink().events().is_empty());
}
