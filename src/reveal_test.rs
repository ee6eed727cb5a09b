use super::*;
use crate::dom::fake::FakeElement;

#[test]
fn prepare_hides_element() {
    let el = FakeElement::new();
    Revealer::<usize>::new(RevealStyle::FADE_UP).prepare(&el);
    assert_eq!(el.style("opacity").as_deref(), Some("0"));
}

#[test]
fn non_intersecting_notification_is_ignored() {
    let el = FakeElement::new();
    let mut revealer = Revealer::new(RevealStyle::FADE_UP);
    assert!(!revealer.on_intersect(0, &el, false));
    assert_eq!(el.style("animation"), None);
    assert!(!revealer.is_revealed(&0));
}

#[test]
fn first_intersection_applies_animation() {
    let el = FakeElement::new();
    let mut revealer = Revealer::new(RevealStyle::FADE_UP);
    assert!(revealer.on_intersect(0, &el, true));
    assert_eq!(el.style("animation").as_deref(), Some("fadeInUp 0.6s ease forwards"));
}

#[test]
fn element_animates_only_once_across_reentries() {
    let el = FakeElement::new();
    let mut revealer = Revealer::new(RevealStyle::FADE_UP);
    let mut stops = 0;
    for intersecting in [true, false, true, false, true] {
        if revealer.on_intersect(7, &el, intersecting) {
            stops += 1;
            // Simulate a later style change so a replay would be visible.
            el.set_style("animation", "none").expect("style");
        }
    }
    assert_eq!(stops, 1);
    assert_eq!(el.style("animation").as_deref(), Some("none"));
    assert_eq!(revealer.revealed_count(), 1);
}

#[test]
fn keys_are_tracked_independently() {
    let a = FakeElement::new();
    let b = FakeElement::new();
    let mut revealer = Revealer::new(RevealStyle::TIMELINE);
    assert!(revealer.on_intersect(0, &a, true));
    assert!(revealer.on_intersect(1, &b, true));
    assert!(!revealer.on_intersect(0, &a, true));
    assert!(b.has_class("animate-in"));
}

#[test]
fn class_style_reveal_sets_class_and_opacity() {
    let el = FakeElement::new();
    let mut revealer = Revealer::new(RevealStyle::TIMELINE);
    revealer.prepare(&el);
    revealer.on_intersect("item", &el, true);
    assert!(el.has_class("animate-in"));
    assert_eq!(el.style("opacity").as_deref(), Some("1"));
}

#[test]
fn fallback_shows_elements_in_final_state() {
    let fade = FakeElement::new();
    let timeline = FakeElement::new();
    Revealer::<usize>::new(RevealStyle::FADE_UP).show_immediately(&fade);
    Revealer::<usize>::new(RevealStyle::TIMELINE).show_immediately(&timeline);
    assert_eq!(fade.style("opacity").as_deref(), Some("1"));
    assert_eq!(timeline.style("opacity").as_deref(), Some("1"));
    assert!(timeline.has_class("animate-in"));
}

#[test]
fn presets_use_distinct_observer_options() {
    assert_eq!(RevealOptions::FADE_UP.threshold, 0.15);
    assert_eq!(RevealOptions::FADE_UP.root_margin, "0px 0px -100px 0px");
    assert_ne!(RevealOptions::FADE_UP, RevealOptions::TIMELINE);
}

#[test]
fn failed_observation_restores_prepared_elements() {
    let cards = vec![FakeElement::new(), FakeElement::new()];
    let timeline = vec![FakeElement::new()];
    let fade = Revealer::<usize>::new(RevealStyle::FADE_UP);
    let steps = Revealer::<usize>::new(RevealStyle::TIMELINE);
    for el in &cards {
        fade.prepare(el);
    }
    steps.prepare(&timeline[0]);

    fade.show_all(&cards);
    steps.show_all(&timeline);
    assert!(cards.iter().all(|el| el.style("opacity").as_deref() == Some("1")));
    assert_eq!(timeline[0].style("opacity").as_deref(), Some("1"));
    assert!(timeline[0].has_class("animate-in"));
}
