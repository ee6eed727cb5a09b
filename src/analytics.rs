//! Engagement reporting.
//!
//! SYSTEM CONTEXT
//! ==============
//! Events are plain values ([`AnalyticsEvent`]) handed to an [`EventSink`].
//! In the browser the sink forwards to the page's analytics global and does
//! nothing when that global is missing; reporting can never break the page.
//!
//! DESIGN
//! ======
//! The one-shot trackers (scroll depth, time on page, section views) live in
//! [`Engagement`], one instance per page, instead of module-level flags. The
//! time-on-page schedule is computed up front as absolute deadlines so the
//! browser side only has to arm one timer per mark.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use std::cell::RefCell;
use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::consts::UNKNOWN_SECTION;
use crate::theme::Theme;

// =============================================================================
// EVENTS
// =============================================================================

/// One named analytics event with its parameters.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub params: Map<String, Value>,
}

impl AnalyticsEvent {
    pub fn new(name: &'static str) -> Self {
        Self { name, params: Map::new() }
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_owned(), value.into());
        self
    }

    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    pub fn nav_click(section_id: &str) -> Self {
        Self::new("navigation_click").with("section", section_id)
    }

    pub fn theme_toggle(theme: Theme) -> Self {
        Self::new("theme_toggle").with("theme", theme.as_str())
    }

    /// `was_open` is the menu state before the click took effect.
    pub fn menu_toggle(was_open: bool) -> Self {
        Self::new("menu_toggle").with("action", if was_open { "close" } else { "open" })
    }

    pub fn outbound_click(url: &str) -> Self {
        Self::new("outbound_click")
            .with("url", url)
            .with("category", LinkCategory::classify(url).as_str())
    }

    pub fn cta_click(text: &str, primary: bool, section_id: Option<&str>) -> Self {
        let section = section_id.filter(|id| !id.is_empty()).unwrap_or(UNKNOWN_SECTION);
        Self::new("cta_click")
            .with("text", text.trim())
            .with("button_type", if primary { "primary" } else { "secondary" })
            .with("section", section)
    }

    pub fn scroll_depth(percent: u32) -> Self {
        Self::new("scroll_depth").with("percent", percent)
    }

    pub fn time_on_page(seconds: u32) -> Self {
        Self::new("time_on_page").with("seconds", seconds)
    }

    pub fn section_view(section_id: &str) -> Self {
        Self::new("section_view").with("section", section_id)
    }
}

/// Destination for analytics events. Implementations must not panic.
pub trait EventSink {
    fn emit(&self, event: &AnalyticsEvent);
}

/// Discards everything. Used when analytics is disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &AnalyticsEvent) {}
}

/// Keeps every emitted event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<AnalyticsEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.borrow().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(|event| event.name).collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &AnalyticsEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&self, event: &AnalyticsEvent) {
        (**self).emit(event);
    }
}

// =============================================================================
// OUTBOUND LINKS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkCategory {
    Linkedin,
    Twitter,
    Resume,
    Github,
    Medium,
    External,
}

impl LinkCategory {
    /// Checked in order; the first substring match wins.
    const RULES: [(&'static str, Self); 5] = [
        ("linkedin.com", Self::Linkedin),
        ("twitter.com", Self::Twitter),
        (".pdf", Self::Resume),
        ("github.com", Self::Github),
        ("medium.com", Self::Medium),
    ];

    pub fn classify(url: &str) -> Self {
        Self::RULES
            .iter()
            .find(|(needle, _)| url.contains(needle))
            .map_or(Self::External, |(_, category)| *category)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Resume => "resume",
            Self::Github => "github",
            Self::Medium => "medium",
            Self::External => "external",
        }
    }
}

// =============================================================================
// SCROLL DEPTH
// =============================================================================

/// Percentage of the document bottom edge reached, rounded.
///
/// Returns `0` for an empty or unmeasured document.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scroll_percent(scroll_y: f64, viewport_height: f64, document_height: f64) -> u32 {
    if document_height <= 0.0 {
        return 0;
    }
    let percent = ((scroll_y + viewport_height) / document_height * 100.0).round();
    percent.max(0.0) as u32
}

/// Scroll-depth marks with their fired flags.
#[derive(Clone, Debug)]
pub struct ScrollDepth {
    marks: Vec<(u32, bool)>,
}

impl ScrollDepth {
    pub fn new(marks: &[u32]) -> Self {
        Self { marks: marks.iter().map(|mark| (*mark, false)).collect() }
    }

    /// Fire every unfired mark at or below `percent`; returns the new ones.
    pub fn record(&mut self, percent: u32) -> Vec<u32> {
        let mut newly = Vec::new();
        for (mark, fired) in &mut self.marks {
            if !*fired && *mark <= percent {
                *fired = true;
                newly.push(*mark);
            }
        }
        newly
    }

    pub fn fired(&self) -> Vec<u32> {
        self.marks.iter().filter(|(_, fired)| *fired).map(|(mark, _)| *mark).collect()
    }
}

// =============================================================================
// TIME ON PAGE
// =============================================================================

/// Time-on-page milestones as absolute deadlines since load.
#[derive(Clone, Debug)]
pub struct TimeOnPage {
    deadlines: Vec<(u32, u32)>,
    next: usize,
}

impl TimeOnPage {
    /// `marks` are seconds since load, in any order; duplicates collapse.
    pub fn new(marks: &[u32]) -> Self {
        let mut marks = marks.to_vec();
        marks.sort_unstable();
        marks.dedup();
        let deadlines = marks.iter().map(|secs| (secs.saturating_mul(1000), *secs)).collect();
        Self { deadlines, next: 0 }
    }

    /// `(delay_ms_since_load, seconds)` for every mark.
    pub fn schedule(&self) -> &[(u32, u32)] {
        &self.deadlines
    }

    /// Chained delays: the first mark, then the gap to each following mark.
    pub fn delays(&self) -> Vec<u32> {
        let mut previous = 0;
        self.deadlines
            .iter()
            .map(|(deadline, _)| {
                let delay = deadline.saturating_sub(previous);
                previous = *deadline;
                delay
            })
            .collect()
    }

    /// Marks whose deadline is at or before `elapsed_ms`, each returned once.
    pub fn take_due(&mut self, elapsed_ms: u32) -> Vec<u32> {
        let mut due = Vec::new();
        while let Some((deadline, secs)) = self.deadlines.get(self.next) {
            if *deadline > elapsed_ms {
                break;
            }
            due.push(*secs);
            self.next += 1;
        }
        due
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.deadlines.len()
    }
}

// =============================================================================
// SECTION VIEWS
// =============================================================================

#[derive(Clone, Debug, Default)]
pub struct SectionViews {
    seen: HashSet<String>,
}

impl SectionViews {
    /// True only the first time `section_id` is recorded.
    pub fn record(&mut self, section_id: &str) -> bool {
        self.seen.insert(section_id.to_owned())
    }

    pub fn seen(&self, section_id: &str) -> bool {
        self.seen.contains(section_id)
    }
}

// =============================================================================
// ENGAGEMENT
// =============================================================================

/// Per-page reporting state plus the sink it reports to.
pub struct Engagement<S> {
    sink: S,
    pub scroll_depth: ScrollDepth,
    pub time_on_page: TimeOnPage,
    pub section_views: SectionViews,
}

impl<S: EventSink> Engagement<S> {
    pub fn new(sink: S, scroll_depth_marks: &[u32], time_on_page_marks: &[u32]) -> Self {
        Self {
            sink,
            scroll_depth: ScrollDepth::new(scroll_depth_marks),
            time_on_page: TimeOnPage::new(time_on_page_marks),
            section_views: SectionViews::default(),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn track(&self, event: &AnalyticsEvent) {
        log::debug!("analytics event {}", event.name);
        self.sink.emit(event);
    }

    /// Report scroll-depth marks newly reached at this position.
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64, document_height: f64) -> Vec<u32> {
        let percent = scroll_percent(scroll_y, viewport_height, document_height);
        let fired = self.scroll_depth.record(percent);
        for mark in &fired {
            self.track(&AnalyticsEvent::scroll_depth(*mark));
        }
        fired
    }

    /// Report time-on-page marks reached by `elapsed_ms` since load.
    pub fn on_elapsed(&mut self, elapsed_ms: u32) -> Vec<u32> {
        let due = self.time_on_page.take_due(elapsed_ms);
        for secs in &due {
            self.track(&AnalyticsEvent::time_on_page(*secs));
        }
        due
    }

    /// Report a section becoming half visible, once per section. Returns
    /// whether an event was emitted.
    pub fn on_section_visible(&mut self, section_id: &str) -> bool {
        if !self.section_views.record(section_id) {
            return false;
        }
        self.track(&AnalyticsEvent::section_view(section_id));
        true
    }
}
