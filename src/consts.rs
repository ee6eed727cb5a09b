//! Shared constants for the page enhancement layer.

// ── Scroll geometry ─────────────────────────────────────────────

/// Scroll offset in pixels past which the navbar gains its elevated shadow.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Fixed header height subtracted from smooth-scroll targets.
pub const HEADER_OFFSET: f64 = 80.0;

/// Lead distance applied to section tops when picking the active section.
pub const SECTION_OFFSET: f64 = 100.0;

// ── Timing ──────────────────────────────────────────────────────

/// Debounce window for the highlight and navbar scroll handlers.
pub const DEBOUNCE_WAIT_MS: u32 = 20;

/// Coarser debounce window for scroll-depth reporting.
pub const ANALYTICS_DEBOUNCE_WAIT_MS: u32 = 250;

// ── Analytics marks ─────────────────────────────────────────────

/// Scroll-depth thresholds, in percent of document height.
pub const SCROLL_DEPTH_MARKS: [u32; 5] = [25, 50, 75, 90, 100];

/// Time-on-page milestones, in seconds since load.
pub const TIME_ON_PAGE_MARKS: [u32; 4] = [30, 60, 120, 300];

/// Visible fraction at which a section counts as viewed.
pub const SECTION_VIEW_THRESHOLD: f64 = 0.5;

/// Section id reported when a CTA has no enclosing section.
pub const UNKNOWN_SECTION: &str = "unknown";

// ── Storage ─────────────────────────────────────────────────────

/// Default `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Attributes and classes ──────────────────────────────────────

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const ACTIVE_CLASS: &str = "active";
pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_LABEL: &str = "aria-label";
pub const TITLE: &str = "title";

pub const NAVBAR_SHADOW_ELEVATED: &str = "0 2px 10px var(--shadow)";
pub const NAVBAR_SHADOW_FLAT: &str = "0 2px 4px var(--shadow)";

pub const FADE_UP_ANIMATION: &str = "fadeInUp 0.6s ease forwards";
pub const TIMELINE_REVEAL_CLASS: &str = "animate-in";

// ── Selectors ───────────────────────────────────────────────────

pub const SEL_THEME_TOGGLE: &str = ".theme-toggle";
pub const SEL_HAMBURGER: &str = ".hamburger";
pub const SEL_HAMBURGER_BARS: &str = ".hamburger span";
pub const SEL_NAV_MENU: &str = ".nav-menu";
pub const SEL_NAVBAR: &str = ".navbar";
pub const SEL_NAV_LINKS: &str = ".nav-link";
pub const NAV_LINK_CLASS: &str = "nav-link";
pub const SEL_SECTIONS: &str = "section[id]";
pub const SEL_ANCHORS: &str = "a[href^=\"#\"]";
pub const SEL_OUTBOUND_LINKS: &str = "a[target=\"_blank\"]";
pub const SEL_CTA_BUTTONS: &str = ".btn";
pub const CTA_PRIMARY_CLASS: &str = "btn-primary";
pub const SEL_FADE_UP: &str = ".project-card, .contact-item, .fade-up";
pub const SEL_TIMELINE: &str = ".timeline-item";

/// Id of the optional `<script type="application/json">` config element.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";
