//! Browser entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once when the wasm module is instantiated. Resolves the page's
//! elements, builds the components from [`crate`] with `web-sys` handles, and
//! wires listeners, timers, and intersection observers. Every element is
//! optional; a missing one disables only the behavior that needs it.
//!
//! All state lives on the single browser thread in `Rc<RefCell<_>>`.
//! Listeners and timers are leaked for the page lifetime.

mod element;
mod sink;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::analytics::{AnalyticsEvent, Engagement, EventSink, NullSink};
use crate::config::Config;
use crate::consts::*;
use crate::debounce::debounced;
use crate::dom::{Element, MemoryStore, PreferenceStore, document_parsed};
use crate::nav::{NavController, anchor_target, scroll_target};
use crate::reveal::{RevealOptions, RevealStyle, Revealer};
use crate::scroll::{NavbarElevation, SectionBounds, SectionHighlighter};
use crate::theme::ThemeManager;

use element::{
    LocalStorage, PageElement, as_html, intersection_observer_supported, listen, listen_passive, observe, query, query_all,
};
use sink::GlobalSink;

type SharedEngagement = Rc<RefCell<Engagement<Box<dyn EventSink>>>>;
type SharedNav = Rc<RefCell<NavController<PageElement>>>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Trace) {
        log::warn!("console logger already installed: {e}");
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let raw_config = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    let config = Config::load_or_default(raw_config.as_deref());
    log::set_max_level(config.log_level().to_level_filter());

    let sink: Box<dyn EventSink> = if config.analytics_enabled {
        Box::new(GlobalSink::new(&config.analytics_global))
    } else {
        Box::new(NullSink)
    };
    let engagement: SharedEngagement = Rc::new(RefCell::new(Engagement::new(
        sink,
        &config.scroll_depth_marks,
        &config.time_on_page_marks,
    )));

    init_theme(&document, &config, &engagement);
    let nav = init_nav(&document, &engagement);
    init_anchors(&document, &config, nav, &engagement);
    init_scroll(&window, &document, &config);
    init_reveal(&document, SEL_FADE_UP, &RevealOptions::FADE_UP, RevealStyle::FADE_UP);
    init_reveal(&document, SEL_TIMELINE, &RevealOptions::TIMELINE, RevealStyle::TIMELINE);
    init_engagement(&window, &document, &config, &engagement);

    log::info!("portfolio enhancements ready");
}

// =============================================================================
// THEME
// =============================================================================

fn preference_store() -> Box<dyn PreferenceStore> {
    match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("theme preference will not persist: {e}");
            Box::new(MemoryStore::new())
        }
    }
}

fn init_theme(document: &Document, config: &Config, engagement: &SharedEngagement) {
    let Some(root) = document.document_element().and_then(as_html) else {
        log::warn!("no document root; theme disabled");
        return;
    };
    let toggle = query(document, SEL_THEME_TOGGLE);
    let manager = ThemeManager::load(preference_store(), PageElement::new(root), toggle.clone(), &config.storage_key);
    let Some(toggle) = toggle else {
        return;
    };
    let engagement = Rc::clone(engagement);
    listen(toggle.target(), "click", move |_| {
        let theme = manager.toggle();
        engagement.borrow().track(&AnalyticsEvent::theme_toggle(theme));
    });
}

// =============================================================================
// NAVIGATION
// =============================================================================

fn init_nav(document: &Document, engagement: &SharedEngagement) -> Option<SharedNav> {
    let hamburger = query(document, SEL_HAMBURGER)?;
    let menu = query(document, SEL_NAV_MENU)?;
    let bars = query_all(document, SEL_HAMBURGER_BARS);
    let nav = Rc::new(RefCell::new(NavController::new(hamburger.clone(), menu, bars)));

    let handle = Rc::clone(&nav);
    let engagement = Rc::clone(engagement);
    listen(hamburger.target(), "click", move |_| {
        let was_open = handle.borrow().is_open();
        handle.borrow_mut().toggle();
        engagement.borrow().track(&AnalyticsEvent::menu_toggle(was_open));
    });
    Some(nav)
}

fn init_anchors(document: &Document, config: &Config, nav: Option<SharedNav>, engagement: &SharedEngagement) {
    let header_offset = config.header_offset;
    for anchor in query_all(document, SEL_ANCHORS) {
        let nav = nav.clone();
        let engagement = Rc::clone(engagement);
        let link = anchor.clone();
        listen(anchor.target(), "click", move |event| {
            event.prevent_default();
            if let Some(nav) = &nav {
                nav.borrow_mut().close();
            }
            let Some(href) = link.attribute("href") else {
                return;
            };
            let Some(id) = anchor_target(&href) else {
                return;
            };
            if link.has_class(NAV_LINK_CLASS) {
                engagement.borrow().track(&AnalyticsEvent::nav_click(id));
            }
            scroll_to(id, header_offset);
        });
    }
}

fn scroll_to(id: &str, header_offset: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(target) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        log::debug!("no element with id {id}");
        return;
    };
    let top = target.get_bounding_client_rect().top();
    let options = ScrollToOptions::new();
    options.set_top(scroll_target(top, scroll_y(&window), header_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

// =============================================================================
// SCROLL
// =============================================================================

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

fn measure(sections: &[PageElement]) -> Vec<SectionBounds> {
    sections
        .iter()
        .map(|section| {
            let el = section.html();
            SectionBounds::new(el.id(), f64::from(el.offset_top()), f64::from(el.offset_height()))
        })
        .collect()
}

/// Run `handler` once the document is parsed, then on every debounced scroll.
fn on_scroll(window: &Window, document: &Document, wait_ms: u32, handler: Rc<dyn Fn()>) {
    let initial = Rc::clone(&handler);
    if !document_parsed(&document.ready_state()) {
        listen(document.as_ref(), "DOMContentLoaded", move |_| initial());
    } else {
        initial();
    }
    let settled = debounced(wait_ms, move |()| handler());
    listen_passive(window.as_ref(), "scroll", move |_| settled(()));
}

fn init_scroll(window: &Window, document: &Document, config: &Config) {
    let sections = query_all(document, SEL_SECTIONS);
    let highlighter = SectionHighlighter::new(query_all(document, SEL_NAV_LINKS), config.section_offset);
    let win = window.clone();
    on_scroll(
        window,
        document,
        config.debounce_wait_ms,
        Rc::new(move || {
            highlighter.highlight(scroll_y(&win), &measure(&sections));
        }),
    );

    if let Some(navbar) = query(document, SEL_NAVBAR) {
        let elevation = NavbarElevation::new(navbar, config.scroll_threshold);
        let win = window.clone();
        on_scroll(
            window,
            document,
            config.debounce_wait_ms,
            Rc::new(move || {
                elevation.update(scroll_y(&win));
            }),
        );
    }
}

// =============================================================================
// REVEAL
// =============================================================================

fn init_reveal(document: &Document, selector: &str, options: &RevealOptions, style: RevealStyle) {
    let elements = query_all(document, selector);
    if elements.is_empty() {
        return;
    }
    if !intersection_observer_supported() {
        Revealer::<usize>::new(style).show_all(&elements);
        return;
    }

    let mut revealer = Revealer::<usize>::new(style);
    for el in &elements {
        revealer.prepare(el);
    }
    let hidden = elements.clone();
    let result = observe(elements, options.threshold, options.root_margin, 0.0, move |el, index, visible| {
        revealer.on_intersect(index, el, visible)
    });
    if let Err(e) = result {
        log::error!("observing {selector}: {e}");
        Revealer::<usize>::new(style).show_all(&hidden);
    }
}

// =============================================================================
// ENGAGEMENT
// =============================================================================

fn init_engagement(window: &Window, document: &Document, config: &Config, engagement: &SharedEngagement) {
    for link in query_all(document, SEL_OUTBOUND_LINKS) {
        let engagement = Rc::clone(engagement);
        let handle = link.clone();
        listen(link.target(), "click", move |_| {
            if let Some(url) = handle.attribute("href") {
                engagement.borrow().track(&AnalyticsEvent::outbound_click(&url));
            }
        });
    }

    for button in query_all(document, SEL_CTA_BUTTONS) {
        let engagement = Rc::clone(engagement);
        let handle = button.clone();
        listen(button.target(), "click", move |_| {
            let text = handle.html().text_content().unwrap_or_default();
            let section = match handle.html().closest("section") {
                Ok(Some(section)) => Some(section.id()),
                _ => None,
            };
            let primary = handle.has_class(CTA_PRIMARY_CLASS);
            engagement
                .borrow()
                .track(&AnalyticsEvent::cta_click(&text, primary, section.as_deref()));
        });
    }

    // Scroll depth.
    {
        let engagement = Rc::clone(engagement);
        let win = window.clone();
        let settled = debounced(config.analytics_debounce_wait_ms, move |()| {
            let viewport = win.inner_height().map_or(0.0, |h| h.as_f64().unwrap_or(0.0));
            let document_height = win
                .document()
                .and_then(|doc| doc.document_element())
                .map_or(0.0, |root| f64::from(root.scroll_height()));
            engagement.borrow_mut().on_scroll(scroll_y(&win), viewport, document_height);
        });
        listen_passive(window.as_ref(), "scroll", move |_| settled(()));
    }

    // Time on page: one timer per precomputed deadline.
    let deadlines: Vec<u32> = engagement
        .borrow()
        .time_on_page
        .schedule()
        .iter()
        .map(|(deadline, _)| *deadline)
        .collect();
    for deadline in deadlines {
        let engagement = Rc::clone(engagement);
        Timeout::new(deadline, move || {
            engagement.borrow_mut().on_elapsed(deadline);
        })
        .forget();
    }

    // Section views.
    let sections = query_all(document, SEL_SECTIONS);
    if sections.is_empty() || !intersection_observer_supported() {
        return;
    }
    let engagement = Rc::clone(engagement);
    let result = observe(sections, SECTION_VIEW_THRESHOLD, "0px", SECTION_VIEW_THRESHOLD, move |el, _, visible| {
        if !visible {
            return false;
        }
        engagement.borrow_mut().on_section_visible(&el.html().id());
        true
    });
    if let Err(e) = result {
        log::error!("observing sections: {e}");
    }
}
