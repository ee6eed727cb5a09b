//! Mobile navigation menu and in-page link scrolling.
//!
//! DESIGN
//! ======
//! `NavController` owns the menu's open flag and mirrors it onto three
//! places: the menu's `active` class, the hamburger's `aria-expanded`, and
//! the inline styles of the hamburger's icon bars. Anchor activation always
//! closes the menu before scrolling.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{ACTIVE_CLASS, ARIA_EXPANDED};
use crate::dom::{Element, report};
use crate::error::UiError;

/// Inline `(property, value)` for each icon bar while the menu is open.
const BARS_OPEN: [(&str, &str); 3] = [
    ("transform", "rotate(45deg) translateY(8px)"),
    ("opacity", "0"),
    ("transform", "rotate(-45deg) translateY(-8px)"),
];

const BARS_CLOSED: [(&str, &str); 3] = [("transform", "none"), ("opacity", "1"), ("transform", "none")];

pub struct NavController<E> {
    hamburger: E,
    menu: E,
    bars: Vec<E>,
    open: bool,
}

impl<E: Element> NavController<E> {
    pub fn new(hamburger: E, menu: E, bars: Vec<E>) -> Self {
        if bars.len() < BARS_OPEN.len() {
            log::debug!("hamburger has {} icon bars; animating those present", bars.len());
        }
        let open = menu.has_class(ACTIVE_CLASS);
        Self { hamburger, menu, bars, open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu and return the new open state.
    pub fn toggle(&mut self) -> bool {
        self.set_open(!self.open);
        self.open
    }

    /// Force the menu closed. Safe to call when already closed.
    pub fn close(&mut self) {
        self.set_open(false);
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
        report("updating navigation menu", self.render());
    }

    fn render(&self) -> Result<(), UiError> {
        if self.open {
            self.menu.add_class(ACTIVE_CLASS)?;
        } else {
            self.menu.remove_class(ACTIVE_CLASS)?;
        }
        self.hamburger.set_attribute(ARIA_EXPANDED, if self.open { "true" } else { "false" })?;
        let styles = if self.open { &BARS_OPEN } else { &BARS_CLOSED };
        for (bar, (property, value)) in self.bars.iter().zip(styles) {
            bar.set_style(property, value)?;
        }
        Ok(())
    }
}

/// Element id named by an in-page link, e.g. `"#about"` -> `"about"`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document scroll position that puts an element just below the fixed header.
///
/// `element_top` is the element's viewport-relative top edge and
/// `page_offset` the current vertical scroll position.
pub fn scroll_target(element_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    element_top + page_offset - header_offset
}
