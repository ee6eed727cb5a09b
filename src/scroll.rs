//! Scroll-driven navigation state: active-section highlighting and navbar
//! elevation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both handlers are full recomputes from the current scroll offset, so they
//! are idempotent and can run in any order on the same scroll event. The
//! browser wiring gives each its own debounce and runs both once at load.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{ACTIVE_CLASS, NAVBAR_SHADOW_ELEVATED, NAVBAR_SHADOW_FLAT};
use crate::dom::{Element, report};
use crate::error::UiError;

/// Layout snapshot of one page section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, offset_top: f64, height: f64) -> Self {
        Self { id: id.into(), offset_top, height }
    }

    /// Whether `scroll_y` falls in this section's half-open range
    /// `(top, top + height]`, with `top` pulled up by `section_offset`.
    pub fn contains(&self, scroll_y: f64, section_offset: f64) -> bool {
        let top = self.offset_top - section_offset;
        scroll_y > top && scroll_y <= top + self.height
    }
}

/// Id of the first section containing `scroll_y`.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds], section_offset: f64) -> Option<&str> {
    sections
        .iter()
        .find(|section| section.contains(scroll_y, section_offset))
        .map(|section| section.id.as_str())
}

/// Marks the nav link for the active section.
pub struct SectionHighlighter<E> {
    links: Vec<E>,
    section_offset: f64,
}

impl<E: Element> SectionHighlighter<E> {
    pub fn new(links: Vec<E>, section_offset: f64) -> Self {
        Self { links, section_offset }
    }

    /// Recompute link state. When no section is active the previous
    /// highlight is kept. Returns the active section id.
    pub fn highlight<'a>(&self, scroll_y: f64, sections: &'a [SectionBounds]) -> Option<&'a str> {
        let active = active_section(scroll_y, sections, self.section_offset)?;
        report("highlighting navigation", self.mark(active));
        Some(active)
    }

    fn mark(&self, section_id: &str) -> Result<(), UiError> {
        let wanted = format!("#{section_id}");
        for link in &self.links {
            if link.attribute("href").as_deref() == Some(wanted.as_str()) {
                link.add_class(ACTIVE_CLASS)?;
            } else {
                link.remove_class(ACTIVE_CLASS)?;
            }
        }
        Ok(())
    }
}

pub fn navbar_elevated(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Switches the navbar between its flat and elevated shadows.
pub struct NavbarElevation<E> {
    navbar: E,
    threshold: f64,
}

impl<E: Element> NavbarElevation<E> {
    pub fn new(navbar: E, threshold: f64) -> Self {
        Self { navbar, threshold }
    }

    pub fn update(&self, scroll_y: f64) -> bool {
        let elevated = navbar_elevated(scroll_y, self.threshold);
        let shadow = if elevated { NAVBAR_SHADOW_ELEVATED } else { NAVBAR_SHADOW_FLAT };
        report("updating navbar shadow", self.navbar.set_style("box-shadow", shadow));
        elevated
    }
}
