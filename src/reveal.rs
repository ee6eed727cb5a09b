//! One-shot entrance animations driven by viewport intersection.
//!
//! Elements start hidden and are revealed the first time they intersect the
//! viewport. After that the caller stops watching them; any further
//! notification for a revealed element is ignored, so re-entering the
//! viewport never replays the animation. Without intersection observers the
//! page falls back to showing everything at once.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;
use std::hash::Hash;

use crate::consts::{FADE_UP_ANIMATION, TIMELINE_REVEAL_CLASS};
use crate::dom::{Element, report};
use crate::error::UiError;

/// Intersection observer options for one element group.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl RevealOptions {
    pub const FADE_UP: Self = Self { threshold: 0.15, root_margin: "0px 0px -100px 0px" };
    pub const TIMELINE: Self = Self { threshold: 0.2, root_margin: "0px 0px -50px 0px" };
}

/// How a revealed element reaches its visible state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStyle {
    /// Inline `animation` shorthand.
    Animation(&'static str),
    /// CSS class carrying the transition.
    Class(&'static str),
}

impl RevealStyle {
    pub const FADE_UP: Self = Self::Animation(FADE_UP_ANIMATION);
    pub const TIMELINE: Self = Self::Class(TIMELINE_REVEAL_CLASS);
}

/// Fire-once reveal tracking for one element group.
#[derive(Debug)]
pub struct Revealer<K> {
    style: RevealStyle,
    revealed: HashSet<K>,
}

impl<K: Eq + Hash> Revealer<K> {
    pub fn new(style: RevealStyle) -> Self {
        Self { style, revealed: HashSet::new() }
    }

    /// Put an element into its hidden starting state.
    pub fn prepare<E: Element>(&self, el: &E) {
        report("hiding reveal element", el.set_style("opacity", "0"));
    }

    /// Handle one intersection notification.
    ///
    /// Returns `true` exactly once per key, on the first intersecting
    /// notification; the caller should stop observing the element then.
    pub fn on_intersect<E: Element>(&mut self, key: K, el: &E, intersecting: bool) -> bool {
        if !intersecting || self.revealed.contains(&key) {
            return false;
        }
        report("revealing element", self.reveal(el));
        self.revealed.insert(key);
        true
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Fallback when the runtime cannot observe intersections.
    pub fn show_immediately<E: Element>(&self, el: &E) {
        let result = match self.style {
            RevealStyle::Animation(_) => el.set_style("opacity", "1"),
            RevealStyle::Class(class) => el.set_style("opacity", "1").and_then(|()| el.add_class(class)),
        };
        report("showing element", result);
    }

    /// Fallback for a whole group, also used to undo [`Self::prepare`] when
    /// observation could not be set up.
    pub fn show_all<E: Element>(&self, elements: &[E]) {
        for el in elements {
            self.show_immediately(el);
        }
    }

    fn reveal<E: Element>(&self, el: &E) -> Result<(), UiError> {
        match self.style {
            RevealStyle::Animation(animation) => el.set_style("animation", animation),
            RevealStyle::Class(class) => {
                el.set_style("opacity", "1")?;
                el.add_class(class)
            }
        }
    }
}
