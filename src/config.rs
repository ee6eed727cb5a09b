//! Page-supplied configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page may embed a JSON object in
//! `<script type="application/json" id="portfolio-config">`. Every field is
//! optional; missing fields take the defaults from [`crate::consts`]. A
//! malformed block is reported and the defaults are used instead, so a typo
//! in the markup never disables the page behavior.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::UiError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub storage_key: String,
    pub scroll_threshold: f64,
    pub header_offset: f64,
    pub section_offset: f64,
    pub debounce_wait_ms: u32,
    pub analytics_debounce_wait_ms: u32,
    pub scroll_depth_marks: Vec<u32>,
    pub time_on_page_marks: Vec<u32>,
    pub analytics_enabled: bool,
    /// Name of the global reporting function on `window`.
    pub analytics_global: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            scroll_threshold: consts::SCROLL_THRESHOLD,
            header_offset: consts::HEADER_OFFSET,
            section_offset: consts::SECTION_OFFSET,
            debounce_wait_ms: consts::DEBOUNCE_WAIT_MS,
            analytics_debounce_wait_ms: consts::ANALYTICS_DEBOUNCE_WAIT_MS,
            scroll_depth_marks: consts::SCROLL_DEPTH_MARKS.to_vec(),
            time_on_page_marks: consts::TIME_ON_PAGE_MARKS.to_vec(),
            analytics_enabled: true,
            analytics_global: "gtag".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl Config {
    /// Parse a JSON config block and normalize it.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] when `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.validate())
    }

    /// Parse `raw` if present, falling back to defaults on any failure.
    pub fn load_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring page config: {e}");
                Self::default()
            }
        }
    }

    /// Sort and dedupe marks; scroll-depth marks are clamped to `1..=100`.
    #[must_use]
    pub fn validate(mut self) -> Self {
        self.scroll_depth_marks.retain(|mark| (1..=100).contains(mark));
        self.scroll_depth_marks.sort_unstable();
        self.scroll_depth_marks.dedup();
        self.time_on_page_marks.retain(|mark| *mark > 0);
        self.time_on_page_marks.sort_unstable();
        self.time_on_page_marks.dedup();
        if self.storage_key.is_empty() {
            self.storage_key = consts::THEME_STORAGE_KEY.to_owned();
        }
        self
    }

    /// Configured log level; unknown names fall back to `Info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
