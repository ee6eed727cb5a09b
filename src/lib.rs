//! # portfolio-ui
//!
//! Progressive enhancements for a static portfolio page, compiled to
//! WebAssembly. The page works without this crate; with it, visitors get a
//! persisted light/dark theme, a mobile menu, smooth in-page scrolling,
//! scroll-aware navigation, entrance animations, and engagement reporting.
//!
//! Every behavior is implemented against the small traits in [`dom`] and
//! [`analytics`], so it runs and is tested natively. The `hydrate` feature
//! adds the `web-sys` adapters and the `#[wasm_bindgen(start)]` entry point
//! that wires them to the live document.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme preference load, apply, toggle |
//! | [`nav`] | Mobile menu state and anchor scroll targets |
//! | [`scroll`] | Active-section highlighting and navbar elevation |
//! | [`reveal`] | Fire-once entrance animations |
//! | [`analytics`] | Events, sinks, and one-shot engagement trackers |
//! | [`debounce`] | Cancel-and-replace debouncing |
//! | [`dom`] | Element and preference-store seams |
//! | [`config`] | Optional page-supplied configuration |
//! | [`consts`] | Shared constants and selectors |
//! | [`error`] | Crate error type |

pub mod analytics;
pub mod config;
pub mod consts;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod web;
