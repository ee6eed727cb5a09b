//! Error type shared by the page components.
//!
//! Nothing in this crate is fatal: handlers catch these at the event
//! boundary, log them, and leave the page partially enhanced.

/// Failure raised while touching browser state.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("storage access failed: {0}")]
    Storage(String),
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("missing element: {0}")]
    MissingElement(&'static str),
}
