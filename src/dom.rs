//! Seams between page components and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never look elements up on their own. The `hydrate` wiring
//! resolves elements once and hands them in as [`Element`] handles, and the
//! theme preference goes through a [`PreferenceStore`]. Tests substitute
//! in-memory doubles for both, so every behavior runs without a document.

#[cfg(test)]
#[path = "dom_fake.rs"]
pub(crate) mod fake;

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::UiError;

/// Minimal element surface the components need.
///
/// Methods take `&self`: browser element handles are shared references into
/// the document and mutate through it.
pub trait Element {
    fn attribute(&self, name: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`UiError::Dom`] when the host rejects the attribute.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), UiError>;

    fn has_class(&self, class: &str) -> bool;

    /// # Errors
    ///
    /// Returns [`UiError::Dom`] when the class list cannot be modified.
    fn add_class(&self, class: &str) -> Result<(), UiError>;

    /// # Errors
    ///
    /// Returns [`UiError::Dom`] when the class list cannot be modified.
    fn remove_class(&self, class: &str) -> Result<(), UiError>;

    /// Set one inline style property.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Dom`] when the style cannot be written.
    fn set_style(&self, property: &str, value: &str) -> Result<(), UiError>;
}

/// Key-value persistence for user preferences.
pub trait PreferenceStore {
    /// # Errors
    ///
    /// Returns [`UiError::Storage`] when the backing store is unreadable.
    fn load(&self, key: &str) -> Result<Option<String>, UiError>;

    /// # Errors
    ///
    /// Returns [`UiError::Storage`] when the value cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), UiError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, UiError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), UiError> {
        (**self).save(key, value)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn load(&self, key: &str) -> Result<Option<String>, UiError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), UiError> {
        (**self).save(key, value)
    }
}

/// Process-local store. Used when `localStorage` is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, UiError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Whether `document.readyState` means the DOM is parsed and queryable.
///
/// Only `"loading"` means parsing is still in progress; `"interactive"` and
/// `"complete"` both come after `DOMContentLoaded` has fired.
pub fn document_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Log a caught page failure without propagating it.
pub fn report(context: &str, result: Result<(), UiError>) {
    if let Err(e) = result {
        log::error!("{context}: {e}");
    }
}
