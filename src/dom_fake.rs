//! In-memory element and store doubles for component tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use super::{Element, PreferenceStore};
use crate::error::UiError;

#[derive(Debug, Default)]
struct FakeState {
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
}

/// Cloneable element handle; clones share state like DOM references do.
#[derive(Clone, Debug, Default)]
pub struct FakeElement {
    state: Rc<RefCell<FakeState>>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(name: &str, value: &str) -> Self {
        let el = Self::new();
        el.state.borrow_mut().attributes.insert(name.to_owned(), value.to_owned());
        el
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.state.borrow().styles.get(property).cloned()
    }
}

impl Element for FakeElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), UiError> {
        self.state.borrow_mut().attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    fn add_class(&self, class: &str) -> Result<(), UiError> {
        self.state.borrow_mut().classes.insert(class.to_owned());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), UiError> {
        self.state.borrow_mut().classes.remove(class);
        Ok(())
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), UiError> {
        self.state.borrow_mut().styles.insert(property.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store whose reads and/or writes fail, counting attempted writes.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub writes: Cell<usize>,
}

impl PreferenceStore for FailingStore {
    fn load(&self, _key: &str) -> Result<Option<String>, UiError> {
        if self.fail_reads {
            return Err(UiError::Storage("read denied".to_owned()));
        }
        Ok(None)
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), UiError> {
        self.writes.set(self.writes.get() + 1);
        if self.fail_writes {
            return Err(UiError::Storage("quota exceeded".to_owned()));
        }
        Ok(())
    }
}
