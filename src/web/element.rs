//! `web-sys` adapters for the component traits plus small DOM helpers.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    AddEventListenerOptions, Document, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Storage,
};

use crate::dom::{Element, PreferenceStore};
use crate::error::UiError;

pub fn dom_error(e: JsValue) -> UiError {
    UiError::Dom(format!("{e:?}"))
}

fn storage_error(e: JsValue) -> UiError {
    UiError::Storage(format!("{e:?}"))
}

// =============================================================================
// ELEMENTS
// =============================================================================

/// Handle to one element in the live document.
#[derive(Clone, Debug)]
pub struct PageElement(HtmlElement);

impl PageElement {
    pub fn new(el: HtmlElement) -> Self {
        Self(el)
    }

    pub fn html(&self) -> &HtmlElement {
        &self.0
    }

    pub fn target(&self) -> &EventTarget {
        self.0.as_ref()
    }

    /// Whether `other` is this same document node.
    pub fn is(&self, other: &web_sys::Element) -> bool {
        let this: &JsValue = self.0.as_ref();
        let other: &JsValue = other.as_ref();
        this == other
    }
}

impl Element for PageElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), UiError> {
        self.0.set_attribute(name, value).map_err(dom_error)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<(), UiError> {
        self.0.class_list().add_1(class).map_err(dom_error)
    }

    fn remove_class(&self, class: &str) -> Result<(), UiError> {
        self.0.class_list().remove_1(class).map_err(dom_error)
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), UiError> {
        self.0.style().set_property(property, value).map_err(dom_error)
    }
}

/// Narrow a DOM value to an HTML element; SVG and text nodes are skipped.
pub fn as_html<T: JsCast>(value: T) -> Option<HtmlElement> {
    match value.dyn_into::<HtmlElement>() {
        Ok(el) => Some(el),
        Err(_) => None,
    }
}

/// First element matching `selector`, if any.
pub fn query(document: &Document, selector: &str) -> Option<PageElement> {
    match document.query_selector(selector) {
        Ok(Some(el)) => as_html(el).map(PageElement),
        Ok(None) => None,
        Err(e) => {
            log::warn!("query {selector}: {}", dom_error(e));
            None
        }
    }
}

/// Every HTML element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<PageElement> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("query {selector}: {}", dom_error(e));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(as_html)
        .map(PageElement)
        .collect()
}

// =============================================================================
// STORAGE
// =============================================================================

/// `window.localStorage`.
pub struct LocalStorage(Storage);

impl LocalStorage {
    /// # Errors
    ///
    /// Fails when the browser denies or lacks `localStorage`.
    pub fn open() -> Result<Self, UiError> {
        let window = web_sys::window().ok_or(UiError::MissingElement("window"))?;
        match window.local_storage().map_err(storage_error)? {
            Some(storage) => Ok(Self(storage)),
            None => Err(UiError::Storage("localStorage unavailable".to_owned())),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, UiError> {
        self.0.get_item(key).map_err(storage_error)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.0.set_item(key, value).map_err(storage_error)
    }
}

// =============================================================================
// EVENTS
// =============================================================================

/// Attach `handler` for the page lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("listening for {event}: {}", dom_error(e));
    }
    closure.forget();
}

/// Attach a passive `handler` for the page lifetime.
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::error!("listening for {event}: {}", dom_error(e));
    }
    closure.forget();
}

// =============================================================================
// INTERSECTION
// =============================================================================

pub fn intersection_observer_supported() -> bool {
    web_sys::window().is_some_and(|window| {
        matches!(js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")), Ok(true))
    })
}

/// Observe `elements`; `on_entry(el, index, visible)` returns whether to stop
/// watching that element. `visible` requires at least `min_ratio` in view.
///
/// # Errors
///
/// Returns [`UiError::Dom`] when the observer cannot be constructed.
pub fn observe<F>(
    elements: Vec<PageElement>,
    threshold: f64,
    root_margin: &str,
    min_ratio: f64,
    mut on_entry: F,
) -> Result<(), UiError>
where
    F: FnMut(&PageElement, usize, bool) -> bool + 'static,
{
    let elements = Rc::new(elements);
    let watched = Rc::clone(&elements);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = watched.iter().position(|el| el.is(&target)) else {
                    continue;
                };
                let visible = entry.is_intersecting() && entry.intersection_ratio() >= min_ratio;
                if on_entry(&watched[index], index, visible) {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).map_err(dom_error)?;
    for el in elements.iter() {
        observer.observe(el.html());
    }
    callback.forget();
    Ok(())
}
