//! Analytics sink backed by a page-global reporting function.

use wasm_bindgen::{JsCast, JsValue};

use crate::analytics::{AnalyticsEvent, EventSink};

/// Forwards events as `global("event", name, params)`.
///
/// The global is looked up on every emit so a tag script that loads after
/// this module still receives later events. A missing or non-function
/// global is silently skipped.
pub struct GlobalSink {
    global: String,
}

impl GlobalSink {
    pub fn new(global: &str) -> Self {
        Self { global: global.to_owned() }
    }

    fn function(&self) -> Option<js_sys::Function> {
        let window = web_sys::window()?;
        match js_sys::Reflect::get(&window, &JsValue::from_str(&self.global)) {
            Ok(value) if value.is_function() => Some(value.unchecked_into()),
            _ => None,
        }
    }
}

impl EventSink for GlobalSink {
    fn emit(&self, event: &AnalyticsEvent) {
        let Some(report) = self.function() else {
            return;
        };
        let params = match serde_json::to_string(&event.params) {
            Ok(raw) => match js_sys::JSON::parse(&raw) {
                Ok(params) => params,
                Err(e) => {
                    log::debug!("analytics params for {}: {e:?}", event.name);
                    return;
                }
            },
            Err(e) => {
                log::debug!("analytics params for {}: {e}", event.name);
                return;
            }
        };
        if let Err(e) = report.call3(&JsValue::NULL, &JsValue::from_str("event"), &JsValue::from_str(event.name), &params)
        {
            log::debug!("analytics global rejected {}: {e:?}", event.name);
        }
    }
}
