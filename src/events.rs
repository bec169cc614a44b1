use crate::delivery::{self, Delivery};
use configurator_core::{ConfiguratorPanel, DispatchOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;

fn classify_event(event: &JsValue) -> Delivery {
    delivery::classify(
        event.is_null() || event.is_undefined(),
        event.as_string(),
        || match js_sys::JSON::stringify(event) {
            // undefined for functions and symbols
            Ok(s) => JsValue::from(s).as_string(),
            Err(e) => {
                log::warn!("[events] JSON.stringify threw: {:?}", e);
                None
            }
        },
    )
}

/// Dispatch one custom event. The caller refreshes presentation when the
/// outcome touches loading.
pub fn handle_custom_event(
    panel: &Rc<RefCell<ConfiguratorPanel>>,
    event: &JsValue,
) -> DispatchOutcome {
    match classify_event(event) {
        Delivery::Empty => panel.borrow_mut().handle_event(None),
        Delivery::Json(text) => panel.borrow_mut().handle_event_json(&text),
        Delivery::Unserializable => {
            log::warn!("[events] custom event has no JSON form: {:?}", event);
            DispatchOutcome::Malformed
        }
    }
}
