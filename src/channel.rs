use configurator_core::{Channel, Outbox};
use wasm_bindgen::JsValue;

/// Channel backed by the page's streaming `sendMessage` function.
pub struct JsChannel {
    send_message: js_sys::Function,
}

impl JsChannel {
    pub fn new(send_message: js_sys::Function) -> Self {
        Self { send_message }
    }
}

impl Channel for JsChannel {
    fn send_message(&self, text: &str) {
        if let Err(e) = self
            .send_message
            .call1(&JsValue::NULL, &JsValue::from_str(text))
        {
            log::error!("[channel] sendMessage threw: {:?}", e);
        }
    }
}

/// Queue in front of `sendMessage`, flushed once the panel borrow is released.
pub type JsOutbox = Outbox<JsChannel>;
