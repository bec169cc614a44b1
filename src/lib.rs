#![cfg(target_arch = "wasm32")]
use configurator_core::{Catalogs, ConfiguratorPanel, Control, StreamConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod channel;
mod constants;
mod delivery;
mod dom;
mod events;
mod input;
mod splash;
mod ui;
mod visibility;

// Deployment settings baked in at build time
static STREAM_CONFIG_JSON: &str = include_str!("../stream.config.json");

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("configurator-web starting");
    Ok(())
}

/// Panel handle owned by the page that hosts the stream.
///
/// The page constructs it with its streaming library's `sendMessage` and
/// forwards every custom event from the stream to `handleCustomEvent`.
#[wasm_bindgen]
pub struct Configurator {
    panel: Rc<RefCell<ConfiguratorPanel>>,
    outbox: Rc<channel::JsOutbox>,
    document: web::Document,
    config: StreamConfig,
    user: Option<String>,
}

fn init(send_message: js_sys::Function) -> anyhow::Result<Configurator> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = StreamConfig::from_json(STREAM_CONFIG_JSON)?;
    let catalogs = Catalogs::builtin()?;
    let outbox = Rc::new(channel::JsOutbox::new(channel::JsChannel::new(send_message)));
    let panel = ConfiguratorPanel::new(&config, catalogs, outbox.clone());
    // Stream stays hidden until the stage opens; the splash waits for login
    splash::apply(
        &document,
        visibility::visibility(panel.is_loading_asset(), false, config.is_remote()),
    );
    Ok(Configurator {
        panel: Rc::new(RefCell::new(panel)),
        outbox,
        document,
        config,
        user: None,
    })
}

#[wasm_bindgen]
impl Configurator {
    #[wasm_bindgen(constructor)]
    pub fn new(send_message: js_sys::Function) -> Result<Configurator, JsValue> {
        init(send_message).map_err(|e| {
            log::error!("init error: {:?}", e);
            JsValue::from_str(&format!("{e:#}"))
        })
    }

    /// Selectors (and the splash for remote sessions) appear once the
    /// streaming layer reports a signed-in user.
    #[wasm_bindgen(js_name = onLoggedIn)]
    pub fn on_logged_in(&mut self, user_id: String) -> Result<(), JsValue> {
        log::info!("[session] logged in as {user_id}");
        self.user = Some(user_id);
        ui::mount_selectors(&self.document, &self.panel, &self.outbox)
            .map_err(|e| JsValue::from_str(&format!("{e:#}")))?;
        self.refresh_visibility();
        Ok(())
    }

    #[wasm_bindgen(js_name = onStreamStarted)]
    pub fn on_stream_started(&self) {
        log::info!("[session] app stream started");
    }

    #[wasm_bindgen(js_name = onFocus)]
    pub fn on_focus(&self) {
        log::info!("[session] user is interacting in streamed viewer");
    }

    #[wasm_bindgen(js_name = onBlur)]
    pub fn on_blur(&self) {
        log::info!("[session] user is not interacting in streamed viewer");
    }

    #[wasm_bindgen(js_name = handleCustomEvent)]
    pub fn handle_custom_event(&self, event: JsValue) {
        let outcome = events::handle_custom_event(&self.panel, &event);
        if outcome.touches_loading() {
            self.refresh_visibility();
        }
    }

    /// Reconcile one selector with the label the scene reports. Returns
    /// whether the selection moved.
    #[wasm_bindgen(js_name = setSelectedLabel)]
    pub fn set_selected_label(&self, control: &str, label: Option<String>) -> bool {
        let Some(control) = Control::from_key(control) else {
            log::warn!("[ui] unknown control {control:?}");
            return false;
        };
        let moved = self
            .panel
            .borrow_mut()
            .set_external_label(control, label.as_deref());
        if moved {
            ui::sync_selector(&self.document, &self.panel.borrow(), control);
        }
        moved
    }

    #[wasm_bindgen(getter, js_name = isLoadingAsset)]
    pub fn is_loading_asset(&self) -> bool {
        self.panel.borrow().is_loading_asset()
    }

    #[wasm_bindgen(getter)]
    pub fn user(&self) -> Option<String> {
        self.user.clone()
    }
}

impl Configurator {
    fn refresh_visibility(&self) {
        let loading = self.panel.borrow().is_loading_asset();
        splash::apply(
            &self.document,
            visibility::visibility(loading, self.user.is_some(), self.config.is_remote()),
        );
    }
}
