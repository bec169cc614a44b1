//! Sidebar selectors rendered as `<select>` controls.

use crate::constants::{
    class_for, selector_id, CONTAINER_CLASS_SUFFIX, HEADER_CLASS_SUFFIX, OPTION_CLASS_SUFFIX,
    SELECTOR_CLASS_SUFFIX, SELECTOR_CONTAINER_CLASS_SUFFIX, SIDEBAR_ID, SIDEBAR_WIDTH_PX,
};
use crate::channel::JsOutbox;
use crate::{dom, input};
use configurator_core::{ConfiguratorPanel, Control};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn mount_selectors(
    document: &web::Document,
    panel: &Rc<RefCell<ConfiguratorPanel>>,
    outbox: &Rc<JsOutbox>,
) -> anyhow::Result<()> {
    let sidebar = document
        .get_element_by_id(SIDEBAR_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{SIDEBAR_ID}"))?;
    for control in Control::ALL {
        if document.get_element_by_id(&selector_id(control.key())).is_some() {
            log::warn!("[ui] {control} selector already mounted");
            continue;
        }
        let container = build_selector(document, &panel.borrow(), control)?;
        dom::append(&sidebar, &container)?;
        wire_selector(document, panel, outbox, control);
        sync_selector(document, &panel.borrow(), control);
    }
    Ok(())
}

fn build_selector(
    document: &web::Document,
    panel: &ConfiguratorPanel,
    control: Control,
) -> anyhow::Result<web::Element> {
    let key = control.key();

    let container = dom::create_element(document, "div")?;
    container.set_class_name(&class_for(key, CONTAINER_CLASS_SUFFIX));
    _ = container.set_attribute("style", &format!("width:{SIDEBAR_WIDTH_PX}px"));

    let header = dom::create_element(document, "div")?;
    header.set_class_name(&class_for(key, HEADER_CLASS_SUFFIX));
    header.set_text_content(Some(control.title()));
    dom::append(&container, &header)?;

    let select_container = dom::create_element(document, "div")?;
    select_container.set_class_name(&class_for(key, SELECTOR_CONTAINER_CLASS_SUFFIX));
    dom::append(&container, &select_container)?;

    let select = dom::create_element(document, "select")?;
    select.set_id(&selector_id(key));
    select.set_class_name(&class_for(key, SELECTOR_CLASS_SUFFIX));
    let option_class = class_for(key, OPTION_CLASS_SUFFIX);
    for entry in panel.entries(control) {
        let option = dom::create_element(document, "option")?;
        option.set_class_name(&option_class);
        _ = option.set_attribute("value", &input::option_value(entry.index));
        option.set_text_content(Some(entry.label));
        dom::append(&select, &option)?;
    }
    dom::append(&select_container, &select)?;
    Ok(container)
}

fn wire_selector(
    document: &web::Document,
    panel: &Rc<RefCell<ConfiguratorPanel>>,
    outbox: &Rc<JsOutbox>,
    control: Control,
) {
    let Some(select) = dom::select_by_id(document, &selector_id(control.key())) else {
        return;
    };
    let panel = panel.clone();
    let outbox = outbox.clone();
    let doc = document.clone();
    dom::add_change_listener(&select, move |ev: web::Event| {
        let Some(target) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlSelectElement>().ok())
        else {
            return;
        };
        let value = target.value();
        let Some(index) = input::parse_option_value(&value) else {
            log::warn!("[ui] {control} produced non-index value {value:?}");
            return;
        };
        let picked = panel.borrow_mut().select(control, index);
        if let Err(e) = picked {
            log::error!("[ui] {e}");
        }
        sync_selector(&doc, &panel.borrow(), control);
        // sendMessage may re-enter handleCustomEvent, so no borrow is held here
        outbox.flush();
    });
}

/// Push the selector state into its `<select>`.
pub fn sync_selector(document: &web::Document, panel: &ConfiguratorPanel, control: Control) {
    if let Some(select) = dom::select_by_id(document, &selector_id(control.key())) {
        select.set_selected_index(input::dom_selected_index(panel.selected_index(control)));
    }
}
