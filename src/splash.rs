use crate::constants::{stream_style, SPLASH_ID, STREAM_ID};
use crate::visibility::Visibility;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SPLASH_ID) {
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("style", "visibility:visible");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SPLASH_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "visibility:hidden");
    }
}

pub fn apply(document: &web::Document, visibility: Visibility) {
    if visibility.splash {
        show(document);
    } else {
        hide(document);
    }
    if let Some(el) = document.get_element_by_id(STREAM_ID) {
        _ = el.set_attribute("style", &stream_style(visibility.stream));
    }
}
