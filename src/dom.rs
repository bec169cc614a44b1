use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn create_element(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{tag}>: {e:?}"))
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {e:?}"))
}

#[inline]
pub fn add_change_listener(element: &web::Element, mut handler: impl FnMut(web::Event) + 'static) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>
    );
    _ = element.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn select_by_id(document: &web::Document, id: &str) -> Option<web::HtmlSelectElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
}
