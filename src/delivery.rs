// Custom events reach the page as arbitrary JS values and are reduced to
// JSON text before dispatch.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// null or undefined
    Empty,
    Json(String),
    /// Nothing JSON can represent, such as a function or a symbol.
    Unserializable,
}

/// `text` is the value itself when it is already a string; `stringify` is
/// only consulted otherwise.
pub fn classify(
    nullish: bool,
    text: Option<String>,
    stringify: impl FnOnce() -> Option<String>,
) -> Delivery {
    if nullish {
        return Delivery::Empty;
    }
    match text.or_else(stringify) {
        Some(json) => Delivery::Json(json),
        None => Delivery::Unserializable,
    }
}
