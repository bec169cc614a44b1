// Select-control value encoding. Each <option> carries its catalog index as
// its value attribute.

#[inline]
pub fn option_value(index: usize) -> String {
    index.to_string()
}

#[inline]
pub fn parse_option_value(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}

/// `HtmlSelectElement::selectedIndex` for a selector state; -1 shows nothing.
#[inline]
pub fn dom_selected_index(selected: Option<usize>) -> i32 {
    selected
        .and_then(|i| i32::try_from(i).ok())
        .unwrap_or(-1)
}
