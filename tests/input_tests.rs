// Host-side tests for select-control value encoding.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn option_values_parse_back_to_indices() {
    for i in [0usize, 1, 5, 9] {
        assert_eq!(parse_option_value(&option_value(i)), Some(i));
    }
}

#[test]
fn parse_tolerates_whitespace() {
    assert_eq!(parse_option_value(" 3 "), Some(3));
}

#[test]
fn parse_rejects_non_indices() {
    assert_eq!(parse_option_value(""), None);
    assert_eq!(parse_option_value("-1"), None);
    assert_eq!(parse_option_value("two"), None);
    assert_eq!(parse_option_value("1.5"), None);
}

#[test]
fn dom_selected_index_maps_none_to_minus_one() {
    assert_eq!(dom_selected_index(None), -1);
    // index zero is a real selection, not "nothing selected"
    assert_eq!(dom_selected_index(Some(0)), 0);
    assert_eq!(dom_selected_index(Some(4)), 4);
}
