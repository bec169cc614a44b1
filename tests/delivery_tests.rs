// Host-side tests for reducing custom events to JSON text.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod delivery {
    include!("../src/delivery.rs");
}

use delivery::*;

#[test]
fn nullish_events_are_empty() {
    assert_eq!(classify(true, None, || Some("{}".into())), Delivery::Empty);
}

#[test]
fn string_events_pass_through_without_stringify() {
    let out = classify(false, Some("{\"event_type\":\"x\"}".into()), || {
        panic!("stringify must not run for strings")
    });
    assert_eq!(out, Delivery::Json("{\"event_type\":\"x\"}".into()));
}

#[test]
fn objects_use_stringified_form() {
    assert_eq!(
        classify(false, None, || Some("{\"a\":1}".into())),
        Delivery::Json("{\"a\":1}".into())
    );
}

#[test]
fn values_without_json_form_are_unserializable() {
    // JSON.stringify yields undefined for functions and symbols
    assert_eq!(classify(false, None, || None), Delivery::Unserializable);
}
