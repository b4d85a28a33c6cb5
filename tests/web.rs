//! Browser-side checks for the JS facade: `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use bodykit::BodyHandle;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn init_does_not_panic() {
    bodykit::init();
}

#[wasm_bindgen_test]
fn malformed_options_throw() {
    assert!(BodyHandle::new(Some("{mass:".to_string())).is_err());
    assert!(BodyHandle::from_json(r#"{"kind":"hexagon"}"#).is_err());
}

#[wasm_bindgen_test]
fn rectangle_from_js() {
    let rect = BodyHandle::rectangle(0.0, 0.0, 2.0, 2.0);
    assert_eq!(rect.vertices().len(), 8);
    assert_eq!(rect.kind(), "polygon");
}
