//! Product-card widget, compiled to WASM.
//!
//! Binds to `<product-card>` host elements, clones the card template into
//! each, and keeps price display, button state, and the sold-out tag
//! consistent with the selected variant. All state decisions come from
//! `sc-card-core`; this crate only touches the DOM.

pub mod card;
pub mod cart;
pub mod dom;
pub mod events;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
/// Mounts every host on the page exactly once.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    card::mount_all()
}
