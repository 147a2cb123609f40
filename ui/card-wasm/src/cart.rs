//! Cart-service client.
//!
//! Wraps `fetch` for the add-to-cart call. Any non-2xx status, transport
//! error, or unparseable body is a failure: logged, surfaced as a notice,
//! selection state left untouched so the user can retry.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_console::error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use sc_card_core::Selection;
use sc_catalog_types::CartAddRequest;

use crate::card;
use crate::dom::{self, Slots};

pub const CART_ADD_PATH: &str = "/cart/add.js";
pub const CART_VIEW_PATH: &str = "/cart";
pub const NOTICE_TEXT: &str = "There was an issue adding the item to your cart.";

/// Send the add request, then either hand off to the cart view or surface
/// the failure. Clears the in-flight flag either way.
pub async fn submit(slots: &Slots, selection: &Rc<RefCell<Selection>>, request: CartAddRequest) {
    let outcome = add_to_cart(&request).await;
    selection.borrow_mut().finish_submit();

    match outcome {
        Ok(_) => {
            // The page transitions away; no local state to update.
            let _ = dom::window().location().set_href(CART_VIEW_PATH);
        }
        Err(e) => {
            error!("product-card: add to cart failed:", e);
            card::show_notice(slots, NOTICE_TEXT);
        }
    }
}

/// POST one cart line to the cart service and parse the JSON response.
async fn add_to_cart(request: &CartAddRequest) -> Result<serde_json::Value, String> {
    let body = serde_json::to_string(request).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");

    let headers = Headers::new().map_err(|e| format!("{:?}", e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{:?}", e))?;
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));

    let req =
        Request::new_with_str_and_init(CART_ADD_PATH, &opts).map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(dom::window().fetch_with_request(&req))
        .await
        .map_err(|e| format!("fetch error: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "response is not a Response".to_string())?;

    let text = JsFuture::from(resp.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("text error: {:?}", e))?;
    let text_str = text.as_string().unwrap_or_default();

    if !resp.ok() {
        return Err(format!(
            "{} {}: {}",
            resp.status(),
            resp.status_text(),
            text_str
        ));
    }

    serde_json::from_str(&text_str).map_err(|e| format!("JSON parse error: {}", e))
}
