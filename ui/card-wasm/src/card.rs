//! Card mounting and rendering.
//!
//! `mount_all()` runs once at startup; each host element gets its own cloned
//! template subtree, its own [`Selection`], and its own event wiring.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_console::error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use sc_card_core::{HostAttrs, RenderPlan, Selection, build_descriptor, product_url};
use sc_catalog_types::ProductDescriptor;

use crate::dom::{self, Slots};
use crate::events;

pub const HOST_TAG: &str = "product-card";
pub const TEMPLATE_ID: &str = "product-card-template";

/// Mount every `<product-card>` host on the page. Idempotent: hosts carry a
/// marker attribute after mounting and are never mounted twice.
pub fn mount_all() -> Result<(), JsValue> {
    for host in dom::query_all(HOST_TAG) {
        if host.get_attribute("data-mounted").is_some() {
            continue;
        }
        mount(&host)?;
        host.set_attribute("data-mounted", "true")?;
    }
    Ok(())
}

/// Mount one card: parse host attributes, build the subtree, first render,
/// wire events.
pub fn mount(host: &Element) -> Result<(), JsValue> {
    let attrs = HostAttrs {
        title: host.get_attribute("data-title"),
        image: host.get_attribute("data-image"),
        handle: host.get_attribute("data-handle"),
        variants: host.get_attribute("data-variants"),
    };
    let (descriptor, parse_err) = build_descriptor(attrs);
    if let Some(err) = parse_err {
        error!("product-card: dropping variants attribute:", err.to_string());
    }

    let fragment = dom::instantiate_template(TEMPLATE_ID)?;
    host.append_child(&fragment)?;
    let slots = Slots::bind(host)?;

    populate(&slots, &descriptor)?;

    let selection = Rc::new(RefCell::new(Selection::new(descriptor.variants)));
    render(&slots, &selection.borrow().render_plan());
    events::bind(&slots, &selection);
    Ok(())
}

/// Fill the static slots and the selector options from the descriptor.
fn populate(slots: &Slots, descriptor: &ProductDescriptor) -> Result<(), JsValue> {
    slots.image.set_src(&descriptor.image_src);
    slots.image.set_alt(&descriptor.title);
    dom::set_text(&slots.title, &descriptor.title);
    slots.link.set_href(&product_url(descriptor));

    for (i, variant) in descriptor.variants.iter().enumerate() {
        let opt = dom::create_option(&variant.id.0, &variant.title, i == 0);
        opt.set_attribute("data-price", &variant.price)?;
        opt.set_attribute("data-available", if variant.available { "true" } else { "false" })?;
        slots.selector.append_child(&opt)?;
    }
    Ok(())
}

/// Apply a render plan to the card's slots.
///
/// The plan is the single source for price text, button state, and sold-out
/// visibility; nothing else writes those slots after mounting.
pub fn render(slots: &Slots, plan: &RenderPlan) {
    dom::set_text(&slots.price, plan.price_text.as_deref().unwrap_or(""));

    slots.add_button.set_text_content(Some(plan.button_label));
    slots.add_button.set_disabled(!plan.button_enabled);

    dom::set_displayed(&slots.sold_out, plan.sold_out_visible);
    if !plan.selector_visible {
        dom::hide(slots.selector.unchecked_ref());
    }
}

/// Surface a cart failure to the user. Falls back to `alert` when the
/// template has no notice slot.
pub fn show_notice(slots: &Slots, message: &str) {
    match &slots.notice {
        Some(el) => {
            el.set_text_content(Some(message));
            dom::set_displayed(el, true);
        }
        None => {
            let _ = dom::window().alert_with_message(message);
        }
    }
}

/// Hide the notice ahead of a retry.
pub fn clear_notice(slots: &Slots) {
    if let Some(el) = &slots.notice {
        dom::set_displayed(el, false);
    }
}
