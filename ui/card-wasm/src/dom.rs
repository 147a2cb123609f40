//! DOM helpers and the card's slot bindings.
//!
//! [`Slots`] holds the resolved elements of one card subtree; all fields are
//! resolved once at mount. To add a new slot, add a field here and bind it in
//! `Slots::bind()`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, DocumentFragment, Element, HtmlAnchorElement, HtmlButtonElement, HtmlElement,
    HtmlImageElement, HtmlOptionElement, HtmlSelectElement, HtmlTemplateElement,
};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

/// Query all matching elements in the document.
pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = doc().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

/// Query one matching element within a parent element.
pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

pub fn create_option(value: &str, text: &str, selected: bool) -> HtmlOptionElement {
    let opt: HtmlOptionElement = create_element("option").dyn_into().unwrap();
    opt.set_value(value);
    opt.set_text_content(Some(text));
    opt.set_selected(selected);
    opt
}

/// Show (`display:block`) or hide (`display:none`) an element.
pub fn set_displayed(el: &HtmlElement, visible: bool) {
    let _ = el
        .style()
        .set_property("display", if visible { "block" } else { "none" });
}

/// Hide an element without removing it from the subtree.
pub fn hide(el: &HtmlElement) {
    let _ = el.style().set_property("display", "none");
}

/// Clone the content of the named `<template>` into a fresh fragment.
pub fn instantiate_template(id: &str) -> Result<DocumentFragment, JsValue> {
    let tpl: HtmlTemplateElement = by_id_typed(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing template #{}", id)))?;
    let clone = tpl.content().clone_node_with_deep(true)?;
    clone
        .dyn_into::<DocumentFragment>()
        .map_err(|_| JsValue::from_str("template content is not a fragment"))
}

// ── Slots struct ──

macro_rules! slot {
    ($root:expr, $sel:expr) => {
        query_within($root, $sel)
            .ok_or_else(|| JsValue::from_str(&format!("missing slot {}", $sel)))?
    };
}

macro_rules! slot_typed {
    ($root:expr, $sel:expr, $ty:ty) => {
        query_within($root, $sel)
            .and_then(|e| e.dyn_into::<$ty>().ok())
            .ok_or_else(|| JsValue::from_str(&format!("missing slot {}", $sel)))?
    };
}

/// The named slots one card controls inside its cloned template subtree.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Slots {
    pub image: HtmlImageElement,
    pub title: Element,
    pub price: Element,
    pub selector: HtmlSelectElement,
    pub add_button: HtmlButtonElement,
    pub link: HtmlAnchorElement,
    pub sold_out: HtmlElement,
    /// Failure-notice slot; templates without one fall back to `alert`.
    pub notice: Option<HtmlElement>,
}

impl Slots {
    /// Resolve every slot inside a freshly populated card subtree.
    pub fn bind(root: &Element) -> Result<Slots, JsValue> {
        Ok(Slots {
            image: slot_typed!(root, ".product-image", HtmlImageElement),
            title: slot!(root, ".product-title"),
            price: slot!(root, ".product-price"),
            selector: slot_typed!(root, ".variant-selector", HtmlSelectElement),
            add_button: slot_typed!(root, ".add-to-cart", HtmlButtonElement),
            link: slot_typed!(root, ".product-link", HtmlAnchorElement),
            sold_out: slot_typed!(root, ".sold-out-tag", HtmlElement),
            notice: query_within(root, ".cart-notice").and_then(|e| e.dyn_into().ok()),
        })
    }
}
