//! Event wiring for one mounted card.
//!
//! Two listeners per card: selector `change` and add-to-cart `click`. State
//! borrows stay inside the synchronous part of each handler; the cart fetch
//! runs via `spawn_local`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_console::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use sc_card_core::Selection;

use crate::cart;
use crate::card;
use crate::dom::Slots;

/// Wire the selector change and add-to-cart click handlers.
pub fn bind(slots: &Slots, selection: &Rc<RefCell<Selection>>) {
    // ── Variant change ──
    {
        let slots2 = slots.clone();
        let sel2 = Rc::clone(selection);
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let id = slots2.selector.value();
            let plan = {
                let mut sel = sel2.borrow_mut();
                if !sel.select(&id) {
                    warn!("product-card: unknown variant id:", id.clone());
                }
                sel.render_plan()
            };
            card::render(&slots2, &plan);
        }) as Box<dyn FnMut(_)>);
        slots
            .selector
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Add to cart ──
    {
        let slots2 = slots.clone();
        let sel2 = Rc::clone(selection);
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            // Gate on availability and on no submission being in flight.
            let Some(request) = sel2.borrow_mut().begin_submit() else {
                return;
            };
            card::clear_notice(&slots2);

            let slots3 = slots2.clone();
            let sel3 = Rc::clone(&sel2);
            wasm_bindgen_futures::spawn_local(async move {
                cart::submit(&slots3, &sel3, request).await;
            });
        }) as Box<dyn FnMut(_)>);
        slots
            .add_button
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}
