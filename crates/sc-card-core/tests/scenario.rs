//! End-to-end walk through the two-size product: select, render, submit.

use sc_card_core::selection::{LABEL_ADD_TO_CART, LABEL_OUT_OF_STOCK};
use sc_card_core::{HostAttrs, Selection, build_descriptor};

const TWO_SIZES: &str = r#"[
    {"id":"v1","title":"Small","price":"$10","available":true},
    {"id":"v2","title":"Large","price":"$12","available":false}
]"#;

fn mounted_selection(variants: &str) -> Selection {
    let (descriptor, err) = build_descriptor(HostAttrs {
        title: Some("Winter Parka".into()),
        handle: Some("winter-parka".into()),
        variants: Some(variants.into()),
        ..Default::default()
    });
    assert!(err.is_none(), "well-formed attribute must not error");
    Selection::new(descriptor.variants)
}

#[test]
fn small_large_walkthrough() {
    let mut selection = mounted_selection(TWO_SIZES);

    // Initial render comes from variant 0.
    let plan = selection.render_plan();
    assert_eq!(plan.price_text.as_deref(), Some("$10"));
    assert_eq!(plan.button_label, LABEL_ADD_TO_CART);
    assert!(plan.button_enabled);
    assert!(!plan.sold_out_visible);

    // Selecting "Large" flips every availability-driven output at once.
    assert!(selection.select("v2"));
    let plan = selection.render_plan();
    assert_eq!(plan.price_text.as_deref(), Some("$12"));
    assert_eq!(plan.button_label, LABEL_OUT_OF_STOCK);
    assert!(!plan.button_enabled);
    assert!(plan.sold_out_visible);

    // Submission while on "Large" never produces a request.
    assert!(selection.begin_submit().is_none());

    // Back to "Small": enabled again, and the request carries v1.
    assert!(selection.select("v1"));
    let plan = selection.render_plan();
    assert_eq!(plan.price_text.as_deref(), Some("$10"));
    assert!(plan.button_enabled);

    let request = selection.begin_submit().expect("v1 is available");
    assert_eq!(
        serde_json::to_string(&request).unwrap(),
        r#"{"items":[{"id":"v1","quantity":1}]}"#
    );

    // A second click while the first request is in flight stays a no-op.
    assert!(selection.begin_submit().is_none());
    selection.finish_submit();
    assert!(selection.begin_submit().is_some());
}

#[test]
fn truncated_attribute_degrades_to_disabled_card() {
    let (descriptor, err) = build_descriptor(HostAttrs {
        variants: Some(r#"[{"id":"v1","title":"Sm"#.into()),
        ..Default::default()
    });
    assert!(err.is_some());

    let selection = Selection::new(descriptor.variants);
    let plan = selection.render_plan();
    assert!(!plan.selector_visible);
    assert!(!plan.button_enabled);
    assert_eq!(plan.button_label, LABEL_OUT_OF_STOCK);
}
