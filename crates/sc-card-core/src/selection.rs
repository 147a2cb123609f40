//! Variant selection and availability state.
//!
//! One [`Selection`] per mounted card. Every display decision the widget makes
//! comes out of [`Selection::render_plan`], so price text, button state, and
//! the sold-out tag cannot drift apart.

use sc_catalog_types::{CartAddRequest, CartLine, Variant, VariantId};

pub const LABEL_ADD_TO_CART: &str = "Add to Cart";
pub const LABEL_OUT_OF_STOCK: &str = "Out of Stock";

/// Purchase-readiness of the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// The variant list is empty; nothing can ever be selected.
    NoVariant,
    Available,
    Unavailable,
}

/// What the widget should display for the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// `None` when no variant is selected; rendered as empty text.
    pub price_text: Option<String>,
    pub button_label: &'static str,
    pub button_enabled: bool,
    pub sold_out_visible: bool,
    /// Decided once by the variant list; the selector is hidden, not removed.
    pub selector_visible: bool,
}

/// Selection state for one product card.
///
/// Owns the variant list, tracks the chosen entry, and gates cart submission
/// on availability and on there being no submission already in flight.
#[derive(Debug, Clone)]
pub struct Selection {
    variants: Vec<Variant>,
    selected: Option<usize>,
    in_flight: bool,
}

impl Selection {
    /// The first variant, when present, is the default choice.
    pub fn new(variants: Vec<Variant>) -> Self {
        let selected = if variants.is_empty() { None } else { Some(0) };
        Self {
            variants,
            selected,
            in_flight: false,
        }
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn selected_variant(&self) -> Option<&Variant> {
        self.selected.and_then(|i| self.variants.get(i))
    }

    pub fn selected_id(&self) -> Option<&VariantId> {
        self.selected_variant().map(|v| &v.id)
    }

    pub fn availability(&self) -> Availability {
        match self.selected_variant() {
            None => Availability::NoVariant,
            Some(v) if v.available => Availability::Available,
            Some(_) => Availability::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        self.availability() == Availability::Available
    }

    /// Switch to the variant with the given id.
    ///
    /// An id not present in the list leaves the selection unchanged and
    /// returns `false`.
    pub fn select(&mut self, id: &str) -> bool {
        match self.variants.iter().position(|v| v.id.0 == id) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    /// Display state for the current selection.
    pub fn render_plan(&self) -> RenderPlan {
        let selector_visible = !self.variants.is_empty();
        match self.selected_variant() {
            Some(v) if v.available => RenderPlan {
                price_text: Some(v.price.clone()),
                button_label: LABEL_ADD_TO_CART,
                button_enabled: true,
                sold_out_visible: false,
                selector_visible,
            },
            Some(v) => RenderPlan {
                price_text: Some(v.price.clone()),
                button_label: LABEL_OUT_OF_STOCK,
                button_enabled: false,
                sold_out_visible: true,
                selector_visible,
            },
            None => RenderPlan {
                price_text: None,
                button_label: LABEL_OUT_OF_STOCK,
                button_enabled: false,
                sold_out_visible: true,
                selector_visible,
            },
        }
    }

    /// Gate a cart submission on the current selection.
    ///
    /// Returns the request to send, or `None` when nothing is selected, the
    /// selected variant is unavailable, or a submission is already in flight.
    /// `None` is a silent no-op, not an error.
    pub fn begin_submit(&mut self) -> Option<CartAddRequest> {
        if self.in_flight || !self.is_available() {
            return None;
        }
        let id = self.selected_id()?.clone();
        self.in_flight = true;
        Some(CartAddRequest {
            items: vec![CartLine { id, quantity: 1 }],
        })
    }

    /// Clear the in-flight flag once a submission settles, success or failure.
    pub fn finish_submit(&mut self) {
        self.in_flight = false;
    }

    pub fn submit_in_flight(&self) -> bool {
        self.in_flight
    }
}
