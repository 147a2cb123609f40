//! Core state for the product purchase widget.
//!
//! DOM-free on purpose: attribute parsing, the selection/availability state
//! machine, and cart submission gating all live here, so the WASM shell only
//! applies precomputed render plans.

pub mod descriptor;
pub mod error;
pub mod selection;

pub use descriptor::{HostAttrs, build_descriptor, parse_variants, product_url};
pub use error::SerializationError;
pub use selection::{Availability, RenderPlan, Selection};
