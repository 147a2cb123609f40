//! Host attribute intake.
//!
//! Turns the raw `data-*` attribute values into a [`ProductDescriptor`],
//! applying the documented defaults. A malformed variants attribute degrades
//! to an empty list; the error is handed back for logging.

use sc_catalog_types::{ProductDescriptor, Variant};

use crate::error::SerializationError;

pub const DEFAULT_TITLE: &str = "No Title";
/// Non-navigating link target used when the handle is absent.
pub const PLACEHOLDER_LINK: &str = "#";

/// Raw attribute values read off the host element. `None` = attribute absent.
#[derive(Debug, Clone, Default)]
pub struct HostAttrs {
    pub title: Option<String>,
    pub image: Option<String>,
    pub handle: Option<String>,
    pub variants: Option<String>,
}

/// Decode the variants attribute as a JSON array of variant records.
pub fn parse_variants(raw: &str) -> Result<Vec<Variant>, SerializationError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if !value.is_array() {
        return Err(SerializationError::NotAnArray(json_type_name(&value)));
    }
    Ok(serde_json::from_value(value)?)
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Build the descriptor, applying defaults for absent attributes.
///
/// An absent variants attribute is an empty list, not an error. A present but
/// malformed one yields the error alongside the empty-list fallback.
pub fn build_descriptor(attrs: HostAttrs) -> (ProductDescriptor, Option<SerializationError>) {
    let (variants, err) = match attrs.variants.as_deref() {
        None => (Vec::new(), None),
        Some(raw) => match parse_variants(raw) {
            Ok(list) => (list, None),
            Err(e) => (Vec::new(), Some(e)),
        },
    };

    let descriptor = ProductDescriptor {
        title: attrs
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        image_src: attrs.image.unwrap_or_default(),
        handle: attrs.handle.filter(|h| !h.is_empty()).unwrap_or_default(),
        variants,
    };
    (descriptor, err)
}

/// Canonical product URL for the title link.
pub fn product_url(descriptor: &ProductDescriptor) -> String {
    if descriptor.handle.is_empty() {
        PLACEHOLDER_LINK.to_string()
    } else {
        format!("/products/{}", descriptor.handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_variants_is_empty_not_error() {
        let (descriptor, err) = build_descriptor(HostAttrs::default());
        assert!(descriptor.variants.is_empty());
        assert!(err.is_none());
    }

    #[test]
    fn malformed_variants_degrades_with_error() {
        let (descriptor, err) = build_descriptor(HostAttrs {
            variants: Some(r#"[{"id":"v1","#.into()),
            ..Default::default()
        });
        assert!(descriptor.variants.is_empty());
        assert!(matches!(err, Some(SerializationError::Json(_))));
    }

    #[test]
    fn object_shaped_variants_is_an_error() {
        let err = parse_variants(r#"{"id":"v1","title":"Small"}"#).unwrap_err();
        assert!(matches!(err, SerializationError::NotAnArray("an object")));
    }

    #[test]
    fn defaults_for_missing_title_and_handle() {
        let (descriptor, _) = build_descriptor(HostAttrs::default());
        assert_eq!(descriptor.title, DEFAULT_TITLE);
        assert_eq!(product_url(&descriptor), PLACEHOLDER_LINK);
    }

    #[test]
    fn handle_builds_canonical_url() {
        let (descriptor, _) = build_descriptor(HostAttrs {
            handle: Some("winter-parka".into()),
            ..Default::default()
        });
        assert_eq!(product_url(&descriptor), "/products/winter-parka");
    }

    #[test]
    fn well_formed_variants_parse_in_order() {
        let list = parse_variants(
            r#"[{"id":"v1","title":"Small","price":"$10","available":true},
                {"id":"v2","title":"Large","price":"$12","available":false}]"#,
        )
        .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].title, "Small");
        assert_eq!(list[1].title, "Large");
    }
}
