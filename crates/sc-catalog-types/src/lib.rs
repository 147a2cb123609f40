use serde::{Deserialize, Deserializer, Serialize};

/// Cart-line key for one purchasable variant.
///
/// Upstream catalogs serialize ids as bare integers or as strings; both forms
/// normalize to the string representation. Serializes back out as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VariantId(pub String);

impl<'de> Deserialize<'de> for VariantId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => VariantId(n.to_string()),
            Raw::Text(s) => VariantId(s),
        })
    }
}

impl std::fmt::Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One purchasable configuration of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub title: String,
    /// Displayable price text. Opaque: no arithmetic is ever performed on it.
    #[serde(deserialize_with = "string_or_number")]
    pub price: String,
    #[serde(default)]
    pub available: bool,
}

/// The host-supplied product attributes, defaults already applied.
#[derive(Debug, Clone, Default)]
pub struct ProductDescriptor {
    pub title: String,
    pub image_src: String,
    /// URL-path-safe handle; empty when the host supplied none.
    pub handle: String,
    /// List order defines selector order; index 0 is the default selection.
    pub variants: Vec<Variant>,
}

/// One line of a cart-add request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: VariantId,
    pub quantity: u32,
}

/// Body of the cart-service add call: `{"items":[{"id":…,"quantity":…}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartAddRequest {
    pub items: Vec<CartLine>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}
