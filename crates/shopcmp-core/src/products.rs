//! Catalog types returned by the backend's `/search` and `/product/{id}`
//! endpoints, plus VND price formatting.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Currency unit appended to every displayed price.
pub const CURRENCY_UNIT: &str = "VND";

/// Opaque product identifier.
///
/// The backend sends numeric ids, but they are only ever compared and echoed
/// back in URLs, so they are held as strings. Both JSON numbers and strings
/// are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.trim().to_owned())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Signed(i64),
            Unsigned(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Signed(n) => Self(n.to_string()),
            Raw::Unsigned(n) => Self(n.to_string()),
            Raw::Text(s) => Self::from(s),
        })
    }
}

/// A catalog entry as returned by `/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    /// Price in VND.
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub price: i64,
    #[serde(default)]
    pub original_price: Option<i64>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub url_path: Option<String>,
    #[serde(default)]
    pub review_count: Option<u64>,
    /// Absent on search results; filled in from the product detail endpoint.
    #[serde(default)]
    pub specifications: Option<Vec<SpecificationGroup>>,
}

impl Product {
    /// Price formatted with grouped thousands and the currency unit, e.g. `"1,250,000 VND"`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("{} {CURRENCY_UNIT}", format_price(self.price))
    }

    /// Brand name, or `"Unknown"` when the backend did not send one.
    #[must_use]
    pub fn brand_or_unknown(&self) -> &str {
        match self.brand_name.as_deref() {
            Some(brand) if !brand.trim().is_empty() => brand,
            _ => "Unknown",
        }
    }
}

/// Full product record from `/product/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub price: i64,
    /// HTML fragment, passed through unsanitized.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub specifications: Vec<SpecificationGroup>,
}

impl ProductDetail {
    /// Builds a catalog [`Product`] for `id` from this detail record, for
    /// callers that start from an id rather than a search result.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            original_price: None,
            brand_name: None,
            thumbnail_url: None,
            url_path: None,
            review_count: None,
            specifications: Some(self.specifications),
        }
    }
}

/// A named cluster of attributes, e.g. "Display" or "Battery".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificationGroup {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub attributes: Vec<Attribute>,
}

impl SpecificationGroup {
    /// Iterates every attribute across `groups`, in order.
    pub fn flatten(groups: &[SpecificationGroup]) -> impl Iterator<Item = &Attribute> {
        groups.iter().flat_map(|group| group.attributes.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub value: String,
}

/// Markdown text returned by `/compare`. Displayed as-is, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub comparison: String,
}

impl ComparisonResult {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.comparison
    }
}

/// Formats an amount with comma-grouped thousands: `1234567` becomes `"1,234,567"`.
#[must_use]
pub fn format_price(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
