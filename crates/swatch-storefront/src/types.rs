//! Storefront response types for the per-product JSON document.
//!
//! ## Observed shapes
//!
//! ### Envelope
//! `GET /products/<handle>.js` returns the product object directly;
//! `GET /products/<handle>.json` wraps it as `{"product": {...}}`.
//! [`ProductDocument`] accepts either.
//!
//! ### `options`
//! Older themes and the `.js` endpoint list option names as plain strings
//! (`["Color", "Size"]`). Newer responses use objects
//! (`{"name": "Color", "position": 1, "values": ["Red", "Blue"]}`).
//!
//! ### `option1`..`option3` on variants
//! `null` for unused slots. Some stores send `""` instead; normalization
//! treats both as absent.
//!
//! ### `available`
//! Boolean, already reflecting the store's inventory policy (a variant with
//! `inventory_policy: "continue"` stays available at zero stock). Defaults to
//! `true` when absent (optimistic).
//!
//! ### `inventory_management`
//! `"shopify"` (or another fulfillment service name) when stock is tracked,
//! `null` or `""` when it is not.
//!
//! ### `inventory_quantity`
//! Integer, negative when the store has oversold. Absent on stores that hide
//! stock counts.

use serde::Deserialize;

/// Either shape of the per-product document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductDocument {
    Envelope { product: StorefrontProduct },
    Bare(StorefrontProduct),
}

impl ProductDocument {
    #[must_use]
    pub fn into_product(self) -> StorefrontProduct {
        match self {
            ProductDocument::Envelope { product } | ProductDocument::Bare(product) => product,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StorefrontProduct {
    pub id: i64,

    pub title: String,

    /// URL slug for the product page (e.g., `"linen-shirt"`).
    pub handle: String,

    /// Option names in slot order. Empty for single-variant products on some
    /// stores.
    #[serde(default)]
    pub options: Vec<ProductOption>,

    #[serde(default)]
    pub variants: Vec<StorefrontVariant>,
}

/// A product option in either the plain-name or the detailed shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductOption {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        position: Option<u8>,
        #[serde(default)]
        values: Vec<String>,
    },
}

impl ProductOption {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            ProductOption::Name(name) | ProductOption::Detailed { name, .. } => name,
        }
    }

    #[must_use]
    pub fn position(&self) -> Option<u8> {
        match self {
            ProductOption::Name(_) => None,
            ProductOption::Detailed { position, .. } => *position,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StorefrontVariant {
    pub id: i64,

    /// Display title, e.g. `"Red / M"` or `"Default Title"`.
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub option1: Option<String>,

    #[serde(default)]
    pub option2: Option<String>,

    #[serde(default)]
    pub option3: Option<String>,

    /// Defaults to `true` when absent (optimistic assumption).
    #[serde(default = "default_available")]
    pub available: bool,

    #[serde(default)]
    pub inventory_management: Option<String>,

    #[serde(default)]
    pub inventory_quantity: Option<i64>,

    /// `"deny"` or `"continue"`. Informational only: `available` already
    /// accounts for it.
    #[serde(default)]
    pub inventory_policy: Option<String>,
}

/// Default value for `StorefrontVariant::available` when the field is absent.
fn default_available() -> bool {
    true
}
