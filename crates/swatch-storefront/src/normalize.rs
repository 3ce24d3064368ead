//! Normalization from raw storefront types to [`swatch_core::ProductData`].

use swatch_core::{InventoryTracking, ProductData, Variant};

use crate::error::StorefrontError;
use crate::types::{StorefrontProduct, StorefrontVariant};

/// Maximum number of option slots a storefront variant exposes.
const MAX_OPTIONS: usize = 3;

/// Normalizes a raw [`StorefrontProduct`] into [`ProductData`].
///
/// Option names are ordered by their declared position when every option
/// carries one, otherwise by list order. A product with no variants is
/// returned as-is; downstream code treats it as "nothing to sell".
///
/// # Errors
///
/// Returns [`StorefrontError::Normalization`] if the product declares more
/// than three options.
pub fn normalize_product(product: StorefrontProduct) -> Result<ProductData, StorefrontError> {
    if product.options.len() > MAX_OPTIONS {
        return Err(StorefrontError::Normalization {
            product_id: product.id.to_string(),
            reason: format!(
                "product declares {} options; at most {MAX_OPTIONS} are supported",
                product.options.len()
            ),
        });
    }

    let mut options: Vec<(u8, String)> = Vec::with_capacity(product.options.len());
    let all_positioned = product.options.iter().all(|o| o.position().is_some());
    for (idx, option) in product.options.iter().enumerate() {
        let fallback = u8::try_from(idx + 1).unwrap_or(u8::MAX);
        let position = if all_positioned {
            option.position().unwrap_or(fallback)
        } else {
            fallback
        };
        options.push((position, option.name().to_owned()));
    }
    options.sort_by_key(|(position, _)| *position);
    let option_names = options.into_iter().map(|(_, name)| name).collect();

    let variants: Vec<Variant> = product
        .variants
        .into_iter()
        .map(normalize_variant)
        .collect();

    tracing::debug!(
        product_id = product.id,
        handle = %product.handle,
        variants = variants.len(),
        "normalized product"
    );

    Ok(ProductData {
        id: product.id,
        title: product.title,
        handle: product.handle,
        option_names,
        variants,
    })
}

fn normalize_variant(variant: StorefrontVariant) -> Variant {
    // Treat `""` the same as `null` for every slot.
    let slot = |value: Option<String>| value.filter(|v| !v.is_empty());

    let tracked = variant
        .inventory_management
        .as_deref()
        .is_some_and(|m| !m.trim().is_empty());
    let inventory = if tracked {
        InventoryTracking::Tracked {
            quantity: variant.inventory_quantity.unwrap_or(0),
        }
    } else {
        InventoryTracking::Untracked
    };

    Variant {
        id: variant.id,
        title: variant.title,
        options: [
            slot(variant.option1),
            slot(variant.option2),
            slot(variant.option3),
        ],
        available: variant.available,
        inventory,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
