use swatch_core::{Axis, SlotPosition};

use super::*;
use crate::types::ProductOption;

fn make_storefront_variant(id: i64, color: &str, size: &str) -> StorefrontVariant {
    StorefrontVariant {
        id,
        title: format!("{color} / {size}"),
        option1: Some(color.to_owned()),
        option2: Some(size.to_owned()),
        option3: None,
        available: true,
        inventory_management: Some("shopify".to_owned()),
        inventory_quantity: Some(3),
        inventory_policy: Some("deny".to_owned()),
    }
}

fn make_storefront_product(
    options: Vec<ProductOption>,
    variants: Vec<StorefrontVariant>,
) -> StorefrontProduct {
    StorefrontProduct {
        id: 987_654_321,
        title: "Linen Shirt".to_owned(),
        handle: "linen-shirt".to_owned(),
        options,
        variants,
    }
}

fn names(names: &[&str]) -> Vec<ProductOption> {
    names
        .iter()
        .map(|n| ProductOption::Name((*n).to_owned()))
        .collect()
}

// -----------------------------------------------------------------------
// normalize_product
// -----------------------------------------------------------------------

#[test]
fn normalize_product_keeps_identity_fields() {
    let product = make_storefront_product(
        names(&["Color", "Size"]),
        vec![make_storefront_variant(1, "Red", "S")],
    );
    let normalized = normalize_product(product).unwrap();
    assert_eq!(normalized.id, 987_654_321);
    assert_eq!(normalized.handle, "linen-shirt");
    assert_eq!(normalized.option_names, vec!["Color", "Size"]);
    assert_eq!(normalized.variant_count(), 1);
}

#[test]
fn normalize_product_orders_detailed_options_by_position() {
    let options = vec![
        ProductOption::Detailed {
            name: "Size".to_owned(),
            position: Some(2),
            values: vec!["S".to_owned()],
        },
        ProductOption::Detailed {
            name: "Colour".to_owned(),
            position: Some(1),
            values: vec!["Red".to_owned()],
        },
    ];
    let normalized = normalize_product(make_storefront_product(options, vec![])).unwrap();
    assert_eq!(normalized.option_names, vec!["Colour", "Size"]);

    let config = normalized.slot_config().unwrap();
    assert_eq!(config.position_of(&Axis::Color), SlotPosition::new(1));
    assert_eq!(config.position_of(&Axis::Size), SlotPosition::new(2));
}

#[test]
fn normalize_product_falls_back_to_list_order_without_positions() {
    let options = vec![
        ProductOption::Name("Size".to_owned()),
        ProductOption::Detailed {
            name: "Color".to_owned(),
            position: Some(1),
            values: vec![],
        },
    ];
    let normalized = normalize_product(make_storefront_product(options, vec![])).unwrap();
    assert_eq!(normalized.option_names, vec!["Size", "Color"]);
}

#[test]
fn normalize_product_rejects_more_than_three_options() {
    let product = make_storefront_product(
        names(&["Color", "Size", "Material", "Fit"]),
        vec![make_storefront_variant(1, "Red", "S")],
    );
    let err = normalize_product(product).unwrap_err();
    assert!(
        matches!(err, StorefrontError::Normalization { ref product_id, .. } if product_id == "987654321"),
        "expected Normalization, got: {err:?}"
    );
}

#[test]
fn normalize_product_accepts_empty_variant_list() {
    let normalized =
        normalize_product(make_storefront_product(names(&["Color"]), vec![])).unwrap();
    assert!(normalized.variants.is_empty());
    assert_eq!(normalized.variant_count(), 0);
}

// -----------------------------------------------------------------------
// normalize_variant
// -----------------------------------------------------------------------

#[test]
fn normalize_variant_treats_empty_option_as_absent() {
    let mut raw = make_storefront_variant(1, "Red", "");
    raw.option3 = Some(String::new());
    let variant = normalize_variant(raw);
    assert_eq!(variant.options[0].as_deref(), Some("Red"));
    assert!(variant.options[1].is_none());
    assert!(variant.options[2].is_none());
}

#[test]
fn normalize_variant_tracked_inventory() {
    let variant = normalize_variant(make_storefront_variant(1, "Red", "S"));
    assert_eq!(variant.inventory, InventoryTracking::Tracked { quantity: 3 });
    assert_eq!(variant.tracked_quantity(), Some(3));
}

#[test]
fn normalize_variant_tracked_without_quantity_is_zero() {
    let mut raw = make_storefront_variant(1, "Red", "S");
    raw.inventory_quantity = None;
    let variant = normalize_variant(raw);
    assert_eq!(variant.inventory, InventoryTracking::Tracked { quantity: 0 });
}

#[test]
fn normalize_variant_untracked_when_management_missing_or_blank() {
    for management in [None, Some(String::new()), Some("  ".to_owned())] {
        let mut raw = make_storefront_variant(1, "Red", "S");
        raw.inventory_management = management;
        let variant = normalize_variant(raw);
        assert_eq!(variant.inventory, InventoryTracking::Untracked);
    }
}

#[test]
fn normalize_variant_keeps_available_flag() {
    let mut raw = make_storefront_variant(1, "Red", "S");
    raw.available = false;
    assert!(!normalize_variant(raw).is_saleable());
}
