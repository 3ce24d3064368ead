//! Cross-module properties of the selection engine: key symmetry, index
//! round-trips, the optimistic default, the eligibility scenarios a product
//! card must render, and catalog replacement under concurrent readers.

use std::sync::RwLock;

use swatch_core::{Axis, InventoryTracking, Selection, SlotConfig, SlotPosition, Variant};
use swatch_engine::{
    find_matching_variant, is_option_available, ButtonLabel, CombinationKey, InventoryDisplay,
    RenderedOption, SelectionController, VariantIndex,
};

fn slot(position: u8) -> SlotPosition {
    SlotPosition::new(position).expect("valid slot")
}

fn color_size_config() -> SlotConfig {
    SlotConfig::new::<_, &str>(Some(slot(1)), Some(slot(2)), []).unwrap()
}

fn make_variant(id: i64, options: [Option<&str>; 3], available: bool, quantity: i64) -> Variant {
    Variant::new(
        id,
        options.map(|o| o.map(str::to_owned)),
        available,
        InventoryTracking::Tracked { quantity },
    )
}

fn apparel() -> Vec<Variant> {
    let mut variants = Vec::new();
    let mut id = 0;
    for color in ["Red", "Blue", "Green"] {
        for size in ["S", "M", "L"] {
            id += 1;
            let available = id % 3 != 0;
            variants.push(make_variant(
                id,
                [Some(color), Some(size), None],
                available,
                if available { id } else { 0 },
            ));
        }
    }
    variants
}

#[test]
fn key_is_symmetric_under_reordering() {
    let config = color_size_config();
    let forward = Selection::new().with("option1", "Red").with("option2", "M");
    let reversed = Selection::new().with("option2", "M").with("option1", "Red");
    assert_eq!(
        VariantIndex::key_for(&forward, &config),
        VariantIndex::key_for(&reversed, &config)
    );

    let variant = make_variant(1, [Some("Red"), Some("M"), None], true, 1);
    assert_eq!(
        CombinationKey::for_variant(&variant),
        VariantIndex::key_for(&forward, &config)
    );
}

#[test]
fn every_variant_round_trips_through_the_index() {
    let config = color_size_config();
    let variants = apparel();
    let index = VariantIndex::build(&variants);
    for variant in &variants {
        let by_slot = Selection::from_variant(variant);
        assert_eq!(index.variant(&by_slot, &config), Some(variant));

        let by_axis = Selection::new()
            .with("color", variant.option(slot(1)).unwrap())
            .with("size", variant.option(slot(2)).unwrap());
        assert_eq!(index.variant(&by_axis, &config), Some(variant));
    }
}

#[test]
fn empty_catalog_is_optimistic_for_any_input() {
    let config = color_size_config();
    for (axis, value) in [
        (Axis::Color, "Red"),
        (Axis::Size, "XL"),
        (Axis::Other("Material".to_owned()), "Silk"),
    ] {
        let selection = Selection::new().with("size", "S");
        assert!(is_option_available(
            &axis,
            value,
            config.position_of(&axis),
            &selection,
            &config,
            &[],
            None,
        ));
    }
    assert!(find_matching_variant(&Selection::new(), &config, &[], None).is_none());
}

#[test]
fn index_and_scan_paths_agree_on_every_option() {
    let config = color_size_config();
    let variants = apparel();
    let index = VariantIndex::build(&variants);
    let selections = [
        Selection::new(),
        Selection::new().with("color", "Red"),
        Selection::new().with("size", "L"),
        Selection::new().with("color", "Green").with("size", "S"),
    ];
    for selection in &selections {
        for (axis, values) in [
            (Axis::Color, ["Red", "Blue", "Green"]),
            (Axis::Size, ["S", "M", "L"]),
        ] {
            for value in values {
                let slot = config.position_of(&axis);
                assert_eq!(
                    is_option_available(&axis, value, slot, selection, &config, &variants, Some(&index)),
                    is_option_available(&axis, value, slot, selection, &config, &variants, None),
                    "{axis}={value} under {selection:?}"
                );
            }
        }
    }
}

#[test]
fn card_scenario_from_two_variants() {
    let variants = vec![
        make_variant(1, [Some("Red"), Some("S"), None], true, 5),
        Variant::new(
            2,
            [Some("Red".to_owned()), Some("M".to_owned()), None],
            false,
            InventoryTracking::Untracked,
        ),
    ];
    let options = vec![
        RenderedOption::new("Color", "Red"),
        RenderedOption::new("Size", "S"),
        RenderedOption::new("Size", "M"),
    ];
    let mut card = SelectionController::new(color_size_config(), options, 5, ());
    card.load_variant_data(variants);

    card.select_option("color", Some("Red"));
    assert_eq!(card.snapshot().button.label, ButtonLabel::ChooseOptions);

    card.select_option("size", Some("S"));
    let view = card.snapshot();
    assert_eq!(view.matched_variant_id, Some(1));
    assert!(view.button.enabled);
    assert_eq!(
        view.inventory,
        InventoryDisplay::Quantity {
            quantity: 5,
            low_stock: true
        }
    );

    card.select_option("size", Some("M"));
    let view = card.snapshot();
    assert_eq!(view.matched_variant_id, Some(2));
    assert!(!view.button.enabled);
    assert_eq!(view.button.label, ButtonLabel::SoldOut);
}

#[test]
fn readers_never_see_a_mixed_catalog_during_reloads() {
    let card = RwLock::new(SelectionController::new(
        color_size_config(),
        Vec::new(),
        5,
        (),
    ));
    let config = color_size_config();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    let Some(catalog) = card.read().unwrap().catalog() else {
                        continue;
                    };
                    assert_eq!(catalog.index().len(), catalog.variants().len());
                    for variant in catalog.variants() {
                        let selection = Selection::from_variant(variant);
                        assert_eq!(catalog.index().variant(&selection, &config), Some(variant));
                    }
                }
            });
        }

        scope.spawn(|| {
            for round in 0..50_i64 {
                let variants: Vec<Variant> = apparel()
                    .into_iter()
                    .take(usize::try_from(round % 9 + 1).unwrap())
                    .map(|mut v| {
                        v.id += round * 100;
                        v
                    })
                    .collect();
                card.write().unwrap().load_variant_data(variants);
            }
        });
    });

    assert!(card.read().unwrap().is_loaded());
}
