//! Per-card selection state.
//!
//! A [`SelectionController`] owns the shopper's current selection and the
//! product's [`Catalog`] once it has loaded. Every mutation recomputes option
//! availability, the matched variant, the add-to-cart button, and the
//! inventory line, then pushes the results to a [`SelectionObserver`].

use std::fmt;
use std::sync::Arc;

use swatch_core::{normalize_option_name, Axis, Selection, SelectionKey, SlotConfig, Variant};

use crate::availability::AvailabilityResolver;
use crate::catalog::Catalog;
use crate::inventory::InventoryDisplay;
use crate::resolver::find_matching_variant;

/// Render-side callbacks. Every method defaults to a no-op.
pub trait SelectionObserver {
    fn option_state_changed(&mut self, _axis: &Axis, _value: &str, _enabled: bool) {}

    fn button_changed(&mut self, _button: ButtonState) {}

    fn inventory_changed(&mut self, _inventory: InventoryDisplay) {}
}

impl SelectionObserver for () {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLabel {
    AddToCart,
    SoldOut,
    ChooseOptions,
}

impl fmt::Display for ButtonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ButtonLabel::AddToCart => "addToCart",
            ButtonLabel::SoldOut => "soldOut",
            ButtonLabel::ChooseOptions => "chooseOptions",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub label: ButtonLabel,
    pub enabled: bool,
}

impl ButtonState {
    const ADD_TO_CART: Self = Self {
        label: ButtonLabel::AddToCart,
        enabled: true,
    };
    const SOLD_OUT: Self = Self {
        label: ButtonLabel::SoldOut,
        enabled: false,
    };
    const CHOOSE_OPTIONS: Self = Self {
        label: ButtonLabel::ChooseOptions,
        enabled: false,
    };
}

/// An option button the card renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOption {
    pub axis: Axis,
    pub value: String,
}

impl RenderedOption {
    /// `axis` is normalized, so `"Colour"` and `"color"` name the same axis.
    #[must_use]
    pub fn new(axis: &str, value: impl Into<String>) -> Self {
        Self {
            axis: normalize_option_name(axis),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionState {
    pub axis: Axis,
    pub value: String,
    pub enabled: bool,
}

/// Derived state from the most recent recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionView {
    pub options: Vec<OptionState>,
    pub button: ButtonState,
    pub inventory: InventoryDisplay,
    pub matched_variant_id: Option<i64>,
    /// Every configured axis has a selected value.
    pub complete: bool,
}

#[derive(Debug, Clone)]
pub enum LoadState {
    /// No variant data yet; availability is optimistic.
    Uninitialized,
    Loaded(Arc<Catalog>),
}

pub struct SelectionController<O = ()> {
    config: SlotConfig,
    options: Vec<RenderedOption>,
    low_stock_threshold: u32,
    selection: Selection,
    state: LoadState,
    view: SelectionView,
    observer: O,
}

impl<O: SelectionObserver> SelectionController<O> {
    /// Creates an `Uninitialized` controller and renders its initial state.
    pub fn new(
        config: SlotConfig,
        options: Vec<RenderedOption>,
        low_stock_threshold: u32,
        observer: O,
    ) -> Self {
        let mut controller = Self {
            config,
            options,
            low_stock_threshold,
            selection: Selection::new(),
            state: LoadState::Uninitialized,
            view: SelectionView {
                options: Vec::new(),
                button: ButtonState::CHOOSE_OPTIONS,
                inventory: InventoryDisplay::Hidden,
                matched_variant_id: None,
                complete: false,
            },
            observer,
        };
        controller.recompute();
        controller
    }

    /// Sets `key` to `value`, or clears it when `value` is `None` or empty,
    /// then recomputes.
    ///
    /// `key` is either an axis name (`"Colour"`) or a slot key (`"option1"`).
    /// When the configuration links the two, the other form of the same
    /// position is dropped so the latest click wins.
    pub fn select_option(&mut self, key: &str, value: Option<&str>) {
        let key = SelectionKey::parse(key);
        let counterpart = match &key {
            SelectionKey::Axis(axis) => self.config.position_of(axis).map(SelectionKey::Slot),
            SelectionKey::Slot(slot) => self.config.axis_at(*slot).map(SelectionKey::Axis),
        };
        if let Some(counterpart) = counterpart {
            self.selection.remove(&counterpart);
        }

        match value.filter(|v| !v.is_empty()) {
            Some(value) => match key {
                SelectionKey::Axis(axis) => self.selection.set_axis(axis, value),
                SelectionKey::Slot(slot) => self.selection.set_slot(slot, value),
            },
            None => {
                self.selection.remove(&key);
            }
        }
        self.recompute();
    }

    /// Replaces the catalog with one built from `variants` and recomputes.
    ///
    /// The new variants and their index are published together in a single
    /// assignment; selections made while uninitialized are kept.
    pub fn load_variant_data(&mut self, variants: Vec<Variant>) {
        let catalog = Arc::new(Catalog::new(variants));
        tracing::info!(
            variants = catalog.variants().len(),
            combinations = catalog.index().len(),
            collisions = catalog.index().collisions(),
            "variant data loaded"
        );
        self.state = LoadState::Loaded(catalog);
        self.recompute();
    }

    /// Clears every selection.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.recompute();
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, LoadState::Loaded(_))
    }

    /// The current catalog, if loaded. The returned handle stays internally
    /// consistent even if the controller later loads new data.
    #[must_use]
    pub fn catalog(&self) -> Option<Arc<Catalog>> {
        match &self.state {
            LoadState::Loaded(catalog) => Some(Arc::clone(catalog)),
            LoadState::Uninitialized => None,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> &SelectionView {
        &self.view
    }

    /// The variant the current selection resolves to.
    #[must_use]
    pub fn matched_variant(&self) -> Option<&Variant> {
        let LoadState::Loaded(catalog) = &self.state else {
            return None;
        };
        catalog.find_matching_variant(&self.selection, &self.config)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Every configured slot has a value, in either selection form.
    fn is_complete(&self) -> bool {
        let values = self.selection.slot_values(&self.config);
        self.config
            .axes()
            .all(|(_, slot)| values[slot.index()].is_some())
    }

    fn recompute(&mut self) {
        let catalog = self.catalog();
        let (variants, index) = catalog
            .as_deref()
            .map_or((&[] as &[Variant], None), |c| (c.variants(), Some(c.index())));

        let resolver = AvailabilityResolver::new(variants, index, &self.config);
        let options: Vec<OptionState> = self
            .options
            .iter()
            .map(|option| OptionState {
                axis: option.axis.clone(),
                value: option.value.clone(),
                enabled: resolver.is_option_available(
                    &option.axis,
                    &option.value,
                    self.config.position_of(&option.axis),
                    &self.selection,
                ),
            })
            .collect();

        let complete = self.is_complete();
        let matched = find_matching_variant(&self.selection, &self.config, variants, index);
        let button = button_state(catalog.as_deref(), complete, matched);

        let inventory = match matched {
            Some(variant) if complete => InventoryDisplay::resolve(
                index.and_then(|index| index.availability(&self.selection, &self.config)),
                Some(variant),
                self.low_stock_threshold,
            ),
            _ => InventoryDisplay::Hidden,
        };

        let view = SelectionView {
            options,
            button,
            inventory,
            matched_variant_id: matched.map(|variant| variant.id),
            complete,
        };

        tracing::debug!(
            selected = self.selection.len(),
            complete,
            matched_variant_id = ?view.matched_variant_id,
            button = ?view.button.label,
            "selection recomputed"
        );

        for option in &view.options {
            self.observer
                .option_state_changed(&option.axis, &option.value, option.enabled);
        }
        self.observer.button_changed(view.button);
        self.observer.inventory_changed(view.inventory);
        self.view = view;
    }
}

/// Add-to-cart is enabled only for a complete selection that resolves to a
/// saleable variant.
///
/// A product with no saleable variant shows "sold out" regardless of the
/// selection. Otherwise an incomplete selection asks the shopper to choose,
/// and a complete one that misses or hits an unsaleable variant is sold out.
/// Before data loads the button asks for a choice rather than guessing.
fn button_state(catalog: Option<&Catalog>, complete: bool, matched: Option<&Variant>) -> ButtonState {
    let Some(catalog) = catalog else {
        return ButtonState::CHOOSE_OPTIONS;
    };
    if catalog.all_unsaleable() {
        return ButtonState::SOLD_OUT;
    }
    if !complete {
        return ButtonState::CHOOSE_OPTIONS;
    }
    match matched {
        Some(variant) if variant.is_saleable() => ButtonState::ADD_TO_CART,
        _ => ButtonState::SOLD_OUT,
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
