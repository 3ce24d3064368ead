//! Variant availability and selection engine.
//!
//! Indexes a product's variants by option combination, answers "is this
//! option value selectable given what is already picked", resolves a
//! selection to a concrete variant, and drives the per-card selection
//! state that the storefront UI renders from.

pub mod availability;
pub mod catalog;
pub mod controller;
pub mod index;
pub mod inventory;
pub mod key;
pub mod resolver;

pub use availability::{is_option_available, AvailabilityResolver};
pub use catalog::Catalog;
pub use controller::{
    ButtonLabel, ButtonState, LoadState, OptionState, RenderedOption, SelectionController,
    SelectionObserver, SelectionView,
};
pub use index::{StockSignal, VariantIndex};
pub use inventory::InventoryDisplay;
pub use key::CombinationKey;
pub use resolver::find_matching_variant;
