use swatch_core::{Axis, Selection, SlotConfig, Variant};

use crate::availability::AvailabilityResolver;
use crate::index::VariantIndex;
use crate::resolver::find_matching_variant;

/// A product's variant list together with the index built from it.
///
/// The two are constructed together and never mutated, so a holder of a
/// `Catalog` always sees an index that belongs to its variant list. Owners
/// replace the whole value (usually behind an `Arc`) when new data arrives.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    variants: Vec<Variant>,
    index: VariantIndex,
}

impl Catalog {
    #[must_use]
    pub fn new(variants: Vec<Variant>) -> Self {
        let index = VariantIndex::build(&variants);
        Self { variants, index }
    }

    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    #[must_use]
    pub fn index(&self) -> &VariantIndex {
        &self.index
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// `true` when the product has variants and none of them is saleable.
    #[must_use]
    pub fn all_unsaleable(&self) -> bool {
        !self.variants.is_empty() && !self.variants.iter().any(Variant::is_saleable)
    }

    #[must_use]
    pub fn availability<'a>(&'a self, config: &'a SlotConfig) -> AvailabilityResolver<'a> {
        AvailabilityResolver::new(&self.variants, Some(&self.index), config)
    }

    #[must_use]
    pub fn is_option_available(
        &self,
        config: &SlotConfig,
        axis: &Axis,
        value: &str,
        selection: &Selection,
    ) -> bool {
        self.availability(config)
            .is_option_available(axis, value, config.position_of(axis), selection)
    }

    #[must_use]
    pub fn find_matching_variant(
        &self,
        selection: &Selection,
        config: &SlotConfig,
    ) -> Option<&Variant> {
        find_matching_variant(selection, config, &self.variants, Some(&self.index))
    }
}
