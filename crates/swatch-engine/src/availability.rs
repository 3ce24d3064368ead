//! Decides which option values are still selectable given a partial
//! selection.

use swatch_core::{Axis, Selection, SlotConfig, SlotPosition, SlotValues, Variant};

use crate::index::VariantIndex;
use crate::resolver::matches_constraints;

/// Answers option-availability questions for one product.
///
/// With an index the check is a scan over indexed combinations; without one
/// it scans the variant list directly. Both paths give the same answer: a
/// value is available when some saleable variant carries it in the tested
/// slot and agrees with every other selected axis.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityResolver<'a> {
    variants: &'a [Variant],
    index: Option<&'a VariantIndex>,
    config: &'a SlotConfig,
}

impl<'a> AvailabilityResolver<'a> {
    #[must_use]
    pub fn new(
        variants: &'a [Variant],
        index: Option<&'a VariantIndex>,
        config: &'a SlotConfig,
    ) -> Self {
        Self {
            variants,
            index,
            config,
        }
    }

    /// `true` if choosing `value` for `axis` (stored in `slot`) can still lead
    /// to a saleable variant given the rest of `selection`.
    ///
    /// Returns `true` when no variants are loaded yet, and when `slot` is
    /// `None` (an axis without a slot never constrains).
    #[must_use]
    pub fn is_option_available(
        &self,
        axis: &Axis,
        value: &str,
        slot: Option<SlotPosition>,
        selection: &Selection,
    ) -> bool {
        if self.variants.is_empty() {
            return true;
        }
        let Some(slot) = slot else {
            return true;
        };

        let mut others = selection.clone();
        others.remove_axis(axis);
        let mut constraints = others.slot_values(self.config);
        constraints[slot.index()] = Some(value);

        match self.index {
            Some(index) => scan_index(index, &constraints),
            None => scan_variants(self.variants, &constraints),
        }
    }
}

/// Free-function form of [`AvailabilityResolver::is_option_available`].
#[must_use]
pub fn is_option_available(
    axis: &Axis,
    value: &str,
    slot: Option<SlotPosition>,
    selection: &Selection,
    config: &SlotConfig,
    variants: &[Variant],
    index: Option<&VariantIndex>,
) -> bool {
    AvailabilityResolver::new(variants, index, config).is_option_available(
        axis, value, slot, selection,
    )
}

fn scan_index(index: &VariantIndex, constraints: &SlotValues<'_>) -> bool {
    index
        .entries()
        .any(|(key, signal)| signal.is_available() && key.satisfies(constraints))
}

fn scan_variants(variants: &[Variant], constraints: &SlotValues<'_>) -> bool {
    variants
        .iter()
        .any(|variant| variant.is_saleable() && matches_constraints(variant, constraints))
}

#[cfg(test)]
#[path = "availability_test.rs"]
mod tests;
