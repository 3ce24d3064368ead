use swatch_core::{Selection, SlotConfig, SlotPosition, SlotValues, Variant};

use crate::index::VariantIndex;

/// Finds the variant a selection points at.
///
/// Tries the exact-combination lookup in `index` first. On a miss, or with no
/// index, scans `variants` in list order and returns the first one whose
/// value matches every constrained slot; unselected axes are unconstrained,
/// so a partial selection resolves to the first listed candidate.
#[must_use]
pub fn find_matching_variant<'a>(
    selection: &Selection,
    config: &SlotConfig,
    variants: &'a [Variant],
    index: Option<&'a VariantIndex>,
) -> Option<&'a Variant> {
    if let Some(found) = index.and_then(|index| index.variant(selection, config)) {
        return Some(found);
    }

    let constraints = selection.slot_values(config);
    variants
        .iter()
        .find(|variant| matches_constraints(variant, &constraints))
}

/// `true` if `variant` carries the constrained value in every constrained slot.
pub(crate) fn matches_constraints(variant: &Variant, constraints: &SlotValues<'_>) -> bool {
    SlotPosition::ALL.into_iter().all(|slot| {
        constraints[slot.index()].is_none_or(|wanted| variant.option(slot) == Some(wanted))
    })
}
