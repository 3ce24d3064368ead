use std::fmt;

use swatch_core::{SlotPosition, SlotValues, Variant};

/// Order-independent identity of a set of `(slot, value)` pairs.
///
/// Pairs are held sorted by slot with at most one value per slot, so two
/// inputs that populate the same slots with the same values always compare
/// and hash equal. The display form is the canonical string
/// `option1:Red|option2:M`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CombinationKey(Vec<(SlotPosition, String)>);

impl CombinationKey {
    /// Key over every populated slot of `variant`.
    #[must_use]
    pub fn for_variant(variant: &Variant) -> Self {
        Self(
            variant
                .option_pairs()
                .map(|(slot, value)| (slot, value.to_owned()))
                .collect(),
        )
    }

    /// Key over the populated entries of a resolved selection. Empty values
    /// are skipped.
    #[must_use]
    pub fn from_slot_values(values: &SlotValues<'_>) -> Self {
        Self(
            SlotPosition::ALL
                .into_iter()
                .filter_map(|slot| {
                    values[slot.index()]
                        .filter(|value| !value.is_empty())
                        .map(|value| (slot, value.to_owned()))
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn value_at(&self, slot: SlotPosition) -> Option<&str> {
        self.0
            .iter()
            .find(|(position, _)| *position == slot)
            .map(|(_, value)| value.as_str())
    }

    /// `true` if every constrained slot in `constraints` carries the same
    /// value in this key. Unconstrained slots match anything.
    #[must_use]
    pub fn satisfies(&self, constraints: &SlotValues<'_>) -> bool {
        SlotPosition::ALL.into_iter().all(|slot| {
            constraints[slot.index()].is_none_or(|wanted| self.value_at(slot) == Some(wanted))
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CombinationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (slot, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}:{value}", slot.slot_key())?;
        }
        Ok(())
    }
}
