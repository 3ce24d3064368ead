//! Availability matrix and variant map keyed by [`CombinationKey`].

use std::collections::HashMap;

use swatch_core::{InventoryTracking, Selection, SlotConfig, Variant};

use crate::key::CombinationKey;

/// Saleability signal recorded for one option combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockSignal {
    /// Tracked quantity. `Quantity(0)` means the combination exists and is
    /// sold out.
    Quantity(u64),
    /// Saleable, but no meaningful count: untracked inventory, or a tracked
    /// count at or below zero on a variant the platform still sells.
    Untracked,
}

impl StockSignal {
    /// The contribution of a single variant.
    ///
    /// A saleable variant never contributes `Quantity(0)`, so
    /// [`StockSignal::is_available`] agrees with [`Variant::is_saleable`].
    #[must_use]
    pub fn for_variant(variant: &Variant) -> Self {
        if !variant.is_saleable() {
            return StockSignal::Quantity(0);
        }
        match variant.inventory {
            InventoryTracking::Tracked { quantity } => u64::try_from(quantity)
                .ok()
                .filter(|&q| q > 0)
                .map_or(StockSignal::Untracked, StockSignal::Quantity),
            InventoryTracking::Untracked => StockSignal::Untracked,
        }
    }

    #[must_use]
    pub fn is_available(self) -> bool {
        self != StockSignal::Quantity(0)
    }

    /// Combines two signals recorded under the same key.
    ///
    /// Tracked quantities sum. The untracked sentinel stands only while no
    /// positive tracked quantity has been recorded for the key.
    #[must_use]
    pub fn merge(self, incoming: Self) -> Self {
        match (self, incoming) {
            (StockSignal::Quantity(a), StockSignal::Quantity(b)) => {
                StockSignal::Quantity(a.saturating_add(b))
            }
            (StockSignal::Untracked, StockSignal::Quantity(0) | StockSignal::Untracked)
            | (StockSignal::Quantity(0), StockSignal::Untracked) => StockSignal::Untracked,
            (StockSignal::Untracked, tracked) | (tracked, StockSignal::Untracked) => tracked,
        }
    }
}

/// Lookup from option combination to stock signal and owning variant.
///
/// Built in one pass by [`VariantIndex::build`] and never mutated afterwards;
/// a new variant list means a new index.
#[derive(Debug, Clone, Default)]
pub struct VariantIndex {
    matrix: HashMap<CombinationKey, StockSignal>,
    variants: HashMap<CombinationKey, Variant>,
    collisions: usize,
}

impl VariantIndex {
    /// Indexes `variants` by the combination of their populated slots.
    ///
    /// When two variants share a key their signals are merged with
    /// [`StockSignal::merge`] and the later variant owns the key.
    #[must_use]
    pub fn build(variants: &[Variant]) -> Self {
        let mut matrix: HashMap<CombinationKey, StockSignal> = HashMap::with_capacity(variants.len());
        let mut owners: HashMap<CombinationKey, Variant> = HashMap::with_capacity(variants.len());
        let mut collisions = 0usize;

        for variant in variants {
            let key = CombinationKey::for_variant(variant);
            let signal = StockSignal::for_variant(variant);

            matrix
                .entry(key.clone())
                .and_modify(|existing| *existing = existing.merge(signal))
                .or_insert(signal);

            if let Some(previous) = owners.insert(key, variant.clone()) {
                collisions += 1;
                tracing::warn!(
                    key = %CombinationKey::for_variant(variant),
                    previous_variant_id = previous.id,
                    variant_id = variant.id,
                    "duplicate option combination; later variant owns the key"
                );
            }
        }

        Self {
            matrix,
            variants: owners,
            collisions,
        }
    }

    /// Key for `selection` under `config`. Slot-form entries win over axis
    /// entries for the same position.
    #[must_use]
    pub fn key_for(selection: &Selection, config: &SlotConfig) -> CombinationKey {
        CombinationKey::from_slot_values(&selection.slot_values(config))
    }

    /// Signal for the exact combination `selection` describes. `None` means
    /// no variant has that combination, which is distinct from
    /// `Some(Quantity(0))`.
    #[must_use]
    pub fn availability(&self, selection: &Selection, config: &SlotConfig) -> Option<StockSignal> {
        self.signal(&Self::key_for(selection, config))
    }

    /// Variant owning the exact combination `selection` describes.
    #[must_use]
    pub fn variant(&self, selection: &Selection, config: &SlotConfig) -> Option<&Variant> {
        self.variants.get(&Self::key_for(selection, config))
    }

    #[must_use]
    pub fn signal(&self, key: &CombinationKey) -> Option<StockSignal> {
        self.matrix.get(key).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&CombinationKey, StockSignal)> {
        self.matrix.iter().map(|(key, signal)| (key, *signal))
    }

    /// Number of variants that landed on an already-indexed combination.
    #[must_use]
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod tests;
