use serde::{Deserialize, Serialize};

use crate::options::SlotPosition;

/// How the platform tracks stock for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum InventoryTracking {
    /// Stock is counted. The quantity may be negative when the store allows
    /// overselling.
    Tracked { quantity: i64 },
    Untracked,
}

/// A purchasable variant as the storefront reports it. Read-only input to
/// the selection engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    /// Values for slots 1..=3. Empty strings are treated as absent.
    pub options: [Option<String>; 3],
    /// The platform's saleable flag. Already folds in the inventory policy
    /// (backorder/oversell), so it is never recomputed here.
    pub available: bool,
    pub inventory: InventoryTracking,
}

impl Variant {
    #[must_use]
    pub fn new(
        id: i64,
        options: [Option<String>; 3],
        available: bool,
        inventory: InventoryTracking,
    ) -> Self {
        Self {
            id,
            title: String::new(),
            options,
            available,
            inventory,
        }
    }

    /// The populated value at `slot`, if any.
    #[must_use]
    pub fn option(&self, slot: SlotPosition) -> Option<&str> {
        self.options[slot.index()]
            .as_deref()
            .filter(|value| !value.is_empty())
    }

    /// `(slot, value)` for every populated slot, in slot order.
    pub fn option_pairs(&self) -> impl Iterator<Item = (SlotPosition, &str)> {
        SlotPosition::ALL
            .into_iter()
            .filter_map(move |slot| self.option(slot).map(|value| (slot, value)))
    }

    #[must_use]
    pub fn is_saleable(&self) -> bool {
        self.available
    }

    #[must_use]
    pub fn tracked_quantity(&self) -> Option<i64> {
        match self.inventory {
            InventoryTracking::Tracked { quantity } => Some(quantity),
            InventoryTracking::Untracked => None,
        }
    }
}
