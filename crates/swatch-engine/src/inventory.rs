use std::fmt;

use swatch_core::Variant;

use crate::index::StockSignal;

/// What the inventory line under the add-to-cart button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryDisplay {
    Hidden,
    Quantity { quantity: u64, low_stock: bool },
}

impl InventoryDisplay {
    /// Derives the display from the index signal for the selected
    /// combination, falling back to the matched variant's own fields when
    /// the index has no entry.
    ///
    /// Only a positive tracked count is shown; sold-out and untracked stock
    /// hide the line. Counts at or below `low_stock_threshold` are flagged.
    #[must_use]
    pub fn resolve(
        signal: Option<StockSignal>,
        variant: Option<&Variant>,
        low_stock_threshold: u32,
    ) -> Self {
        let quantity = match signal {
            Some(StockSignal::Quantity(quantity)) => Some(quantity),
            Some(StockSignal::Untracked) => None,
            None => variant
                .filter(|v| v.is_saleable())
                .and_then(Variant::tracked_quantity)
                .and_then(|q| u64::try_from(q).ok()),
        };

        match quantity {
            Some(quantity) if quantity > 0 => InventoryDisplay::Quantity {
                quantity,
                low_stock: quantity <= u64::from(low_stock_threshold),
            },
            _ => InventoryDisplay::Hidden,
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, InventoryDisplay::Quantity { .. })
    }
}

impl fmt::Display for InventoryDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryDisplay::Hidden => Ok(()),
            InventoryDisplay::Quantity { quantity, .. } => write!(f, "{quantity} in stock"),
        }
    }
}
