use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::options::{SlotConfig, SlotPosition};
use crate::variants::Variant;

/// A product's variant data as loaded for one card, normalized from the
/// storefront's product document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductData {
    pub id: i64,
    pub title: String,
    /// Storefront URL slug, e.g. `"linen-shirt"`.
    pub handle: String,
    /// Option display names in slot order (`option_names[0]` is slot 1).
    pub option_names: Vec<String>,
    pub variants: Vec<Variant>,
}

impl ProductData {
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Slot configuration derived from the option names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the names do not form a valid
    /// configuration (more than three, or two names for one axis).
    pub fn slot_config(&self) -> Result<SlotConfig, ConfigError> {
        SlotConfig::from_option_names(&self.option_names)
    }

    /// Distinct values in `slot`, in the order variants first use them.
    #[must_use]
    pub fn option_values(&self, slot: SlotPosition) -> Vec<&str> {
        let mut values: Vec<&str> = Vec::new();
        for value in self.variants.iter().filter_map(|v| v.option(slot)) {
            if !values.contains(&value) {
                values.push(value);
            }
        }
        values
    }
}
