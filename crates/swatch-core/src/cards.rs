use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::options::{RawSlotConfig, SlotConfig};
use crate::ConfigError;

/// Slot configuration for one product card, keyed by product handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    pub handle: String,
    #[serde(flatten)]
    pub slots: RawSlotConfig,
}

impl CardConfig {
    /// Validated slot configuration for this card.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a position is out of range or two axes share
    /// a slot.
    pub fn slot_config(&self) -> Result<SlotConfig, ConfigError> {
        SlotConfig::from_raw(&self.slots)
    }
}

#[derive(Debug, Deserialize)]
pub struct CardsFile {
    pub cards: Vec<CardConfig>,
}

impl CardsFile {
    #[must_use]
    pub fn find(&self, handle: &str) -> Option<&CardConfig> {
        self.cards.iter().find(|card| card.handle == handle)
    }
}

/// Load and validate card configurations from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_card_configs(path: &Path) -> Result<CardsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CardsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let cards_file: CardsFile = serde_yaml::from_str(&content)?;

    validate_cards(&cards_file)?;

    Ok(cards_file)
}

fn validate_cards(cards_file: &CardsFile) -> Result<(), ConfigError> {
    let mut seen_handles = HashSet::new();

    for card in &cards_file.cards {
        if card.handle.trim().is_empty() {
            return Err(ConfigError::Validation(
                "card handle must be non-empty".to_string(),
            ));
        }

        if !seen_handles.insert(card.handle.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate card handle: '{}'",
                card.handle
            )));
        }

        card.slot_config()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::options::{Axis, SlotPosition};

    fn make_card(handle: &str, color: Option<u8>, size: Option<u8>) -> CardConfig {
        CardConfig {
            handle: handle.to_string(),
            slots: RawSlotConfig {
                color_position: color,
                size_position: size,
                other_options: BTreeMap::new(),
            },
        }
    }

    #[test]
    fn parse_cards_yaml() {
        let yaml = r"
cards:
  - handle: linen-shirt
    color_position: 1
    size_position: 2
    other_options:
      Fabric: 3
  - handle: canvas-tote
    color_position: 1
";
        let cards_file: CardsFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cards_file.cards.len(), 2);
        validate_cards(&cards_file).unwrap();

        let shirt = cards_file.find("linen-shirt").unwrap().slot_config().unwrap();
        assert_eq!(
            shirt.position_of(&Axis::Other("Fabric".to_string())),
            SlotPosition::new(3)
        );
        let tote = cards_file.find("canvas-tote").unwrap().slot_config().unwrap();
        assert!(tote.position_of(&Axis::Size).is_none());
    }

    #[test]
    fn validate_rejects_empty_handle() {
        let cards_file = CardsFile {
            cards: vec![make_card("  ", Some(1), None)],
        };
        let err = validate_cards(&cards_file).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_duplicate_handle() {
        let cards_file = CardsFile {
            cards: vec![
                make_card("linen-shirt", Some(1), None),
                make_card("linen-shirt", Some(2), None),
            ],
        };
        let err = validate_cards(&cards_file).unwrap_err();
        assert!(err.to_string().contains("duplicate card handle"));
    }

    #[test]
    fn validate_rejects_out_of_range_slot() {
        let cards_file = CardsFile {
            cards: vec![make_card("linen-shirt", Some(4), None)],
        };
        let err = validate_cards(&cards_file).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSlot { position: 4, .. }));
    }

    #[test]
    fn validate_rejects_conflicting_slots() {
        let cards_file = CardsFile {
            cards: vec![make_card("linen-shirt", Some(2), Some(2))],
        };
        let err = validate_cards(&cards_file).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn load_card_configs_reports_missing_file() {
        let err = load_card_configs(Path::new("/nonexistent/cards.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::CardsFileIo { .. }));
    }
}
