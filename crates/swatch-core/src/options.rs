//! Option axes, slot positions, and per-card slot configuration.
//!
//! A storefront variant exposes its option values in three fixed slots
//! (`option1`..`option3`). Which slot carries color, size, or any other axis
//! is product-specific, so every card carries a [`SlotConfig`] mapping axes to
//! slots. Option display names are folded into canonical axes by
//! [`normalize_option_name`] before they key that mapping.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One of the three fixed option positions a variant record exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SlotPosition(u8);

impl SlotPosition {
    pub const ALL: [SlotPosition; 3] = [SlotPosition(1), SlotPosition(2), SlotPosition(3)];

    /// Returns `None` unless `position` is 1, 2, or 3.
    #[must_use]
    pub fn new(position: u8) -> Option<Self> {
        (1..=3).contains(&position).then_some(Self(position))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index into a three-element slot array.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Parses a slot-form key such as `"option2"`.
    #[must_use]
    pub fn from_slot_key(key: &str) -> Option<Self> {
        key.strip_prefix("option")?
            .parse::<u8>()
            .ok()
            .and_then(Self::new)
    }

    /// The slot-form key for this position, e.g. `"option2"`.
    #[must_use]
    pub fn slot_key(self) -> String {
        format!("option{}", self.0)
    }
}

impl TryFrom<u8> for SlotPosition {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ConfigError::SlotOutOfRange(value))
    }
}

impl From<SlotPosition> for u8 {
    fn from(slot: SlotPosition) -> Self {
        slot.0
    }
}

impl fmt::Display for SlotPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A canonical option dimension.
///
/// `Other` keeps the original, case-sensitive display name because those
/// names also key the `other_options` configuration mapping.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Axis {
    Color,
    Size,
    Other(String),
}

impl Axis {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Axis::Color => "color",
            Axis::Size => "size",
            Axis::Other(name) => name,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Axis {
    fn from(raw: String) -> Self {
        normalize_option_name(&raw)
    }
}

impl From<Axis> for String {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Other(name) => name,
            other => other.name().to_owned(),
        }
    }
}

/// Canonicalizes an option display name into an [`Axis`].
///
/// Matching is case-insensitive: `Color`, `Colour`, `Trim Color`, and
/// `Trim Colour` become [`Axis::Color`]; `Size` becomes [`Axis::Size`].
/// Anything else passes through unchanged as [`Axis::Other`].
#[must_use]
pub fn normalize_option_name(raw: &str) -> Axis {
    match raw.trim().to_lowercase().as_str() {
        "color" | "colour" | "trim color" | "trim colour" => Axis::Color,
        "size" => Axis::Size,
        _ => Axis::Other(raw.to_owned()),
    }
}

/// The loose configuration shape a theme section hands to a card.
///
/// Every field is optional. Convert with [`SlotConfig::from_raw`] before use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSlotConfig {
    #[serde(default)]
    pub color_position: Option<u8>,
    #[serde(default)]
    pub size_position: Option<u8>,
    #[serde(default)]
    pub other_options: BTreeMap<String, u8>,
}

/// Validated mapping from axes to slot positions for one product card.
///
/// Invariants: every configured axis has exactly one slot, and no slot is
/// claimed by more than one axis. Axes that were given no slot are simply
/// absent and never constrain a lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotConfig {
    color: Option<SlotPosition>,
    size: Option<SlotPosition>,
    other: BTreeMap<String, SlotPosition>,
}

impl SlotConfig {
    /// Builds a configuration from explicit slot assignments.
    ///
    /// Names in `other` are run through [`normalize_option_name`], so an
    /// entry such as `"Colour" => 1` configures the color axis.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if two axes claim the same slot or
    /// one axis is assigned twice.
    pub fn new<I, S>(
        color: Option<SlotPosition>,
        size: Option<SlotPosition>,
        other: I,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, SlotPosition)>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        if let Some(slot) = color {
            config.assign(Axis::Color, slot)?;
        }
        if let Some(slot) = size {
            config.assign(Axis::Size, slot)?;
        }
        for (name, slot) in other {
            config.assign(normalize_option_name(name.as_ref()), slot)?;
        }
        Ok(config)
    }

    /// Converts the loose theme configuration into a validated one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSlot`] for a position outside 1..=3 and
    /// [`ConfigError::Validation`] for conflicting assignments.
    pub fn from_raw(raw: &RawSlotConfig) -> Result<Self, ConfigError> {
        let checked = |axis: &str, position: u8| {
            SlotPosition::new(position).ok_or_else(|| ConfigError::InvalidSlot {
                axis: axis.to_owned(),
                position,
            })
        };

        let color = raw
            .color_position
            .map(|p| checked("color", p))
            .transpose()?;
        let size = raw.size_position.map(|p| checked("size", p)).transpose()?;
        let other = raw
            .other_options
            .iter()
            .map(|(name, &p)| checked(name, p).map(|slot| (name.as_str(), slot)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(color, size, other)
    }

    /// Derives a configuration from a product's ordered option names, where
    /// the name at index `i` lives in slot `i + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if there are more than three names
    /// or two names normalize to the same axis.
    pub fn from_option_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        if names.len() > SlotPosition::ALL.len() {
            return Err(ConfigError::Validation(format!(
                "product declares {} options; at most 3 are supported",
                names.len()
            )));
        }

        let mut config = Self::default();
        for (name, slot) in names.iter().zip(SlotPosition::ALL) {
            config.assign(normalize_option_name(name.as_ref()), slot)?;
        }
        Ok(config)
    }

    fn assign(&mut self, axis: Axis, slot: SlotPosition) -> Result<(), ConfigError> {
        if self.position_of(&axis).is_some() {
            return Err(ConfigError::Validation(format!(
                "axis '{axis}' is assigned more than once"
            )));
        }
        if let Some(owner) = self.axis_at(slot) {
            return Err(ConfigError::Validation(format!(
                "slot {slot} is claimed by both '{owner}' and '{axis}'"
            )));
        }

        match axis {
            Axis::Color => self.color = Some(slot),
            Axis::Size => self.size = Some(slot),
            Axis::Other(name) => {
                self.other.insert(name, slot);
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn position_of(&self, axis: &Axis) -> Option<SlotPosition> {
        match axis {
            Axis::Color => self.color,
            Axis::Size => self.size,
            Axis::Other(name) => self.other.get(name).copied(),
        }
    }

    #[must_use]
    pub fn axis_at(&self, slot: SlotPosition) -> Option<Axis> {
        self.axes()
            .find(|(_, position)| *position == slot)
            .map(|(axis, _)| axis)
    }

    /// All configured axes: color, then size, then other axes by name.
    pub fn axes(&self) -> impl Iterator<Item = (Axis, SlotPosition)> + '_ {
        let color = self.color.map(|slot| (Axis::Color, slot));
        let size = self.size.map(|slot| (Axis::Size, slot));
        color.into_iter().chain(size).chain(
            self.other
                .iter()
                .map(|(name, &slot)| (Axis::Other(name.clone()), slot)),
        )
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.size.is_none() && self.other.is_empty()
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;
