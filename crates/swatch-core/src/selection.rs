//! The shopper's current, possibly partial, option selection.

use std::collections::BTreeMap;

use crate::options::{normalize_option_name, Axis, SlotConfig, SlotPosition};
use crate::variants::Variant;

/// Per-slot values a selection constrains, indexed by [`SlotPosition::index`].
pub type SlotValues<'a> = [Option<&'a str>; 3];

/// How a selection entry is keyed: by axis name (`color`) or directly by
/// slot (`option1`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SelectionKey {
    Slot(SlotPosition),
    Axis(Axis),
}

impl SelectionKey {
    /// `option1`..`option3` parse as slots; anything else is normalized into
    /// an axis.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        SlotPosition::from_slot_key(raw).map_or_else(
            || SelectionKey::Axis(normalize_option_name(raw)),
            SelectionKey::Slot,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: BTreeMap<SelectionKey, String>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot-form selection holding every populated option of `variant`.
    #[must_use]
    pub fn from_variant(variant: &Variant) -> Self {
        let mut selection = Self::new();
        for (slot, value) in variant.option_pairs() {
            selection.set_slot(slot, value);
        }
        selection
    }

    /// Sets `key` (axis name or slot key) to `value`. An empty value clears
    /// the entry instead.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.insert(SelectionKey::parse(key), value.into());
    }

    pub fn set_axis(&mut self, axis: Axis, value: impl Into<String>) {
        self.insert(SelectionKey::Axis(axis), value.into());
    }

    pub fn set_slot(&mut self, slot: SlotPosition, value: impl Into<String>) {
        self.insert(SelectionKey::Slot(slot), value.into());
    }

    /// Builder form of [`Selection::set`].
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    fn insert(&mut self, key: SelectionKey, value: String) {
        if value.is_empty() {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, value);
        }
    }

    pub fn remove(&mut self, key: &SelectionKey) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn remove_axis(&mut self, axis: &Axis) -> Option<String> {
        self.remove(&SelectionKey::Axis(axis.clone()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn get_axis(&self, axis: &Axis) -> Option<&str> {
        self.entries
            .get(&SelectionKey::Axis(axis.clone()))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SelectionKey, &str)> {
        self.entries.iter().map(|(key, value)| (key, value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves the selection into per-slot constraints.
    ///
    /// A slot-form entry wins over an axis-form entry that maps to the same
    /// position. Axis entries with no configured slot are dropped: they do
    /// not constrain anything.
    #[must_use]
    pub fn slot_values(&self, config: &SlotConfig) -> SlotValues<'_> {
        let mut values: SlotValues<'_> = [None; 3];

        for (key, value) in &self.entries {
            if let SelectionKey::Slot(slot) = key {
                values[slot.index()] = Some(value.as_str());
            }
        }

        for (key, value) in &self.entries {
            if let SelectionKey::Axis(axis) = key {
                if let Some(slot) = config.position_of(axis) {
                    values[slot.index()].get_or_insert(value.as_str());
                }
            }
        }

        values
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Selection {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut selection = Self::new();
        for (key, value) in iter {
            selection.set(key.as_ref(), value);
        }
        selection
    }
}
