//! Item domain model.
//!
//! # Responsibility
//! - Define the canonical record behind every rendered list row.
//! - Provide in-place helpers for the toggle/edit mutations.
//!
//! # Invariants
//! - `id` is stable for the item's lifetime and never reused after deletion.
//! - `checked` starts as `false` for newly created items.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one list item.
///
/// Kept as a type alias to make semantic intent explicit in signatures. The
/// token is opaque: equality comparison only, no ordering, no meaning beyond
/// lookup across mutate/render cycles.
pub type ItemId = Uuid;

/// Canonical record for one checkable list entry.
///
/// Identity lives in `id` alone: names may repeat or change across items,
/// and display order is owned by the store, not the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable opaque ID used for lookup across mutate/render cycles.
    pub id: ItemId,
    /// Display label. May be empty; no validation is applied anywhere.
    pub name: String,
    /// Whether the entry has been ticked off.
    pub checked: bool,
}

impl Item {
    /// Creates an unchecked item with a freshly generated stable ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, false)
    }

    /// Creates an item with a caller-provided ID and checked state.
    ///
    /// Used by the seed catalog and by tests where identity is fixed up
    /// front.
    pub fn with_id(id: ItemId, name: impl Into<String>, checked: bool) -> Self {
        Self {
            id,
            name: name.into(),
            checked,
        }
    }

    /// Flips the checked flag in place.
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    /// Replaces the display name in place. Empty names are accepted.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
