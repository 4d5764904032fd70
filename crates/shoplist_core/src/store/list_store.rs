//! List store and mutators.
//!
//! # Responsibility
//! - Hold the ordered item sequence plus the hide-completed flag.
//! - Provide the add/toggle/delete/edit mutations invoked by UI events.
//!
//! # Invariants
//! - Insertion order is display order; delete removes exactly one element
//!   and leaves the rest in place.
//! - A lookup miss is a no-op acknowledged by the return value and a debug
//!   diagnostic, never a panic or an error.
//! - `hide_completed` is a view flag only; no mutation here touches item
//!   data because of it.

use crate::model::item::{Item, ItemId};
use log::debug;

/// Startup catalog used by bootstrap: name and initial checked state.
const SEED_ITEMS: [(&str, bool); 4] = [
    ("apples", false),
    ("oranges", false),
    ("milk", true),
    ("bread", false),
];

/// In-memory state object behind the whole list UI.
///
/// Owned by the application controller and passed by reference into mutator
/// and renderer calls; nothing else holds list state.
#[derive(Debug, Clone, Default)]
pub struct ListStore {
    items: Vec<Item>,
    hide_completed: bool,
}

impl ListStore {
    /// Creates an empty store with the hide-completed filter off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the fixed four-item startup catalog.
    ///
    /// Three staples start unchecked and "milk" starts checked, so the
    /// hide-completed path is exercisable right after bootstrap.
    pub fn seeded() -> Self {
        let items = SEED_ITEMS
            .iter()
            .map(|(name, checked)| {
                let mut item = Item::new(*name);
                item.checked = *checked;
                item
            })
            .collect();
        Self {
            items,
            hide_completed: false,
        }
    }

    /// Appends a new unchecked item with the given name and returns its ID.
    ///
    /// The name is stored raw: empty and whitespace-only text is accepted
    /// and no trimming is applied.
    pub fn add_item(&mut self, name: impl Into<String>) -> ItemId {
        let item = Item::new(name);
        let id = item.id;
        debug!(
            "event=add_item module=store status=ok item_id={id} name_len={}",
            item.name.len()
        );
        self.items.push(item);
        id
    }

    /// Flips the checked flag of the item with the given ID.
    ///
    /// Returns whether a mutation was applied; a miss is a logged no-op.
    pub fn toggle_checked(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.toggle();
                debug!(
                    "event=toggle_checked module=store status=ok item_id={id} checked={}",
                    item.checked
                );
                true
            }
            None => {
                debug!("event=toggle_checked module=store status=miss item_id={id}");
                false
            }
        }
    }

    /// Removes exactly the item with the given ID.
    ///
    /// Returns whether a mutation was applied; a miss is a logged no-op.
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.items.remove(index);
                debug!("event=delete_item module=store status=ok item_id={id}");
                true
            }
            None => {
                debug!("event=delete_item module=store status=miss item_id={id}");
                false
            }
        }
    }

    /// Replaces the name of the item with the given ID.
    ///
    /// The empty string is a valid replacement. Returns whether a mutation
    /// was applied; a miss is a logged no-op.
    pub fn edit_item(&mut self, id: ItemId, new_name: impl Into<String>) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.rename(new_name);
                debug!(
                    "event=edit_item module=store status=ok item_id={id} name_len={}",
                    item.name.len()
                );
                true
            }
            None => {
                debug!("event=edit_item module=store status=miss item_id={id}");
                false
            }
        }
    }

    /// Sets `hide_completed` to the logical NOT of its current value and
    /// returns the new value.
    pub fn toggle_hide_completed(&mut self) -> bool {
        self.hide_completed = !self.hide_completed;
        debug!(
            "event=hide_completed module=store status=ok value={}",
            self.hide_completed
        );
        self.hide_completed
    }

    /// Sets the hide-completed flag directly.
    pub fn set_hide_completed(&mut self, value: bool) {
        self.hide_completed = value;
    }

    /// Returns the items in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns one item by stable ID.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the current hide-completed flag.
    pub fn hide_completed(&self) -> bool {
        self.hide_completed
    }
}
