//! View-only selection over the item sequence.
//!
//! # Responsibility
//! - Decide which items one render shows, without touching item data.
//!
//! # Invariants
//! - Both predicates are independent; application order never changes the
//!   result.
//! - Selection preserves the relative order of surviving items.

use crate::model::item::Item;

/// Selection options for a single render.
///
/// Borrowed, because a search term lives exactly as long as the render it
/// was submitted for; every other trigger renders with no term.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewFilter<'a> {
    /// When true, checked items are dropped from the render.
    pub hide_completed: bool,
    /// Case-sensitive substring filter over item names. `None` means no
    /// search is active; the empty string matches every name (every string
    /// contains the empty substring), so it behaves as "no filter".
    pub search_term: Option<&'a str>,
}

impl ViewFilter<'_> {
    /// Returns whether one item survives this filter.
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(term) = self.search_term {
            if !item.name.contains(term) {
                return false;
            }
        }
        !(self.hide_completed && item.checked)
    }
}

/// Selects the items one render shows, in their stored order.
pub fn visible_items<'a>(items: &'a [Item], filter: &ViewFilter<'_>) -> Vec<&'a Item> {
    items.iter().filter(|item| filter.matches(item)).collect()
}
