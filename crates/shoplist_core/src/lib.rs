//! Core domain logic for the shoplist checkable list manager.
//! This crate is the single source of truth for list state and rendering.

pub mod logging;
pub mod model;
pub mod store;
pub mod ui;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Item, ItemId};
pub use store::list_store::ListStore;
pub use ui::boundary::{DisplaySurface, EditPrompt, ValueInput};
pub use ui::controller::{App, UiEvent};
pub use ui::target::{ClickPath, PathNode, RowAction};
pub use view::filter::{visible_items, ViewFilter};
pub use view::list::{
    item_row, list_html, list_rows, ACTION_ATTR, ACTION_DELETE, ACTION_EDIT, ACTION_TOGGLE,
    ITEM_ID_ATTR, NAME_CHECKED_CLASS, NAME_CLASS, ROW_CLASS,
};
pub use view::markup::{fragment_html, MarkupNode};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
