//! Row markup for the visible list.
//!
//! # Responsibility
//! - Map filtered items to row elements carrying the attributes the click
//!   resolver depends on.
//!
//! # Invariants
//! - Every row carries its item ID in [`ITEM_ID_ATTR`].
//! - Every affordance carries its action in [`ACTION_ATTR`] and sits inside
//!   its owning row, so ancestor lookup always recovers the right ID.
//! - Rows appear in the relative order of the surviving items.

use crate::model::item::Item;
use crate::view::filter::{visible_items, ViewFilter};
use crate::view::markup::{fragment_html, MarkupNode};

/// Attribute carrying the owning item's ID on each row element.
pub const ITEM_ID_ATTR: &str = "data-item-id";
/// Attribute carrying the action kind on each affordance element.
pub const ACTION_ATTR: &str = "data-action";

/// `data-action` value of the check/uncheck affordance.
pub const ACTION_TOGGLE: &str = "toggle";
/// `data-action` value of the delete affordance.
pub const ACTION_DELETE: &str = "delete";
/// `data-action` value of the edit affordance.
pub const ACTION_EDIT: &str = "edit";

/// Class on every row element.
pub const ROW_CLASS: &str = "list-row";
/// Class on every name element.
pub const NAME_CLASS: &str = "row-name";
/// Modifier class added to the name element of checked items.
pub const NAME_CHECKED_CLASS: &str = "row-name--done";

const ACTIONS_CLASS: &str = "row-actions";

/// Builds the row element for one item.
pub fn item_row(item: &Item) -> MarkupNode {
    let mut name = MarkupNode::element("span").class(NAME_CLASS);
    if item.checked {
        name = name.class(NAME_CHECKED_CLASS);
    }
    name = name.text(item.name.clone());

    let actions = MarkupNode::element("span")
        .class(ACTIONS_CLASS)
        .child(action_button(ACTION_TOGGLE, "check"))
        .child(action_button(ACTION_DELETE, "delete"))
        .child(action_button(ACTION_EDIT, "edit"));

    MarkupNode::element("li")
        .class(ROW_CLASS)
        .attr(ITEM_ID_ATTR, item.id.to_string())
        .child(name)
        .child(actions)
}

/// Builds the row tree for one render: one element per surviving item.
pub fn list_rows(items: &[Item], filter: &ViewFilter<'_>) -> Vec<MarkupNode> {
    visible_items(items, filter).into_iter().map(item_row).collect()
}

/// Builds and materializes the full list fragment for one render.
pub fn list_html(items: &[Item], filter: &ViewFilter<'_>) -> String {
    fragment_html(&list_rows(items, filter))
}

fn action_button(action: &'static str, label: &'static str) -> MarkupNode {
    MarkupNode::element("button")
        .attr("type", "button")
        .attr(ACTION_ATTR, action)
        .text(label)
}
