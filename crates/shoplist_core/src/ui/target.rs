//! Click-target resolution.
//!
//! # Responsibility
//! - Map the structural identity of a clicked node to a per-row action
//!   and the ID of the row it belongs to.
//!
//! # Invariants
//! - Resolution walks the path from the clicked node outward; the
//!   innermost action attribute and the nearest enclosing row attribute
//!   win.
//! - A malformed attribute value fails resolution instead of falling
//!   through to a farther ancestor.

use uuid::Uuid;

use crate::model::item::ItemId;
use crate::view::list::{ACTION_ATTR, ACTION_DELETE, ACTION_EDIT, ACTION_TOGGLE, ITEM_ID_ATTR};

/// Per-row action kinds a click can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Flip the row's checked state.
    Toggle,
    /// Remove the row.
    Delete,
    /// Open the editor for the row.
    Edit,
}

/// One element on a click path: tag name plus the attributes the
/// resolver reads.
#[derive(Debug, Clone)]
pub struct PathNode {
    tag: String,
    attrs: Vec<(String, String)>,
}

impl PathNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
        }
    }

    /// Attaches one attribute, builder style.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// First value recorded under `name`, if any.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Structural identity of one click: the clicked element first, then its
/// ancestors out to the list container.
#[derive(Debug, Clone, Default)]
pub struct ClickPath {
    nodes: Vec<PathNode>,
}

impl ClickPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the next-outer element, builder style.
    pub fn node(mut self, node: PathNode) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    /// Resolves the innermost action attribute along the path.
    ///
    /// `None` when no element carries the attribute or the nearest value
    /// is not a known action.
    pub fn action(&self) -> Option<RowAction> {
        let value = self
            .nodes
            .iter()
            .find_map(|node| node.attr_value(ACTION_ATTR))?;
        parse_action(value)
    }

    /// Resolves the nearest enclosing row's item ID.
    ///
    /// `None` when no element carries the attribute or the nearest value
    /// does not parse as an ID.
    pub fn item_id(&self) -> Option<ItemId> {
        let value = self
            .nodes
            .iter()
            .find_map(|node| node.attr_value(ITEM_ID_ATTR))?;
        Uuid::parse_str(value).ok()
    }

    /// Resolves both halves of a per-row action click.
    pub fn resolve(&self) -> Option<(RowAction, ItemId)> {
        Some((self.action()?, self.item_id()?))
    }
}

fn parse_action(value: &str) -> Option<RowAction> {
    match value {
        ACTION_TOGGLE => Some(RowAction::Toggle),
        ACTION_DELETE => Some(RowAction::Delete),
        ACTION_EDIT => Some(RowAction::Edit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_click(action: &str, id: &str) -> ClickPath {
        ClickPath::new()
            .node(PathNode::new("button").attr(ACTION_ATTR, action))
            .node(PathNode::new("span"))
            .node(PathNode::new("li").attr(ITEM_ID_ATTR, id))
            .node(PathNode::new("ul"))
    }

    #[test]
    fn button_inside_row_resolves_action_and_id() {
        let id = Uuid::new_v4();
        let path = row_click(ACTION_DELETE, &id.to_string());

        assert_eq!(path.resolve(), Some((RowAction::Delete, id)));
    }

    #[test]
    fn innermost_action_wins_over_outer_one() {
        let id = Uuid::new_v4();
        let path = ClickPath::new()
            .node(PathNode::new("button").attr(ACTION_ATTR, ACTION_EDIT))
            .node(
                PathNode::new("li")
                    .attr(ACTION_ATTR, ACTION_DELETE)
                    .attr(ITEM_ID_ATTR, id.to_string()),
            );

        assert_eq!(path.action(), Some(RowAction::Edit));
    }

    #[test]
    fn path_without_action_does_not_resolve() {
        let id = Uuid::new_v4();
        let path = ClickPath::new()
            .node(PathNode::new("span"))
            .node(PathNode::new("li").attr(ITEM_ID_ATTR, id.to_string()));

        assert_eq!(path.action(), None);
        assert_eq!(path.resolve(), None);
    }

    #[test]
    fn unknown_action_value_does_not_resolve() {
        let id = Uuid::new_v4();
        let path = row_click("archive", &id.to_string());

        assert_eq!(path.resolve(), None);
    }

    #[test]
    fn malformed_row_id_does_not_resolve() {
        let path = row_click(ACTION_TOGGLE, "not-an-id");

        assert_eq!(path.action(), Some(RowAction::Toggle));
        assert_eq!(path.item_id(), None);
        assert_eq!(path.resolve(), None);
    }
}
