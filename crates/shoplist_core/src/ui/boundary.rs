//! Boundary traits toward the hosting page.
//!
//! # Responsibility
//! - Name the collaborators the controller drives: the rendered list
//!   surface, the two text fields, the row editor.
//!
//! # Invariants
//! - The core holds these only behind trait objects; it never sees a
//!   concrete UI technology.
//! - Every operation is infallible from the controller's point of view.
//!   A host that cannot resolve its field reports that through
//!   [`ValueInput::read_value`] returning `None`, not by failing.

/// The rendered list container.
pub trait DisplaySurface {
    /// Replaces the container's entire contents with `markup`.
    ///
    /// Always a full replacement, never an incremental patch.
    fn replace_list(&mut self, markup: &str);
}

/// One text field the page exposes (the new-item entry or the search box).
pub trait ValueInput {
    /// Reads the field's current value, `None` when the field cannot be
    /// resolved.
    fn read_value(&self) -> Option<String>;

    /// Clears the field. No-op when the field cannot be resolved.
    fn clear_value(&mut self);
}

/// The row editor the page opens when an edit affordance is activated.
///
/// Opening is fire-and-forget: the outcome arrives later as an
/// [`EditSubmitted`](crate::ui::controller::UiEvent::EditSubmitted) or
/// [`EditCancelled`](crate::ui::controller::UiEvent::EditCancelled) event.
pub trait EditPrompt {
    /// Opens the editor seeded with the row's current name.
    fn open(&mut self, current_name: &str);
}
