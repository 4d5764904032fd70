//! Application controller: event dispatch, mutation, re-render.
//!
//! # Responsibility
//! - Own the list store and the boundary handles for one page.
//! - Drive the mutate-then-render cycle for every UI event.
//! - Hold the transient edit mode between an edit click and its outcome.
//!
//! # Invariants
//! - Events are handled strictly sequentially, each to completion.
//! - A search term applies to exactly one render; it is never stored.
//! - Unresolvable events are absorbed with a debug diagnostic. Handling
//!   an event never fails and never panics.

use log::{debug, info};

use crate::model::item::ItemId;
use crate::store::list_store::ListStore;
use crate::ui::boundary::{DisplaySurface, EditPrompt, ValueInput};
use crate::ui::target::{ClickPath, RowAction};
use crate::view::filter::ViewFilter;
use crate::view::list::list_rows;
use crate::view::markup::fragment_html;

/// Structured notifications delivered by the hosting event source.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// The new-item form was submitted.
    NewItemSubmitted,
    /// A click landed somewhere inside the list container.
    ListClicked(ClickPath),
    /// The hide-completed control was activated.
    HideCompletedClicked,
    /// The search form was submitted.
    SearchSubmitted,
    /// The open editor was confirmed with replacement text.
    EditSubmitted(String),
    /// The open editor was dismissed.
    EditCancelled,
}

/// Controller for one list page.
///
/// Built through [`App::bootstrap`], which seeds the store and paints the
/// first frame. Afterwards the host feeds it [`UiEvent`]s.
pub struct App {
    store: ListStore,
    surface: Box<dyn DisplaySurface>,
    entry: Box<dyn ValueInput>,
    search: Box<dyn ValueInput>,
    editor: Box<dyn EditPrompt>,
    editing: Option<ItemId>,
}

impl App {
    /// Builds the seeded store, renders it once, and returns the live
    /// controller.
    pub fn bootstrap(
        surface: Box<dyn DisplaySurface>,
        entry: Box<dyn ValueInput>,
        search: Box<dyn ValueInput>,
        editor: Box<dyn EditPrompt>,
    ) -> Self {
        let mut app = Self {
            store: ListStore::seeded(),
            surface,
            entry,
            search,
            editor,
            editing: None,
        };
        info!(
            "event=bootstrap module=ui status=ok items={}",
            app.store.len()
        );
        app.render(None);
        app
    }

    /// Handles one UI event to completion.
    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::NewItemSubmitted => self.on_new_item(),
            UiEvent::ListClicked(path) => self.on_list_click(path),
            UiEvent::HideCompletedClicked => self.on_hide_toggle(),
            UiEvent::SearchSubmitted => self.on_search(),
            UiEvent::EditSubmitted(text) => self.on_edit_submit(text),
            UiEvent::EditCancelled => self.on_edit_cancel(),
        }
    }

    /// Read access to the list state, for hosts and tests.
    pub fn store(&self) -> &ListStore {
        &self.store
    }

    /// Row currently targeted by an open editor, if any.
    pub fn editing(&self) -> Option<ItemId> {
        self.editing
    }

    fn on_new_item(&mut self) {
        let Some(name) = self.entry.read_value() else {
            debug!("event=new_item module=ui status=absorbed reason=entry_unresolvable");
            return;
        };
        self.entry.clear_value();
        self.store.add_item(name);
        self.render(None);
    }

    fn on_list_click(&mut self, path: ClickPath) {
        let Some((action, id)) = path.resolve() else {
            debug!(
                "event=list_click module=ui status=absorbed reason=target_unresolvable depth={}",
                path.nodes().len()
            );
            return;
        };
        match action {
            RowAction::Toggle => {
                self.store.toggle_checked(id);
                self.render(None);
            }
            RowAction::Delete => {
                self.store.delete_item(id);
                self.render(None);
            }
            RowAction::Edit => self.open_editor(id),
        }
    }

    fn on_hide_toggle(&mut self) {
        self.store.toggle_hide_completed();
        self.render(None);
    }

    fn on_search(&mut self) {
        let Some(term) = self.search.read_value() else {
            debug!("event=search module=ui status=absorbed reason=field_unresolvable");
            return;
        };
        self.render(Some(term.as_str()));
    }

    fn open_editor(&mut self, id: ItemId) {
        let Some(item) = self.store.get(id) else {
            debug!("event=edit_open module=ui status=absorbed reason=item_missing item_id={id}");
            return;
        };
        let current_name = item.name.clone();
        if let Some(previous) = self.editing.replace(id) {
            debug!("event=edit_open module=ui status=retarget from={previous} to={id}");
        }
        self.editor.open(&current_name);
    }

    fn on_edit_submit(&mut self, text: String) {
        let Some(id) = self.editing.take() else {
            debug!("event=edit_submit module=ui status=absorbed reason=no_open_editor");
            return;
        };
        self.store.edit_item(id, text);
        self.render(None);
    }

    fn on_edit_cancel(&mut self) {
        if self.editing.take().is_none() {
            debug!("event=edit_cancel module=ui status=absorbed reason=no_open_editor");
        }
    }

    fn render(&mut self, search_term: Option<&str>) {
        let filter = ViewFilter {
            hide_completed: self.store.hide_completed(),
            search_term,
        };
        let rows = list_rows(self.store.items(), &filter);
        debug!(
            "event=render module=ui status=ok rows={} hide_completed={} search_active={}",
            rows.len(),
            filter.hide_completed,
            filter.search_term.is_some()
        );
        self.surface.replace_list(&fragment_html(&rows));
    }
}
