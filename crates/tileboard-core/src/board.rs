//! The widget board controller: active widgets plus the add-widget picker flow.

use crate::catalog::{default_seed, Catalog, CatalogEntry};
use crate::kind::WidgetKind;
use crate::selection::Selection;
use std::fmt;

/// Identity of a widget on a board.
///
/// Ids come from a counter owned by the [`Board`] and are never reused, even
/// after the widget they named is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A widget currently shown on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveWidget {
    pub id: WidgetId,
    pub title: String,
    pub kind: WidgetKind,
}

/// Whether the add-widget picker is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Closed,
    Open,
}

/// Ordered collection of active widgets and the transient picker state used
/// to add more.
///
/// All operations are infallible. Stale ids, unknown kinds, and selections
/// that no longer resolve against the catalog are ignored rather than
/// reported, so a UI event handler can call them without checking first.
///
/// # Example
///
/// ```
/// use tileboard_core::{Board, WidgetKind};
///
/// let mut board = Board::initialize();
/// board.open_picker();
/// board.toggle_selection(&WidgetKind::WIDGET_1);
/// board.confirm_selection();
///
/// assert_eq!(board.len(), 7);
/// assert_eq!(board.widgets().last().unwrap().title, "Widget 1");
/// assert!(!board.is_picker_open());
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    widgets: Vec<ActiveWidget>,
    catalog: Catalog,
    picker: PickerState,
    selection: Selection,
    next_id: u64,
}

impl Board {
    /// An empty board offering `catalog` in its picker.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            widgets: Vec::new(),
            catalog,
            picker: PickerState::Closed,
            selection: Selection::new(),
            next_id: 1,
        }
    }

    /// A board pre-populated with `seed`, in order.
    ///
    /// Seed entries need not appear in the catalog.
    pub fn with_seed(catalog: Catalog, seed: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut board = Self::new(catalog);
        for entry in seed {
            board.push(entry.kind, entry.title);
        }
        board
    }

    /// The stock board: default catalog and the six default widgets.
    pub fn initialize() -> Self {
        Self::with_seed(Catalog::default(), default_seed())
    }

    /// Open the picker.
    ///
    /// Opening from the closed state starts with an empty selection. Calling
    /// this while the picker is already open does nothing, so in-progress
    /// picks survive a repeated open.
    pub fn open_picker(&mut self) {
        if self.picker == PickerState::Open {
            return;
        }
        self.selection.clear();
        self.picker = PickerState::Open;
        tracing::debug!("picker opened");
    }

    /// Flip whether `kind` is selected. Returns the new membership.
    ///
    /// Kinds missing from the catalog are never admitted into the selection.
    pub fn toggle_selection(&mut self, kind: &WidgetKind) -> bool {
        if !self.catalog.contains(kind) {
            tracing::debug!(%kind, "ignoring toggle for kind outside the catalog");
            return false;
        }
        let selected = self.selection.toggle(kind);
        tracing::debug!(%kind, selected, "selection toggled");
        selected
    }

    /// Append one widget per selected kind, then clear the selection and
    /// close the picker. Returns the ids of the new widgets in board order.
    pub fn confirm_selection(&mut self) -> Vec<WidgetId> {
        let mut added = Vec::with_capacity(self.selection.len());
        for kind in self.selection.take() {
            let Some(entry) = self.catalog.get(&kind) else {
                tracing::warn!(%kind, "selected kind has no catalog entry; skipping");
                continue;
            };
            let title = entry.title.clone();
            added.push(self.push(kind, title));
        }
        self.picker = PickerState::Closed;
        tracing::debug!(added = added.len(), total = self.widgets.len(), "selection confirmed");
        added
    }

    /// Close the picker and discard the selection. The board is untouched.
    pub fn cancel_picker(&mut self) {
        self.selection.clear();
        self.picker = PickerState::Closed;
        tracing::debug!("picker cancelled");
    }

    /// Remove the widget with `id`. Unknown ids are a no-op.
    pub fn delete_widget(&mut self, id: WidgetId) -> Option<ActiveWidget> {
        let Some(index) = self.position(id) else {
            tracing::debug!(%id, "delete ignored; no such widget");
            return None;
        };
        let removed = self.widgets.remove(index);
        tracing::debug!(%id, kind = %removed.kind, "widget deleted");
        Some(removed)
    }

    pub fn widgets(&self) -> &[ActiveWidget] {
        &self.widgets
    }

    pub fn get(&self, id: WidgetId) -> Option<&ActiveWidget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Index of `id` in display order.
    pub fn position(&self, id: WidgetId) -> Option<usize> {
        self.widgets.iter().position(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn picker(&self) -> PickerState {
        self.picker
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker == PickerState::Open
    }

    fn push(&mut self, kind: WidgetKind, title: String) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        self.widgets.push(ActiveWidget { id, title, kind });
        id
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initialize()
    }
}
