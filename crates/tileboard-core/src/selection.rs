//! In-progress picks made while the picker is open.

use crate::kind::WidgetKind;
use hashlink::LinkedHashSet;

/// Insertion-ordered set of kinds toggled on in the picker.
///
/// Iteration yields kinds in the order they were first toggled on, which is
/// the order confirmed widgets are appended to the board.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    kinds: LinkedHashSet<WidgetKind>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `kind`. Returns `true` if it is now selected.
    pub fn toggle(&mut self, kind: &WidgetKind) -> bool {
        if self.kinds.remove(kind) {
            false
        } else {
            self.kinds.insert(kind.clone());
            true
        }
    }

    pub fn contains(&self, kind: &WidgetKind) -> bool {
        self.kinds.contains(kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WidgetKind> {
        self.kinds.iter()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn clear(&mut self) {
        self.kinds.clear();
    }

    /// Remove and return every kind, in selection order.
    pub fn take(&mut self) -> Vec<WidgetKind> {
        let kinds = self.kinds.iter().cloned().collect();
        self.kinds.clear();
        kinds
    }
}
