use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Entry;
use crate::types::identifiers::EntryId;

/// Entries picked for side-by-side comparison, in the order they were picked.
///
/// Membership is decided by id only. Filtering never touches this set: an
/// entry stays selected while it is hidden by the current criteria.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ComparisonSet {
    entries: Vec<Entry>,
}

/// Same ids in the same order.
impl PartialEq for ComparisonSet {
    fn eq(&self, other: &Self) -> bool {
        self.ids().eq(other.ids())
    }
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.entries.iter().any(|e| e.id() == id)
    }

    /// Remove the entry with this id if present, otherwise append it.
    /// Returns a new set; `self` is left as it was.
    pub fn toggled(&self, entry: &Entry) -> Self {
        let mut entries = self.entries.clone();
        let action = match entries.iter().position(|e| e.same_identity(entry)) {
            Some(idx) => {
                entries.remove(idx);
                SelectionAction::Remove
            }
            None => {
                entries.push(entry.clone());
                SelectionAction::Add
            }
        };

        debug!(id = %entry.id(), ?action, selected = entries.len(), "comparison toggled");

        ComparisonSet { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn ids(&self) -> impl Iterator<Item = &EntryId> {
        self.entries.iter().map(Entry::id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn toggle_selection(set: &ComparisonSet, entry: &Entry) -> ComparisonSet {
    set.toggled(entry)
}

pub fn is_selected(set: &ComparisonSet, entry: &Entry) -> bool {
    set.contains(entry.id())
}

/// What toggling an entry would do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionAction {
    Add,
    Remove,
}

impl SelectionAction {
    pub fn for_entry(set: &ComparisonSet, entry: &Entry) -> Self {
        if is_selected(set, entry) {
            SelectionAction::Remove
        } else {
            SelectionAction::Add
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SelectionAction::Add => "Add to comparison",
            SelectionAction::Remove => "Remove from comparison",
        }
    }
}
