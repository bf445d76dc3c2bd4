//! Row selection bookkeeping for the data table.
//!
//! Selection is a set of row keys kept in insertion order. What a key means
//! depends on [`RowKey`]: with `Position` it is an index into the currently
//! sorted view (so re-sorting re-targets the selection), with `Field` it is
//! the display value of an identifying column and follows the row. Rows that
//! repeat a field value are told apart by occurrence, counted in view order.

use crate::cell::TableRow;
use crate::checkbox::CheckState;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How rows are identified for selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKey {
    /// Index into the sorted view
    #[default]
    Position,
    /// Display value of the named field
    Field(String),
}

/// Identity of one selected row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectionKey {
    /// Index into the sorted view
    Position(usize),
    /// Value of the identifying field
    Value {
        /// Display value
        value: String,
        /// Earlier rows in the view carrying the same value
        occurrence: usize,
    },
}

impl SelectionKey {
    /// Key for the first row carrying `value`.
    #[must_use]
    pub fn value(value: impl Into<String>) -> Self {
        Self::Value {
            value: value.into(),
            occurrence: 0,
        }
    }
}

impl RowKey {
    /// Keys for every row of `view`, in view order. No two rows share a key.
    ///
    /// Rows lacking the identifying field fall back to their position.
    #[must_use]
    pub fn keys(&self, view: &[TableRow]) -> Vec<SelectionKey> {
        let Self::Field(field) = self else {
            return (0..view.len()).map(SelectionKey::Position).collect();
        };
        let mut seen: HashMap<String, usize> = HashMap::new();
        view.iter()
            .enumerate()
            .map(|(i, row)| match row.get(field) {
                Some(v) => {
                    let value = v.display();
                    let count = seen.entry(value.clone()).or_default();
                    let occurrence = *count;
                    *count += 1;
                    SelectionKey::Value { value, occurrence }
                }
                None => SelectionKey::Position(i),
            })
            .collect()
    }

    /// Key for the row at `index` of `view`, or `None` when out of range.
    #[must_use]
    pub fn key_for(&self, view: &[TableRow], index: usize) -> Option<SelectionKey> {
        let row = view.get(index)?;
        let Self::Field(field) = self else {
            return Some(SelectionKey::Position(index));
        };
        Some(match row.get(field) {
            Some(v) => {
                let value = v.display();
                let occurrence = view[..index]
                    .iter()
                    .filter(|r| r.get(field).is_some_and(|o| o.display() == value))
                    .count();
                SelectionKey::Value { value, occurrence }
            }
            None => SelectionKey::Position(index),
        })
    }
}

/// Ordered set of selected rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    keys: IndexSet<SelectionKey>,
}

impl Selection {
    /// Empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove one key. Returns whether the set changed.
    pub fn set(&mut self, key: SelectionKey, selected: bool) -> bool {
        if selected {
            self.keys.insert(key)
        } else {
            self.keys.shift_remove(&key)
        }
    }

    /// Replace the selection with `keys`, in order.
    pub fn replace(&mut self, keys: impl IntoIterator<Item = SelectionKey>) {
        self.keys = keys.into_iter().collect();
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Drop keys that no longer name a row of `view`. Returns how many went.
    pub fn prune(&mut self, view: &[TableRow], row_key: &RowKey) -> usize {
        let live: IndexSet<SelectionKey> = row_key.keys(view).into_iter().collect();
        let before = self.keys.len();
        self.keys.retain(|key| live.contains(key));
        before - self.keys.len()
    }

    /// Whether `key` is selected.
    #[must_use]
    pub fn contains(&self, key: &SelectionKey) -> bool {
        self.keys.contains(key)
    }

    /// Number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Selection flag for every row of `view`, in view order.
    #[must_use]
    pub fn flags(&self, view: &[TableRow], row_key: &RowKey) -> Vec<bool> {
        row_key
            .keys(view)
            .iter()
            .map(|key| self.keys.contains(key))
            .collect()
    }

    /// Header checkbox state against `view`.
    ///
    /// Only keys naming a row of `view` count. Checked iff every row is
    /// selected and there is at least one row; indeterminate iff some but
    /// not all are.
    #[must_use]
    pub fn check_state(&self, view: &[TableRow], row_key: &RowKey) -> CheckState {
        let selected = self.flags(view, row_key).into_iter().filter(|f| *f).count();
        if selected == view.len() && selected > 0 {
            CheckState::Checked
        } else if selected > 0 {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }

    /// Selected rows of `view`, in selection order.
    ///
    /// Keys that no longer resolve to a row are skipped.
    #[must_use]
    pub fn resolve(&self, view: &[TableRow], row_key: &RowKey) -> Vec<TableRow> {
        let index: HashMap<SelectionKey, usize> = row_key
            .keys(view)
            .into_iter()
            .enumerate()
            .map(|(i, key)| (key, i))
            .collect();
        self.keys
            .iter()
            .filter_map(|key| index.get(key).and_then(|i| view.get(*i)))
            .cloned()
            .collect()
    }
}
