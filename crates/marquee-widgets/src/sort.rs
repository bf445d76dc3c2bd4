//! Column sort state and row ordering.
//!
//! Clicking a sortable header walks the cycle
//! `Unsorted -> ascending -> descending -> Unsorted`; clicking a different
//! column always lands on ascending. Rows are ordered with a stable sort
//! over a copy of the data, so the caller's rows are never reordered and
//! rows with equal keys keep their relative order.

use crate::cell::{CellValue, TableRow};
use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::warn;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
}

impl SortDirection {
    /// Value of the `aria-sort` attribute.
    #[must_use]
    pub const fn aria(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Apply the direction to an ascending comparison.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum SortState {
    /// Data in its original order
    #[default]
    Unsorted,
    /// Sorted by one column
    Sorted {
        /// Column key
        column: String,
        /// Direction
        direction: SortDirection,
    },
}

impl SortState {
    /// State after a header click on `column`.
    #[must_use]
    pub fn advance(&self, column: &str) -> Self {
        match self {
            Self::Sorted {
                column: current,
                direction: SortDirection::Ascending,
            } if current == column => Self::Sorted {
                column: column.to_string(),
                direction: SortDirection::Descending,
            },
            Self::Sorted {
                column: current,
                direction: SortDirection::Descending,
            } if current == column => Self::Unsorted,
            _ => Self::Sorted {
                column: column.to_string(),
                direction: SortDirection::Ascending,
            },
        }
    }

    /// Active column key.
    #[must_use]
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::Unsorted => None,
            Self::Sorted { column, .. } => Some(column),
        }
    }

    /// Active direction.
    #[must_use]
    pub const fn direction(&self) -> Option<SortDirection> {
        match self {
            Self::Unsorted => None,
            Self::Sorted { direction, .. } => Some(*direction),
        }
    }

    /// Direction if `column` is the active column.
    #[must_use]
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        match self {
            Self::Sorted {
                column: current,
                direction,
            } if current == column => Some(*direction),
            _ => None,
        }
    }
}

thread_local! {
    static ROOT_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|err| warn!(?err, "root collator unavailable, falling back to code point order"))
            .ok();
}

/// Compare two strings with the root-locale collator at default strength.
///
/// Accented letters sort next to their base letter and punctuation sorts
/// before letters; among strings that differ only in case, lowercase comes
/// first.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}

/// Ascending comparison of two cells from the same column.
///
/// Strings compare with [`locale_compare`] and numbers numerically (NaN is
/// treated as equal to everything). Any other pairing compares the string
/// forms, where a missing cell reads `undefined` and an empty one `null`.
#[must_use]
pub fn compare_cells(a: Option<&CellValue>, b: Option<&CellValue>) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    match (a, b) {
        (Some(CellValue::Text(x)), Some(CellValue::Text(y))) => locale_compare(x, y),
        (Some(CellValue::Number(x)), Some(CellValue::Number(y))) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        _ => locale_compare(&coerce(a), &coerce(b)),
    }
}

fn coerce(cell: Option<&CellValue>) -> String {
    match cell {
        None => "undefined".to_string(),
        Some(CellValue::Empty) => "null".to_string(),
        Some(value) => value.display(),
    }
}

/// Rows ordered by `state`.
///
/// `Unsorted` hands back the same allocation; any other state returns a new
/// stably sorted copy and leaves `rows` untouched.
#[must_use]
pub fn sort_rows(rows: &Arc<[TableRow]>, state: &SortState) -> Arc<[TableRow]> {
    let SortState::Sorted { column, direction } = state else {
        return Arc::clone(rows);
    };

    let mut ordered: Vec<&TableRow> = rows.iter().collect();
    ordered.sort_by(|a, b| direction.apply(compare_cells(a.get(column), b.get(column))));
    ordered.into_iter().cloned().collect()
}
