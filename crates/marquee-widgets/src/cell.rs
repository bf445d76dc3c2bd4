//! Row records, cell values and per-column cell formatting.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single cell value.
///
/// Deserializes untagged, so a row can be written as a plain map of scalars
/// (`null` becomes [`CellValue::Empty`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Boolean value
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
    /// Explicitly empty cell
    Empty,
}

impl CellValue {
    /// Display string for the cell.
    ///
    /// Booleans render as `true`/`false`; numbers use their shortest
    /// round-tripping form (`30`, `2.5`), switching to exponent notation
    /// outside `1e-6..1e21` (`1e+21`, `1.5e-7`).
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format_number(*n),
            Self::Bool(b) => b.to_string(),
            Self::Empty => String::new(),
        }
    }

    /// Whether this is an empty cell.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // -0 prints as 0
        return "0".to_string();
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{n}");
    }
    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<Self>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// A row record keyed by field name.
///
/// Field order is preserved as inserted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableRow {
    cells: IndexMap<String, CellValue>,
}

impl TableRow {
    /// Create a new empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell value.
    #[must_use]
    pub fn cell(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(key.into(), value.into());
        self
    }

    /// Get a cell value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key)
    }

    /// Display string of a field, empty when missing.
    #[must_use]
    pub fn display(&self, key: &str) -> String {
        self.get(key).map(CellValue::display).unwrap_or_default()
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for TableRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// What a cell renders as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    /// Plain text
    Text(String),
    /// Text carrying a style class (badges, status pills)
    Styled {
        /// Visible text
        text: String,
        /// CSS class applied to the wrapping element
        class: String,
    },
}

impl CellContent {
    /// Plain text content.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Text with a style class.
    #[must_use]
    pub fn styled(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self::Styled {
            text: text.into(),
            class: class.into(),
        }
    }

    /// Visible text.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Styled { text, .. } => text,
        }
    }

    /// Style class, if any.
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Styled { class, .. } => Some(class),
        }
    }
}

/// Turns a cell value (and its row) into displayable content.
///
/// `value` is `None` when the row has no field for the column.
pub trait CellFormatter: Send + Sync {
    /// Format one cell.
    fn format(&self, value: Option<&CellValue>, row: &TableRow) -> CellContent;
}

impl<F> CellFormatter for F
where
    F: Fn(Option<&CellValue>, &TableRow) -> CellContent + Send + Sync,
{
    fn format(&self, value: Option<&CellValue>, row: &TableRow) -> CellContent {
        self(value, row)
    }
}

/// Stringifies the value; missing and empty cells become "".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultFormatter;

impl CellFormatter for DefaultFormatter {
    fn format(&self, value: Option<&CellValue>, _row: &TableRow) -> CellContent {
        CellContent::Text(value.map(CellValue::display).unwrap_or_default())
    }
}
