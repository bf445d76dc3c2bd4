//! `DataTable` widget: sortable, selectable tabular display over caller-owned rows.
//!
//! The table never mutates the rows it is given. Sorting produces a separate
//! view, cached against the data allocation and the sort state, and selection
//! is tracked against that view (see [`RowKey`]).

use crate::cell::{CellContent, CellFormatter, CellValue, DefaultFormatter, TableRow};
use crate::checkbox::{CheckState, Checkbox};
use crate::selection::{RowKey, Selection};
use crate::sort::{sort_rows, SortDirection, SortState};
use crate::spinner::Spinner;
use marquee_core::{
    html,
    widget::{AccessibleRole, FontWeight, LayoutResult, TextStyle},
    ArcKey, Brick, BrickAssertion, BrickBudget, BrickVerification, Canvas, Color, Constraints,
    Event, Memo, MouseButton, Point, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const SELECT_COLUMN_WIDTH: f32 = 48.0;
const DEFAULT_COLUMN_WIDTH: f32 = 120.0;
const MIN_COLUMN_WIDTH: f32 = 20.0;
const CELL_PADDING: f32 = 16.0;
const STATE_HEIGHT: f32 = 256.0;

/// Default message for a table without rows.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Column definition for a data table.
#[derive(Clone, Serialize, Deserialize)]
pub struct TableColumn {
    /// Field key into each row
    pub key: String,
    /// Display header
    pub header: String,
    /// Whether clicking the header sorts by this column
    #[serde(default)]
    pub sortable: bool,
    /// Width hint in pixels (None = share the remaining width)
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(skip)]
    formatter: Option<Arc<dyn CellFormatter>>,
}

impl fmt::Debug for TableColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableColumn")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

impl TableColumn {
    /// Create a new column.
    #[must_use]
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            width: None,
            formatter: None,
        }
    }

    /// Make column sortable.
    #[must_use]
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set column width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width.max(MIN_COLUMN_WIDTH));
        self
    }

    /// Render cells of this column with a closure.
    #[must_use]
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(Option<&CellValue>, &TableRow) -> CellContent + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(render));
        self
    }

    /// Render cells of this column with a shared formatter.
    #[must_use]
    pub fn formatter(mut self, formatter: Arc<dyn CellFormatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Whether a custom formatter is attached.
    #[must_use]
    pub fn has_formatter(&self) -> bool {
        self.formatter.is_some()
    }

    /// Content of this column's cell in `row`.
    #[must_use]
    pub fn format(&self, row: &TableRow) -> CellContent {
        let value = row.get(&self.key);
        match &self.formatter {
            Some(formatter) => formatter.format(value, row),
            None => DefaultFormatter.format(value, row),
        }
    }
}

/// Message emitted when a header click changes the sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSortChanged {
    /// Sort state after the click
    pub state: SortState,
}

/// Message emitted after every selection change.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRowsSelected {
    /// Selected rows, in selection order
    pub rows: Vec<TableRow>,
}

/// Which of the three table renderings is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// Loading placeholder (takes precedence over data)
    Loading,
    /// No rows; shows the empty message
    Empty,
    /// Header and rows
    Populated,
}

type RowSelectHandler = Arc<dyn Fn(&[TableRow]) + Send + Sync>;
type ViewKey = (ArcKey<[TableRow]>, SortState);

/// `DataTable` widget for displaying tabular data.
pub struct DataTable {
    data: Arc<[TableRow]>,
    view: Arc<[TableRow]>,
    view_cache: Memo<ViewKey, Arc<[TableRow]>>,
    columns: Vec<TableColumn>,
    sort: SortState,
    selection: Selection,
    row_key: RowKey,
    loading: bool,
    selectable: bool,
    empty_message: String,
    on_row_select: Option<RowSelectHandler>,
    row_height: f32,
    header_height: f32,
    header_bg: Color,
    selected_bg: Color,
    border_color: Color,
    text_color: Color,
    header_text_color: Color,
    accessible_name_value: Option<String>,
    test_id_value: Option<String>,
    bounds: Rect,
}

impl fmt::Debug for DataTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("rows", &self.data.len())
            .field("columns", &self.columns)
            .field("sort", &self.sort)
            .field("selected", &self.selection.len())
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl Default for DataTable {
    fn default() -> Self {
        Self::new(Vec::<TableRow>::new())
    }
}

impl DataTable {
    /// Create a table over `data`.
    #[must_use]
    pub fn new(data: impl Into<Arc<[TableRow]>>) -> Self {
        let data = data.into();
        let mut table = Self {
            view: Arc::clone(&data),
            data,
            view_cache: Memo::new(),
            columns: Vec::new(),
            sort: SortState::Unsorted,
            selection: Selection::new(),
            row_key: RowKey::Position,
            loading: false,
            selectable: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            on_row_select: None,
            row_height: 48.0,
            header_height: 48.0,
            header_bg: Color::rgb(0.96, 0.96, 0.97),
            selected_bg: Color::rgb(0.95, 0.95, 0.96),
            border_color: Color::rgb(0.89, 0.89, 0.91),
            text_color: Color::BLACK,
            header_text_color: Color::MUTED,
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
        };
        table.refresh_view();
        table
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add multiple columns.
    #[must_use]
    pub fn columns(mut self, columns: impl IntoIterator<Item = TableColumn>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Set loading state.
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Show selection checkboxes.
    #[must_use]
    pub const fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Called with the selected rows after every selection change.
    #[must_use]
    pub fn on_row_select<F>(mut self, handler: F) -> Self
    where
        F: Fn(&[TableRow]) + Send + Sync + 'static,
    {
        self.on_row_select = Some(Arc::new(handler));
        self
    }

    /// Set the message shown when there are no rows.
    #[must_use]
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Set how rows are identified for selection. Clears the selection.
    #[must_use]
    pub fn row_key(mut self, row_key: RowKey) -> Self {
        self.row_key = row_key;
        self.selection.clear();
        self
    }

    /// Set row height.
    #[must_use]
    pub fn row_height(mut self, height: f32) -> Self {
        self.row_height = height.max(20.0);
        self
    }

    /// Set header height.
    #[must_use]
    pub fn header_height(mut self, height: f32) -> Self {
        self.header_height = height.max(20.0);
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    // === Data ===

    /// Replace the rows. Selected keys that still name a row are kept.
    pub fn set_data(&mut self, data: impl Into<Arc<[TableRow]>>) {
        self.data = data.into();
        debug!(rows = self.data.len(), "table data replaced");
        self.refresh_view();
        let dropped = self.selection.prune(&self.view, &self.row_key);
        if dropped > 0 {
            debug!(dropped, "stale selection keys dropped");
        }
    }

    /// Update the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            debug!(loading, "table loading changed");
            self.loading = loading;
        }
    }

    /// Rows as supplied by the caller.
    #[must_use]
    pub const fn data(&self) -> &Arc<[TableRow]> {
        &self.data
    }

    /// Column definitions.
    #[must_use]
    pub fn get_columns(&self) -> &[TableColumn] {
        &self.columns
    }

    /// Message shown without rows.
    #[must_use]
    pub fn get_empty_message(&self) -> &str {
        &self.empty_message
    }

    /// Which rendering is shown.
    #[must_use]
    pub fn render_state(&self) -> RenderState {
        if self.loading {
            RenderState::Loading
        } else if self.data.is_empty() {
            RenderState::Empty
        } else {
            RenderState::Populated
        }
    }

    // === Sorting ===

    /// Header-click semantics for `column`.
    ///
    /// Returns false (and changes nothing) for unknown or non-sortable columns.
    pub fn sort_by(&mut self, column: &str) -> bool {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.key == column && c.sortable);
        if !sortable {
            return false;
        }

        self.sort = self.sort.advance(column);
        debug!(sort = ?self.sort, "table sort changed");
        self.refresh_view();
        true
    }

    /// Current sort.
    #[must_use]
    pub const fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Rows in display order.
    ///
    /// While unsorted this is the very allocation passed in by the caller.
    #[must_use]
    pub fn sorted_rows(&self) -> Arc<[TableRow]> {
        Arc::clone(&self.view)
    }

    /// Sorted-view lookups answered from the cache.
    #[must_use]
    pub const fn view_cache_hits(&self) -> u64 {
        self.view_cache.hits()
    }

    /// Sorted-view lookups that recomputed.
    #[must_use]
    pub const fn view_cache_misses(&self) -> u64 {
        self.view_cache.misses()
    }

    fn refresh_view(&mut self) {
        let key = (ArcKey::new(&self.data), self.sort.clone());
        self.view = self
            .view_cache
            .get_or_compute(key, |(data, sort)| sort_rows(&data.0, sort));
    }

    // === Selection ===

    /// Select or deselect the row at `index` of the sorted view.
    ///
    /// Returns the selected rows after the change, or `None` when the table
    /// is not selectable or `index` is out of range.
    pub fn toggle_row(&mut self, index: usize, checked: bool) -> Option<Vec<TableRow>> {
        if !self.selectable {
            return None;
        }
        let key = self.row_key.key_for(&self.view, index)?;
        self.selection.set(key, checked);
        debug!(index, checked, selected = self.selection.len(), "row selection changed");
        Some(self.notify_selection())
    }

    /// Select every row of the sorted view, or clear the selection.
    pub fn select_all(&mut self, checked: bool) -> Option<Vec<TableRow>> {
        if !self.selectable {
            return None;
        }
        if checked {
            self.selection.replace(self.row_key.keys(&self.view));
        } else {
            self.selection.clear();
        }
        debug!(checked, selected = self.selection.len(), "select all");
        Some(self.notify_selection())
    }

    /// Selected rows, in selection order.
    #[must_use]
    pub fn selected_rows(&self) -> Vec<TableRow> {
        self.selection.resolve(&self.view, &self.row_key)
    }

    /// Number of selected rows in the current view.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection_flags().into_iter().filter(|f| *f).count()
    }

    /// Whether the row at `index` of the sorted view is selected.
    #[must_use]
    pub fn is_row_selected(&self, index: usize) -> bool {
        self.row_key
            .key_for(&self.view, index)
            .is_some_and(|key| self.selection.contains(&key))
    }

    /// State of the select-all checkbox.
    #[must_use]
    pub fn header_check_state(&self) -> CheckState {
        self.selection.check_state(&self.view, &self.row_key)
    }

    fn selection_flags(&self) -> Vec<bool> {
        self.selection.flags(&self.view, &self.row_key)
    }

    fn notify_selection(&self) -> Vec<TableRow> {
        let rows = self.selected_rows();
        if let Some(handler) = &self.on_row_select {
            handler(&rows);
        }
        rows
    }

    // === Cells ===

    /// Content of the cell at `row_index` (sorted view) in column `column_key`.
    #[must_use]
    pub fn cell_content(&self, row_index: usize, column_key: &str) -> Option<CellContent> {
        let row = self.view.get(row_index)?;
        let column = self.columns.iter().find(|c| c.key == column_key)?;
        Some(column.format(row))
    }

    // === Geometry ===

    fn select_width(&self) -> f32 {
        if self.selectable {
            SELECT_COLUMN_WIDTH
        } else {
            0.0
        }
    }

    fn column_widths(&self) -> Vec<f32> {
        let fixed: f32 = self.columns.iter().filter_map(|c| c.width).sum();
        let auto = self.columns.iter().filter(|c| c.width.is_none()).count();
        let auto_width = if auto == 0 || self.bounds.width <= 0.0 {
            DEFAULT_COLUMN_WIDTH
        } else {
            ((self.bounds.width - self.select_width() - fixed) / auto as f32).max(MIN_COLUMN_WIDTH)
        };
        self.columns
            .iter()
            .map(|c| c.width.unwrap_or(auto_width))
            .collect()
    }

    /// Header cell bounds of the column with `key`.
    #[must_use]
    pub fn header_cell_rect(&self, key: &str) -> Option<Rect> {
        let widths = self.column_widths();
        let mut x = self.bounds.x + self.select_width();
        for (column, width) in self.columns.iter().zip(widths) {
            if column.key == key {
                return Some(Rect::new(x, self.bounds.y, width, self.header_height));
            }
            x += width;
        }
        None
    }

    /// Bounds of the select-all checkbox cell.
    #[must_use]
    pub fn select_all_rect(&self) -> Option<Rect> {
        self.selectable.then(|| {
            Rect::new(
                self.bounds.x,
                self.bounds.y,
                SELECT_COLUMN_WIDTH,
                self.header_height,
            )
        })
    }

    /// Bounds of the checkbox cell of row `index` in the sorted view.
    #[must_use]
    pub fn row_checkbox_rect(&self, index: usize) -> Option<Rect> {
        (self.selectable && index < self.view.len()).then(|| {
            Rect::new(
                self.bounds.x,
                self.row_y(index),
                SELECT_COLUMN_WIDTH,
                self.row_height,
            )
        })
    }

    fn row_y(&self, index: usize) -> f32 {
        (index as f32).mul_add(self.row_height, self.bounds.y + self.header_height)
    }

    fn column_at(&self, x: f32) -> Option<&TableColumn> {
        let mut left = self.bounds.x + self.select_width();
        for (column, width) in self.columns.iter().zip(self.column_widths()) {
            if x >= left && x < left + width {
                return Some(column);
            }
            left += width;
        }
        None
    }

    fn row_at(&self, y: f32) -> Option<usize> {
        let offset = y - self.bounds.y - self.header_height;
        if offset < 0.0 {
            return None;
        }
        let index = (offset / self.row_height) as usize;
        (index < self.view.len()).then_some(index)
    }

    // === Painting ===

    fn paint_state(&self, canvas: &mut dyn Canvas, message: &str, spinner: bool) {
        let center = self.bounds.center();
        if spinner {
            let mut spinner = Spinner::new().size(24.0);
            spinner.layout(Rect::new(center.x - 40.0, center.y - 12.0, 24.0, 24.0));
            spinner.paint(canvas);
        }
        let style = TextStyle {
            size: if spinner { 14.0 } else { 18.0 },
            color: Color::MUTED,
            ..TextStyle::default()
        };
        let x = if spinner { center.x - 8.0 } else { self.bounds.x + CELL_PADDING };
        canvas.draw_text(message, Point::new(x, center.y), &style);
    }

    fn paint_checkbox(canvas: &mut dyn Canvas, state: CheckState, cell: Rect) {
        let mut checkbox = Checkbox::new().state(state);
        checkbox.layout(cell);
        checkbox.paint(canvas);
    }

    fn paint_table(&self, canvas: &mut dyn Canvas) {
        let widths = self.column_widths();
        let header = Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.header_height,
        );
        canvas.fill_rect(header, self.header_bg);

        if let Some(cell) = self.select_all_rect() {
            Self::paint_checkbox(canvas, self.header_check_state(), cell);
        }

        let header_style = TextStyle {
            size: 14.0,
            color: self.header_text_color,
            weight: FontWeight::Medium,
        };
        let text_y = self.bounds.y + (self.header_height - header_style.size) / 2.0;
        let mut x = self.bounds.x + self.select_width();
        for (column, width) in self.columns.iter().zip(&widths) {
            canvas.draw_text(&column.header, Point::new(x + CELL_PADDING, text_y), &header_style);
            if column.sortable {
                let active = self.sort.direction_for(&column.key);
                let indicator_x = x + width - CELL_PADDING - 8.0;
                for (glyph, direction, dy) in [
                    ("▲", SortDirection::Ascending, -4.0),
                    ("▼", SortDirection::Descending, 4.0),
                ] {
                    let color = if active == Some(direction) {
                        Color::BLACK
                    } else {
                        Color::MUTED.with_alpha(0.5)
                    };
                    let style = TextStyle {
                        size: 8.0,
                        color,
                        ..TextStyle::default()
                    };
                    canvas.draw_text(glyph, Point::new(indicator_x, text_y + dy), &style);
                }
            }
            x += width;
        }

        let cell_style = TextStyle {
            size: 14.0,
            color: self.text_color,
            ..TextStyle::default()
        };
        let flags = self.selection_flags();
        for ((index, row), selected) in self.view.iter().enumerate().zip(flags) {
            let y = self.row_y(index);
            let row_rect = Rect::new(self.bounds.x, y, self.bounds.width, self.row_height);
            if selected {
                canvas.fill_rect(row_rect, self.selected_bg);
            }
            canvas.draw_line(
                Point::new(row_rect.x, y),
                Point::new(row_rect.right(), y),
                self.border_color,
                1.0,
            );

            if let Some(cell) = self.row_checkbox_rect(index) {
                let state = if selected {
                    CheckState::Checked
                } else {
                    CheckState::Unchecked
                };
                Self::paint_checkbox(canvas, state, cell);
            }

            let text_y = y + (self.row_height - cell_style.size) / 2.0;
            let mut x = self.bounds.x + self.select_width();
            for (column, width) in self.columns.iter().zip(&widths) {
                let content = column.format(row);
                if !content.as_text().is_empty() {
                    canvas.push_clip(Rect::new(x, y, *width, self.row_height));
                    canvas.draw_text(
                        content.as_text(),
                        Point::new(x + CELL_PADDING, text_y),
                        &cell_style,
                    );
                    canvas.pop_clip();
                }
                x += width;
            }
        }
    }

    // === HTML ===

    fn open_tag(&self, modifier: Option<&str>, extra: &str) -> String {
        let class = html::classes([
            Some("brick-data-table"),
            modifier,
        ]);
        let test_id = self
            .test_id_value
            .as_deref()
            .map(|t| format!(r#" data-testid="{}""#, html::escape(t)))
            .unwrap_or_default();
        format!(r#"<div class="{class}"{test_id}{extra}>"#)
    }

    fn header_html(&self, column: &TableColumn) -> String {
        let width = column
            .width
            .map(|w| format!(r#" style="width: {w}px""#))
            .unwrap_or_default();
        let header = html::escape(&column.header);
        let key = html::escape(&column.key);
        if column.sortable {
            let direction = self.sort.direction_for(&column.key);
            let aria = direction.map_or("none", SortDirection::aria);
            let indicator = match direction {
                Some(SortDirection::Ascending) => "asc",
                Some(SortDirection::Descending) => "desc",
                None => "none",
            };
            format!(
                r#"<th scope="col" class="brick-data-table__header brick-data-table__header--sortable" data-column="{key}" aria-sort="{aria}"{width}>{header}<span class="brick-data-table__sort-indicator" data-direction="{indicator}"></span></th>"#
            )
        } else {
            format!(
                r#"<th scope="col" class="brick-data-table__header" data-column="{key}"{width}>{header}</th>"#
            )
        }
    }

    fn cell_html(content: &CellContent) -> String {
        match content {
            CellContent::Text(text) => format!("<td>{}</td>", html::escape(text)),
            CellContent::Styled { text, class } => format!(
                r#"<td><span class="{}">{}</span></td>"#,
                html::escape(class),
                html::escape(text)
            ),
        }
    }

    fn table_html(&self) -> String {
        let mut out = self.open_tag(None, "");
        let label = self
            .accessible_name_value
            .as_deref()
            .map(|n| format!(r#" aria-label="{}""#, html::escape(n)))
            .unwrap_or_default();
        out.push_str(&format!(r#"<table role="table"{label}><thead><tr>"#));

        if self.selectable {
            let checkbox = Checkbox::new()
                .state(self.header_check_state())
                .with_accessible_name("Select all rows");
            out.push_str(&format!(
                r#"<th class="brick-data-table__select">{}</th>"#,
                checkbox.to_html()
            ));
        }
        for column in &self.columns {
            out.push_str(&self.header_html(column));
        }
        out.push_str("</tr></thead><tbody>");

        let flags = self.selection_flags();
        for ((index, row), selected) in self.view.iter().enumerate().zip(flags) {
            out.push_str(&format!(
                r#"<tr class="brick-data-table__row" data-row-index="{index}"{}>"#,
                html::flag(r#" data-selected="true""#, selected)
            ));
            if self.selectable {
                let checkbox = Checkbox::new()
                    .state(if selected {
                        CheckState::Checked
                    } else {
                        CheckState::Unchecked
                    })
                    .with_accessible_name(format!("Select row {}", index + 1));
                out.push_str(&format!(
                    r#"<td class="brick-data-table__select">{}</td>"#,
                    checkbox.to_html()
                ));
            }
            for column in &self.columns {
                out.push_str(&Self::cell_html(&column.format(row)));
            }
            out.push_str("</tr>");
        }

        out.push_str("</tbody></table></div>");
        out
    }

    fn duplicate_keys(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.columns
            .iter()
            .map(|c| c.key.as_str())
            .filter(|key| !seen.insert(*key))
            .collect()
    }
}

impl Widget for DataTable {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = self.select_width()
            + self
                .columns
                .iter()
                .map(|c| c.width.unwrap_or(DEFAULT_COLUMN_WIDTH))
                .sum::<f32>();
        let height = match self.render_state() {
            RenderState::Populated => {
                (self.view.len() as f32).mul_add(self.row_height, self.header_height)
            }
            RenderState::Loading | RenderState::Empty => STATE_HEIGHT,
        };
        constraints.constrain(Size::new(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        match self.render_state() {
            RenderState::Loading => self.paint_state(canvas, "Loading...", true),
            RenderState::Empty => self.paint_state(canvas, &self.empty_message, false),
            RenderState::Populated => self.paint_table(canvas),
        }
        canvas.stroke_rect(self.bounds, self.border_color, 1.0);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let Event::MouseDown {
            position,
            button: MouseButton::Left,
        } = event
        else {
            return None;
        };
        if self.render_state() != RenderState::Populated || !self.bounds.contains_point(position)
        {
            return None;
        }

        if position.y < self.bounds.y + self.header_height {
            if self
                .select_all_rect()
                .is_some_and(|r| r.contains_point(position))
            {
                let checked = self.header_check_state().toggle().is_checked();
                return self
                    .select_all(checked)
                    .map(|rows| Box::new(TableRowsSelected { rows }) as Box<dyn Any + Send>);
            }
            let key = self.column_at(position.x)?.key.clone();
            return self.sort_by(&key).then(|| {
                Box::new(TableSortChanged {
                    state: self.sort.clone(),
                }) as Box<dyn Any + Send>
            });
        }

        let index = self.row_at(position.y)?;
        if self
            .row_checkbox_rect(index)
            .is_some_and(|r| r.contains_point(position))
        {
            let checked = !self.is_row_selected(index);
            return self
                .toggle_row(index, checked)
                .map(|rows| Box::new(TableRowsSelected { rows }) as Box<dyn Any + Send>);
        }
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        self.selectable || self.columns.iter().any(|c| c.sortable)
    }

    fn is_focusable(&self) -> bool {
        self.is_interactive()
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Table
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for DataTable {
    fn brick_name(&self) -> &'static str {
        "DataTable"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &[BrickAssertion::MaxLatencyMs(16), BrickAssertion::TextVisible]
    }

    fn budget(&self) -> BrickBudget {
        BrickBudget::uniform(16)
    }

    fn verify(&self) -> BrickVerification {
        let mut failed = Vec::new();
        let duplicates = self.duplicate_keys();
        if !duplicates.is_empty() {
            failed.push((
                BrickAssertion::custom("unique-column-keys"),
                format!("duplicate column keys: {}", duplicates.join(", ")),
            ));
        }
        if self.columns.iter().any(|c| c.key.is_empty()) {
            failed.push((
                BrickAssertion::custom("non-empty-column-keys"),
                "column with empty key".to_string(),
            ));
        }

        BrickVerification {
            passed: self.assertions().to_vec(),
            failed,
            verification_time: Duration::from_micros(10),
        }
    }

    fn to_html(&self) -> String {
        match self.render_state() {
            RenderState::Loading => format!(
                r#"{}<div class="brick-data-table__state">{}<span class="brick-data-table__muted">Loading...</span></div></div>"#,
                self.open_tag(Some("brick-data-table--loading"), r#" aria-busy="true""#),
                Spinner::new().size(24.0).to_html()
            ),
            RenderState::Empty => format!(
                r#"{}<div class="brick-data-table__state"><p class="brick-data-table__empty">{}</p></div></div>"#,
                self.open_tag(Some("brick-data-table--empty"), ""),
                html::escape(&self.empty_message)
            ),
            RenderState::Populated => self.table_html(),
        }
    }

    fn to_css(&self) -> String {
        format!(
            ".brick-data-table {{ border: 1px solid {border}; border-radius: 6px; overflow: hidden; }}\n\
             .brick-data-table table {{ width: 100%; border-collapse: collapse; }}\n\
             .brick-data-table thead {{ background: {header_bg}; }}\n\
             .brick-data-table__header {{ text-align: left; padding: 16px; font-weight: 500; color: {header_fg}; }}\n\
             .brick-data-table__header--sortable {{ cursor: pointer; }}\n\
             .brick-data-table__select {{ width: 48px; padding: 16px; }}\n\
             .brick-data-table__row {{ border-top: 1px solid {border}; }}\n\
             .brick-data-table__row[data-selected] {{ background: {selected_bg}; }}\n\
             .brick-data-table td {{ padding: 16px; }}\n\
             .brick-data-table__state {{ display: flex; align-items: center; justify-content: center; gap: 8px; height: 256px; }}\n\
             .brick-data-table__muted, .brick-data-table__empty {{ color: {muted}; }}\n\
             .brick-data-table__empty {{ font-size: 18px; }}",
            border = self.border_color.to_hex(),
            header_bg = self.header_bg.to_hex(),
            header_fg = self.header_text_color.to_hex(),
            selected_bg = self.selected_bg.to_hex(),
            muted = Color::MUTED.to_hex(),
        )
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
