//! Integration tests driving `DataTable` through the test harness.

use marquee_core::{Point, Widget};
use marquee_test::Harness;
use marquee_widgets::{
    CellContent, CellValue, CheckState, DataTable, RenderState, RowKey, SortDirection, SortState,
    TableColumn, TableRow, TableRowsSelected, TableSortChanged,
};
use std::sync::{Arc, Mutex};

fn users() -> Vec<TableRow> {
    [
        ("u1", "Carol", 31, "Editor", true),
        ("u2", "alice", 28, "Admin", false),
        ("u3", "Bob", 45, "Viewer", true),
        ("u4", "Alice", 28, "Viewer", true),
    ]
    .into_iter()
    .map(|(id, name, age, role, active)| {
        TableRow::new()
            .cell("id", id)
            .cell("name", name)
            .cell("age", age)
            .cell("role", role)
            .cell("active", active)
    })
    .collect()
}

fn user_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("name", "Name").sortable(),
        TableColumn::new("age", "Age").sortable().width(80.0),
        TableColumn::new("role", "Role").render(|value, _| {
            let role = value.map(CellValue::display).unwrap_or_default();
            let class = format!("badge badge-{}", role.to_lowercase());
            CellContent::styled(role, class)
        }),
        TableColumn::new("active", "Active"),
    ]
}

fn names(rows: &[TableRow]) -> Vec<String> {
    rows.iter().map(|r| r.display("name")).collect()
}

// RUST_LOG=marquee_widgets=debug shows sort and selection transitions.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_test_writer()
        .try_init();
}

fn harness() -> Harness<DataTable> {
    init_tracing();
    Harness::new(
        DataTable::new(users())
            .columns(user_columns())
            .selectable(true)
            .with_test_id("users"),
    )
    .viewport(800.0, 600.0)
}

fn click_header(harness: &mut Harness<DataTable>, key: &str) {
    let rect = harness.widget().header_cell_rect(key).unwrap();
    harness.click_rect(rect);
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn test_header_clicks_cycle_sort() {
    let mut h = harness();

    click_header(&mut h, "name");
    assert_eq!(
        names(&h.widget().sorted_rows()),
        vec!["alice", "Alice", "Bob", "Carol"]
    );
    h.assert_html_contains(r#"data-column="name" aria-sort="ascending""#);

    click_header(&mut h, "name");
    assert_eq!(
        names(&h.widget().sorted_rows()),
        vec!["Carol", "Bob", "Alice", "alice"]
    );

    click_header(&mut h, "name");
    assert_eq!(h.widget().sort_state(), &SortState::Unsorted);
    assert_eq!(
        names(&h.widget().sorted_rows()),
        vec!["Carol", "alice", "Bob", "Alice"]
    );

    let states: Vec<SortState> = h
        .messages_of::<TableSortChanged>()
        .into_iter()
        .map(|m| m.state)
        .collect();
    assert_eq!(states.len(), 3);
    assert_eq!(states[1].direction(), Some(SortDirection::Descending));
}

#[test]
fn test_numeric_sort_is_stable_on_ties() {
    let mut h = harness();
    click_header(&mut h, "age");
    assert_eq!(
        names(&h.widget().sorted_rows()),
        vec!["alice", "Alice", "Carol", "Bob"]
    );
}

#[test]
fn test_switching_columns_starts_ascending() {
    let mut h = harness();
    click_header(&mut h, "name");
    click_header(&mut h, "name");
    click_header(&mut h, "age");
    assert_eq!(h.widget().sort_state().column(), Some("age"));
    assert_eq!(
        h.widget().sort_state().direction(),
        Some(SortDirection::Ascending)
    );
}

#[test]
fn test_non_sortable_header_has_no_aria_sort() {
    let mut h = harness();
    click_header(&mut h, "role");
    assert_eq!(h.message_count(), 0);
    h.assert_html_contains(r#"<th scope="col" class="brick-data-table__header" data-column="role">Role</th>"#);
}

#[test]
fn test_caller_rows_untouched_by_sorting() {
    let data: Arc<[TableRow]> = users().into();
    let mut h = Harness::new(DataTable::new(Arc::clone(&data)).columns(user_columns()));
    click_header(&mut h, "name");
    click_header(&mut h, "age");
    assert_eq!(names(&data), vec!["Carol", "alice", "Bob", "Alice"]);
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn test_select_all_header_tri_state() {
    let selections = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&selections);
    let mut h = Harness::new(
        DataTable::new(users())
            .columns(user_columns())
            .selectable(true)
            .on_row_select(move |rows| sink.lock().unwrap().push(rows.len())),
    );

    let row = h.widget().row_checkbox_rect(1).unwrap();
    h.click_rect(row);
    assert_eq!(h.widget().header_check_state(), CheckState::Indeterminate);
    h.assert_html_contains(r#"aria-checked="mixed""#);

    let header = h.widget().select_all_rect().unwrap();
    h.click_rect(header);
    assert_eq!(h.widget().header_check_state(), CheckState::Checked);

    h.click_rect(header);
    assert_eq!(h.widget().header_check_state(), CheckState::Unchecked);
    assert_eq!(*selections.lock().unwrap(), vec![1, 4, 0]);

    let last = h.last_message::<TableRowsSelected>().unwrap();
    assert!(last.rows.is_empty());
}

#[test]
fn test_selection_is_positional_by_default() {
    let mut h = harness();
    let first = h.widget().row_checkbox_rect(0).unwrap();
    h.click_rect(first);
    assert_eq!(names(&h.widget().selected_rows()), vec!["Carol"]);

    click_header(&mut h, "name");
    assert!(h.widget().is_row_selected(0));
    assert_eq!(names(&h.widget().selected_rows()), vec!["alice"]);
    h.assert_html_contains(r#"data-row-index="0" data-selected="true""#);
}

#[test]
fn test_field_row_key_keeps_selection_across_sort() {
    let mut h = Harness::new(
        DataTable::new(users())
            .columns(user_columns())
            .selectable(true)
            .row_key(RowKey::Field("id".to_string())),
    );
    let first = h.widget().row_checkbox_rect(0).unwrap();
    h.click_rect(first);

    click_header(&mut h, "name");
    assert_eq!(names(&h.widget().selected_rows()), vec!["Carol"]);
    assert!(h.widget().is_row_selected(3));
}

#[test]
fn test_select_all_checks_header_with_repeated_key_values() {
    let mut h = Harness::new(
        DataTable::new(users())
            .columns(user_columns())
            .selectable(true)
            .row_key(RowKey::Field("role".to_string())),
    );
    let header = h.widget().select_all_rect().unwrap();
    h.click_rect(header);

    let selected = h.last_message::<TableRowsSelected>().unwrap();
    assert_eq!(selected.rows.len(), 4);
    assert_eq!(h.widget().header_check_state(), CheckState::Checked);

    let bob = h.widget().row_checkbox_rect(2).unwrap();
    h.click_rect(bob);
    assert_eq!(names(&h.widget().selected_rows()), vec!["Carol", "alice", "Alice"]);
    assert!(h.widget().is_row_selected(3));
}

#[test]
fn test_rows_reported_in_selection_order() {
    let mut h = harness();
    for index in [2, 0, 3] {
        let rect = h.widget().row_checkbox_rect(index).unwrap();
        h.click_rect(rect);
    }
    let last = h.last_message::<TableRowsSelected>().unwrap();
    assert_eq!(names(&last.rows), vec!["Bob", "Carol", "Alice"]);
}

#[test]
fn test_not_selectable_has_no_checkboxes() {
    let mut h = Harness::new(DataTable::new(users()).columns(user_columns()));
    h.assert_html_lacks("brick-checkbox");
    h.click_at(Point::new(10.0, 70.0));
    assert_eq!(h.message_count(), 0);
    assert!(h.widget().select_all_rect().is_none());
}

// =============================================================================
// States and rendering
// =============================================================================

#[test]
fn test_loading_takes_precedence() {
    let mut h = harness();
    h.update(|t| t.set_loading(true));
    assert_eq!(h.widget().render_state(), RenderState::Loading);
    h.assert_html_contains("Loading...")
        .assert_html_contains(r#"aria-busy="true""#)
        .assert_html_lacks("<table")
        .assert_painted_text("Loading...");

    h.update(|t| t.set_loading(false));
    h.assert_html_contains("<table");
}

#[test]
fn test_empty_state_message() {
    let h = Harness::new(
        DataTable::new(Vec::<TableRow>::new())
            .columns(user_columns())
            .empty_message("No users found"),
    );
    assert_eq!(h.widget().render_state(), RenderState::Empty);
    h.assert_html_contains("No users found")
        .assert_painted_text("No users found");
}

#[test]
fn test_set_data_replaces_rows() {
    let mut h = harness();
    h.update(|t| t.set_data(Vec::<TableRow>::new()));
    h.assert_html_contains("No data available");
    h.update(|t| t.set_data(users()));
    h.assert_html_contains("Carol");
}

#[test]
fn test_render_callback_and_default_cells() {
    let h = harness();
    h.assert_html_contains(r#"<td><span class="badge badge-editor">Editor</span></td>"#)
        .assert_html_contains("<td>true</td>")
        .assert_html_contains("<td>28</td>")
        .assert_painted_text("Admin")
        .assert_painted_text("Name");
    assert_eq!(
        h.widget().cell_content(1, "active"),
        Some(CellContent::text("false"))
    );
}

#[test]
fn test_table_selectors_and_verification() {
    let h = harness();
    h.assert_matches("DataTable")
        .assert_matches("[data-testid='users']")
        .assert_matches("[role='table']")
        .assert_valid();
    assert!(h.widget().is_interactive());
}
