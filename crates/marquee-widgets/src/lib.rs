//! Input field and data table widgets for the Marquee widget library.

pub mod cell;
pub mod checkbox;
pub mod data_table;
pub mod input_field;
pub mod selection;
pub mod sort;
pub mod spinner;

pub use cell::{CellContent, CellFormatter, CellValue, DefaultFormatter, TableRow};
pub use checkbox::{CheckState, Checkbox, CheckboxChanged};
pub use data_table::{
    DataTable, RenderState, TableColumn, TableRowsSelected, TableSortChanged,
    DEFAULT_EMPTY_MESSAGE,
};
pub use input_field::{
    InputCleared, InputField, InputSize, InputType, InputVariant, PasswordVisibilityChanged,
    TextChanged, TextSubmitted,
};
pub use selection::{RowKey, Selection, SelectionKey};
pub use sort::{compare_cells, locale_compare, sort_rows, SortDirection, SortState};
pub use spinner::Spinner;
