//! Serde configuration types for the input field and data table.

use crate::error::ConfigError;
use marquee_core::Widget;
use marquee_widgets::{
    DataTable, InputField, InputSize, InputType, InputVariant, RowKey, TableColumn, TableRow,
    DEFAULT_EMPTY_MESSAGE,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Input field configuration.
///
/// Change and clear callbacks are attached to the built widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFieldConfig {
    /// Label text
    #[serde(default)]
    pub label: Option<String>,
    /// Placeholder text
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Helper text below the field
    #[serde(default)]
    pub helper_text: Option<String>,
    /// Error message (replaces helper text)
    #[serde(default)]
    pub error_message: Option<String>,
    /// Input type
    #[serde(default)]
    pub input_type: InputType,
    /// Visual variant
    #[serde(default)]
    pub variant: InputVariant,
    /// Size preset
    #[serde(default)]
    pub size: InputSize,
    /// Disabled flag
    #[serde(default)]
    pub disabled: bool,
    /// Invalid flag
    #[serde(default)]
    pub invalid: bool,
    /// Loading flag
    #[serde(default)]
    pub loading: bool,
    /// Show the clear affordance
    #[serde(default)]
    pub clearable: bool,
    /// Owner supplies the value on every change
    #[serde(default)]
    pub controlled: bool,
    /// Initial (uncontrolled) or current (controlled) value
    #[serde(default)]
    pub value: Option<String>,
    /// Minimum width in pixels
    #[serde(default)]
    pub min_width: Option<f32>,
    /// Test ID
    #[serde(default)]
    pub test_id: Option<String>,
}

impl InputFieldConfig {
    /// Parse and validate a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        debug!(label = ?config.label, controlled = config.controlled, "loaded input field config");
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check option values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(width) = self.min_width {
            if width.is_nan() || width <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "min_width".to_string(),
                    message: format!("must be positive, got {width}"),
                });
            }
        }
        Ok(())
    }

    /// Build the widget.
    #[must_use]
    pub fn into_widget(self) -> InputField {
        let value = self.value.unwrap_or_default();
        let mut field = if self.controlled {
            InputField::controlled(value)
        } else {
            InputField::uncontrolled(value)
        };
        field = field
            .input_type(self.input_type)
            .variant(self.variant)
            .size(self.size)
            .disabled(self.disabled)
            .invalid(self.invalid)
            .loading(self.loading)
            .clearable(self.clearable);
        if let Some(label) = self.label {
            field = field.label(label);
        }
        if let Some(placeholder) = self.placeholder {
            field = field.placeholder(placeholder);
        }
        if let Some(helper) = self.helper_text {
            field = field.helper_text(helper);
        }
        if let Some(error) = self.error_message {
            field = field.error_message(error);
        }
        if let Some(width) = self.min_width {
            field = field.min_width(width);
        }
        if let Some(id) = self.test_id {
            field = field.with_test_id(id);
        }
        field
    }
}

fn default_empty_message() -> String {
    DEFAULT_EMPTY_MESSAGE.to_string()
}

/// Data table configuration.
///
/// Rows are maps from field key to scalar; `null` is an empty cell.
/// Cell formatters and the selection callback are attached to the built
/// widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTableConfig {
    /// Column definitions
    pub columns: Vec<TableColumn>,
    /// Rows
    #[serde(default)]
    pub data: Vec<TableRow>,
    /// Loading flag
    #[serde(default)]
    pub loading: bool,
    /// Show selection checkboxes
    #[serde(default)]
    pub selectable: bool,
    /// Message for a table without rows
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
    /// Row identity for selection
    #[serde(default)]
    pub row_key: RowKey,
    /// Accessible name
    #[serde(default)]
    pub label: Option<String>,
    /// Test ID
    #[serde(default)]
    pub test_id: Option<String>,
}

impl DataTableConfig {
    /// Parse and validate a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        debug!(
            columns = config.columns.len(),
            rows = config.data.len(),
            "loaded data table config"
        );
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Reject empty or duplicate column keys and non-positive widths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, column) in self.columns.iter().enumerate() {
            if column.key.is_empty() {
                return Err(ConfigError::EmptyColumnKey { index });
            }
            if !seen.insert(column.key.as_str()) {
                return Err(ConfigError::DuplicateColumnKey(column.key.clone()));
            }
            if let Some(width) = column.width {
                if width.is_nan() || width <= 0.0 {
                    return Err(ConfigError::InvalidWidth {
                        column: column.key.clone(),
                        width,
                    });
                }
            }
        }
        Ok(())
    }

    /// Build the widget.
    #[must_use]
    pub fn into_widget(self) -> DataTable {
        let mut table = DataTable::new(self.data)
            .columns(self.columns)
            .loading(self.loading)
            .selectable(self.selectable)
            .empty_message(self.empty_message)
            .row_key(self.row_key);
        if let Some(label) = self.label {
            table = table.with_accessible_name(label);
        }
        if let Some(id) = self.test_id {
            table = table.with_test_id(id);
        }
        table
    }
}

/// A widget declaration tagged by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetConfig {
    /// `type: input_field`
    InputField(InputFieldConfig),
    /// `type: data_table`
    DataTable(DataTableConfig),
}

impl WidgetConfig {
    /// Parse and validate a single widget declaration.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a list of widget declarations.
    pub fn list_from_yaml(yaml: &str) -> Result<Vec<Self>, ConfigError> {
        let configs: Vec<Self> = serde_yaml_ng::from_str(yaml)?;
        for config in &configs {
            config.validate()?;
        }
        debug!(widgets = configs.len(), "loaded widget list");
        Ok(configs)
    }

    /// Validate the wrapped configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::InputField(config) => config.validate(),
            Self::DataTable(config) => config.validate(),
        }
    }

    /// Build the widget behind a trait object.
    #[must_use]
    pub fn into_widget(self) -> Box<dyn Widget> {
        match self {
            Self::InputField(config) => Box::new(config.into_widget()),
            Self::DataTable(config) => Box::new(config.into_widget()),
        }
    }
}
