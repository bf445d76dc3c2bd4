//! Error types for widget configuration.

use thiserror::Error;

/// Error loading or validating a widget configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// Column declared without a key
    #[error("column {index} has an empty key")]
    EmptyColumnKey {
        /// Position of the column
        index: usize,
    },
    /// Two columns share a key
    #[error("duplicate column key: {0}")]
    DuplicateColumnKey(String),
    /// Width hint that is not a positive number
    #[error("invalid width {width} for column '{column}'")]
    InvalidWidth {
        /// Column key
        column: String,
        /// Offending width
        width: f32,
    },
    /// Option combination the widget cannot honor
    #[error("invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}
