//! YAML configuration for Marquee widgets.
//!
//! Configurations are plain serde structs. Behavior that YAML cannot express
//! (change callbacks, cell formatters, selection handlers) is attached to the
//! widget returned by `into_widget`.

mod config;
mod error;

pub use config::{DataTableConfig, InputFieldConfig, WidgetConfig};
pub use error::ConfigError;
