//! Field configuration: settings file, validation and per-field options.
/// Settings file loader
mod loader;
/// Validated options with host callbacks
mod options;
/// Settings types and validation
mod types;

pub use loader::{
    SETTINGS_FILE_NAME,
    load_settings,
};
pub use options::{
    Callback,
    FieldOptions,
};
pub use types::{
    ConfigError,
    FieldSettings,
    ValidationError,
};
