//! Field settings file loading.

use std::io;
use std::path::Path;

use super::{
    ConfigError,
    FieldSettings,
};

/// Name of the settings file looked up in the configuration root.
pub const SETTINGS_FILE_NAME: &str = ".i18n-input.json";

/// Loads and validates the field settings found in `config_root`.
///
/// Without a root, or without a settings file in it, the defaults apply.
///
/// # Errors
/// - [`ConfigError::IoError`] if the settings file exists but can't be read
/// - [`ConfigError::ParseError`] if it isn't valid settings JSON
/// - [`ConfigError::ValidationErrors`] if the resulting settings are unusable
pub fn load_settings(config_root: Option<&Path>) -> Result<FieldSettings, ConfigError> {
    let settings = match config_root {
        Some(root) => read_settings_file(root)?.unwrap_or_default(),
        None => {
            tracing::debug!("No configuration root, using default settings");
            FieldSettings::default()
        }
    };

    settings.validate().map_err(ConfigError::ValidationErrors)?;
    tracing::info!(
        default_lang = %settings.default_lang,
        languages = settings.available_languages.len(),
        "Field settings loaded"
    );
    Ok(settings)
}

/// Reads the settings file, or `None` if there is none.
fn read_settings_file(config_root: &Path) -> Result<Option<FieldSettings>, ConfigError> {
    let config_path = config_root.join(SETTINGS_FILE_NAME);

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("Configuration file not found: {:?}", config_path);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    tracing::debug!("Loading configuration from: {:?}", config_path);
    Ok(Some(serde_json::from_str(&content)?))
}
