use std::collections::HashSet;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::{
    InvalidLanguageCode,
    LanguageCode,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "availableLanguages[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidLanguageCode(#[from] InvalidLanguageCode),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serializable settings of a multi-language field.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSettings {
    /// Language selected when the field is initialized.
    pub default_lang: String,

    /// Languages offered by the selector controls, in display order.
    #[serde(alias = "availLang")]
    pub available_languages: Vec<String>,

    /// Directory (or URL prefix) of the flag icons.
    pub img_path: String,
    /// Extension of the flag icons, without the dot.
    pub img_ext: String,

    /// Keep the canonical value visible to the operator.
    pub debug: bool,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            default_lang: "en".to_string(),
            available_languages: ["en", "es", "fr", "de"].map(String::from).to_vec(),
            img_path: "flags/".to_string(),
            img_ext: "png".to_string(),
            debug: false,
        }
    }
}

impl FieldSettings {
    /// # Errors
    /// - Malformed language code
    /// - No available languages, or a duplicate one
    /// - Default language not among the available languages
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = LanguageCode::parse(self.default_lang.as_str()) {
            errors.push(ValidationError::new("defaultLang", e.to_string()));
        }

        if self.available_languages.is_empty() {
            errors.push(ValidationError::new(
                "availableLanguages",
                "At least one language is required. Example: [\"en\", \"es\"]",
            ));
        }

        let mut seen = HashSet::new();
        for (index, code) in self.available_languages.iter().enumerate() {
            if let Err(e) = LanguageCode::parse(code.as_str()) {
                errors.push(ValidationError::new(
                    format!("availableLanguages[{index}]"),
                    e.to_string(),
                ));
            } else if !seen.insert(code.as_str()) {
                errors.push(ValidationError::new(
                    format!("availableLanguages[{index}]"),
                    format!("Duplicate language '{code}'. Each language may be listed only once"),
                ));
            }
        }

        if !self.available_languages.is_empty()
            && !self.available_languages.contains(&self.default_lang)
        {
            errors.push(ValidationError::new(
                "defaultLang",
                format!(
                    "Default language '{}' is not in availableLanguages. Add it to the list or pick one of: {}",
                    self.default_lang,
                    self.available_languages.join(", ")
                ),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Path of the flag icon shown for `lang`.
    #[must_use]
    pub fn flag_icon(&self, lang: &str) -> String {
        format!("{}{lang}.{}", self.img_path, self.img_ext)
    }
}
