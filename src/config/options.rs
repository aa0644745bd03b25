//! Validated per-field options, including the host callbacks.

use std::fmt;

use super::{
    ConfigError,
    FieldSettings,
};
use crate::types::LanguageCode;

/// Host hook invoked by a field controller. Takes nothing, returns nothing.
pub type Callback = Box<dyn FnMut()>;

/// Options a [`FieldController`](crate::field::FieldController) is built from.
///
/// Only constructible from settings that pass validation, so the default
/// language is always one of the available languages.
pub struct FieldOptions {
    default_lang: LanguageCode,
    available_languages: Vec<LanguageCode>,
    settings: FieldSettings,
    focus_callback: Option<Callback>,
    keyup_callback: Option<Callback>,
}

impl FieldOptions {
    /// # Errors
    /// Returns [`ConfigError::ValidationErrors`] if `settings` are invalid.
    pub fn from_settings(settings: FieldSettings) -> Result<Self, ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        let default_lang = LanguageCode::parse(settings.default_lang.as_str())?;
        let available_languages = settings
            .available_languages
            .iter()
            .map(|code| LanguageCode::parse(code.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            default_lang,
            available_languages,
            settings,
            focus_callback: None,
            keyup_callback: None,
        })
    }

    /// Invoked every time the visible surface gains focus.
    #[must_use]
    pub fn with_focus_callback(mut self, callback: impl FnMut() + 'static) -> Self {
        self.focus_callback = Some(Box::new(callback));
        self
    }

    /// Invoked after every keystroke, once the keystroke has been committed.
    #[must_use]
    pub fn with_keyup_callback(mut self, callback: impl FnMut() + 'static) -> Self {
        self.keyup_callback = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub const fn default_lang(&self) -> &LanguageCode {
        &self.default_lang
    }

    #[must_use]
    pub fn available_languages(&self) -> &[LanguageCode] {
        &self.available_languages
    }

    #[must_use]
    pub fn is_available(&self, lang: &str) -> bool {
        self.available_languages.iter().any(|code| code == lang)
    }

    #[must_use]
    pub const fn debug(&self) -> bool {
        self.settings.debug
    }

    #[must_use]
    pub fn flag_icon(&self, lang: &LanguageCode) -> String {
        self.settings.flag_icon(lang.as_str())
    }

    pub(crate) fn call_focus(&mut self) {
        if let Some(callback) = self.focus_callback.as_mut() {
            callback();
        }
    }

    pub(crate) fn call_keyup(&mut self) {
        if let Some(callback) = self.keyup_callback.as_mut() {
            callback();
        }
    }
}

impl fmt::Debug for FieldOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldOptions")
            .field("default_lang", &self.default_lang)
            .field("available_languages", &self.available_languages)
            .field("settings", &self.settings)
            .field("focus_callback", &self.focus_callback.as_ref().map(|_| "<fn>"))
            .field("keyup_callback", &self.keyup_callback.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
