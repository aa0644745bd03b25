//! Shared helpers for unit tests.
#![cfg(test)]

use crate::config::{
    FieldOptions,
    FieldSettings,
};
use crate::field::{
    FieldController,
    IndicatorRefresh,
    TextBuffer,
    ViewRenderer,
};
use crate::input::translation::TranslationStore;

/// Renderer that keeps every refresh it receives.
#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    pub(crate) refreshes: Vec<IndicatorRefresh>,
    pub(crate) canonical: Vec<String>,
}

impl RecordingRenderer {
    pub(crate) fn last(&self) -> Option<&IndicatorRefresh> {
        self.refreshes.last()
    }
}

impl ViewRenderer for RecordingRenderer {
    fn render_language_controls(&mut self, refresh: &IndicatorRefresh) {
        self.refreshes.push(refresh.clone());
    }

    fn show_canonical(&mut self, raw: &str) {
        self.canonical.push(raw.to_string());
    }
}

pub(crate) type TestController = FieldController<TextBuffer, RecordingRenderer>;

/// Builds validated options for `languages` with `default_lang` selected.
///
/// # Panics
/// Panics if the settings are invalid.
#[allow(clippy::unwrap_used)]
pub(crate) fn options(languages: &[&str], default_lang: &str) -> FieldOptions {
    let settings = FieldSettings {
        default_lang: default_lang.to_string(),
        available_languages: languages.iter().map(|code| (*code).to_string()).collect(),
        ..FieldSettings::default()
    };
    FieldOptions::from_settings(settings).unwrap()
}

/// Initializes a field over an in-memory surface and a recording renderer.
pub(crate) fn controller(
    languages: &[&str],
    default_lang: &str,
    raw: Option<&str>,
) -> TestController {
    FieldController::initialize(
        options(languages, default_lang),
        raw,
        TextBuffer::default(),
        RecordingRenderer::default(),
    )
}

pub(crate) fn store_of(pairs: &[(&str, &str)]) -> TranslationStore {
    pairs.iter().map(|(lang, text)| ((*lang).to_string(), (*text).to_string())).collect()
}
