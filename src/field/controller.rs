//! State machine keeping a field's store, active language and visible text
//! in sync.

use super::error::FieldError;
use super::indicator::IndicatorRefresh;
use super::renderer::{
    ViewRenderer,
    VisibleSurface,
};
use crate::config::FieldOptions;
use crate::input::translation::{
    DecodeError,
    TranslationStore,
};
use crate::types::LanguageCode;

/// Mediates between one visible editable surface and the canonical
/// [`TranslationStore`] of a multi-language field.
///
/// Every transition commits the surface text into the store under the active
/// language before it returns, so the store never lags behind what the user
/// has typed once an event has been handled.
#[derive(Debug)]
pub struct FieldController<S, R> {
    options: FieldOptions,
    store: TranslationStore,
    active: LanguageCode,
    /// Last text pulled from or pushed to the surface for `active`
    visible_value: String,
    surface: S,
    renderer: R,
}

impl<S: VisibleSurface, R: ViewRenderer> FieldController<S, R> {
    /// Binds a field to `surface` and `renderer`.
    ///
    /// `raw` is the canonical value the field starts from (e.g. the value
    /// restored on page reload). An absent or undecodable value is replaced
    /// by a store holding an empty entry for the default language; this
    /// recovery is never reported to the caller.
    pub fn initialize(options: FieldOptions, raw: Option<&str>, surface: S, renderer: R) -> Self {
        let store = match TranslationStore::deserialize(raw.unwrap_or_default()) {
            Ok(store) => store,
            Err(DecodeError::Empty) => {
                tracing::debug!("No canonical value, starting from an empty store");
                TranslationStore::seeded(options.default_lang())
            }
            Err(e) => {
                tracing::warn!("Discarding undecodable canonical value: {e}");
                TranslationStore::seeded(options.default_lang())
            }
        };

        let active = options.default_lang().clone();
        let visible_value = store.get(active.as_str()).to_string();

        let mut controller = Self { options, store, active, visible_value, surface, renderer };
        controller.surface.set_value(&controller.visible_value);
        controller.refresh();
        tracing::debug!(lang = %controller.active, "Field initialized");
        controller
    }

    /// Handles a keystroke: commits the live surface text and then runs the
    /// keyup callback.
    pub fn on_keystroke(&mut self) {
        self.commit();
        self.refresh();
        self.options.call_keyup();
    }

    /// Switches the visible surface to `lang`.
    ///
    /// The current text is committed under the previous language first.
    /// Selecting the already active language only commits and refreshes.
    ///
    /// # Errors
    /// Returns [`FieldError::UnknownLanguage`] if `lang` is not one of the
    /// available languages. Nothing is committed in that case.
    pub fn select_language(&mut self, lang: &str) -> Result<(), FieldError> {
        let Some(next) = self.options.available_languages().iter().find(|code| *code == lang)
        else {
            tracing::warn!(lang, "Rejected selection of unavailable language");
            return Err(FieldError::UnknownLanguage(lang.to_string()));
        };
        let next = next.clone();

        self.commit();
        tracing::debug!(from = %self.active, to = %next, "Switching language");
        self.active = next;
        self.store.get(self.active.as_str()).clone_into(&mut self.visible_value);
        self.surface.set_value(&self.visible_value);
        self.refresh();
        self.surface.focus();
        Ok(())
    }

    /// Handles focus loss: commits without changing the active language.
    pub fn on_blur(&mut self) {
        self.commit();
        self.refresh();
    }

    /// Handles focus gain: runs the focus callback. The store is untouched.
    pub fn on_focus(&mut self) {
        self.options.call_focus();
    }

    /// Flushes pending edits and returns the canonical value to submit.
    pub fn serialize_for_submit(&mut self) -> String {
        self.on_blur();
        self.store.serialize()
    }

    /// Copies the surface text into the store under the active language.
    fn commit(&mut self) {
        self.visible_value = self.surface.value();
        self.store.set(self.active.as_str(), self.visible_value.as_str());
    }

    fn refresh(&mut self) {
        let refresh = self.indicator_refresh();
        self.renderer.render_language_controls(&refresh);
        if self.options.debug() {
            self.renderer.show_canonical(&self.store.serialize());
        }
    }
}

impl<S, R> FieldController<S, R> {
    /// Current indicator state, as last handed to the renderer.
    #[must_use]
    pub fn indicator_refresh(&self) -> IndicatorRefresh {
        IndicatorRefresh::derive(&self.options, &self.active, &self.store)
    }

    #[must_use]
    pub const fn store(&self) -> &TranslationStore {
        &self.store
    }

    #[must_use]
    pub const fn active_language(&self) -> &LanguageCode {
        &self.active
    }

    /// Text of the active language as of the last transition.
    #[must_use]
    pub fn visible_value(&self) -> &str {
        &self.visible_value
    }

    #[must_use]
    pub const fn options(&self) -> &FieldOptions {
        &self.options
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for hosts that feed typed text into the surface.
    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }
}
