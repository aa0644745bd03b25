//! Per-language indicator state handed to the view renderer.

use std::collections::{
    BTreeMap,
    BTreeSet,
};

use serde::Serialize;

use crate::config::FieldOptions;
use crate::input::translation::TranslationStore;
use crate::types::LanguageCode;

/// Everything a renderer needs to draw the language controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorRefresh {
    /// Available languages in configured order.
    pub languages: Vec<LanguageCode>,
    /// Language bound to the visible surface.
    pub active: LanguageCode,
    /// Available languages with a non-empty translation.
    pub translated: BTreeSet<LanguageCode>,
    /// Flag icon of each available language.
    pub icons: BTreeMap<LanguageCode, String>,
}

/// Display state of a single language control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageIndicator {
    pub code: LanguageCode,
    /// `imgPath + code + "." + imgExt`
    pub icon: String,
    /// Has content; drawn at full weight.
    pub translated: bool,
    /// Currently being edited; drawn with emphasis.
    pub active: bool,
}

impl IndicatorRefresh {
    /// Derives the indicator state of the field's languages from `store`.
    #[must_use]
    pub fn derive(options: &FieldOptions, active: &LanguageCode, store: &TranslationStore) -> Self {
        let languages = options.available_languages();
        let translated = languages
            .iter()
            .filter(|lang| store.is_translated(lang.as_str()))
            .cloned()
            .collect();
        let icons = languages.iter().map(|lang| (lang.clone(), options.flag_icon(lang))).collect();
        Self { languages: languages.to_vec(), active: active.clone(), translated, icons }
    }

    /// One indicator per language, in configured order.
    pub fn indicators(&self) -> impl Iterator<Item = LanguageIndicator> + '_ {
        self.languages.iter().map(|code| LanguageIndicator {
            code: code.clone(),
            icon: self.icons.get(code).cloned().unwrap_or_default(),
            translated: self.translated.contains(code),
            active: *code == self.active,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::config::FieldSettings;
    use crate::test_utils::{
        options,
        store_of,
    };

    #[googletest::test]
    fn derive_marks_translated_and_active() {
        let field_options = options(&["en", "es", "fr"], "en");
        let store = store_of(&[("en", "Hello"), ("es", ""), ("ja", "こんにちは")]);
        let active = LanguageCode::parse("es").unwrap();

        let refresh = IndicatorRefresh::derive(&field_options, &active, &store);
        let indicators: Vec<_> = refresh.indicators().collect();

        expect_that!(
            indicators.iter().map(|i| i.code.to_string()).collect::<Vec<_>>(),
            elements_are![eq("en"), eq("es"), eq("fr")]
        );
        assert_eq!(
            indicators.iter().map(|i| i.translated).collect::<Vec<_>>(),
            vec![true, false, false]
        );
        assert_eq!(
            indicators.iter().map(|i| i.active).collect::<Vec<_>>(),
            vec![false, true, false]
        );
    }

    #[googletest::test]
    fn translated_set_ignores_unconfigured_languages() {
        let field_options = options(&["en"], "en");
        let store = store_of(&[("ja", "こんにちは")]);

        let refresh =
            IndicatorRefresh::derive(&field_options, field_options.default_lang(), &store);

        expect_that!(refresh.translated.is_empty(), eq(true));
    }

    #[rstest]
    #[case::defaults("flags/", "png", ["flags/en.png", "flags/pt-BR.png"])]
    #[case::cdn("https://cdn.example.com/", "svg", [
        "https://cdn.example.com/en.svg",
        "https://cdn.example.com/pt-BR.svg",
    ])]
    fn indicators_carry_flag_icons(
        #[case] img_path: &str,
        #[case] img_ext: &str,
        #[case] expected: [&str; 2],
    ) {
        let settings = FieldSettings {
            default_lang: "en".to_string(),
            available_languages: vec!["en".to_string(), "pt-BR".to_string()],
            img_path: img_path.to_string(),
            img_ext: img_ext.to_string(),
            ..FieldSettings::default()
        };
        let field_options = FieldOptions::from_settings(settings).unwrap();

        let refresh = IndicatorRefresh::derive(
            &field_options,
            field_options.default_lang(),
            &TranslationStore::default(),
        );

        let icons: Vec<String> = refresh.indicators().map(|i| i.icon).collect();
        assert_eq!(icons, expected.map(String::from).to_vec());
    }

    #[googletest::test]
    fn indicator_serializes_for_hosts() {
        let indicator = LanguageIndicator {
            code: LanguageCode::parse("es").unwrap(),
            icon: "flags/es.png".to_string(),
            translated: true,
            active: false,
        };

        expect_that!(
            serde_json::to_string(&indicator).unwrap(),
            eq(r#"{"code":"es","icon":"flags/es.png","translated":true,"active":false}"#)
        );
    }
}
