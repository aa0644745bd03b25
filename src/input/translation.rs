//! Canonical translation store for a single multi-language field.
//!
//! The store is the one value a surrounding form submits: a JSON object that
//! maps language codes to translated text, e.g. `{"en":"Hello","es":"Hola"}`.

use std::collections::BTreeMap;

use serde_json::{
    Map,
    Value,
};
use thiserror::Error;

use crate::types::LanguageCode;

/// Defines errors that may occur while decoding a canonical value
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The raw value is absent or blank, i.e. the field was never initialized
    #[error("Canonical value is empty")]
    Empty,
    /// The raw value is not a JSON object whose values are all strings
    #[error("Canonical value is not a string-to-string mapping: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Mapping from language code to translated text.
///
/// A missing key means "no translation yet". Keys decoded from a canonical
/// value are kept verbatim even when they are not configured languages, so a
/// decode followed by a serialize never drops data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationStore {
    entries: BTreeMap<String, String>,
}

impl TranslationStore {
    /// Creates the store used when no usable canonical value exists: a single
    /// empty entry under `default_lang`.
    #[must_use]
    pub fn seeded(default_lang: &LanguageCode) -> Self {
        let mut store = Self::default();
        store.set(default_lang.as_str(), "");
        store
    }

    /// Returns the text for `lang`, or the empty string if there is none.
    #[must_use]
    pub fn get(&self, lang: &str) -> &str {
        self.entries.get(lang).map_or("", String::as_str)
    }

    /// Inserts or overwrites the text for `lang`. Any text is accepted.
    pub fn set(&mut self, lang: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(lang.into(), text.into());
    }

    /// Whether `lang` has a non-empty translation.
    ///
    /// An empty entry and a missing entry are both "not translated".
    #[must_use]
    pub fn is_translated(&self, lang: &str) -> bool {
        !self.get(lang).is_empty()
    }

    /// Whether an entry (possibly empty) exists for `lang`.
    #[must_use]
    pub fn contains(&self, lang: &str) -> bool {
        self.entries.contains_key(lang)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(lang, text)| (lang.as_str(), text.as_str()))
    }

    /// Encodes the whole mapping as a JSON object.
    ///
    /// Keys are emitted in sorted order, but consumers must not rely on it.
    #[must_use]
    pub fn serialize(&self) -> String {
        let object: Map<String, Value> = self
            .entries
            .iter()
            .map(|(lang, text)| (lang.clone(), Value::String(text.clone())))
            .collect();
        Value::Object(object).to_string()
    }

    /// Decodes a canonical value.
    ///
    /// # Errors
    /// - [`DecodeError::Empty`] if `raw` is blank
    /// - [`DecodeError::Malformed`] if `raw` is not a JSON object of strings
    ///   (arrays, numbers, `null`, nested objects and non-string values are
    ///   all rejected)
    pub fn deserialize(raw: &str) -> Result<Self, DecodeError> {
        if raw.trim().is_empty() {
            return Err(DecodeError::Empty);
        }

        let entries: BTreeMap<String, String> = serde_json::from_str(raw)?;
        Ok(Self { entries })
    }
}

impl FromIterator<(String, String)> for TranslationStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::test_utils::store_of;

    #[googletest::test]
    fn get_missing_language_is_empty() {
        let store = store_of(&[("en", "Hello")]);

        expect_that!(store.get("en").to_string(), eq("Hello"));
        expect_that!(store.get("fr").to_string(), eq(""));
        expect_that!(store.contains("fr"), eq(false));
    }

    #[googletest::test]
    fn set_overwrites_existing_entry() {
        let mut store = store_of(&[("en", "Hello")]);

        store.set("en", "Hi");
        store.set("es", "");

        expect_that!(store.get("en").to_string(), eq("Hi"));
        expect_that!(store.contains("es"), eq(true));
        expect_that!(store.len(), eq(2));
    }

    #[googletest::test]
    fn seeded_store_has_single_empty_default_entry() {
        let store = TranslationStore::seeded(&LanguageCode::parse("en").unwrap());

        assert_eq!(store, store_of(&[("en", "")]));
        expect_that!(store.serialize(), eq(r#"{"en":""}"#));
    }

    #[rstest]
    #[case::missing("fr", false)]
    #[case::empty("es", false)]
    #[case::whitespace("de", true)]
    #[case::text("en", true)]
    fn is_translated(#[case] lang: &str, #[case] expected: bool) {
        let store = store_of(&[("en", "Hello"), ("es", ""), ("de", " ")]);

        assert_eq!(store.is_translated(lang), expected);
    }

    #[googletest::test]
    fn serialize_then_deserialize_keeps_every_entry() {
        let store = store_of(&[
            ("en", "Hello"),
            ("es", "¡Hola!"),
            ("ja", "こんにちは"),
            ("fr", ""),
            ("quote", "say \"hi\"\n"),
        ]);

        let decoded = TranslationStore::deserialize(&store.serialize()).unwrap();

        for (lang, text) in store.entries() {
            expect_that!(decoded.get(lang).to_string(), eq(text));
        }
        assert_eq!(decoded, store);
    }

    #[googletest::test]
    fn deserialize_ignores_key_order() {
        let a = TranslationStore::deserialize(r#"{"es":"Hola","en":"Hello"}"#).unwrap();
        let b = TranslationStore::deserialize(r#"{"en":"Hello","es":"Hola"}"#).unwrap();

        assert_eq!(a, b);
    }

    #[googletest::test]
    fn deserialize_keeps_unconfigured_keys() {
        let store = TranslationStore::deserialize(r#"{"en":"Hello","x-custom key":"?"}"#).unwrap();

        expect_that!(store.get("x-custom key").to_string(), eq("?"));
    }

    #[rstest]
    #[case::absent("")]
    #[case::blank("   \n")]
    fn deserialize_empty_input(#[case] raw: &str) {
        assert!(matches!(TranslationStore::deserialize(raw), Err(DecodeError::Empty)));
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::array(r#"["en"]"#)]
    #[case::string(r#""en""#)]
    #[case::number("42")]
    #[case::null("null")]
    #[case::number_value(r#"{"en": 1}"#)]
    #[case::null_value(r#"{"en": null}"#)]
    #[case::nested_value(r#"{"en": {"title": "Hello"}}"#)]
    #[case::truncated(r#"{"en": "Hello""#)]
    fn deserialize_rejects_malformed_input(#[case] raw: &str) {
        assert!(matches!(TranslationStore::deserialize(raw), Err(DecodeError::Malformed(_))));
    }

    #[googletest::test]
    fn decode_error_messages() {
        let malformed = TranslationStore::deserialize("not json").unwrap_err();

        expect_that!(DecodeError::Empty.to_string(), eq("Canonical value is empty"));
        expect_that!(malformed.to_string(), contains_substring("not a string-to-string mapping"));
    }
}
