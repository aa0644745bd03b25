//! Core types used throughout the project.

use std::borrow::Borrow;
use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Error returned when a string is not a usable language code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid language code '{0}': expected letters, digits, '-' or '_'")]
pub struct InvalidLanguageCode(pub String);

/// A language code such as `en`, `pt-BR` or `zh_Hant`.
///
/// Codes are compared verbatim; `en-us` and `en-US` are different languages.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Parses a language code.
    ///
    /// # Errors
    /// Returns [`InvalidLanguageCode`] when `code` is empty or contains anything
    /// other than ASCII letters, digits, `-` and `_`.
    pub fn parse(code: impl Into<String>) -> Result<Self, InvalidLanguageCode> {
        let code = code.into();
        let well_formed = !code.is_empty()
            && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if well_formed { Ok(Self(code)) } else { Err(InvalidLanguageCode(code)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = InvalidLanguageCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl Borrow<str> for LanguageCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
