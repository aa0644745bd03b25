//! i18n-input
//!
//! Multi-language editing for single-value text fields: one visible editable
//! surface, one canonical JSON value holding every translation.

pub mod config;
pub mod field;
pub mod host;
pub mod input;
mod test_utils;
pub mod types;

pub use field::FieldController;
pub use input::translation::{
    DecodeError,
    TranslationStore,
};
