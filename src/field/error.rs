use thiserror::Error;

/// Rejected field operations. The field is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Selection of a language the field does not offer
    #[error("Language '{0}' is not available for this field")]
    UnknownLanguage(String),
}

/// Rejected form operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A field with this name is already part of the form
    #[error("Field '{0}' already exists")]
    DuplicateField(String),
    /// No field with this name is part of the form
    #[error("Unknown field '{0}'")]
    UnknownField(String),
}
