//! Multi-language field: controller state machine and its view seams.

mod controller;
mod error;
mod form;
mod indicator;
mod renderer;

pub use controller::FieldController;
pub use error::{
    FieldError,
    FormError,
};
pub use form::{
    FieldId,
    FormFields,
    SubmittedValue,
};
pub use indicator::{
    IndicatorRefresh,
    LanguageIndicator,
};
pub use renderer::{
    TextBuffer,
    ViewRenderer,
    VisibleSurface,
};
