//! Headless host driving multi-language fields from JSON events.
//!
//! Reads one event per line and answers each with one JSON line:
//!
//! ```text
//! {"event":"init","field":"title"}
//! {"event":"input","field":"title","text":"hello"}
//! {"event":"select","field":"title","lang":"es"}
//! {"event":"blur","field":"title"}
//! {"event":"focus","field":"title"}
//! {"event":"submit"}
//! ```

use std::io::{
    BufRead,
    Write,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::config::{
    ConfigError,
    FieldOptions,
    FieldSettings,
};
use crate::field::{
    FieldController,
    FormError,
    FormFields,
    IndicatorRefresh,
    LanguageIndicator,
    SubmittedValue,
    TextBuffer,
    ViewRenderer,
    VisibleSurface,
};
use crate::types::LanguageCode;

/// Errors that end a host session. Rejected events are answered in-band.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A user interaction delivered by the host UI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum HostEvent {
    /// Binds a new field, optionally restoring its canonical value
    Init {
        field: String,
        #[serde(default)]
        raw: Option<String>,
    },
    /// The surface now shows `text`; handled as a keystroke
    Input { field: String, text: String },
    Select { field: String, lang: String },
    Blur { field: String },
    Focus { field: String },
    Submit,
}

/// State of one field after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub field: String,
    pub lang: LanguageCode,
    pub value: String,
    pub indicators: Vec<LanguageIndicator>,
    /// Only present in debug mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HostResponse {
    Field(FieldReport),
    Submitted { submitted: Vec<SubmittedValue> },
    Error { error: String },
}

impl HostResponse {
    fn error(error: impl ToString) -> Self {
        Self::Error { error: error.to_string() }
    }
}

/// Keeps what was last rendered so it can be reported back.
#[derive(Debug, Default)]
pub struct HostRenderer {
    last: Option<IndicatorRefresh>,
    canonical: Option<String>,
}

impl ViewRenderer for HostRenderer {
    fn render_language_controls(&mut self, refresh: &IndicatorRefresh) {
        self.last = Some(refresh.clone());
    }

    fn show_canonical(&mut self, raw: &str) {
        self.canonical = Some(raw.to_string());
    }
}

type HostField = FieldController<TextBuffer, HostRenderer>;

/// Fields of one host session.
#[derive(Debug)]
pub struct Session {
    settings: FieldSettings,
    form: FormFields<TextBuffer, HostRenderer>,
}

impl Session {
    /// # Errors
    /// Returns [`ConfigError::ValidationErrors`] if `settings` are invalid.
    pub fn new(settings: FieldSettings) -> Result<Self, ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        Ok(Self { settings, form: FormFields::new() })
    }

    /// Decodes and handles one event line.
    pub fn handle_line(&mut self, line: &str) -> HostResponse {
        match serde_json::from_str::<HostEvent>(line) {
            Ok(event) => self.handle(event),
            Err(e) => {
                tracing::warn!("Invalid event: {e}");
                HostResponse::error(format!("Invalid event: {e}"))
            }
        }
    }

    pub fn handle(&mut self, event: HostEvent) -> HostResponse {
        tracing::debug!("Handling event: {:?}", event);

        match event {
            HostEvent::Init { field, raw } => self.init_field(field, raw.as_deref()),
            HostEvent::Input { field, text } => self.with_field(&field, |controller| {
                controller.surface_mut().set_value(&text);
                controller.on_keystroke();
                Ok(())
            }),
            HostEvent::Select { field, lang } => self.with_field(&field, |controller| {
                controller.select_language(&lang).map_err(HostResponse::error)
            }),
            HostEvent::Blur { field } => self.with_field(&field, |controller| {
                controller.surface_mut().blur();
                controller.on_blur();
                Ok(())
            }),
            HostEvent::Focus { field } => self.with_field(&field, |controller| {
                controller.surface_mut().focus();
                controller.on_focus();
                Ok(())
            }),
            HostEvent::Submit => HostResponse::Submitted { submitted: self.form.submit() },
        }
    }

    fn init_field(&mut self, field: String, raw: Option<&str>) -> HostResponse {
        if self.form.find(&field).is_some() {
            return HostResponse::error(FormError::DuplicateField(field));
        }

        let options = match FieldOptions::from_settings(self.settings.clone()) {
            Ok(options) => options,
            Err(e) => return HostResponse::error(e),
        };
        let options = {
            let focus_name = field.clone();
            let keyup_name = field.clone();
            options
                .with_focus_callback(move || tracing::debug!(field = %focus_name, "Focus gained"))
                .with_keyup_callback(move || tracing::trace!(field = %keyup_name, "Key up"))
        };

        let controller =
            FieldController::initialize(options, raw, TextBuffer::default(), HostRenderer::default());
        let initial = report(&field, &controller);
        match self.form.insert(field, controller) {
            Ok(_) => HostResponse::Field(initial),
            Err(e) => HostResponse::error(e),
        }
    }

    fn with_field(
        &mut self,
        field: &str,
        apply: impl FnOnce(&mut HostField) -> Result<(), HostResponse>,
    ) -> HostResponse {
        let controller = match self.form.by_name_mut(field) {
            Ok(controller) => controller,
            Err(e) => return HostResponse::error(e),
        };
        match apply(&mut *controller) {
            Ok(()) => HostResponse::Field(report(field, controller)),
            Err(response) => response,
        }
    }

    #[must_use]
    pub const fn form(&self) -> &FormFields<TextBuffer, HostRenderer> {
        &self.form
    }
}

fn report(field: &str, controller: &HostField) -> FieldReport {
    let renderer = controller.renderer();
    let indicators = renderer.last.iter().flat_map(IndicatorRefresh::indicators).collect();

    FieldReport {
        field: field.to_string(),
        lang: controller.active_language().clone(),
        value: controller.surface().value(),
        indicators,
        canonical: renderer.canonical.clone(),
    }
}

/// Runs a session over `reader` until end of input, writing one response
/// line per non-blank input line.
///
/// # Errors
/// - Invalid settings
/// - Read or write failure
pub fn run(
    settings: FieldSettings,
    reader: impl BufRead,
    mut writer: impl Write,
) -> Result<(), HostError> {
    let mut session = Session::new(settings)?;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = session.handle_line(&line);
        serde_json::to_writer(&mut writer, &response)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }

    tracing::info!("Input closed, {} field(s) handled", session.form().len());
    Ok(())
}
