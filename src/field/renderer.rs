//! Seams between a field controller and the host UI.
//!
//! The host owns the widgets; the controller owns one [`VisibleSurface`] and
//! one [`ViewRenderer`] and talks to them directly. Events travel the other
//! way: the host calls [`FieldController::on_keystroke`],
//! [`FieldController::on_blur`], [`FieldController::on_focus`] and
//! [`FieldController::select_language`] when the user acts.
//!
//! [`FieldController::on_keystroke`]: super::FieldController::on_keystroke
//! [`FieldController::on_blur`]: super::FieldController::on_blur
//! [`FieldController::on_focus`]: super::FieldController::on_focus
//! [`FieldController::select_language`]: super::FieldController::select_language

use super::indicator::IndicatorRefresh;

/// The editable text widget the user types into.
pub trait VisibleSurface {
    /// Current displayed text, including edits not yet committed.
    fn value(&self) -> String;

    /// Replaces the displayed text.
    fn set_value(&mut self, value: &str);

    /// Moves input focus to the surface.
    ///
    /// Does not count as a focus event; hosts report focus through
    /// [`FieldController::on_focus`](super::FieldController::on_focus).
    fn focus(&mut self) {}
}

/// Draws the per-language selector controls.
pub trait ViewRenderer {
    /// Renders one control per language in `refresh.languages`, marking the
    /// active one and the ones with content.
    fn render_language_controls(&mut self, refresh: &IndicatorRefresh);

    /// Receives the canonical value after every commit when the field runs in
    /// debug mode.
    fn show_canonical(&mut self, _raw: &str) {}
}

/// In-memory [`VisibleSurface`] for headless hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    focused: bool,
}

impl TextBuffer {
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }
}

impl VisibleSurface for TextBuffer {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn set_value(&mut self, value: &str) {
        value.clone_into(&mut self.text);
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn text_buffer_tracks_value_and_focus() {
        let mut buffer = TextBuffer::default();

        buffer.set_value("hello");
        buffer.focus();

        expect_that!(buffer.value(), eq("hello"));
        expect_that!(buffer.is_focused(), eq(true));

        buffer.blur();
        expect_that!(buffer.is_focused(), eq(false));
    }
}
