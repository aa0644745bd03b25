//! A set of named multi-language fields submitted together.

use serde::Serialize;

use super::FieldController;
use super::error::FormError;
use super::renderer::{
    ViewRenderer,
    VisibleSurface,
};

/// Handle of a field inside a [`FormFields`], returned on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

/// Name and canonical value of one submitted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedValue {
    pub name: String,
    pub value: String,
}

#[derive(Debug)]
struct NamedField<S, R> {
    name: String,
    controller: FieldController<S, R>,
}

/// Owns the fields of one form, in insertion order.
#[derive(Debug)]
pub struct FormFields<S, R> {
    fields: Vec<NamedField<S, R>>,
}

impl<S, R> Default for FormFields<S, R> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<S, R> FormFields<S, R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `controller` under `name`.
    ///
    /// # Errors
    /// Returns [`FormError::DuplicateField`] if `name` is already taken.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        controller: FieldController<S, R>,
    ) -> Result<FieldId, FormError> {
        let name = name.into();
        if self.find(&name).is_some() {
            return Err(FormError::DuplicateField(name));
        }
        self.fields.push(NamedField { name, controller });
        Ok(FieldId(self.fields.len() - 1))
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<FieldId> {
        self.fields.iter().position(|field| field.name == name).map(FieldId)
    }

    /// Looks up a field by name.
    ///
    /// # Errors
    /// Returns [`FormError::UnknownField`] if there is no such field.
    pub fn by_name_mut(&mut self, name: &str) -> Result<&mut FieldController<S, R>, FormError> {
        self.fields
            .iter_mut()
            .find(|field| field.name == name)
            .map(|field| &mut field.controller)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    #[must_use]
    pub fn get(&self, id: FieldId) -> Option<&FieldController<S, R>> {
        self.fields.get(id.0).map(|field| &field.controller)
    }

    pub fn get_mut(&mut self, id: FieldId) -> Option<&mut FieldController<S, R>> {
        self.fields.get_mut(id.0).map(|field| &mut field.controller)
    }

    #[must_use]
    pub fn name(&self, id: FieldId) -> Option<&str> {
        self.fields.get(id.0).map(|field| field.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<S: VisibleSurface, R: ViewRenderer> FormFields<S, R> {
    /// Flushes every field and collects the values the form submits.
    pub fn submit(&mut self) -> Vec<SubmittedValue> {
        self.fields
            .iter_mut()
            .map(|field| SubmittedValue {
                name: field.name.clone(),
                value: field.controller.serialize_for_submit(),
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;
    use crate::field::{
        TextBuffer,
        VisibleSurface,
    };
    use crate::test_utils::{
        RecordingRenderer,
        controller,
    };

    fn form() -> FormFields<TextBuffer, RecordingRenderer> {
        let mut form = FormFields::new();
        form.insert("title", controller(&["en", "es"], "en", None)).unwrap();
        form.insert("summary", controller(&["en", "es"], "en", Some(r#"{"es":"Resumen"}"#)))
            .unwrap();
        form
    }

    #[googletest::test]
    fn insert_hands_out_distinct_ids() {
        let form = form();

        let title = form.find("title").unwrap();
        let summary = form.find("summary").unwrap();

        expect_that!(title == summary, eq(false));
        expect_that!(form.name(summary).map(str::to_string), some(eq("summary")));
        expect_that!(form.len(), eq(2));
    }

    #[googletest::test]
    fn insert_rejects_duplicate_name() {
        let mut form = form();

        let result = form.insert("title", controller(&["en"], "en", None));

        assert_eq!(result, Err(FormError::DuplicateField("title".to_string())));
        expect_that!(form.len(), eq(2));
    }

    #[googletest::test]
    fn by_name_mut_unknown_field() {
        let mut form = form();

        let result = form.by_name_mut("body").map(|_| ());

        assert_eq!(result, Err(FormError::UnknownField("body".to_string())));
    }

    #[googletest::test]
    fn submit_flushes_every_field_in_order() {
        let mut form = form();
        form.by_name_mut("title").unwrap().surface_mut().set_value("Hello");
        let summary = form.find("summary").unwrap();
        form.get_mut(summary).unwrap().surface_mut().set_value("Summary");

        let submitted = form.submit();

        assert_eq!(
            submitted,
            vec![
                SubmittedValue { name: "title".to_string(), value: r#"{"en":"Hello"}"#.to_string() },
                SubmittedValue {
                    name: "summary".to_string(),
                    value: r#"{"en":"Summary","es":"Resumen"}"#.to_string()
                },
            ]
        );
    }

    #[googletest::test]
    fn fields_do_not_share_stores() {
        let mut form = form();
        let title = form.find("title").unwrap();
        let field = form.get_mut(title).unwrap();
        field.surface_mut().set_value("only title");
        field.on_keystroke();

        let summary = form.find("summary").unwrap();

        expect_that!(form.get(summary).unwrap().store().get("en").to_string(), eq(""));
    }
}
