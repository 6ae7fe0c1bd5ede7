use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{
    form::{Form, FormError},
    pagination::clamp_page,
};
use crate::models::Resource;

/// Write a submitted form turns into
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mutation {
    Create(Map<String, Value>),
    Update {
        id: String,
        fields: Map<String, Value>,
    },
}

/// UI state of one resource screen.
///
/// Every transition consumes the state and returns the next one, so a screen
/// is fully described by this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState<F> {
    pub search: String,
    /// Current page, 1-based
    pub page: usize,
    /// Id of the record loaded into the form, if editing
    pub editing_id: Option<String>,
    pub form: F,
}

impl<F: Form> Default for ViewState<F> {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            editing_id: None,
            form: F::default(),
        }
    }
}

impl<F: Form> ViewState<F> {
    /// New search text; always back to the first page
    pub fn search(self, text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            page: 1,
            ..self
        }
    }

    pub fn go_to_page(self, page: usize, total_pages: usize) -> Self {
        Self {
            page: clamp_page(page, total_pages),
            ..self
        }
    }

    pub fn next_page(self, total_pages: usize) -> Self {
        let page = self.page.saturating_add(1);
        self.go_to_page(page, total_pages)
    }

    pub fn prev_page(self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Replace the form fields as typed by the user
    pub fn with_form(self, form: F) -> Self {
        Self { form, ..self }
    }

    /// Load a record into the form for editing
    pub fn edit(self, record: &F::Record) -> Self {
        Self {
            editing_id: Some(record.id().to_string()),
            form: F::from_record(record),
            ..self
        }
    }

    /// Drop the edit and clear the form
    pub fn cancel(self) -> Self {
        Self {
            editing_id: None,
            form: F::default(),
            ..self
        }
    }

    /// Turn the form into a create or update and clear it.
    ///
    /// An invalid form is reported without changing the state.
    pub fn submit(self) -> Result<(Self, Mutation), FormError> {
        let fields = self.form.to_body()?;
        let mutation = match &self.editing_id {
            Some(id) => Mutation::Update {
                id: id.clone(),
                fields,
            },
            None => Mutation::Create(fields),
        };

        Ok((self.cancel(), mutation))
    }

    /// A record was deleted; stop editing it if it was in the form
    pub fn deleted(self, id: &str) -> Self {
        if self.editing_id.as_deref() == Some(id) {
            self.cancel()
        } else {
            self
        }
    }
}
