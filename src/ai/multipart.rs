//! Multipart form encoding for request bodies that vendors accept as form data.

use reqwest::multipart::Form;

/// One text field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub value: String,
}

impl FormField {
    pub fn text(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// A request body sent as `multipart/form-data`.
///
/// Field order is deterministic; boundary framing is left to reqwest.
pub trait MultipartFormEncodable {
    fn form_fields(&self) -> Vec<FormField>;

    fn to_multipart_form(&self) -> Form {
        let fields = self.form_fields();
        tracing::debug!("Building multipart form with {} fields", fields.len());

        fields
            .into_iter()
            .fold(Form::new(), |form, field| form.text(field.name, field.value))
    }
}
