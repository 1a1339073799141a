//! Multipart form assembly.
//!
//! Part order is fixed when the spec is built, so a given spec always
//! produces the same body. Absent optional parts are omitted entirely
//! rather than sent empty.

use redcell_shared::dto::FilePayload;

#[derive(Debug, Clone, Default)]
pub struct FormSpec {
    parts: Vec<FormPart>,
}

#[derive(Debug, Clone)]
enum FormPart {
    Text {
        name: &'static str,
        value: String,
    },
    File {
        name: &'static str,
        file_name: String,
        content: Vec<u8>,
    },
}

impl FormSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name,
            value: value.into(),
        });
        self
    }

    pub fn maybe_text(self, name: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.text(name, value),
            None => self,
        }
    }

    /// File part carrying the uploader's original filename.
    pub fn file(mut self, name: &'static str, payload: &FilePayload) -> Self {
        self.parts.push(FormPart::File {
            name,
            file_name: payload.file_name.clone(),
            content: payload.content.clone(),
        });
        self
    }

    pub fn maybe_file(self, name: &'static str, payload: Option<&FilePayload>) -> Self {
        match payload {
            Some(payload) => self.file(name, payload),
            None => self,
        }
    }

    /// Part names in wire order.
    pub fn part_names(&self) -> Vec<&'static str> {
        self.parts
            .iter()
            .map(|part| match part {
                FormPart::Text { name, .. } | FormPart::File { name, .. } => *name,
            })
            .collect()
    }

    pub(crate) fn into_multipart(self) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();
        for part in self.parts {
            form = match part {
                FormPart::Text { name, value } => form.text(name, value),
                FormPart::File {
                    name,
                    file_name,
                    content,
                } => form.part(
                    name,
                    reqwest::multipart::Part::bytes(content).file_name(file_name),
                ),
            };
        }
        form
    }
}
