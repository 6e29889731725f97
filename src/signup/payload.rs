//! Submission payload assembly
//!
//! Pure transformation from validated form values to what goes on the wire.

use crate::state::{ImageSelection, SignupField, ValidatedForm};

/// Multipart field carrying the profile image
pub const PROFILE_IMAGE_FIELD: &str = "profile_image";

/// A binary file part
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub field_name: &'static str,
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("field_name", &self.field_name)
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Transmission-ready registration request
#[derive(Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    fields: Vec<(&'static str, String)>,
    attachment: Option<Attachment>,
}

impl SubmissionPayload {
    /// Every text field is present, optional ones as `""` when left blank.
    /// At most one attachment, the latest selected image.
    pub fn build(form: &ValidatedForm, image: &ImageSelection) -> Self {
        let values = form.values();
        let fields = SignupField::TEXT
            .iter()
            .map(|field| (field.key(), values.get(*field).to_string()))
            .collect();
        let attachment = image.latest().map(|image| Attachment {
            field_name: PROFILE_IMAGE_FIELD,
            file_name: image.file_name.clone(),
            mime_type: image.mime_type,
            bytes: image.bytes.clone(),
        });
        Self { fields, attachment }
    }

    /// Text fields in wire order
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    #[cfg(test)]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn into_parts(self) -> (Vec<(&'static str, String)>, Option<Attachment>) {
        (self.fields, self.attachment)
    }
}

impl std::fmt::Debug for SubmissionPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<_> = self.fields.iter().map(|(key, _)| *key).collect();
        f.debug_struct("SubmissionPayload")
            .field("fields", &keys)
            .field("attachment", &self.attachment)
            .finish()
    }
}
