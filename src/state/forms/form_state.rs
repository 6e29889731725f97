//! Form state management for the signup screen

use super::field::{FormField, SignupField};
use super::image::{ImageRejected, ImageSelection, SelectedImage};
use super::rules::{RuleSet, ValidatedForm, ValidationReport};
use std::collections::BTreeSet;
use std::path::Path;

/// Separator for handing several candidate paths to the image input at once
const IMAGE_PATH_SEPARATOR: char = ';';

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Snapshot of what the user typed. Optional inputs left blank are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub address: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub pincode: Option<String>,
}

impl FormValues {
    /// Text value of a field, empty when absent
    pub fn get(&self, field: SignupField) -> &str {
        match field {
            SignupField::Name => &self.name,
            SignupField::Email => &self.email,
            SignupField::Phone => &self.phone,
            SignupField::Password => &self.password,
            SignupField::Address => self.address.as_deref().unwrap_or_default(),
            SignupField::State => self.state.as_deref().unwrap_or_default(),
            SignupField::City => self.city.as_deref().unwrap_or_default(),
            SignupField::Country => self.country.as_deref().unwrap_or_default(),
            SignupField::Pincode => self.pincode.as_deref().unwrap_or_default(),
            SignupField::ProfileImage => "",
        }
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// The account registration form
///
/// Field indices: 0..=8 text inputs, 9 image path input, 10 submit button.
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub fields: Vec<FormField>,
    /// Path being typed into the image input
    pub image_input: FormField,
    pub active_field_index: usize,
    image: ImageSelection,
    image_error: Option<String>,
    rules: RuleSet,
    report: ValidationReport,
    touched: BTreeSet<SignupField>,
    submit_attempted: bool,
}

impl SignupForm {
    pub const IMAGE_INDEX: usize = 9;
    pub const SUBMIT_INDEX: usize = 10;

    pub fn new() -> Self {
        let fields: Vec<FormField> = SignupField::TEXT.iter().map(|f| FormField::new(*f)).collect();
        let rules = RuleSet::signup();
        let mut form = Self {
            fields,
            image_input: FormField::new(SignupField::ProfileImage),
            active_field_index: 0,
            image: ImageSelection::default(),
            image_error: None,
            rules,
            report: ValidationReport::default(),
            touched: BTreeSet::new(),
            submit_attempted: false,
        };
        form.revalidate();
        form
    }

    /// Current values, recomputed from the inputs
    pub fn values(&self) -> FormValues {
        let text = |field: SignupField| {
            self.fields
                .iter()
                .find(|f| f.field == field)
                .map(|f| f.as_text())
                .unwrap_or_default()
        };
        FormValues {
            name: text(SignupField::Name).to_string(),
            email: text(SignupField::Email).to_string(),
            phone: text(SignupField::Phone).to_string(),
            password: text(SignupField::Password).to_string(),
            address: optional(text(SignupField::Address)),
            state: optional(text(SignupField::State)),
            city: optional(text(SignupField::City)),
            country: optional(text(SignupField::Country)),
            pincode: optional(text(SignupField::Pincode)),
        }
    }

    #[cfg(test)]
    pub fn set_value(&mut self, field: SignupField, value: &str) {
        if let Some(f) = self.fields.iter_mut().find(|f| f.field == field) {
            f.value = value.to_string();
            self.touched.insert(field);
            self.revalidate();
        }
    }

    fn revalidate(&mut self) {
        self.report = self.rules.validate(&self.values());
    }

    #[cfg(test)]
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Message to show next to a field. Untouched fields stay quiet until a
    /// submit is attempted.
    pub fn visible_error(&self, field: SignupField) -> Option<&str> {
        if field == SignupField::ProfileImage {
            return self.image_error.as_deref();
        }
        if !self.submit_attempted && !self.touched.contains(&field) {
            return None;
        }
        self.report.error_for(field)
    }

    pub fn is_on_image_input(&self) -> bool {
        self.active_field_index == Self::IMAGE_INDEX
    }

    pub fn is_on_submit_button(&self) -> bool {
        self.active_field_index == Self::SUBMIT_INDEX
    }

    /// Type a character into the active input
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
            let edited = field.field;
            self.mark_edited(edited);
        }
    }

    /// Delete the last character of the active input
    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
            let edited = field.field;
            self.mark_edited(edited);
        }
    }

    fn mark_edited(&mut self, field: SignupField) {
        if field == SignupField::ProfileImage {
            self.image_error = None;
            return;
        }
        self.touched.insert(field);
        self.revalidate();
    }

    /// Select the image(s) typed into the image input. Rejected candidates
    /// leave the current selection untouched.
    pub fn select_image(&mut self, max_bytes: u64) -> Result<(), ImageRejected> {
        let input = self.image_input.as_text().to_string();
        let mut accepted = Vec::new();
        for candidate in input
            .split(IMAGE_PATH_SEPARATOR)
            .map(str::trim)
            .filter(|c| !c.is_empty())
        {
            match SelectedImage::load(Path::new(candidate), max_bytes) {
                Ok(image) => accepted.push(image),
                Err(err) => {
                    self.image_error = Some(err.to_string());
                    return Err(err);
                }
            }
        }
        if accepted.is_empty() {
            self.image_error = Some(ImageRejected::EmptyPath.to_string());
            return Err(ImageRejected::EmptyPath);
        }

        self.image.extend(accepted);
        self.image_input.clear();
        self.image_error = None;
        Ok(())
    }

    /// Put an already loaded image into the selection
    #[cfg(test)]
    pub fn add_image(&mut self, image: SelectedImage) {
        self.image.add(image);
        self.image_error = None;
    }

    pub fn clear_image(&mut self) {
        self.image.clear();
        self.image_error = None;
    }

    pub fn image(&self) -> &ImageSelection {
        &self.image
    }

    /// Validate every field for submission. Marks the attempt so all
    /// failing messages become visible.
    pub fn attempt_submit(&mut self) -> Result<ValidatedForm, ValidationReport> {
        self.submit_attempted = true;
        self.revalidate();
        self.rules.validated(self.values())
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        Self::SUBMIT_INDEX + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_INDEX);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            Self::IMAGE_INDEX => Some(&mut self.image_input),
            Self::SUBMIT_INDEX => None,
            i => self.fields.get_mut(i),
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            Self::IMAGE_INDEX => Some(&self.image_input),
            Self::SUBMIT_INDEX => None,
            i => self.fields.get(i),
        }
    }
}
