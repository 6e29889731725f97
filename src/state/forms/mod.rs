//! Form domain layer
//!
//! Type-safe form handling for the signup screen: field values, the
//! declarative rule set and the profile image selection.

mod field;
mod form_state;
mod image;
mod rules;

pub use field::{FormField, SignupField};
pub use form_state::{Form, FormValues, SignupForm};
pub use image::{ImageRejected, ImageSelection, SelectedImage, DEFAULT_MAX_IMAGE_BYTES};
pub use rules::{RuleSet, ValidatedForm, ValidationReport};
