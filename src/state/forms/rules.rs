//! Declarative validation rules for the signup form
//!
//! Each field maps to an ordered list of predicate/message pairs. Every
//! field is evaluated; within a field evaluation stops at the first failing
//! rule, whose message is what the form shows next to the input.

use super::field::SignupField;
use super::form_state::FormValues;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email regex"));
// `\d` would also accept non-ASCII digits
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{7,15}$").expect("phone regex"));

pub const PASSWORD_MIN_CHARS: usize = 8;

/// A single predicate with the message shown when it fails
#[derive(Clone, Copy)]
pub struct Rule {
    check: fn(&str) -> bool,
    message: &'static str,
}

impl Rule {
    pub const fn new(check: fn(&str) -> bool, message: &'static str) -> Self {
        Self { check, message }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn passes(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish()
    }
}

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn is_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

fn is_strong_password(value: &str) -> bool {
    value.chars().count() >= PASSWORD_MIN_CHARS
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

/// Field → ordered rules
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: BTreeMap<SignupField, Vec<Rule>>,
}

impl RuleSet {
    /// Rules for the account registration form
    pub fn signup() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(
            SignupField::Name,
            vec![Rule::new(is_present, "Please input your name!")],
        );
        rules.insert(
            SignupField::Email,
            vec![
                Rule::new(is_present, "Please input your email address!"),
                Rule::new(is_email, "Enter a valid email"),
            ],
        );
        rules.insert(
            SignupField::Phone,
            vec![
                Rule::new(is_present, "Please input your phone!"),
                Rule::new(is_phone, "Enter valid phone number"),
            ],
        );
        rules.insert(
            SignupField::Password,
            vec![
                Rule::new(is_present, "Please input your password!"),
                Rule::new(
                    is_strong_password,
                    "Password must be at least 8 characters, include one uppercase letter and one number.",
                ),
            ],
        );
        Self { rules }
    }

    /// Check one value; returns the first failing message
    pub fn check(&self, field: SignupField, value: &str) -> Result<(), &'static str> {
        let Some(rules) = self.rules.get(&field) else {
            return Ok(());
        };
        match rules.iter().find(|rule| !rule.passes(value)) {
            Some(rule) => Err(rule.message()),
            None => Ok(()),
        }
    }

    /// Evaluate every field of the form
    pub fn validate(&self, values: &FormValues) -> ValidationReport {
        let errors = SignupField::TEXT
            .iter()
            .filter_map(|field| {
                self.check(*field, values.get(*field))
                    .err()
                    .map(|message| (*field, message))
            })
            .collect();
        ValidationReport { errors }
    }

    /// Validate and, on success, wrap the values so they can be submitted
    pub fn validated(&self, values: FormValues) -> Result<ValidatedForm, ValidationReport> {
        let report = self.validate(&values);
        if report.is_valid() {
            Ok(ValidatedForm { values })
        } else {
            Err(report)
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::signup()
    }
}

/// Outcome of validating the whole form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<SignupField, &'static str>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: SignupField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn failing_fields(&self) -> impl Iterator<Item = SignupField> + '_ {
        self.errors.keys().copied()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Form values that passed every rule. Only [`RuleSet::validated`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    values: FormValues,
}

impl ValidatedForm {
    pub fn values(&self) -> &FormValues {
        &self.values
    }
}
