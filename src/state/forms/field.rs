//! Form field value objects

/// Every input on the signup screen, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SignupField {
    Name,
    Email,
    Phone,
    Password,
    Address,
    State,
    City,
    Country,
    Pincode,
    ProfileImage,
}

impl SignupField {
    /// Text inputs, in the order they are sent to the server
    pub const TEXT: [SignupField; 9] = [
        SignupField::Name,
        SignupField::Email,
        SignupField::Phone,
        SignupField::Password,
        SignupField::Address,
        SignupField::State,
        SignupField::City,
        SignupField::Country,
        SignupField::Pincode,
    ];

    /// Multipart field name
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::Address => "address",
            Self::State => "state",
            Self::City => "city",
            Self::Country => "country",
            Self::Pincode => "pincode",
            Self::ProfileImage => "profile_image",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email address",
            Self::Phone => "Phone",
            Self::Password => "Password",
            Self::Address => "Address",
            Self::State => "State",
            Self::City => "City",
            Self::Country => "Country",
            Self::Pincode => "Pincode",
            Self::ProfileImage => "Profile Image",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Type your name",
            Self::Email => "Type your email address",
            Self::Phone => "Type your phone number",
            Self::Password => "Type your password",
            Self::Address => "Street, Apt",
            Self::State => "State",
            Self::City => "City",
            Self::Country => "Country",
            Self::Pincode => "Pincode",
            Self::ProfileImage => "Path to a PNG/JPG up to ~5MB, Enter to select",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Self::Name | Self::Email | Self::Phone | Self::Password
        )
    }
}

/// Represents a single text input with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub field: SignupField,
    pub value: String,
    /// Rendered masked (password input)
    pub is_secret: bool,
}

impl FormField {
    /// Create an empty field for the given input
    pub fn new(field: SignupField) -> Self {
        Self {
            field,
            value: String::new(),
            is_secret: matches!(field, SignupField::Password),
        }
    }

    /// Create a field with an initial value
    #[cfg(test)]
    pub fn with_value(field: SignupField, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::new(field)
        }
    }

    pub fn label(&self) -> &'static str {
        self.field.label()
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_secret {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
