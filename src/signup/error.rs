//! Signup failure taxonomy

use serde_json::Value;
use thiserror::Error;

/// Shown when the failure carries no usable message
pub const GENERIC_FAILURE: &str = "Signup failed. Please try again.";

/// Message fields a server may put in an error body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    pub messages: Vec<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    /// Pull the message fields out of a response body. Anything that is not
    /// a JSON object, or carries fields of the wrong shape, yields nothing.
    pub fn parse(body: &str) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
            return Self::default();
        };
        let messages = match map.get("messages") {
            Some(Value::Array(items)) => items.iter().map(message_text).collect(),
            _ => Vec::new(),
        };
        let message = map
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        Self { messages, message }
    }

    /// First listed message, then the single message
    pub fn best_message(&self) -> Option<&str> {
        self.messages
            .first()
            .map(String::as_str)
            .filter(|m| !m.trim().is_empty())
            .or_else(|| self.message.as_deref().filter(|m| !m.trim().is_empty()))
    }
}

/// Text of one `messages` entry. Strings are taken as is, other values in
/// their JSON form so the first entry is never skipped.
fn message_text(item: &Value) -> String {
    match item {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Everything that can go wrong between submit and outcome
#[derive(Debug, Error)]
pub enum SignupError {
    /// Connection, timeout or body read failure
    #[error("signup request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("signup rejected with status {status}")]
    Rejected { status: u16, body: ErrorBody },

    /// Background request task panicked or was aborted
    #[error("signup task failed: {0}")]
    Task(String),

    #[error("signup cancelled")]
    Cancelled,
}

impl SignupError {
    /// Build a rejection from a status code and raw body
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected {
            status,
            body: ErrorBody::parse(body),
        }
    }

    /// Message for the error notification
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { body, .. } => body
                .best_message()
                .unwrap_or(GENERIC_FAILURE)
                .to_string(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod error_body {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_parse_messages_list() {
            let body = ErrorBody::parse(r#"{"messages": ["Email already used", "Phone taken"]}"#);
            assert_eq!(body.messages, vec!["Email already used", "Phone taken"]);
            assert_eq!(body.best_message(), Some("Email already used"));
        }

        #[test]
        fn test_parse_single_message() {
            let body = ErrorBody::parse(r#"{"message": "Invalid phone"}"#);
            assert_eq!(body.best_message(), Some("Invalid phone"));
        }

        #[test]
        fn test_list_wins_over_single_message() {
            let body = ErrorBody::parse(r#"{"messages": ["first"], "message": "second"}"#);
            assert_eq!(body.best_message(), Some("first"));
        }

        #[test]
        fn test_empty_list_falls_back_to_message() {
            let body = ErrorBody::parse(r#"{"messages": [], "message": "second"}"#);
            assert_eq!(body.best_message(), Some("second"));
        }

        #[test]
        fn test_wrong_shapes_are_ignored() {
            let body = ErrorBody::parse(r#"{"messages": "not a list", "message": 42}"#);
            assert_eq!(body, ErrorBody::default());
            assert_eq!(body.best_message(), None);
        }

        #[test]
        fn test_first_entry_wins_even_when_not_a_string() {
            let body = ErrorBody::parse(r#"{"messages": [42, "x"]}"#);
            assert_eq!(body.messages, vec!["42", "x"]);
            assert_eq!(body.best_message(), Some("42"));
        }

        #[test]
        fn test_null_first_entry_falls_back_to_message() {
            let body = ErrorBody::parse(r#"{"messages": [null, "x"], "message": "single"}"#);
            assert_eq!(body.best_message(), Some("single"));
        }

        #[test]
        fn test_non_json_body() {
            assert_eq!(ErrorBody::parse("<html>502</html>"), ErrorBody::default());
            assert_eq!(ErrorBody::parse(""), ErrorBody::default());
            assert_eq!(ErrorBody::parse("[1, 2]"), ErrorBody::default());
        }
    }

    mod user_message {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_rejection_uses_first_listed_message() {
            let err = SignupError::rejected(409, r#"{"messages": ["Email already used"]}"#);
            assert_eq!(err.user_message(), "Email already used");
        }

        #[test]
        fn test_rejection_uses_single_message() {
            let err = SignupError::rejected(400, r#"{"message": "Bad request"}"#);
            assert_eq!(err.user_message(), "Bad request");
        }

        #[test]
        fn test_rejection_without_fields_is_generic() {
            let err = SignupError::rejected(500, "{}");
            assert_eq!(err.user_message(), GENERIC_FAILURE);
        }

        #[test]
        fn test_blank_message_is_generic() {
            let err = SignupError::rejected(500, r#"{"message": "  "}"#);
            assert_eq!(err.user_message(), GENERIC_FAILURE);
        }

        #[test]
        fn test_other_errors_are_generic() {
            assert_eq!(
                SignupError::Task("panicked".into()).user_message(),
                GENERIC_FAILURE
            );
            assert_eq!(SignupError::Cancelled.user_message(), GENERIC_FAILURE);
        }
    }
}
