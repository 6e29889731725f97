//! HTTP client for the remote signup endpoint
//!
//! Sends the payload as `multipart/form-data` and maps the response onto
//! [`SignupResponse`] or [`SignupError`].

use super::error::SignupError;
use super::payload::SubmissionPayload;
use super::traits::{SignupResponse, SignupService};
use crate::config::TuiConfig;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::debug;

/// Client for the signup endpoint
pub struct SignupClient {
    http: reqwest::Client,
    url: String,
}

impl SignupClient {
    /// Create a client posting to `url`
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SignupError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// Create a client from the user configuration
    pub fn from_config(config: &TuiConfig) -> Result<Self, SignupError> {
        Self::new(config.signup_url(), config.request_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Convert the payload into a multipart form
pub fn multipart_form(payload: SubmissionPayload) -> Result<Form, SignupError> {
    let (fields, attachment) = payload.into_parts();
    let mut form = Form::new();
    for (key, value) in fields {
        form = form.text(key, value);
    }
    if let Some(file) = attachment {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(file.mime_type)?;
        form = form.part(file.field_name, part);
    }
    Ok(form)
}

/// Interpret a success body. The message is optional and a body that is not
/// a JSON object still counts as success.
fn parse_success(body: &str) -> SignupResponse {
    if body.trim().is_empty() {
        return SignupResponse::default();
    }
    serde_json::from_str(body).unwrap_or_else(|err| {
        debug!("Signup response is not a JSON object: {err}");
        SignupResponse::default()
    })
}

#[async_trait]
impl SignupService for SignupClient {
    async fn signup(&self, payload: SubmissionPayload) -> Result<SignupResponse, SignupError> {
        let has_image = payload.attachment().is_some();
        let form = multipart_form(payload)?;
        debug!(url = %self.url, has_image, "Posting signup form");

        let response = self.http.post(&self.url).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(parse_success(&body))
        } else {
            Err(SignupError::rejected(status.as_u16(), &body))
        }
    }
}
