//! Transactional-mail API client.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::blocking::multipart::Form;
use tracing::debug;

use festreg_model::MailParams;

use crate::error::{NotifyError, Result};
use crate::retry::RetryPolicy;

/// HTTP request timeout for notification sends.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One outbound email.
#[derive(Debug, Clone)]
pub struct MailMessage {
    /// Recipient in `Name <email>` format.
    pub to: String,
    pub subject: String,
    pub text: String,
    /// Optional file to attach.
    pub attachment: Option<PathBuf>,
}

/// The provider's answer, recorded by the caller and never branched on.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Mail-sending API client with basic authentication.
pub struct Mailer {
    client: Client,
    params: MailParams,
    retry: RetryPolicy,
}

impl Mailer {
    pub fn new(params: MailParams) -> Result<Self> {
        Self::with_policy(params, RetryPolicy::default())
    }

    pub fn with_policy(params: MailParams, retry: RetryPolicy) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(NotifyError::from)?;
        Ok(Self {
            client,
            params,
            retry,
        })
    }

    /// POST the message, with the configured retry bound for transport
    /// failures. The provider's status code travels back in the response,
    /// successful or not.
    pub fn send(&self, message: &MailMessage) -> Result<ApiResponse> {
        self.retry.run(|| self.post(message))
    }

    fn post(&self, message: &MailMessage) -> Result<ApiResponse> {
        let mut form = Form::new()
            .text("from", self.params.sender.clone())
            .text("to", message.to.clone())
            .text("subject", message.subject.clone())
            .text("text", message.text.clone());
        if let Some(path) = &message.attachment {
            form = form
                .file("attachment", path)
                .map_err(|source| NotifyError::Attachment {
                    path: path.clone(),
                    source,
                })?;
        }

        debug!(to = %message.to, subject = %message.subject, "posting mail");
        let response = self
            .client
            .post(&self.params.api_url)
            .basic_auth(&self.params.user, Some(&self.params.key))
            .multipart(form)
            .send()?;
        let status = response.status().as_u16();
        let body = response
            .json::<serde_json::Value>()
            .unwrap_or(serde_json::Value::Null);
        Ok(ApiResponse { status, body })
    }
}
