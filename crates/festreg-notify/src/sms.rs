//! SMS gateway client.

use reqwest::blocking::Client;
use tracing::debug;

use festreg_model::SmsParams;

use crate::error::{NotifyError, Result};
use crate::mail::{ApiResponse, REQUEST_TIMEOUT};
use crate::retry::RetryPolicy;

/// One outbound SMS. `number` is a single numeric string; the gateway
/// field nominally accepts a comma-separated list but sends here are one
/// per participant row.
#[derive(Debug, Clone)]
pub struct SmsMessage {
    pub number: String,
    pub message: String,
    /// Free-form correlation value echoed back by the gateway.
    pub custom: String,
}

/// SMS API client.
pub struct SmsGateway {
    client: Client,
    params: SmsParams,
    retry: RetryPolicy,
}

impl SmsGateway {
    pub fn new(params: SmsParams) -> Result<Self> {
        Self::with_policy(params, RetryPolicy::default())
    }

    pub fn with_policy(params: SmsParams, retry: RetryPolicy) -> Result<Self> {
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

    /// POST one message. No batching, no dedup; the caller loops rows.
    pub fn send(&self, message: &SmsMessage) -> Result<ApiResponse> {
        self.retry.run(|| self.post(message))
    }

    fn post(&self, message: &SmsMessage) -> Result<ApiResponse> {
        debug!(custom = %message.custom, "posting sms");
        let response = self
            .client
            .post(&self.params.api_url)
            .form(&[
                ("numbers", message.number.as_str()),
                ("message", message.message.as_str()),
                ("username", self.params.user.as_str()),
                ("hash", self.params.hash.as_str()),
                ("sender", self.params.sender.as_str()),
                ("custom", message.custom.as_str()),
            ])
            .send()?;
        let status = response.status().as_u16();
        let body = response
            .json::<serde_json::Value>()
            .unwrap_or(serde_json::Value::Null);
        Ok(ApiResponse { status, body })
    }
}
