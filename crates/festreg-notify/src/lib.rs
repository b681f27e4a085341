//! Outbound notifications over third-party HTTP APIs.
//!
//! Both transports are fire-and-log: a send returns the provider's status
//! and parsed body for the caller to record, and nothing branches on
//! failure codes. A bounded [`retry::RetryPolicy`] covers transport errors
//! only and defaults to a single attempt.

pub mod error;
pub mod mail;
pub mod retry;
pub mod sms;

pub use error::{NotifyError, Result};
pub use mail::{ApiResponse, MailMessage, Mailer};
pub use retry::RetryPolicy;
pub use sms::{SmsGateway, SmsMessage};
