//! Access-token derivation.
//!
//! Outgoing SMS and email messages embed a short shared secret: a keyed
//! SHA-256 digest truncated to a fixed hex length. The truncation length is
//! part of the contract with recipients, collision risk included.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Token length embedded in participant SMS messages.
pub const SMS_TOKEN_LEN: usize = 6;

/// Token length mailed to event managers.
pub const MANAGER_TOKEN_LEN: usize = 8;

/// The first `len` hex characters of HMAC-SHA-256(key, msg).
pub fn derive_token(key: &str, msg: &str, len: usize) -> String {
    // HMAC accepts keys of any length, so construction cannot fail.
    let mut mac = HmacSha256::new_from_slice(key.as_bytes()).expect("hmac key");
    mac.update(msg.as_bytes());
    let digest = hex::encode(mac.finalize().into_bytes());
    let cut = len.min(digest.len());
    digest[..cut].to_string()
}
