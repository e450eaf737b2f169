//! HMAC-SHA256 hex digest used by the contact-message pipeline to derive
//! the optional salted IP hash.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute an HMAC-SHA256 hex digest of `data` keyed with `secret`.
///
/// This is the one-way transform applied to the *unanonymized* client IP
/// when the operator has configured a salt: the digest can be compared for
/// dedup lookups without retaining the address in recoverable form.
pub fn hmac_sha256_hex(secret: &str, data: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(data.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
