//! # Payment Signature Verification
//!
//! Razorpay signs the checkout callback as
//! `HMAC-SHA256(key_secret, "<order_id>|<payment_id>")`, hex-encoded.
//! A payment is authentic only when the recomputed digest matches the
//! supplied one exactly.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the expected callback signature for an (order, payment) pair.
/// Returns lowercase hex.
pub fn compute_signature(secret: &str, order_id: &str, payment_id: &str) -> String {
    let message = format!("{}|{}", order_id, payment_id);

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    let result = mac.finalize();
    hex::encode(result.into_bytes())
}

/// Verify a supplied signature against the recomputed one.
pub fn verify_signature(secret: &str, order_id: &str, payment_id: &str, supplied: &str) -> bool {
    let expected = compute_signature(secret, order_id, payment_id);
    constant_time_compare(&expected, supplied)
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}
