//! Password digesting for account storage and login comparison.

use sha2::{Digest, Sha256};

/// One-way transform of a plaintext credential to its stored form:
/// SHA-256 over the UTF-8 bytes, rendered as 64 lowercase hex chars.
///
/// Deterministic and unsalted — login is a digest equality check.
pub fn digest_password(plaintext: &str) -> String {
    let digest = Sha256::digest(plaintext.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
