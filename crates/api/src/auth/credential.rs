//! Admin credential verification.
//!
//! There is no user directory: one shared admin credential is supplied via
//! configuration. Comparison goes through SHA-256 digests so the comparison
//! time does not depend on how much of the password matched.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of a credential.
fn digest(value: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hasher.finalize().into()
}

/// Check a presented credential against the configured admin password.
pub fn verify_admin_credential(presented: &str, configured: &str) -> bool {
    digest(presented) == digest(configured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_credential() {
        assert!(verify_admin_credential("hunter2", "hunter2"));
    }

    #[test]
    fn test_wrong_credential() {
        assert!(!verify_admin_credential("hunter", "hunter2"));
        assert!(!verify_admin_credential("", "hunter2"));
        assert!(!verify_admin_credential("HUNTER2", "hunter2"));
    }
}
