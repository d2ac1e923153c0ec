//! Secret comparison seam
//!
//! Account secrets are stored as given and compared by value. All
//! comparisons go through this single function so the storage format can
//! move to a salted hash without touching callers.

/// Verify a candidate secret against the stored value in constant time.
pub fn verify_secret(candidate: &str, stored: &str) -> bool {
    let candidate = candidate.as_bytes();
    let stored = stored.as_bytes();

    if candidate.len() != stored.len() {
        return false;
    }

    let mut result = 0u8;
    for (a, b) in candidate.iter().zip(stored.iter()) {
        result |= a ^ b;
    }
    result == 0
}
