//! Hash functions for the osch SDK.

use sha2::Digest as Sha2Digest;

/// Computes the SHA2-256 hash of the input.
///
/// This is the digest behind [`crate::Network::network_id`], binding
/// signatures to one ledger instance.
///
/// # Example
///
/// ```rust
/// use osch_sdk::crypto::sha2_256;
///
/// let hash = sha2_256(b"hello world");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha2_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = sha2::Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}
