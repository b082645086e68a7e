//! Cryptographic primitives used by the SDK.
//!
//! Only the hash function backing the network domain separator lives here;
//! key generation, signing, and verification belong to a separate signing
//! subsystem.

mod hash;

pub use hash::sha2_256;
