//! Network identification.
//!
//! Each ledger instance is identified by a human-readable passphrase. Its
//! SHA-256 digest, the [`NetworkId`], is prepended to signed payloads as a
//! domain separator so a signature produced for one network can never be
//! replayed on another.
//!
//! A process-wide selection exists for callers that want one ambient
//! network. It is synchronized, and nothing inside this crate reads it;
//! signing-side consumers should prefer passing an explicit [`Network`].

use crate::crypto::sha2_256;
use once_cell::sync::{Lazy, OnceCell};
use std::fmt;
use std::sync::RwLock;

/// Passphrase of the production network.
pub const PUBLIC_NETWORK_PASSPHRASE: &str = "osch public network";

/// Passphrase of the test network.
pub const TEST_NETWORK_PASSPHRASE: &str = "osch test network";

/// The length of a network id in bytes.
pub const NETWORK_ID_LENGTH: usize = 32;

/// A 32-byte network domain separator.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkId([u8; NETWORK_ID_LENGTH]);

impl NetworkId {
    /// Creates a network id from a byte array.
    pub const fn new(bytes: [u8; NETWORK_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Returns the id as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the id as a byte array.
    pub fn to_bytes(&self) -> [u8; NETWORK_ID_LENGTH] {
        self.0
    }

    /// Returns the id as a hex string with `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NetworkId({})", self.to_hex())
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for NetworkId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A ledger instance, identified by its passphrase.
///
/// # Example
///
/// ```rust
/// use osch_sdk::Network;
///
/// let testnet = Network::test();
/// let mainnet = Network::public();
/// assert_ne!(testnet.network_id(), mainnet.network_id());
///
/// // Deterministic across calls and instances.
/// assert_eq!(Network::test().network_id(), testnet.network_id());
/// ```
#[derive(Clone, Debug)]
pub struct Network {
    passphrase: String,
    id: OnceCell<NetworkId>,
}

impl Network {
    /// Creates a network from an arbitrary passphrase.
    pub fn new<T: Into<String>>(passphrase: T) -> Self {
        Self {
            passphrase: passphrase.into(),
            id: OnceCell::new(),
        }
    }

    /// The production network.
    pub fn public() -> Self {
        Self::new(PUBLIC_NETWORK_PASSPHRASE)
    }

    /// The test network.
    pub fn test() -> Self {
        Self::new(TEST_NETWORK_PASSPHRASE)
    }

    /// Returns the passphrase.
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// Returns the network id: the SHA-256 digest of the passphrase.
    ///
    /// Computed on first use and cached; a pure function of the passphrase.
    pub fn network_id(&self) -> NetworkId {
        *self
            .id
            .get_or_init(|| NetworkId::new(sha2_256(self.passphrase.as_bytes())))
    }

    /// Selects `network` as the process-wide network.
    ///
    /// Overwrites any prior selection.
    pub fn use_network(network: Network) {
        *write_current() = Some(network);
    }

    /// Selects the production network process-wide.
    pub fn use_public_network() {
        Self::use_network(Self::public());
    }

    /// Selects the test network process-wide.
    pub fn use_test_network() {
        Self::use_network(Self::test());
    }

    /// Returns the process-wide network, or `None` if never selected.
    pub fn current() -> Option<Network> {
        match CURRENT.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl PartialEq for Network {
    fn eq(&self, other: &Self) -> bool {
        // The cached digest is derived state; identity is the passphrase.
        self.passphrase == other.passphrase
    }
}

impl Eq for Network {}

static CURRENT: Lazy<RwLock<Option<Network>>> = Lazy::new(|| RwLock::new(None));

fn write_current() -> std::sync::RwLockWriteGuard<'static, Option<Network>> {
    match CURRENT.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_id_deterministic() {
        let network = Network::test();
        let first = network.network_id();
        let second = network.network_id();
        assert_eq!(first, second);
        assert_eq!(Network::new(TEST_NETWORK_PASSPHRASE).network_id(), first);
    }

    #[test]
    fn test_network_ids_differ_by_passphrase() {
        assert_ne!(Network::test().network_id(), Network::public().network_id());
        assert_ne!(
            Network::new("a").network_id(),
            Network::new("b").network_id()
        );
    }

    #[test]
    fn test_network_id_is_passphrase_digest() {
        let network = Network::new("osch test network");
        let expected = sha2_256(b"osch test network");
        assert_eq!(network.network_id().to_bytes(), expected);
    }

    #[test]
    fn test_equality_ignores_digest_cache() {
        let warm = Network::test();
        let _ = warm.network_id();
        assert_eq!(warm, Network::test());
    }

    #[test]
    fn test_network_id_hex() {
        let id = NetworkId::new([0u8; NETWORK_ID_LENGTH]);
        assert_eq!(id.to_hex().len(), 2 + NETWORK_ID_LENGTH * 2);
        assert!(id.to_hex().starts_with("0x"));
    }

    #[test]
    fn test_process_wide_selection() {
        // Single test for the global so parallel test threads do not race
        // on the shared slot.
        Network::use_test_network();
        assert_eq!(Network::current(), Some(Network::test()));

        Network::use_public_network();
        assert_eq!(Network::current(), Some(Network::public()));

        Network::use_network(Network::new("standalone"));
        let current = Network::current().unwrap();
        assert_eq!(current.passphrase(), "standalone");
    }
}
