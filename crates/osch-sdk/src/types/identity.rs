//! Account identity type.
//!
//! Osch account identities are 32-byte public keys, displayed as a
//! 56-character checksummed string starting with `G`. The string form
//! carries a version byte, the raw key bytes, and a CRC16 checksum,
//! base32-encoded so that transcription errors are detected rather than
//! silently accepted.

use crate::error::{OschError, OschResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of an identity's raw key in bytes.
pub const IDENTITY_LENGTH: usize = 32;

/// The length of the checksummed string form.
pub const ENCODED_IDENTITY_LENGTH: usize = 56;

/// Version byte for account identities; yields the leading `G` once encoded.
const VERSION_BYTE: u8 = 6 << 3;

/// RFC 4648 base32 alphabet, upper case, no padding.
const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// A 32-byte osch account identity.
///
/// Identities reference the raw public key of an account. The canonical
/// display format is the checksummed `G...` string; the raw key bytes are
/// what the binary envelope layout embeds.
///
/// # Example
///
/// ```rust
/// use osch_sdk::AccountId;
///
/// let id = AccountId::new([0u8; 32]);
/// assert_eq!(
///     id.to_string(),
///     "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF"
/// );
///
/// let parsed = AccountId::from_string(&id.to_string()).unwrap();
/// assert_eq!(parsed, id);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; IDENTITY_LENGTH]);

impl AccountId {
    /// Creates an identity from a raw key byte array.
    pub const fn new(bytes: [u8; IDENTITY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Decodes an identity from its checksummed string form.
    ///
    /// # Errors
    ///
    /// Returns [`OschError::InvalidIdentity`] if the string has the wrong
    /// length, contains characters outside the base32 alphabet, carries the
    /// wrong version byte, or fails the checksum.
    pub fn from_string(encoded: &str) -> OschResult<Self> {
        if encoded.len() != ENCODED_IDENTITY_LENGTH {
            return Err(OschError::InvalidIdentity(format!(
                "expected {} characters, got {}",
                ENCODED_IDENTITY_LENGTH,
                encoded.len()
            )));
        }

        let decoded = base32_decode(encoded)
            .ok_or_else(|| OschError::InvalidIdentity(encoded.to_string()))?;

        // version byte + key + 2 checksum bytes
        if decoded.len() != 1 + IDENTITY_LENGTH + 2 {
            return Err(OschError::InvalidIdentity(encoded.to_string()));
        }
        if decoded[0] != VERSION_BYTE {
            return Err(OschError::InvalidIdentity(format!(
                "wrong version byte in {encoded}"
            )));
        }

        let (data, checksum) = decoded.split_at(1 + IDENTITY_LENGTH);
        let expected = crc16_xmodem(data).to_le_bytes();
        if checksum != expected.as_slice() {
            return Err(OschError::InvalidIdentity(format!(
                "checksum mismatch in {encoded}"
            )));
        }

        let mut key = [0u8; IDENTITY_LENGTH];
        key.copy_from_slice(&data[1..]);
        Ok(Self(key))
    }

    /// Creates an identity from a raw key byte slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the byte slice is not exactly 32 bytes long.
    pub fn from_bytes<T: AsRef<[u8]>>(bytes: T) -> OschResult<Self> {
        let bytes = bytes.as_ref();
        if bytes.len() != IDENTITY_LENGTH {
            return Err(OschError::InvalidIdentity(format!(
                "expected {} key bytes, got {}",
                IDENTITY_LENGTH,
                bytes.len()
            )));
        }
        let mut key = [0u8; IDENTITY_LENGTH];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// Returns true if `encoded` is a well-formed identity string.
    pub fn is_valid(encoded: &str) -> bool {
        Self::from_string(encoded).is_ok()
    }

    /// Returns the raw key as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the raw key as a byte array.
    pub fn to_bytes(&self) -> [u8; IDENTITY_LENGTH] {
        self.0
    }

    /// Encodes the identity into its checksummed string form.
    pub fn to_encoded_string(&self) -> String {
        let mut data = Vec::with_capacity(1 + IDENTITY_LENGTH + 2);
        data.push(VERSION_BYTE);
        data.extend_from_slice(&self.0);
        let checksum = crc16_xmodem(&data);
        data.extend_from_slice(&checksum.to_le_bytes());
        base32_encode(&data)
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.to_encoded_string())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_encoded_string())
    }
}

impl FromStr for AccountId {
    type Err = OschError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl Serialize for AccountId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_encoded_string())
        } else {
            // Binary serialization: fixed-size array without length prefix
            use serde::ser::SerializeTuple;
            let mut tuple = serializer.serialize_tuple(IDENTITY_LENGTH)?;
            for byte in &self.0 {
                tuple.serialize_element(byte)?;
            }
            tuple.end()
        }
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Self::from_string(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = <[u8; IDENTITY_LENGTH]>::deserialize(deserializer)?;
            Ok(Self(bytes))
        }
    }
}

impl From<[u8; IDENTITY_LENGTH]> for AccountId {
    fn from(bytes: [u8; IDENTITY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<AccountId> for [u8; IDENTITY_LENGTH] {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl AsRef<[u8]> for AccountId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// CRC16-XModem: polynomial 0x1021, zero initial value, no reflection.
fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ 0x1021;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

fn base32_encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 8 / 5 + 1);
    let mut buffer: u16 = 0;
    let mut bits: u8 = 0;
    for &byte in data {
        buffer = (buffer << 8) | u16::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[usize::from((buffer >> bits) as u8 & 0x1f)] as char);
        }
    }
    // 35-byte identity payloads divide evenly into 56 characters; other
    // lengths would leave residual bits here, which this codec never emits.
    debug_assert_eq!(bits, 0);
    out
}

fn base32_decode(encoded: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(encoded.len() * 5 / 8);
    let mut buffer: u16 = 0;
    let mut bits: u8 = 0;
    for c in encoded.bytes() {
        let value = ALPHABET.iter().position(|&a| a == c)? as u16;
        buffer = (buffer << 5) | value;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
    }
    Some(out)
}
