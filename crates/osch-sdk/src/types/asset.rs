//! Asset identity and canonical representation.
//!
//! A fungible unit on the ledger is either the native currency or a
//! `(code, issuer)` pair. The binary envelope layout stores assets in one
//! of three canonical variants selected deterministically from the code
//! length, so two assets with the same code and issuer always serialize
//! identically.

use crate::error::{OschError, OschResult};
use crate::types::identity::{AccountId, IDENTITY_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ticker of the native currency. A code equal to this (case-insensitive)
/// with no issuer denotes the native asset.
pub const NATIVE_TICKER: &str = "OSCH";

/// The canonical binary variant of an asset, tagged by wire discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetType {
    /// Discriminant 0: the native currency, no payload.
    Native,
    /// Discriminant 1: codes of 1-4 characters, 4-byte code slot.
    CreditAlphanum4,
    /// Discriminant 2: codes of 5-12 characters, 12-byte code slot.
    CreditAlphanum12,
}

impl AssetType {
    /// Wire discriminant of the native variant.
    pub const NATIVE_ID: i32 = 0;
    /// Wire discriminant of the 4-byte-slot variant.
    pub const CREDIT_ALPHANUM4_ID: i32 = 1;
    /// Wire discriminant of the 12-byte-slot variant.
    pub const CREDIT_ALPHANUM12_ID: i32 = 2;

    /// Returns the wire discriminant.
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Native => Self::NATIVE_ID,
            Self::CreditAlphanum4 => Self::CREDIT_ALPHANUM4_ID,
            Self::CreditAlphanum12 => Self::CREDIT_ALPHANUM12_ID,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::CreditAlphanum4 => "credit_alphanum4",
            Self::CreditAlphanum12 => "credit_alphanum12",
        }
    }
}

impl TryFrom<i32> for AssetType {
    type Error = OschError;

    /// Maps a raw wire discriminant to an asset type.
    ///
    /// This is where unrecognized discriminants from an external decoder
    /// surface as [`OschError::InvalidAssetType`].
    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            Self::NATIVE_ID => Ok(Self::Native),
            Self::CREDIT_ALPHANUM4_ID => Ok(Self::CreditAlphanum4),
            Self::CREDIT_ALPHANUM12_ID => Ok(Self::CreditAlphanum12),
            other => Err(OschError::InvalidAssetType(other)),
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The variant-tagged canonical form an asset assumes in the envelope.
///
/// Code slots are right-padded with NUL bytes to their exact width and the
/// issuer travels as raw key bytes; decoding trims the padding back off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanonicalAsset {
    /// The native currency; carries no payload.
    Native,
    /// A 4-byte code slot plus the issuer's raw key bytes.
    CreditAlphanum4 {
        /// NUL-padded asset code.
        code: [u8; 4],
        /// Raw issuer key bytes.
        issuer: [u8; IDENTITY_LENGTH],
    },
    /// A 12-byte code slot plus the issuer's raw key bytes.
    CreditAlphanum12 {
        /// NUL-padded asset code.
        code: [u8; 12],
        /// Raw issuer key bytes.
        issuer: [u8; IDENTITY_LENGTH],
    },
}

impl CanonicalAsset {
    /// Returns the asset type tag of this canonical form.
    pub const fn asset_type(&self) -> AssetType {
        match self {
            Self::Native => AssetType::Native,
            Self::CreditAlphanum4 { .. } => AssetType::CreditAlphanum4,
            Self::CreditAlphanum12 { .. } => AssetType::CreditAlphanum12,
        }
    }
}

/// Canonical identity of a fungible unit.
///
/// Immutable value type; equality is structural on `(code, issuer)`.
///
/// # Example
///
/// ```rust
/// use osch_sdk::{AccountId, Asset, AssetType};
///
/// let issuer = AccountId::new([9u8; 32]).to_string();
/// let asset = Asset::new("USD", Some(&issuer)).unwrap();
/// assert_eq!(asset.asset_type(), AssetType::CreditAlphanum4);
/// assert!(!asset.is_native());
///
/// assert!(Asset::native().is_native());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Asset {
    code: String,
    issuer: Option<AccountId>,
}

impl Asset {
    /// Creates an asset from a code and an optional issuer identity string.
    ///
    /// A code equal to [`NATIVE_TICKER`] (case-insensitive) with no issuer
    /// yields the native asset; with an explicit issuer it constructs a
    /// regular credit asset under that code.
    ///
    /// # Errors
    ///
    /// - [`OschError::InvalidAssetCode`] unless the code is 1-12 ASCII
    ///   alphanumeric characters.
    /// - [`OschError::MissingIssuer`] if a non-native code has no issuer.
    /// - [`OschError::InvalidIssuer`] if the issuer fails identity decoding.
    pub fn new(code: &str, issuer: Option<&str>) -> OschResult<Self> {
        if !is_valid_code(code) {
            return Err(OschError::InvalidAssetCode(code.to_string()));
        }
        match issuer {
            None => {
                if code.eq_ignore_ascii_case(NATIVE_TICKER) {
                    Ok(Self::native())
                } else {
                    Err(OschError::MissingIssuer)
                }
            }
            Some(issuer) => {
                let issuer = AccountId::from_string(issuer)
                    .map_err(|_| OschError::InvalidIssuer(issuer.to_string()))?;
                Ok(Self {
                    code: code.to_string(),
                    issuer: Some(issuer),
                })
            }
        }
    }

    /// Returns the canonical native asset.
    pub fn native() -> Self {
        Self {
            code: NATIVE_TICKER.to_string(),
            issuer: None,
        }
    }

    /// Decodes an asset from its canonical variant-tagged form.
    ///
    /// Trailing NUL padding is trimmed from the code slot and the issuer is
    /// rebuilt from raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`OschError::InvalidAssetCode`] if the trimmed code slot
    /// does not hold a valid code (empty, or non-alphanumeric bytes).
    pub fn from_canonical_form(canonical: &CanonicalAsset) -> OschResult<Self> {
        match canonical {
            CanonicalAsset::Native => Ok(Self::native()),
            CanonicalAsset::CreditAlphanum4 { code, issuer } => {
                Self::from_slot(code.as_slice(), *issuer)
            }
            CanonicalAsset::CreditAlphanum12 { code, issuer } => {
                Self::from_slot(code.as_slice(), *issuer)
            }
        }
    }

    fn from_slot(slot: &[u8], issuer: [u8; IDENTITY_LENGTH]) -> OschResult<Self> {
        let end = slot.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        let code = std::str::from_utf8(&slot[..end])
            .map_err(|_| OschError::InvalidAssetCode(format!("{:?}", &slot[..end])))?;
        if !is_valid_code(code) {
            return Err(OschError::InvalidAssetCode(code.to_string()));
        }
        Ok(Self {
            code: code.to_string(),
            issuer: Some(AccountId::new(issuer)),
        })
    }

    /// Produces the canonical variant-tagged form of this asset.
    ///
    /// Non-native assets select the 4- or 12-byte code slot purely by code
    /// length and are right-padded with NUL bytes to the slot width.
    pub fn to_canonical_form(&self) -> CanonicalAsset {
        let issuer = match &self.issuer {
            None => return CanonicalAsset::Native,
            Some(issuer) => issuer.to_bytes(),
        };
        if self.code.len() <= 4 {
            let mut code = [0u8; 4];
            code[..self.code.len()].copy_from_slice(self.code.as_bytes());
            CanonicalAsset::CreditAlphanum4 { code, issuer }
        } else {
            let mut code = [0u8; 12];
            code[..self.code.len()].copy_from_slice(self.code.as_bytes());
            CanonicalAsset::CreditAlphanum12 { code, issuer }
        }
    }

    /// Returns the asset type, derived the same way as the canonical-form
    /// slot selection.
    pub fn asset_type(&self) -> AssetType {
        if self.issuer.is_none() {
            AssetType::Native
        } else if self.code.len() <= 4 {
            AssetType::CreditAlphanum4
        } else {
            AssetType::CreditAlphanum12
        }
    }

    /// Returns true iff this is the native asset.
    pub fn is_native(&self) -> bool {
        self.issuer.is_none()
    }

    /// Returns the asset code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the issuer identity, absent for the native asset.
    pub fn issuer(&self) -> Option<&AccountId> {
        self.issuer.as_ref()
    }
}

fn is_valid_code(code: &str) -> bool {
    (1..=12).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
