//! Error types for the osch SDK.
//!
//! This module provides a unified error type [`OschError`] that encompasses
//! all possible errors that can occur when assembling transaction envelopes.

use thiserror::Error;

/// A specialized Result type for osch SDK operations.
pub type OschResult<T> = Result<T, OschError>;

/// The main error type for the osch SDK.
///
/// Every failure is reported synchronously at the call that violates a
/// precondition; nothing is retried internally and no partial state is
/// committed on failure. Variants are distinct per failure kind so that
/// calling code can branch on the condition rather than parse a message.
#[derive(Error, Debug)]
pub enum OschError {
    /// The identity string failed the checksummed-key decoding.
    #[error("invalid identity: {0}")]
    InvalidIdentity(String),

    /// The sequence number string is not a well-formed non-negative integer.
    #[error("invalid sequence number: {0}")]
    InvalidSequenceFormat(String),

    /// The asset code is not 1-12 ASCII alphanumeric characters.
    #[error("invalid asset code: {0}")]
    InvalidAssetCode(String),

    /// A non-native asset was constructed without an issuer.
    #[error("issuer is required for non-native assets")]
    MissingIssuer,

    /// The asset issuer is not a valid identity.
    #[error("invalid asset issuer: {0}")]
    InvalidIssuer(String),

    /// An asset discriminant outside the known canonical variants.
    #[error("unknown asset type discriminant: {0}")]
    InvalidAssetType(i32),

    /// The memo content is not representable (e.g. text over 28 bytes).
    #[error("invalid memo: {0}")]
    InvalidMemo(String),

    /// A negative number of seconds was passed to `set_timeout`.
    #[error("timeout must be non-negative, got {0}")]
    NegativeTimeout(i64),

    /// A validity-window decision was already made and must not be
    /// silently overwritten.
    #[error("time bounds are already set and cannot be overwritten by a timeout")]
    TimeBoundsConflict,

    /// No validity-window decision was made before `build`.
    #[error(
        "no validity window chosen; supply time bounds or call set_timeout (0 opts into infinite validity)"
    )]
    MissingTimeBounds,

    /// The computed fee does not fit the 32-bit envelope field.
    #[error("fee exceeds the 32-bit envelope field")]
    FeeOverflow,

    /// The next sequence number does not fit the signed 64-bit envelope field.
    #[error("sequence number exceeds the signed 64-bit envelope field")]
    SequenceOverflow,

    /// Any other error.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl OschError {
    /// Returns true for errors caused by malformed caller input.
    ///
    /// These are resolved by correcting the input and retrying the call.
    pub fn is_input_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidIdentity(_)
                | Self::InvalidSequenceFormat(_)
                | Self::InvalidAssetCode(_)
                | Self::MissingIssuer
                | Self::InvalidIssuer(_)
                | Self::InvalidAssetType(_)
                | Self::InvalidMemo(_)
                | Self::NegativeTimeout(_)
        )
    }

    /// Returns true for misuses of the builder protocol.
    ///
    /// These signal that a decision was already made, or never made; they
    /// are resolved by adjusting call order, never automatically.
    pub fn is_state_conflict(&self) -> bool {
        matches!(self, Self::TimeBoundsConflict | Self::MissingTimeBounds)
    }
}
