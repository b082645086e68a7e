//! Account sequence tracking.
//!
//! An [`Account`] pairs a validated identity with the pending sequence
//! number fetched from the ledger. It is the only stateful piece of the
//! envelope-construction pipeline: each successful
//! [`TransactionBuilder::build`](crate::TransactionBuilder::build) advances
//! the counter by exactly one.
//!
//! The account assumes it is the only tracker for its identity. If
//! transactions for the same identity are prepared elsewhere without
//! re-fetching the ledger-confirmed sequence in between, the counters
//! desynchronize and the ledger will reject the stale envelope. Discard an
//! `Account` after an abandoned build for the same reason: the counter has
//! already moved.

use crate::error::{OschError, OschResult};
use crate::types::AccountId;
use num::BigUint;

/// A ledger account snapshot: identity plus pending sequence number.
///
/// Sequence numbers are kept in arbitrary precision. Ledger encoding is
/// signed 64-bit, but intermediate arithmetic must never wrap, so the
/// counter itself has no width limit; the conversion to the wire type
/// happens (checked) at build time.
///
/// # Example
///
/// ```rust
/// use osch_sdk::{Account, AccountId};
///
/// let id = AccountId::new([1u8; 32]).to_string();
/// let mut account = Account::new(&id, "100").unwrap();
/// assert_eq!(account.sequence_number(), "100");
///
/// account.increment_sequence_number();
/// assert_eq!(account.sequence_number(), "101");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    sequence: BigUint,
}

impl Account {
    /// Creates an account from an identity string and a decimal sequence
    /// number string, both typically fetched from the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`OschError::InvalidIdentity`] if the identity fails the
    /// checksummed decoding, and [`OschError::InvalidSequenceFormat`] if
    /// the sequence is not a well-formed non-negative decimal integer.
    pub fn new(account_id: &str, sequence: &str) -> OschResult<Self> {
        let id = AccountId::from_string(account_id)?;
        if sequence.is_empty() || !sequence.bytes().all(|b| b.is_ascii_digit()) {
            return Err(OschError::InvalidSequenceFormat(sequence.to_string()));
        }
        let sequence = sequence
            .parse::<BigUint>()
            .map_err(|_| OschError::InvalidSequenceFormat(sequence.to_string()))?;
        Ok(Self { id, sequence })
    }

    /// Returns the account identity.
    pub fn account_id(&self) -> &AccountId {
        &self.id
    }

    /// Returns the current sequence number as a decimal string.
    ///
    /// The string form preserves arbitrary precision; values past the
    /// 64-bit range print exactly.
    pub fn sequence_number(&self) -> String {
        self.sequence.to_string()
    }

    /// Advances the sequence number by one.
    ///
    /// Called once per successful build; any other holder of this account
    /// observes the new value immediately.
    pub fn increment_sequence_number(&mut self) {
        self.sequence += 1u32;
    }

    /// The sequence number the next built transaction will carry.
    pub(crate) fn next_sequence_number(&self) -> BigUint {
        &self.sequence + 1u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_identity() -> String {
        AccountId::new([4u8; 32]).to_string()
    }

    #[test]
    fn test_new_and_sequence_number() {
        let account = Account::new(&test_identity(), "100").unwrap();
        assert_eq!(account.sequence_number(), "100");
    }

    #[test]
    fn test_invalid_identity() {
        let result = Account::new("not an identity", "100");
        assert!(matches!(result, Err(OschError::InvalidIdentity(_))));
    }

    #[test]
    fn test_invalid_sequence_format() {
        for bad in ["", "-1", "+1", "12.5", "1e3", " 7", "abc"] {
            let result = Account::new(&test_identity(), bad);
            assert!(
                matches!(result, Err(OschError::InvalidSequenceFormat(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_increment() {
        let mut account = Account::new(&test_identity(), "0").unwrap();
        account.increment_sequence_number();
        assert_eq!(account.sequence_number(), "1");
        account.increment_sequence_number();
        assert_eq!(account.sequence_number(), "2");
    }

    #[test]
    fn test_increment_past_u64_range() {
        // u64::MAX; the counter must not wrap.
        let mut account = Account::new(&test_identity(), "18446744073709551615").unwrap();
        account.increment_sequence_number();
        assert_eq!(account.sequence_number(), "18446744073709551616");
    }

    #[test]
    fn test_large_sequence_preserved_exactly() {
        let big = "340282366920938463463374607431768211456"; // 2^128
        let account = Account::new(&test_identity(), big).unwrap();
        assert_eq!(account.sequence_number(), big);
    }

    #[test]
    fn test_next_sequence_number_does_not_mutate() {
        let account = Account::new(&test_identity(), "41").unwrap();
        assert_eq!(account.next_sequence_number().to_string(), "42");
        assert_eq!(account.sequence_number(), "41");
    }
}
