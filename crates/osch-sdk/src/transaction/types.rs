//! Transaction envelope types.

use crate::types::{AccountId, Memo};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// An inclusive validity window in epoch seconds.
///
/// Outside `[min_time, max_time]` the ledger rejects the transaction. A
/// `max_time` of zero means no upper bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBounds {
    /// Earliest ledger close time at which the transaction is valid.
    pub min_time: u64,
    /// Latest ledger close time at which the transaction is valid; zero
    /// for no upper bound.
    pub max_time: u64,
}

impl TimeBounds {
    /// Creates a validity window from epoch-second bounds.
    pub const fn new(min_time: u64, max_time: u64) -> Self {
        Self { min_time, max_time }
    }

    /// Creates a validity window from wall-clock instants, normalized to
    /// epoch seconds.
    ///
    /// Instants before the epoch clamp to zero.
    pub fn from_system_times(min_time: SystemTime, max_time: SystemTime) -> Self {
        Self {
            min_time: to_epoch_seconds(min_time),
            max_time: to_epoch_seconds(max_time),
        }
    }
}

fn to_epoch_seconds(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH).unwrap_or_default().as_secs()
}

/// A single ledger operation, opaque to this crate.
///
/// Operations are produced by a separate operation-construction layer and
/// carried here as their encoded body; the builder appends them without
/// inspecting the content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation(#[serde(with = "serde_bytes")] Vec<u8>);

impl Operation {
    /// Wraps an encoded operation body.
    pub fn from_encoded(body: Vec<u8>) -> Self {
        Self(body)
    }

    /// Returns the encoded body.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the operation, returning the encoded body.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Reserved extension point of the envelope; currently discriminant 0 with
/// no payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionExt {
    /// The only defined variant.
    #[default]
    V0,
}

/// A finalized, signable transaction envelope.
///
/// This is an immutable snapshot of builder state at build time: the source
/// identity, the computed fee and sequence number, the memo, the optional
/// validity window, and the ordered operation list. It is never mutated
/// after construction; signing and byte-level encoding happen downstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    source: AccountId,
    fee: u32,
    seq_num: i64,
    time_bounds: Option<TimeBounds>,
    memo: Memo,
    operations: Vec<Operation>,
    ext: TransactionExt,
}

impl Transaction {
    pub(crate) fn new(
        source: AccountId,
        fee: u32,
        seq_num: i64,
        time_bounds: Option<TimeBounds>,
        memo: Memo,
        operations: Vec<Operation>,
    ) -> Self {
        Self {
            source,
            fee,
            seq_num,
            time_bounds,
            memo,
            operations,
            ext: TransactionExt::V0,
        }
    }

    /// Returns the source identity.
    pub fn source(&self) -> &AccountId {
        &self.source
    }

    /// Returns the total fee in stroops: base fee times operation count.
    pub fn fee(&self) -> u32 {
        self.fee
    }

    /// Returns the sequence number this envelope consumes.
    pub fn sequence_number(&self) -> i64 {
        self.seq_num
    }

    /// Returns the validity window, if one was set.
    pub fn time_bounds(&self) -> Option<TimeBounds> {
        self.time_bounds
    }

    /// Returns the memo.
    pub fn memo(&self) -> &Memo {
        &self.memo
    }

    /// Returns the ordered operation list.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Returns the reserved extension discriminant.
    pub fn ext(&self) -> TransactionExt {
        self.ext
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_transaction() -> Transaction {
        Transaction::new(
            AccountId::new([1u8; 32]),
            200,
            101,
            Some(TimeBounds::new(0, 1_700_000_000)),
            Memo::None,
            vec![Operation::from_encoded(vec![0, 1, 2])],
        )
    }

    #[test]
    fn test_accessors() {
        let tx = test_transaction();
        assert_eq!(tx.source(), &AccountId::new([1u8; 32]));
        assert_eq!(tx.fee(), 200);
        assert_eq!(tx.sequence_number(), 101);
        assert_eq!(tx.time_bounds(), Some(TimeBounds::new(0, 1_700_000_000)));
        assert!(tx.memo().is_none());
        assert_eq!(tx.operations().len(), 1);
        assert_eq!(tx.ext(), TransactionExt::V0);
    }

    #[test]
    fn test_clone_is_deep_equal() {
        let tx = test_transaction();
        assert_eq!(tx.clone(), tx);
    }

    #[test]
    fn test_json_round_trip() {
        let tx = test_transaction();
        let json = serde_json::to_string(&tx).unwrap();
        let parsed: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tx);
    }

    #[test]
    fn test_time_bounds_from_system_times() {
        let min = UNIX_EPOCH + std::time::Duration::from_secs(10);
        let max = UNIX_EPOCH + std::time::Duration::from_secs(20);
        assert_eq!(
            TimeBounds::from_system_times(min, max),
            TimeBounds::new(10, 20)
        );
    }

    #[test]
    fn test_time_bounds_before_epoch_clamp_to_zero() {
        let before = UNIX_EPOCH - std::time::Duration::from_secs(5);
        let bounds = TimeBounds::from_system_times(before, UNIX_EPOCH);
        assert_eq!(bounds, TimeBounds::new(0, 0));
    }

    #[test]
    fn test_operation_bytes() {
        let op = Operation::from_encoded(vec![9, 9, 9]);
        assert_eq!(op.as_bytes(), &[9, 9, 9]);
        assert_eq!(op.into_bytes(), vec![9, 9, 9]);
    }
}
