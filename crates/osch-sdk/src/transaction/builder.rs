//! Transaction builder.

use crate::account::Account;
use crate::error::{OschError, OschResult};
use crate::transaction::types::{Operation, TimeBounds, Transaction};
use crate::types::Memo;
use num::ToPrimitive;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default base fee in stroops per operation, applied when the caller does
/// not choose one.
pub const BASE_FEE: u32 = 100;

/// `set_timeout` argument explicitly opting into infinite validity.
pub const TIMEOUT_INFINITE: i64 = 0;

/// Construction-time options for a [`TransactionBuilder`].
///
/// Unset fields fall back to documented defaults: [`BASE_FEE`] per
/// operation, no validity window, no memo.
#[derive(Clone, Debug, Default)]
pub struct TransactionOptions {
    /// Maximum fee per operation, in stroops.
    pub fee: Option<u32>,
    /// Validity window. An explicit `max_time > 0` here counts as the
    /// caller's validity-window decision and conflicts with `set_timeout`.
    pub time_bounds: Option<TimeBounds>,
    /// Initial memo; replaceable via
    /// [`TransactionBuilder::add_memo`] until build time.
    pub memo: Option<Memo>,
}

/// Assembles a source account, operations, memo, fee rate, and validity
/// window into a finalized [`Transaction`].
///
/// The builder holds an exclusive borrow of the source [`Account`] for the
/// whole assembly, so no second builder can race it for the sequence
/// number. [`build`](Self::build) consumes the builder: each builder
/// produces at most one envelope, and reuse is a compile error rather than
/// a silently re-incremented account.
///
/// Every caller must make a conscious validity-window decision before
/// building: either supply time bounds with a positive `max_time`, or call
/// [`set_timeout`](Self::set_timeout) (with [`TIMEOUT_INFINITE`] to opt
/// into an unbounded window). `build` fails otherwise.
///
/// # Example
///
/// ```rust
/// use osch_sdk::{Account, AccountId, Memo, Operation};
/// use osch_sdk::{TransactionBuilder, TransactionOptions};
///
/// # fn main() -> osch_sdk::OschResult<()> {
/// let id = AccountId::new([2u8; 32]).to_string();
/// let mut account = Account::new(&id, "100")?;
///
/// let mut builder = TransactionBuilder::new(
///     &mut account,
///     TransactionOptions {
///         fee: Some(100),
///         ..Default::default()
///     },
/// );
/// builder
///     .add_operation(Operation::from_encoded(vec![1, 2, 3]))
///     .add_memo(Memo::text("invoice 42")?);
/// builder.set_timeout(300)?;
///
/// let tx = builder.build()?;
/// assert_eq!(tx.fee(), 100);
/// assert_eq!(tx.sequence_number(), 101);
/// assert_eq!(account.sequence_number(), "101");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TransactionBuilder<'a> {
    source: &'a mut Account,
    operations: Vec<Operation>,
    base_fee: u32,
    memo: Memo,
    time_bounds: Option<TimeBounds>,
    timeout_set: bool,
}

impl<'a> TransactionBuilder<'a> {
    /// Creates a builder over an exclusively borrowed source account.
    ///
    /// The time bounds in `options` are copied into builder state; later
    /// changes to the caller's value do not reach the builder.
    pub fn new(source: &'a mut Account, options: TransactionOptions) -> Self {
        let base_fee = match options.fee {
            Some(fee) => fee,
            None => {
                tracing::warn!(
                    base_fee = BASE_FEE,
                    "no base fee specified, falling back to the default"
                );
                BASE_FEE
            }
        };
        Self {
            source,
            operations: Vec::new(),
            base_fee,
            memo: options.memo.unwrap_or_default(),
            time_bounds: options.time_bounds,
            timeout_set: false,
        }
    }

    /// Appends an operation.
    ///
    /// Operation content is opaque to the builder and not validated here.
    pub fn add_operation(&mut self, operation: Operation) -> &mut Self {
        self.operations.push(operation);
        self
    }

    /// Replaces the memo.
    pub fn add_memo(&mut self, memo: Memo) -> &mut Self {
        self.memo = memo;
        self
    }

    /// Bounds the transaction's validity to `seconds` from now.
    ///
    /// `seconds == 0` ([`TIMEOUT_INFINITE`]) records an explicit opt-in to
    /// unbounded validity and leaves the time bounds untouched. A positive
    /// value sets `max_time = now + seconds` (wall clock, seconds
    /// resolution), preserving any previously configured `min_time`.
    ///
    /// # Errors
    ///
    /// - [`OschError::NegativeTimeout`] if `seconds < 0`.
    /// - [`OschError::TimeBoundsConflict`] if a validity-window decision was
    ///   already made, either by a prior `set_timeout` call or by an
    ///   explicit `max_time > 0` in the constructor options.
    ///
    /// On failure neither the time bounds nor the recorded decision change.
    pub fn set_timeout(&mut self, seconds: i64) -> OschResult<&mut Self> {
        if seconds < 0 {
            return Err(OschError::NegativeTimeout(seconds));
        }
        if self.timeout_set || self.time_bounds.is_some_and(|tb| tb.max_time > 0) {
            return Err(OschError::TimeBoundsConflict);
        }
        self.timeout_set = true;
        if seconds > 0 {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs();
            let min_time = self.time_bounds.map_or(0, |tb| tb.min_time);
            self.time_bounds = Some(TimeBounds::new(
                min_time,
                now.saturating_add(seconds as u64),
            ));
        }
        Ok(self)
    }

    /// Builds the immutable transaction snapshot and advances the source
    /// account's sequence number by exactly one.
    ///
    /// The fee is `base_fee * operation_count` with no clamping; zero
    /// operations produce a zero fee, accepted at this layer. The sequence
    /// number increments even if the returned transaction is never signed
    /// or submitted; discard the account after an abandoned build.
    ///
    /// # Errors
    ///
    /// - [`OschError::MissingTimeBounds`] unless the time bounds carry a
    ///   positive `max_time` or `set_timeout` was invoked (including with
    ///   [`TIMEOUT_INFINITE`]).
    /// - [`OschError::FeeOverflow`] if the fee exceeds the 32-bit envelope
    ///   field.
    /// - [`OschError::SequenceOverflow`] if the next sequence number
    ///   exceeds the signed 64-bit envelope field.
    pub fn build(self) -> OschResult<Transaction> {
        if !self.timeout_set && !self.time_bounds.is_some_and(|tb| tb.max_time > 0) {
            return Err(OschError::MissingTimeBounds);
        }

        let fee = u64::from(self.base_fee)
            .checked_mul(self.operations.len() as u64)
            .and_then(|fee| u32::try_from(fee).ok())
            .ok_or(OschError::FeeOverflow)?;

        let seq_num = self
            .source
            .next_sequence_number()
            .to_i64()
            .ok_or(OschError::SequenceOverflow)?;

        let transaction = Transaction::new(
            *self.source.account_id(),
            fee,
            seq_num,
            self.time_bounds,
            self.memo,
            self.operations,
        );
        self.source.increment_sequence_number();
        tracing::debug!(
            fee,
            seq_num,
            operations = transaction.operations().len(),
            "built transaction envelope"
        );
        Ok(transaction)
    }
}
