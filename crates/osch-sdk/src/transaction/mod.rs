//! Transaction envelope construction.
//!
//! This module turns builder inputs into a finalized, signable
//! [`Transaction`] value: an immutable snapshot of the source identity,
//! the computed fee and sequence number, the memo, the optional validity
//! window, and the ordered operation list.
//!
//! # Example
//!
//! ```rust
//! use osch_sdk::{Account, AccountId, Operation};
//! use osch_sdk::{TransactionBuilder, TransactionOptions};
//!
//! # fn main() -> osch_sdk::OschResult<()> {
//! let id = AccountId::new([1u8; 32]).to_string();
//! let mut account = Account::new(&id, "7")?;
//!
//! let mut builder = TransactionBuilder::new(&mut account, TransactionOptions::default());
//! builder.add_operation(Operation::from_encoded(vec![0x01]));
//! builder.set_timeout(600)?;
//!
//! let tx = builder.build()?;
//! assert_eq!(tx.sequence_number(), 8);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod types;

pub use builder::{BASE_FEE, TIMEOUT_INFINITE, TransactionBuilder, TransactionOptions};
pub use types::{Operation, TimeBounds, Transaction, TransactionExt};
