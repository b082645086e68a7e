//! # Osch Rust SDK
//!
//! Canonical transaction envelope construction for the osch ledger.
//!
//! This crate assembles an account's pending sequence number, a fee, an
//! optional validity window, a memo, and a list of operations into one
//! deterministic [`Transaction`] value ready for signing. Byte-level
//! envelope encoding, key management, signing, and submission live in
//! separate layers; this crate is the pure, synchronous core they consume.
//!
//! ## Quick Start
//!
//! ```rust
//! use osch_sdk::{Account, AccountId, Memo, Network, Operation};
//! use osch_sdk::{TransactionBuilder, TransactionOptions};
//!
//! fn main() -> osch_sdk::OschResult<()> {
//!     // Identity and sequence number are fetched from the ledger.
//!     let id = AccountId::new([7u8; 32]).to_string();
//!     let mut account = Account::new(&id, "100")?;
//!
//!     let mut builder = TransactionBuilder::new(
//!         &mut account,
//!         TransactionOptions {
//!             fee: Some(100),
//!             ..Default::default()
//!         },
//!     );
//!     builder
//!         .add_operation(Operation::from_encoded(vec![0x01, 0x02]))
//!         .add_memo(Memo::text("example")?);
//!     builder.set_timeout(300)?;
//!
//!     let tx = builder.build()?;
//!     assert_eq!(tx.fee(), 100);
//!     assert_eq!(tx.sequence_number(), 101);
//!     assert_eq!(account.sequence_number(), "101");
//!
//!     // The signing layer binds the envelope to one ledger instance.
//!     let network = Network::test();
//!     assert_eq!(network.network_id().as_bytes().len(), 32);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`account`] - Sequence-number tracking for a ledger identity
//! - [`types`] - Identities, assets, and memos
//! - [`network`] - Ledger-instance identification and domain separation
//! - [`transaction`] - Envelope construction
//! - [`crypto`] - The hash primitive behind network ids
//! - [`error`] - The unified error type

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod account;
pub mod crypto;
pub mod error;
pub mod network;
pub mod transaction;
pub mod types;

// Re-export main entry points
pub use account::Account;
pub use error::{OschError, OschResult};
pub use network::{Network, NetworkId};
pub use transaction::{
    BASE_FEE, Operation, TimeBounds, Transaction, TransactionBuilder, TransactionOptions,
};
pub use types::{AccountId, Asset, AssetType, CanonicalAsset, Memo};

#[cfg(test)]
mod tests;
