//! Core osch value types.
//!
//! This module contains the fundamental value types used throughout the
//! SDK: account identities, assets, and memos.

mod asset;
mod identity;
mod memo;

pub use asset::{Asset, AssetType, CanonicalAsset, NATIVE_TICKER};
pub use identity::{AccountId, ENCODED_IDENTITY_LENGTH, IDENTITY_LENGTH};
pub use memo::{MAX_TEXT_MEMO_BYTES, Memo};
