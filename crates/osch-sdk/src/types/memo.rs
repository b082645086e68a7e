//! Transaction memo.

use crate::error::{OschError, OschResult};
use serde::{Deserialize, Serialize};

/// Maximum byte length of a text memo.
pub const MAX_TEXT_MEMO_BYTES: usize = 28;

/// An optional note attached to a transaction.
///
/// The byte encoding of each variant belongs to the external envelope
/// codec; this type only carries the tagged value. The default is no memo.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Memo {
    /// No memo.
    #[default]
    None,
    /// A short UTF-8 note, at most [`MAX_TEXT_MEMO_BYTES`] bytes.
    Text(String),
    /// A 64-bit identifier, e.g. a deposit reference.
    Id(u64),
    /// A 32-byte hash referencing an external document.
    Hash([u8; 32]),
    /// A 32-byte hash used when returning funds from a failed exchange.
    Return([u8; 32]),
}

impl Memo {
    /// Creates a text memo, validating the length limit.
    ///
    /// # Errors
    ///
    /// Returns [`OschError::InvalidMemo`] if the text exceeds
    /// [`MAX_TEXT_MEMO_BYTES`] bytes of UTF-8.
    pub fn text<T: Into<String>>(text: T) -> OschResult<Self> {
        let text = text.into();
        if text.len() > MAX_TEXT_MEMO_BYTES {
            return Err(OschError::InvalidMemo(format!(
                "text memo is {} bytes, maximum is {}",
                text.len(),
                MAX_TEXT_MEMO_BYTES
            )));
        }
        Ok(Self::Text(text))
    }

    /// Returns true if no memo is attached.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
