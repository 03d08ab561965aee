//! Error types for text counting.

use std::fmt;

/// Result type alias for text counter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for text counter operations.
///
/// Counting itself never fails. Errors only come from editing a
/// [`TextStorage`](crate::TextStorage), parsing [`CountingOptions`](crate::CountingOptions),
/// or validating an edit signal against the text it claims to describe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Character range outside the storage.
    OutOfBounds { start: usize, end: usize, len: usize },
    /// Edited range does not fit in the post-edit text.
    EditOutOfBounds {
        start: usize,
        len: usize,
        text_len: usize,
    },
    /// Net length change implies a negative pre-edit length.
    InvalidChangeInLength { change: isize, text_len: usize },
    /// Unrecognized option name.
    InvalidOption(String),
    /// Raw option value has bits outside the known flags.
    UnknownOptionBits(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { start, end, len } => {
                write!(f, "range {start}..{end} out of bounds for text of {len} chars")
            }
            Self::EditOutOfBounds {
                start,
                len,
                text_len,
            } => {
                write!(
                    f,
                    "edited range {start}+{len} exceeds text of {text_len} chars"
                )
            }
            Self::InvalidChangeInLength { change, text_len } => {
                write!(
                    f,
                    "change in length {change} is inconsistent with text of {text_len} chars"
                )
            }
            Self::InvalidOption(name) => write!(f, "invalid counting option: {name}"),
            Self::UnknownOptionBits(bits) => write!(f, "unknown counting option bits: {bits:#x}"),
        }
    }
}

impl std::error::Error for Error {}
