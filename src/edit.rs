//! Edit signals from a host text-editing surface.
//!
//! The host applies an edit to its [`TextStorage`], then forwards the
//! resulting [`EditedRange`] together with the storage to an
//! [`EditObserver`]. Ranges are in chars and describe the post-edit text.

use crate::error::{Error, Result};
use crate::storage::TextStorage;
use bitflags::bitflags;

bitflags! {
    /// What an edit changed.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct EditActions: u8 {
        /// Attributes only; the characters are unchanged.
        const ATTRIBUTES = 1 << 0;
        /// Characters were inserted, removed or replaced.
        const CHARACTERS = 1 << 1;
    }
}

/// A replaced span and the net length delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditedRange {
    /// Start of the edited range in the post-edit text.
    pub start: usize,
    /// Length of the edited range in the post-edit text.
    pub len: usize,
    /// Post-edit length minus pre-edit length.
    pub change_in_length: isize,
    pub actions: EditActions,
}

impl EditedRange {
    /// A character edit.
    #[must_use]
    pub const fn characters(start: usize, len: usize, change_in_length: isize) -> Self {
        Self {
            start,
            len,
            change_in_length,
            actions: EditActions::CHARACTERS,
        }
    }

    /// Whether the edit touched characters (as opposed to attributes only).
    #[must_use]
    pub const fn edits_characters(&self) -> bool {
        self.actions.contains(EditActions::CHARACTERS)
    }

    /// Check the signal against the post-edit text length.
    pub fn validate(&self, text_len: usize) -> Result<()> {
        if self.start.checked_add(self.len).is_none_or(|end| end > text_len) {
            return Err(Error::EditOutOfBounds {
                start: self.start,
                len: self.len,
                text_len,
            });
        }
        let invalid = || Error::InvalidChangeInLength {
            change: self.change_in_length,
            text_len,
        };
        // Pre-edit length and removed span (len - change) are both >= 0
        let before = isize::try_from(text_len)
            .ok()
            .and_then(|len| len.checked_sub(self.change_in_length))
            .ok_or_else(invalid)?;
        let removed = isize::try_from(self.len)
            .ok()
            .and_then(|len| len.checked_sub(self.change_in_length))
            .ok_or_else(invalid)?;
        if before < 0 || removed < 0 {
            return Err(invalid());
        }
        Ok(())
    }
}

/// Receives edit notifications from a text-editing surface.
///
/// Called once per processed edit, after `storage` already reflects it.
pub trait EditObserver {
    fn did_process_editing(&mut self, storage: &TextStorage, edit: EditedRange);
}
