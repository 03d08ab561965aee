//! Rope-backed plain text storage.
//!
//! [`TextStorage`] is the text a host editing surface mutates and a
//! [`TextCounter`](crate::TextCounter) observes. It wraps a `ropey::Rope`, so
//! clones share nodes and cost O(1): the counter keeps its own copy of the
//! host's text without duplicating it.
//!
//! Edits are addressed in chars and return the [`EditedRange`] to forward to
//! an [`EditObserver`](crate::EditObserver).
//!
//! # Examples
//!
//! ```
//! use text_counter::TextStorage;
//!
//! let mut storage = TextStorage::from("Hello!");
//! let edit = storage.insert(5, ", world").unwrap();
//! assert_eq!(storage.to_string(), "Hello, world!");
//! assert_eq!(edit.start, 5);
//! assert_eq!(edit.len, 7);
//! assert_eq!(edit.change_in_length, 7);
//! ```

use crate::edit::{EditActions, EditedRange};
use crate::error::{Error, Result};
use ropey::Rope;
use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

/// Plain text storage with char-indexed edits.
#[derive(Clone, Debug, Default)]
pub struct TextStorage {
    rope: Rope,
    revision: u64,
}

impl TextStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of chars.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get the number of bytes.
    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Revision counter, bumped on every mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Borrow the text when the rope is a single chunk, else copy it out.
    #[must_use]
    pub fn contents(&self) -> Cow<'_, str> {
        match self.rope.slice(..).as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(self.rope.to_string()),
        }
    }

    /// Replace the chars in `range` with `text`.
    ///
    /// Returns the post-edit range covering `text` and the net change in
    /// length, both in chars.
    pub fn replace_range(&mut self, range: Range<usize>, text: &str) -> Result<EditedRange> {
        let len = self.len_chars();
        if range.start > range.end || range.end > len {
            return Err(Error::OutOfBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }

        let removed = range.end - range.start;
        if removed > 0 {
            self.rope.remove(range.clone());
        }
        if !text.is_empty() {
            self.rope.insert(range.start, text);
        }
        self.bump_revision();

        let inserted = text.chars().count();
        Ok(EditedRange {
            start: range.start,
            len: inserted,
            change_in_length: inserted as isize - removed as isize,
            actions: EditActions::CHARACTERS,
        })
    }

    /// Insert text at a char position.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> Result<EditedRange> {
        self.replace_range(char_idx..char_idx, text)
    }

    /// Remove a range of chars.
    pub fn remove(&mut self, range: Range<usize>) -> Result<EditedRange> {
        self.replace_range(range, "")
    }

    /// Append text to the end.
    pub fn append(&mut self, text: &str) -> EditedRange {
        let len = self.len_chars();
        self.rope.insert(len, text);
        self.bump_revision();
        let inserted = text.chars().count();
        EditedRange {
            start: len,
            len: inserted,
            change_in_length: inserted as isize,
            actions: EditActions::CHARACTERS,
        }
    }

    /// Replace the entire contents.
    pub fn set_text(&mut self, text: &str) -> EditedRange {
        let removed = self.len_chars();
        self.rope = Rope::from_str(text);
        self.bump_revision();
        let inserted = self.len_chars();
        EditedRange {
            start: 0,
            len: inserted,
            change_in_length: inserted as isize - removed as isize,
            actions: EditActions::CHARACTERS,
        }
    }

    /// Access the underlying rope.
    #[must_use]
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl fmt::Display for TextStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl From<&str> for TextStorage {
    fn from(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
            revision: 0,
        }
    }
}

impl From<String> for TextStorage {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&String> for TextStorage {
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&TextStorage> for TextStorage {
    fn from(storage: &TextStorage) -> Self {
        storage.clone()
    }
}

impl From<Option<&str>> for TextStorage {
    /// Absent text is stored as empty.
    fn from(s: Option<&str>) -> Self {
        Self::from(s.unwrap_or_default())
    }
}
