//! The counting engine.
//!
//! [`TextCounter`] holds the observed text, the active [`CountingOptions`],
//! an enabled flag and the current [`CountSnapshot`]. Each counting pass
//! recounts the active granularities over the whole text, replaces the
//! snapshot and publishes it to every subscriber.
//!
//! # Examples
//!
//! ```
//! use text_counter::{CountingOptions, EditObserver, TextCounter, TextStorage};
//!
//! let mut counter = TextCounter::with_options(CountingOptions::WORDS | CountingOptions::LINES);
//! let mut storage = TextStorage::from("Hello world");
//! counter.start_counting(&storage);
//! assert_eq!(counter.count_of_words(), 2);
//!
//! let edit = storage.insert(11, "\nagain").unwrap();
//! counter.did_process_editing(&storage, edit);
//! assert_eq!(counter.count_of_words(), 3);
//! assert_eq!(counter.count_of_lines(), 2);
//! ```

use crate::edit::{EditObserver, EditedRange};
use crate::event::{LogLevel, SubscriptionId, Subscribers, emit_log, log_enabled};
use crate::options::CountingOptions;
use crate::snapshot::CountSnapshot;
use crate::storage::TextStorage;

/// Counts tokens in a text document as it is edited.
///
/// All operations run synchronously to completion on the caller's thread.
/// The counter does no locking; callers sharing it across threads must
/// serialize access.
///
/// A new counter is disabled, holds empty text and an all-zero snapshot.
#[derive(Debug, Default)]
pub struct TextCounter {
    storage: TextStorage,
    options: CountingOptions,
    enabled: bool,
    snapshot: CountSnapshot,
    passes: u64,
    subscribers: Subscribers,
}

impl TextCounter {
    /// Create a counter with the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter with the given options.
    #[must_use]
    pub fn with_options(options: CountingOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> CountingOptions {
        self.options
    }

    /// Replace the active options. Takes effect on the next pass.
    pub fn set_options(&mut self, options: CountingOptions) {
        self.options = options;
    }

    /// Whether edits trigger a recount.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Load a document and count it. Edits trigger recounts from here on.
    pub fn start_counting(&mut self, text: impl Into<TextStorage>) {
        if !self.enabled {
            emit_log(LogLevel::Info, "text counter enabled");
        }
        self.enabled = true;
        self.storage = text.into();
        self.count();
    }

    /// Stop recounting on edits. Text and snapshot are kept.
    pub fn end_counting(&mut self) {
        if self.enabled {
            emit_log(LogLevel::Info, "text counter disabled");
        }
        self.enabled = false;
    }

    /// Store `text` and count it once, whether or not the counter is enabled.
    pub fn force_count(&mut self, text: impl Into<TextStorage>) {
        self.storage = text.into();
        self.count();
    }

    /// Register a callback for every completed pass.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&CountSnapshot) + Send + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> CountSnapshot {
        self.snapshot
    }

    /// The text of the last load or processed edit.
    #[must_use]
    pub fn text(&self) -> &TextStorage {
        &self.storage
    }

    /// Number of completed counting passes.
    #[must_use]
    pub fn pass_count(&self) -> u64 {
        self.passes
    }

    #[must_use]
    pub fn count_of_composed_character_sequences(&self) -> usize {
        self.snapshot.composed_character_sequences
    }

    #[must_use]
    pub fn count_of_words(&self) -> usize {
        self.snapshot.words
    }

    #[must_use]
    pub fn count_of_lines(&self) -> usize {
        self.snapshot.lines
    }

    /// Sentences. A line break without surrounding blank space does not end one.
    #[must_use]
    pub fn count_of_sentences(&self) -> usize {
        self.snapshot.sentences
    }

    /// Paragraphs. A line break without a blank line does not start one.
    #[must_use]
    pub fn count_of_paragraphs(&self) -> usize {
        self.snapshot.paragraphs
    }

    fn count(&mut self) {
        let snapshot = {
            let text = self.storage.contents();
            self.snapshot.recount(&text, self.options)
        };
        self.snapshot = snapshot;
        self.passes += 1;
        if log_enabled(LogLevel::Debug) {
            emit_log(
                LogLevel::Debug,
                &format!("counting pass {} ({:?}): {snapshot}", self.passes, self.options),
            );
        }
        self.subscribers.publish(&snapshot);
    }
}

impl EditObserver for TextCounter {
    fn did_process_editing(&mut self, storage: &TextStorage, edit: EditedRange) {
        if !self.enabled {
            emit_log(LogLevel::Debug, "edit ignored: counting disabled");
            return;
        }
        if !edit.edits_characters() {
            emit_log(LogLevel::Debug, "edit ignored: attributes only");
            return;
        }
        if let Err(err) = edit.validate(storage.len_chars()) {
            // A full recount does not depend on the range
            emit_log(LogLevel::Warn, &format!("inconsistent edit signal: {err}"));
        }
        // TODO: recount only the paragraphs touched by `edit` instead of the whole text
        self.storage = storage.clone();
        self.count();
    }
}
