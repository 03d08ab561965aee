//! `text_counter` - Incremental text token counting
//!
//! Counts composed characters, words, lines, sentences and paragraphs in a
//! plain-text document and recounts as the document is edited. A host
//! editing surface owns a [`TextStorage`], applies edits to it and forwards
//! each [`EditedRange`] to a [`TextCounter`], which publishes a fresh
//! [`CountSnapshot`] to its subscribers after every counting pass.
//!
//! # Examples
//!
//! ```
//! use text_counter::{CountingOptions, TextCounter};
//!
//! let mut counter = TextCounter::new();
//! counter.subscribe(|snapshot| println!("{snapshot}"));
//! counter.start_counting("One sentence.\n\nAnother paragraph here.");
//!
//! assert_eq!(counter.count_of_words(), 5);
//! assert_eq!(counter.count_of_sentences(), 2);
//! assert_eq!(counter.count_of_paragraphs(), 2);
//!
//! // Lines are not counted by default
//! assert!(!counter.options().contains(CountingOptions::LINES));
//! assert_eq!(counter.count_of_lines(), 0);
//! ```

// Crate-level lint configuration
#![allow(clippy::cast_possible_wrap)] // Char counts fit in isize
#![allow(clippy::module_name_repetitions)] // Allow TextCounter in counter etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::must_use_candidate)] // Getters without docs are fine
#![allow(clippy::doc_markdown)] // Allow technical names without backticks

pub mod counter;
pub mod edit;
pub mod error;
pub mod event;
pub mod options;
pub mod snapshot;
pub mod storage;
pub mod tokenizer;

// Re-export core types at crate root
pub use counter::TextCounter;
pub use edit::{EditActions, EditObserver, EditedRange};
pub use error::{Error, Result};
pub use event::{
    LogLevel, SubscriptionId, clear_log_callback, emit_log, log_level, set_log_callback,
    set_log_level,
};
pub use options::{CountingOptions, Granularity};
pub use snapshot::{CountSnapshot, keys};
pub use storage::TextStorage;
