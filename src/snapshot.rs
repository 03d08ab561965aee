//! Immutable result of one counting pass.

use crate::options::{CountingOptions, Granularity};
use crate::tokenizer;
use std::fmt;

/// Keys of the published result mapping.
pub mod keys {
    pub const COMPOSED_CHARACTER_SEQUENCES_COUNT: &str = "composedCharacterSequencesCount";
    pub const WORD_COUNT: &str = "wordCount";
    pub const LINE_COUNT: &str = "lineCount";
    pub const SENTENCE_COUNT: &str = "sentenceCount";
    pub const PARAGRAPH_COUNT: &str = "paragraphCount";
}

/// Counts for all five granularities.
///
/// A pass only recomputes the active granularities; the others keep the
/// value from the snapshot the pass started from. Snapshots are `Copy` and
/// never mutated once published.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CountSnapshot {
    pub composed_character_sequences: usize,
    pub words: usize,
    pub lines: usize,
    pub sentences: usize,
    pub paragraphs: usize,
}

impl CountSnapshot {
    /// All-zero snapshot.
    pub const ZERO: Self = Self {
        composed_character_sequences: 0,
        words: 0,
        lines: 0,
        sentences: 0,
        paragraphs: 0,
    };

    /// Get the count for a granularity.
    #[must_use]
    pub const fn get(&self, granularity: Granularity) -> usize {
        match granularity {
            Granularity::ComposedCharacterSequences => self.composed_character_sequences,
            Granularity::Words => self.words,
            Granularity::Lines => self.lines,
            Granularity::Sentences => self.sentences,
            Granularity::Paragraphs => self.paragraphs,
        }
    }

    fn slot_mut(&mut self, granularity: Granularity) -> &mut usize {
        match granularity {
            Granularity::ComposedCharacterSequences => &mut self.composed_character_sequences,
            Granularity::Words => &mut self.words,
            Granularity::Lines => &mut self.lines,
            Granularity::Sentences => &mut self.sentences,
            Granularity::Paragraphs => &mut self.paragraphs,
        }
    }

    /// Return a copy with the given count replaced.
    #[must_use]
    pub fn with(mut self, granularity: Granularity, value: usize) -> Self {
        *self.slot_mut(granularity) = value;
        self
    }

    /// Run a counting pass over `text`.
    ///
    /// Only granularities in `options` are recounted; the rest carry over
    /// from `self`.
    #[must_use]
    pub fn recount(&self, text: &str, options: CountingOptions) -> Self {
        options
            .granularities()
            .fold(*self, |snapshot, g| snapshot.with(g, tokenizer::count(text, g)))
    }

    /// The result mapping, keyed as published to subscribers.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, usize); 5] {
        Granularity::ALL.map(|g| (g.key(), self.get(g)))
    }
}

impl fmt::Display for CountSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} characters, {} words, {} lines, {} sentences, {} paragraphs",
            self.composed_character_sequences, self.words, self.lines, self.sentences, self.paragraphs
        )
    }
}
