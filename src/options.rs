//! Counting options and granularities.
//!
//! - [`CountingOptions`]: Bitflags selecting which granularities a counting
//!   pass computes
//! - [`Granularity`]: One of the five countable token types
//!
//! # Examples
//!
//! ```
//! use text_counter::{CountingOptions, Granularity};
//!
//! let options = CountingOptions::default();
//! assert!(options.contains(CountingOptions::WORDS));
//! assert!(!options.contains(CountingOptions::LINES));
//!
//! let parsed: CountingOptions = "words | lines".parse().unwrap();
//! let active: Vec<_> = parsed.granularities().collect();
//! assert_eq!(active, vec![Granularity::Words, Granularity::Lines]);
//! ```

use crate::error::{Error, Result};
use crate::snapshot::keys;
use bitflags::bitflags;
use std::str::FromStr;

bitflags! {
    /// Granularities computed by a counting pass.
    ///
    /// Any subset may be active. A pass only scans the text once per active
    /// flag, so fewer flags means less work per edit.
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
    pub struct CountingOptions: u32 {
        /// User-perceived characters (extended grapheme clusters).
        const COMPOSED_CHARACTER_SEQUENCES = 1 << 0;
        /// Runs of non-whitespace.
        const WORDS                        = 1 << 1;
        /// Separator-delimited lines.
        const LINES                        = 1 << 2;
        /// Terminated or paragraph-closed sentences.
        const SENTENCES                    = 1 << 3;
        /// Blank-line separated paragraphs.
        const PARAGRAPHS                   = 1 << 4;
    }
}

impl Default for CountingOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CountingOptions {
    /// Options active on a freshly constructed counter.
    pub const DEFAULT: Self = Self::WORDS.union(Self::SENTENCES).union(Self::PARAGRAPHS);

    /// Build options from a raw bit value, rejecting unknown bits.
    pub fn from_raw(bits: u32) -> Result<Self> {
        Self::from_bits(bits).ok_or(Error::UnknownOptionBits(bits & !Self::all().bits()))
    }

    /// Parse options from names separated by `|`, `,` or whitespace.
    ///
    /// Names are the [`Granularity::name`] values, case-insensitive, plus
    /// `all`, `none` and `default`. An empty string yields no options.
    pub fn parse(s: &str) -> Result<Self> {
        let mut options = Self::empty();
        for name in s
            .split(|c: char| c == '|' || c == ',' || c.is_whitespace())
            .filter(|name| !name.is_empty())
        {
            let lower = name.to_ascii_lowercase();
            options |= match lower.as_str() {
                "all" => Self::all(),
                "none" => Self::empty(),
                "default" => Self::DEFAULT,
                other => Granularity::from_name(other)
                    .map(Granularity::option)
                    .ok_or_else(|| Error::InvalidOption(name.to_string()))?,
            };
        }
        Ok(options)
    }

    /// Iterate active granularities in bit order.
    pub fn granularities(self) -> impl Iterator<Item = Granularity> {
        Granularity::ALL
            .into_iter()
            .filter(move |g| self.contains(g.option()))
    }
}

impl FromStr for CountingOptions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// One of the five countable token types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Granularity {
    ComposedCharacterSequences,
    Words,
    Lines,
    Sentences,
    Paragraphs,
}

impl Granularity {
    /// All granularities in bit order.
    pub const ALL: [Self; 5] = [
        Self::ComposedCharacterSequences,
        Self::Words,
        Self::Lines,
        Self::Sentences,
        Self::Paragraphs,
    ];

    /// The option flag selecting this granularity.
    #[must_use]
    pub const fn option(self) -> CountingOptions {
        match self {
            Self::ComposedCharacterSequences => CountingOptions::COMPOSED_CHARACTER_SEQUENCES,
            Self::Words => CountingOptions::WORDS,
            Self::Lines => CountingOptions::LINES,
            Self::Sentences => CountingOptions::SENTENCES,
            Self::Paragraphs => CountingOptions::PARAGRAPHS,
        }
    }

    /// Key used for this granularity in published results.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ComposedCharacterSequences => keys::COMPOSED_CHARACTER_SEQUENCES_COUNT,
            Self::Words => keys::WORD_COUNT,
            Self::Lines => keys::LINE_COUNT,
            Self::Sentences => keys::SENTENCE_COUNT,
            Self::Paragraphs => keys::PARAGRAPH_COUNT,
        }
    }

    /// Short lowercase name, as accepted by [`CountingOptions::parse`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ComposedCharacterSequences => "characters",
            Self::Words => "words",
            Self::Lines => "lines",
            Self::Sentences => "sentences",
            Self::Paragraphs => "paragraphs",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "composed" | "chars" | "graphemes" => Some(Self::ComposedCharacterSequences),
            _ => Self::ALL.into_iter().find(|g| g.name() == name),
        }
    }
}
