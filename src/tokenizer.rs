//! Pure token counting over plain text.
//!
//! Every counter is a single forward scan. None of them allocate.
//!
//! # Boundary rules
//!
//! - **Line separators**: LF, CR, CRLF (one separator), VT, FF, NEL,
//!   U+2028 LINE SEPARATOR and U+2029 PARAGRAPH SEPARATOR. This matches the
//!   set `ropey` uses, so line counts agree with the rope for non-empty text.
//! - **Blank line**: a line that is empty or only whitespace.
//! - **Paragraph break**: one or more blank lines between two non-blank
//!   lines, or a U+2029. A single separator between two non-blank lines does
//!   not break a paragraph.
//! - **Sentence**: a run with at least one non-whitespace character, closed by
//!   a terminator (`.`, `!`, `?`) followed by whitespace or end of text, by a
//!   paragraph break, or by end of text. A bare line separator never closes a
//!   sentence.
//!
//! # Examples
//!
//! ```
//! use text_counter::tokenizer::{count_lines, count_paragraphs, count_sentences, count_words};
//!
//! assert_eq!(count_words("one two  three"), 3);
//! assert_eq!(count_lines("a\nb"), 2);
//! assert_eq!(count_sentences("Hello\nworld."), 1);
//! assert_eq!(count_paragraphs("first\nstill first\n\nsecond"), 2);
//! ```

use crate::options::Granularity;
use unicode_segmentation::UnicodeSegmentation;

const PARAGRAPH_SEPARATOR: char = '\u{2029}';

/// Whether `c` separates lines.
#[inline]
#[must_use]
pub fn is_line_separator(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | PARAGRAPH_SEPARATOR
    )
}

#[inline]
fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

#[inline]
fn is_closing_punctuation(c: char) -> bool {
    matches!(
        c,
        '"' | '\'' | ')' | ']' | '}' | '\u{201D}' | '\u{2019}' | '\u{00BB}'
    )
}

/// Count user-perceived characters (extended grapheme clusters).
#[must_use]
pub fn count_composed_character_sequences(text: &str) -> usize {
    if text.is_ascii() {
        // CRLF is the only multi-byte ASCII cluster
        return text.len() - text.matches("\r\n").count();
    }
    text.graphemes(true).count()
}

/// Count maximal runs of non-whitespace.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count lines. Empty text has no lines; otherwise separators + 1.
#[must_use]
pub fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    Lines::new(text).count()
}

/// Count paragraphs: groups of non-blank lines between paragraph breaks.
#[must_use]
pub fn count_paragraphs(text: &str) -> usize {
    let mut count = 0;
    let mut in_paragraph = false;

    for line in Lines::new(text) {
        if line.is_blank() {
            in_paragraph = false;
        } else if !in_paragraph {
            count += 1;
            in_paragraph = true;
        }
        if line.separator == Some(PARAGRAPH_SEPARATOR) {
            in_paragraph = false;
        }
    }

    count
}

/// Count sentences.
#[must_use]
pub fn count_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut in_sentence = false;

    for line in Lines::new(text) {
        if line.is_blank() {
            if in_sentence {
                count += 1;
                in_sentence = false;
            }
            continue;
        }

        let mut chars = line.text.chars().peekable();
        while let Some(c) = chars.next() {
            if c.is_whitespace() {
                continue;
            }
            in_sentence = true;
            if !is_sentence_terminator(c) {
                continue;
            }
            while chars
                .next_if(|&n| is_sentence_terminator(n) || is_closing_punctuation(n))
                .is_some()
            {}
            // End of line counts as trailing whitespace
            if chars.peek().is_none_or(|n| n.is_whitespace()) {
                count += 1;
                in_sentence = false;
            }
        }

        if line.separator == Some(PARAGRAPH_SEPARATOR) && in_sentence {
            count += 1;
            in_sentence = false;
        }
    }

    if in_sentence {
        count += 1;
    }
    count
}

/// Count a single granularity.
#[must_use]
pub fn count(text: &str, granularity: Granularity) -> usize {
    match granularity {
        Granularity::ComposedCharacterSequences => count_composed_character_sequences(text),
        Granularity::Words => count_words(text),
        Granularity::Lines => count_lines(text),
        Granularity::Sentences => count_sentences(text),
        Granularity::Paragraphs => count_paragraphs(text),
    }
}

/// A line and the separator that ended it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Line<'a> {
    text: &'a str,
    /// First char of the separator; `None` for the final line.
    separator: Option<char>,
}

impl Line<'_> {
    fn is_blank(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

/// Splits text on line separators, always yielding a final (possibly empty)
/// line.
struct Lines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: Some(text) }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match rest.char_indices().find(|&(_, c)| is_line_separator(c)) {
            Some((idx, sep)) => {
                let mut sep_len = sep.len_utf8();
                if sep == '\r' && rest[idx + 1..].starts_with('\n') {
                    sep_len += 1;
                }
                self.rest = Some(&rest[idx + sep_len..]);
                Some(Line {
                    text: &rest[..idx],
                    separator: Some(sep),
                })
            }
            None => {
                self.rest = None;
                Some(Line {
                    text: rest,
                    separator: None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_iterator() {
        let lines: Vec<_> = Lines::new("a\r\nb\rc\n").map(|l| l.text).collect();
        assert_eq!(lines, vec!["a", "b", "c", ""]);
    }

    #[test]
    fn test_count_lines_convention() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("a"), 1);
        assert_eq!(count_lines("a\nb"), 2);
        assert_eq!(count_lines("a\n"), 2);
        assert_eq!(count_lines("\n"), 2);
        assert_eq!(count_lines("a\r\nb"), 2);
        assert_eq!(count_lines("a\u{2028}b\u{2029}c"), 3);
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("hello"), 1);
        assert_eq!(count_words("  hello,   world! "), 2);
        assert_eq!(count_words("line\none\u{2028}two"), 3);
    }

    #[test]
    fn test_count_composed_character_sequences() {
        assert_eq!(count_composed_character_sequences(""), 0);
        assert_eq!(count_composed_character_sequences("abc"), 3);
        // e + combining acute accent
        assert_eq!(count_composed_character_sequences("e\u{0301}"), 1);
        // Family emoji (ZWJ sequence)
        assert_eq!(count_composed_character_sequences("👨‍👩‍👧"), 1);
        assert_eq!(count_composed_character_sequences("🇺🇸!"), 2);
        assert_eq!(count_composed_character_sequences("a\r\nb"), 3);
    }

    #[test]
    fn test_ascii_fast_path_matches_graphemes() {
        for s in ["", "a\r\n\r\nb", "\r\r\n\n", "plain text.\n"] {
            assert_eq!(count_composed_character_sequences(s), s.graphemes(true).count());
        }
    }

    #[test]
    fn test_count_sentences_bare_newline_does_not_end_sentence() {
        assert_eq!(count_sentences("Hello\nworld."), 1);
        assert_eq!(count_sentences("Hello\nworld."), count_sentences("Hello world."));
    }

    #[test]
    fn test_count_sentences_terminators() {
        assert_eq!(count_sentences(""), 0);
        assert_eq!(count_sentences("   \n "), 0);
        assert_eq!(count_sentences("One. Two! Three?"), 3);
        assert_eq!(count_sentences("Really?! Yes..."), 2);
        assert_eq!(count_sentences("No terminator"), 1);
        assert_eq!(count_sentences("He said \"stop.\" Then left."), 2);
        assert_eq!(count_sentences("3.14 is pi."), 1);
        assert_eq!(count_sentences("End.\nNext"), 2);
    }

    #[test]
    fn test_count_sentences_paragraph_break() {
        assert_eq!(count_sentences("Heading\n\nBody text."), 2);
        assert_eq!(count_sentences("Heading\n  \nBody text."), 2);
        assert_eq!(count_sentences("Heading\u{2029}Body"), 2);
        assert_eq!(count_sentences("Done.\n\n"), 1);
    }

    #[test]
    fn test_count_paragraphs() {
        assert_eq!(count_paragraphs(""), 0);
        assert_eq!(count_paragraphs("\n\n \n"), 0);
        assert_eq!(count_paragraphs("one"), 1);
        assert_eq!(count_paragraphs("one\ntwo"), 1);
        assert_eq!(count_paragraphs("one\n\ntwo"), 2);
        assert_eq!(count_paragraphs("one\n \t\ntwo"), 2);
        assert_eq!(count_paragraphs("one\n\n\n\ntwo\n"), 2);
        assert_eq!(count_paragraphs("one\u{2029}two"), 2);
    }

    #[test]
    fn test_count_dispatch() {
        let text = "Hi there.\n\nBye.";
        assert_eq!(count(text, Granularity::ComposedCharacterSequences), 15);
        assert_eq!(count(text, Granularity::Words), 3);
        assert_eq!(count(text, Granularity::Lines), 3);
        assert_eq!(count(text, Granularity::Sentences), 2);
        assert_eq!(count(text, Granularity::Paragraphs), 2);
    }
}
