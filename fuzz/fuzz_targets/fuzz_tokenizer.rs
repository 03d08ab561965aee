//! Fuzz target for the tokenizer.
//!
//! Every counter must accept arbitrary UTF-8 without panicking and keep the
//! ordering between granularities.

#![no_main]

use libfuzzer_sys::fuzz_target;
use text_counter::tokenizer::{
    count_composed_character_sequences, count_lines, count_paragraphs, count_sentences,
    count_words,
};

fuzz_target!(|text: &str| {
    let chars = count_composed_character_sequences(text);
    let words = count_words(text);
    let lines = count_lines(text);
    let sentences = count_sentences(text);
    let paragraphs = count_paragraphs(text);

    assert!(chars <= text.chars().count());
    assert!(words <= chars);
    assert!(sentences <= words);
    assert!(paragraphs <= sentences);
    assert!(paragraphs <= lines);
    assert_eq!(lines == 0, text.is_empty());
});
