//! Fuzz target for edit forwarding.
//!
//! Applies arbitrary edits (including bogus edit signals) to a storage and
//! forwards them to a counter. While enabled, the counter must agree with a
//! fresh count of the same text after every edit.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use text_counter::{CountingOptions, EditObserver, EditedRange, TextCounter, TextStorage};

#[derive(Debug, Arbitrary)]
enum Op {
    Replace { start: u16, end: u16, text: String },
    Append(String),
    Bogus { start: u64, len: u64, change: i64 },
    Toggle,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut counter = TextCounter::with_options(CountingOptions::all());
    let mut storage = TextStorage::new();
    counter.start_counting(&storage);

    for op in ops.into_iter().take(64) {
        match op {
            Op::Replace { start, end, text } => {
                if let Ok(edit) = storage.replace_range(start as usize..end as usize, &text) {
                    counter.did_process_editing(&storage, edit);
                }
            }
            Op::Append(text) => {
                let edit = storage.append(&text);
                counter.did_process_editing(&storage, edit);
            }
            Op::Bogus { start, len, change } => {
                let edit = EditedRange::characters(start as usize, len as usize, change as isize);
                counter.did_process_editing(&storage, edit);
            }
            Op::Toggle => {
                if counter.is_enabled() {
                    counter.end_counting();
                } else {
                    counter.start_counting(&storage);
                }
            }
        }

        if counter.is_enabled() {
            let mut fresh = TextCounter::with_options(CountingOptions::all());
            fresh.force_count(&storage);
            assert_eq!(counter.snapshot(), fresh.snapshot());
        }
    }
});
