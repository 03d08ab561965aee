//! Tests for published results and log routing.
//!
//! Hosts usually forward each published snapshot as a keyed payload (JSON
//! here) and route counter logs into their own logger (`tracing` here).

use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, Once};
use text_counter::{CountingOptions, LogLevel, TextCounter, keys, set_log_callback};
use tracing::info;

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
        set_log_callback(|level, message| match level {
            LogLevel::Debug => tracing::debug!(target: "text_counter", "{message}"),
            LogLevel::Info => tracing::info!(target: "text_counter", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "text_counter", "{message}"),
            LogLevel::Error => tracing::error!(target: "text_counter", "{message}"),
        });
    });
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct CountPayload {
    composed_character_sequences_count: usize,
    word_count: usize,
    line_count: usize,
    sentence_count: usize,
    paragraph_count: usize,
}

fn json_payloads(counter: &mut TextCounter) -> Arc<Mutex<Vec<serde_json::Value>>> {
    let payloads = Arc::new(Mutex::new(Vec::new()));
    let payloads_clone = Arc::clone(&payloads);
    counter.subscribe(move |snapshot| {
        let map: BTreeMap<&str, usize> = snapshot.entries().into_iter().collect();
        payloads_clone
            .lock()
            .unwrap()
            .push(serde_json::to_value(map).unwrap());
    });
    payloads
}

#[test]
fn payload_uses_result_keys() {
    setup_test_logging();
    let mut counter = TextCounter::with_options(CountingOptions::all());
    let payloads = json_payloads(&mut counter);

    counter.start_counting("Café au lait.\nWith sugar?\n\nNo.");
    info!(snapshot = %counter.snapshot(), "counted");

    let payloads = payloads.lock().unwrap();
    assert_eq!(payloads.len(), 1);
    let payload: CountPayload = serde_json::from_value(payloads[0].clone()).unwrap();
    assert_eq!(
        payload,
        CountPayload {
            composed_character_sequences_count: 30,
            word_count: 6,
            line_count: 4,
            sentence_count: 3,
            paragraph_count: 2,
        }
    );
    assert_eq!(payloads[0][keys::WORD_COUNT], 6);
}

#[test]
fn payload_always_carries_every_key() {
    setup_test_logging();
    let mut counter = TextCounter::with_options(CountingOptions::WORDS);
    let payloads = json_payloads(&mut counter);
    counter.force_count("just words");

    let payloads = payloads.lock().unwrap();
    let object = payloads[0].as_object().unwrap();
    assert_eq!(object.len(), 5);
    for key in [
        keys::COMPOSED_CHARACTER_SEQUENCES_COUNT,
        keys::WORD_COUNT,
        keys::LINE_COUNT,
        keys::SENTENCE_COUNT,
        keys::PARAGRAPH_COUNT,
    ] {
        assert!(object.contains_key(key), "missing {key}");
    }
}

#[test]
fn snapshot_summary() {
    setup_test_logging();
    let mut counter = TextCounter::with_options(CountingOptions::all());
    counter.force_count("👨‍👩‍👧 e\u{0301}\r\nok.");
    insta::assert_snapshot!(
        counter.snapshot().to_string(),
        @"7 characters, 3 words, 2 lines, 1 sentences, 1 paragraphs"
    );
}
