//! Тест для модуля разбора SRT субтитров

use std::fs;

use tempfile::tempdir;

use crate::config::ParseMode;
use crate::error::CaptionError;
use crate::subtitle::parser::{self, CaptionDocument, CaptionEntry};
use crate::subtitle::timecode::TimeCode;

fn entry(sequence: usize, start_ms: u64, end_ms: u64, text: &str) -> CaptionEntry {
    CaptionEntry::new(
        sequence,
        TimeCode::from_millis(start_ms),
        TimeCode::from_millis(end_ms),
        text,
    )
}

const SAMPLE_SRT: &str = "1
00:00:01,000 --> 00:00:03,000
Это первая строка субтитров.

2
00:00:03,500 --> 00:00:05,000
Это вторая строка.
";

#[test]
fn test_parse_srt() {
    let document = parser::parse(SAMPLE_SRT).unwrap();

    assert_eq!(document.len(), 2);
    assert_eq!(document.entries()[0], entry(1, 1_000, 3_000, "Это первая строка субтитров."));
    assert_eq!(document.entries()[1], entry(2, 3_500, 5_000, "Это вторая строка."));
    assert_eq!(document.duration(), TimeCode::from_millis(5_000));
}

#[test]
fn test_parse_without_sequence_numbers() {
    let text = "00:00:00,000 --> 00:00:02,000\nFirst\n\n00:00:02,000 --> 00:00:04,000\nSecond\n";
    let document = parser::parse(text).unwrap();

    assert_eq!(document.len(), 2);
    assert_eq!(document.entries()[1], entry(2, 2_000, 4_000, "Second"));
}

#[test]
fn test_parse_empty_input() {
    assert!(parser::parse("").unwrap().is_empty());
    assert!(parser::parse("  \n\n \t\n").unwrap().is_empty());
}

#[test]
fn test_time_range_without_text_is_dropped() {
    let text = "1\n00:00:01,000 --> 00:00:02,000\n\n2\n00:00:03,000 --> 00:00:04,000\nSecond\n";
    let document = parser::parse(text).unwrap();

    assert_eq!(document.len(), 1);
    assert_eq!(document.entries()[0], entry(1, 3_000, 4_000, "Second"));
}

#[test]
fn test_noise_is_skipped() {
    let text = "garbage header\n\n\n1\n00:00:01,000-->00:00:02,000\n  Hello  \nextra line\n\n--> broken\n";
    let document = parser::parse(text).unwrap();

    assert_eq!(document.len(), 1);
    assert_eq!(document.entries()[0], entry(1, 1_000, 2_000, "Hello"));
}

#[test]
fn test_malformed_time_code_aborts() {
    let text = "1\n1a:00:00,000 --> 00:00:02,000\nHello\n";
    let result = parser::parse(text);
    assert!(matches!(result, Err(CaptionError::MalformedTimeCode(_))));
}

#[test]
fn test_strict_mode() {
    assert_eq!(
        parser::parse_with_mode(SAMPLE_SRT, ParseMode::Strict).unwrap().len(),
        2
    );

    let noisy = format!("WEBVTT\n\n{}", SAMPLE_SRT);
    let result = parser::parse_with_mode(&noisy, ParseMode::Strict);
    assert!(matches!(result, Err(CaptionError::InvalidFormat(_))));

    let missing_text = "1\n00:00:01,000 --> 00:00:02,000\n";
    let result = parser::parse_with_mode(missing_text, ParseMode::Strict);
    assert!(matches!(result, Err(CaptionError::InvalidFormat(_))));
}

#[test]
fn test_crlf_line_endings() {
    let text = SAMPLE_SRT.replace('\n', "\r\n");
    let document = parser::parse(&text).unwrap();
    assert_eq!(document.len(), 2);
    assert_eq!(document.entries()[1].text, "Это вторая строка.");
}

#[test]
fn test_document_order_is_preserved() {
    let text = "00:00:10,000 --> 00:00:12,000\nLater\n\n00:00:01,000 --> 00:00:02,000\nEarlier\n";
    let document = parser::parse(text).unwrap();

    let texts: Vec<&str> = document.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["Later", "Earlier"]);
}

#[test]
fn test_to_srt_block_shape() {
    let document = CaptionDocument::from_entries(vec![
        entry(7, 1_500, 3_250, "Hello there"),
        entry(9, 5_000, 6_000, "Second"),
    ]);

    assert_eq!(
        document.to_srt(),
        "1\n00:00:01,500 --> 00:00:03,250\nHello there\n\n2\n00:00:05,000 --> 00:00:06,000\nSecond\n\n"
    );
}

#[test]
fn test_serialize_parse_is_stable() {
    let texts = [
        "One, two.",
        "Go --> there",
        "00:00:01,000 --> 00:00:02,000",
        "42",
        "-->",
        "Zero length",
        "Привет, мир!",
    ];
    let times = [
        (0, 1_999),
        (1_999, 1_999),
        (500, 90_061_001),
        (3_599_999, 3_600_000),
        // 1000 часов
        (3_600_000_000, 3_600_000_001),
        (10_000, 5_000),
    ];

    let mut entries = Vec::new();
    for (i, text) in texts.iter().enumerate() {
        for (start, end) in times {
            entries.push(entry(entries.len() + 1, start + i as u64, end, text));
        }
    }
    let document = CaptionDocument::from_entries(entries.clone());

    let reparsed = parser::parse(&document.to_srt()).unwrap();
    assert_eq!(reparsed.entries(), entries.as_slice());

    let mut current = reparsed;
    for _ in 0..3 {
        let again = parser::parse(&current.to_srt()).unwrap();
        assert_eq!(again, current);
        current = again;
    }
}

#[test]
fn test_caption_text_with_arrow() {
    let document = CaptionDocument::from_entries(vec![
        entry(1, 0, 1_000, "Go --> there"),
        entry(2, 1_000, 2_000, "Next"),
    ]);

    let reparsed = parser::parse(&document.to_srt()).unwrap();
    assert_eq!(reparsed, document);

    let strict = parser::parse_with_mode(&document.to_srt(), ParseMode::Strict).unwrap();
    assert_eq!(strict.entries()[0].text, "Go --> there");
}

#[test]
fn test_parse_and_write_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.srt");
    let output = dir.path().join("output.srt");
    fs::write(&input, SAMPLE_SRT).unwrap();

    let document = parser::parse_file(&input, ParseMode::Lenient).unwrap();
    parser::write_file(&output, &document).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, document.to_srt());
    assert_eq!(parser::parse(&written).unwrap(), document);
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let result = parser::parse_file(dir.path().join("missing.srt"), ParseMode::Lenient);
    assert!(matches!(result, Err(CaptionError::FileNotFound(_))));
}

#[test]
fn test_to_json() {
    let document = CaptionDocument::from_entries(vec![entry(1, 0, 2_000, "A")]);
    let json = document.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value[0]["sequence"].as_u64(), Some(1));
    assert_eq!(value[0]["end"].as_u64(), Some(2_000));
    assert_eq!(value[0]["text"].as_str(), Some("A"));
}
