//! Конвертация сырой транскрипции Whisper в SRT
//!
//! Whisper печатает в stdout строки вида `[00:01.500 --> 00:03.250] текст`.
//! Каждая такая строка превращается в блок SRT, остальные строки молча
//! отбрасываются.

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::subtitle::parser::{self, CaptionDocument, CaptionEntry};
use crate::subtitle::timecode::{self, TimeCodeFormat};

// Whisper prefixes hours only once the audio runs past 60 minutes.
static TRANSCRIPT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[((?:\d+:)?\d{2}:\d{2}\.\d{3})\s*-->\s*((?:\d+:)?\d{2}:\d{2}\.\d{3})\]\s*(.*)")
        .expect("transcript line pattern is valid")
});

static TRANSCRIPT_LINE_NO_HOURS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[(\d{2}:\d{2}\.\d{3})\s*-->\s*(\d{2}:\d{2}\.\d{3})\]\s*(.*)")
        .expect("transcript line pattern is valid")
});

/// Конвертировать сырую транскрипцию в текст SRT (часы в метках допускаются)
pub fn convert_transcript(raw: &str) -> Result<String> {
    convert_transcript_with(raw, true)
}

/// Конвертировать сырую транскрипцию в текст SRT.
///
/// # Аргументы
///
/// * `raw` - Вывод Whisper, по одной реплике на строку
/// * `accept_hours` - Принимать ли метки вида `H:MM:SS.mmm`
///
/// # Возвращает
///
/// Текст SRT с номерами блоков 1..n без пропусков
pub fn convert_transcript_with(raw: &str, accept_hours: bool) -> Result<String> {
    let pattern: &Regex = if accept_hours {
        &*TRANSCRIPT_LINE
    } else {
        &*TRANSCRIPT_LINE_NO_HOURS
    };

    let mut srt = String::new();
    let mut counter = 1;
    let mut dropped = 0usize;

    for line in raw.lines() {
        let Some(caps) = pattern.captures(line) else {
            dropped += 1;
            continue;
        };

        let text = caps[3].trim();
        if text.is_empty() {
            dropped += 1;
            continue;
        }

        let start = timecode::decode(&caps[1], TimeCodeFormat::Transcript)?;
        let end = timecode::decode(&caps[2], TimeCodeFormat::Transcript)?;

        srt.push_str(&CaptionEntry::new(counter, start, end, text).to_srt_block());
        counter += 1;
    }

    if dropped > 0 {
        debug!("Dropped {} transcript lines without a timestamp", dropped);
    }
    info!("Converted {} transcript lines to SRT", counter - 1);
    Ok(srt)
}

/// Конвертировать транскрипцию и сразу разобрать результат
pub fn transcript_to_document(raw: &str) -> Result<CaptionDocument> {
    let srt = convert_transcript(raw)?;
    parser::parse(&srt)
}
