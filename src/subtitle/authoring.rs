//! Сессия ручной разметки субтитров
//!
//! Текст разбивается на фразы, а пользователь во время воспроизведения
//! отмечает момент, когда звучит очередная фраза. Каждая отметка
//! превращается в реплику фиксированной длительности.

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::subtitle::parser::{CaptionDocument, CaptionEntry};
use crate::subtitle::timecode::TimeCode;

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?,]+").expect("sentence boundary pattern is valid"));

/// Разбить текст на фразы по знакам `.`, `!`, `?` и `,`.
/// Пустые после обрезки фрагменты отбрасываются.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone)]
pub struct AuthoringSession {
    sentences: Vec<String>,
    current_index: usize,
    cue_duration: TimeCode,
    entries: Vec<CaptionEntry>,
}

impl AuthoringSession {
    pub fn new(text: &str, cue_duration_secs: f64) -> Self {
        let sentences = split_sentences(text);
        info!("Loaded {} sentences for authoring", sentences.len());
        Self {
            sentences,
            current_index: 0,
            cue_duration: TimeCode::from_secs_f64(cue_duration_secs),
            entries: Vec::new(),
        }
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_sentence(&self) -> Option<&str> {
        self.sentences.get(self.current_index).map(String::as_str)
    }

    pub fn entries(&self) -> &[CaptionEntry] {
        &self.entries
    }

    /// Отметить текущую фразу в позиции `position` и перейти к следующей.
    /// После последней фразы индекс возвращается к началу.
    pub fn stamp(&mut self, position: TimeCode) -> Option<&CaptionEntry> {
        if self.sentences.is_empty() {
            return None;
        }

        self.push_current(position);
        self.current_index = (self.current_index + 1) % self.sentences.len();
        self.entries.last()
    }

    /// Отметить текущую фразу и вернуться к предыдущей.
    /// Ничего не делает на первой фразе или пока нет ни одной отметки.
    pub fn stamp_previous(&mut self, position: TimeCode) -> Option<&CaptionEntry> {
        if self.sentences.is_empty() || self.current_index == 0 || self.entries.is_empty() {
            return None;
        }

        self.push_current(position);
        self.current_index -= 1;
        self.entries.last()
    }

    /// Доля обработанных фраз в процентах
    pub fn progress(&self) -> f64 {
        if self.sentences.is_empty() {
            return 0.0;
        }
        self.current_index as f64 / self.sentences.len() as f64 * 100.0
    }

    /// Удалить все отметки; позиция в тексте сохраняется
    pub fn clear(&mut self) {
        debug!("Clearing {} stamped captions", self.entries.len());
        self.entries.clear();
    }

    pub fn document(&self) -> CaptionDocument {
        CaptionDocument::from_entries(self.entries.clone())
    }

    fn push_current(&mut self, position: TimeCode) {
        let text = self.sentences[self.current_index].clone();
        let end = position.saturating_add(self.cue_duration);
        let sequence = self.entries.len() + 1;
        self.entries.push(CaptionEntry::new(sequence, position, end, text));
    }
}
