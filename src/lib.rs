//! Основной файл библиотеки caption-sync
//!
//! Библиотека разбирает субтитры SRT, конвертирует сырую транскрипцию
//! Whisper в SRT и определяет, какая реплика должна быть на экране в
//! текущий момент воспроизведения.

pub mod config;
pub mod error;
pub mod subtitle;
pub mod utils;

use std::path::Path;

use crate::config::CaptionConfig;
use crate::error::Result;
use crate::subtitle::{AuthoringSession, CaptionDocument, CaptionTracker};

pub use crate::error::CaptionError;

/// Основная структура для работы с библиотекой
#[derive(Debug, Clone, Default)]
pub struct CaptionSync {
    /// Конфигурация библиотеки
    config: CaptionConfig,
}

impl CaptionSync {
    /// Создать новый экземпляр с указанной конфигурацией
    pub fn new(config: CaptionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CaptionConfig {
        &self.config
    }

    /// Разобрать текст SRT в режиме из конфигурации
    pub fn parse(&self, text: &str) -> Result<CaptionDocument> {
        subtitle::parse_with_mode(text, self.config.parse_mode)
    }

    /// Разобрать файл SRT в режиме из конфигурации
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<CaptionDocument> {
        subtitle::parse_file(path, self.config.parse_mode)
    }

    /// Конвертировать вывод Whisper в текст SRT
    pub fn convert_transcript(&self, raw: &str) -> Result<String> {
        subtitle::convert_transcript_with(raw, self.config.accept_transcript_hours)
    }

    /// Конвертировать вывод Whisper и разобрать результат
    pub fn transcript_to_document(&self, raw: &str) -> Result<CaptionDocument> {
        let srt = self.convert_transcript(raw)?;
        self.parse(&srt)
    }

    pub fn tracker(&self, document: CaptionDocument) -> CaptionTracker {
        CaptionTracker::new(document)
    }

    /// Начать сессию ручной разметки текста
    pub fn authoring(&self, text: &str) -> AuthoringSession {
        AuthoringSession::new(text, self.config.default_cue_duration)
    }

    /// Ожидаемое время транскрипции аудио указанной длительности
    pub fn estimate_eta(&self, audio_duration_secs: f64) -> u64 {
        utils::estimate_eta(audio_duration_secs, self.config.eta_factor)
    }
}
