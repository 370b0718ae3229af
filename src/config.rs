//! Модуль конфигурации библиотеки caption-sync
//!
//! Этот модуль содержит структуры и перечисления для настройки разбора
//! субтитров, сессии разметки и оценки времени транскрипции.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{CaptionError, Result};

/// Режим разбора документа субтитров
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Непонятные строки пропускаются без ошибки
    Lenient,
    /// Любая непонятная строка считается ошибкой формата
    Strict,
}

impl Default for ParseMode {
    fn default() -> Self {
        Self::Lenient
    }
}

/// Размер модели Whisper, используемой внешним инструментом транскрипции
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WhisperModel {
    /// Быстрее, но менее точно
    Small,
    /// Сбалансированный вариант
    Medium,
    /// Медленнее, но точнее
    Large,
}

impl Default for WhisperModel {
    fn default() -> Self {
        Self::Medium
    }
}

impl WhisperModel {
    /// Получить строковое представление модели
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Конфигурация библиотеки
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionConfig {
    /// Режим разбора SRT
    pub parse_mode: ParseMode,
    /// Принимать часы в метках сырой транскрипции (`H:MM:SS.mmm`)
    pub accept_transcript_hours: bool,
    /// Длительность субтитра, проставляемого в режиме разметки (секунды)
    pub default_cue_duration: f64,
    /// Множитель времени обработки относительно длительности аудио
    pub eta_factor: f64,
    /// Модель Whisper
    pub whisper_model: WhisperModel,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            parse_mode: ParseMode::default(),
            accept_transcript_hours: true,
            default_cue_duration: 3.0,
            // 20 секунд аудио обрабатываются примерно за 60 секунд
            eta_factor: 3.0,
            whisper_model: WhisperModel::default(),
        }
    }
}

impl CaptionConfig {
    /// Проверить значения конфигурации
    pub fn validate(&self) -> Result<()> {
        if !(self.default_cue_duration > 0.0) {
            return Err(CaptionError::Configuration(format!(
                "default_cue_duration must be positive, got {}",
                self.default_cue_duration
            )));
        }
        if !(self.eta_factor > 0.0) {
            return Err(CaptionError::Configuration(format!(
                "eta_factor must be positive, got {}",
                self.eta_factor
            )));
        }
        Ok(())
    }
}

/// Загрузка конфигурации из JSON файла.
///
/// Если файла нет, возвращается конфигурация по умолчанию.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CaptionConfig> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("Config file {} not found, using defaults", path.display());
        return Ok(CaptionConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: CaptionConfig = serde_json::from_str(&contents).map_err(|e| {
        CaptionError::Configuration(format!("Failed to parse config {}: {}", path.display(), e))
    })?;
    config.validate()?;

    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Сохранение конфигурации в JSON файл
pub fn save_config<P: AsRef<Path>>(path: P, config: &CaptionConfig) -> Result<()> {
    config.validate()?;
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path.as_ref(), json)?;
    Ok(())
}
