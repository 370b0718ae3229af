//! Модуль обработки ошибок библиотеки caption-sync
//!
//! Этот модуль содержит типы ошибок, которые могут возникнуть при разборе
//! и конвертации субтитров.

use thiserror::Error;

/// Ошибки библиотеки caption-sync
#[derive(Debug, Error)]
pub enum CaptionError {
    /// Временная метка не разбирается
    #[error("Malformed time code: {0}")]
    MalformedTimeCode(String),

    /// Документ отклонён в строгом режиме
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Файл не найден
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Ошибка ввода-вывода
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Ошибка конфигурации
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Другая ошибка
    #[error("Other error: {0}")]
    Other(String),
}

impl From<&str> for CaptionError {
    fn from(s: &str) -> Self {
        CaptionError::Other(s.to_string())
    }
}

impl From<String> for CaptionError {
    fn from(s: String) -> Self {
        CaptionError::Other(s)
    }
}

/// Тип Result для библиотеки caption-sync
pub type Result<T> = std::result::Result<T, CaptionError>;
