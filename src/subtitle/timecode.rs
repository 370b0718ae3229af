//! Модуль временных меток
//!
//! Преобразование временной метки в текст и обратно. Поддерживаются два
//! представления: SRT (`HH:MM:SS,mmm`) и метки сырой транскрипции Whisper
//! (`MM:SS.mmm`, опционально с часами).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CaptionError, Result};

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Представление временной метки в тексте
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeCodeFormat {
    /// `HH:MM:SS,mmm`
    Srt,
    /// `MM:SS.mmm` или `H:MM:SS.mmm`
    Transcript,
}

impl TimeCodeFormat {
    fn decimal_separator(self) -> char {
        match self {
            Self::Srt => ',',
            Self::Transcript => '.',
        }
    }

    fn accepts_components(self, count: usize) -> bool {
        match self {
            Self::Srt => count == 3,
            Self::Transcript => count == 2 || count == 3,
        }
    }
}

/// Неотрицательная временная метка с точностью до миллисекунды
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimeCode(u64);

impl TimeCode {
    pub const ZERO: TimeCode = TimeCode(0);

    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Создать метку из секунд, отбрасывая всё, что мельче миллисекунды.
    ///
    /// Отрицательные и нечисловые значения дают ноль.
    pub fn from_secs_f64(secs: f64) -> Self {
        if !secs.is_finite() || secs <= 0.0 {
            return Self::ZERO;
        }
        // 1e-6 compensates binary drift such as 1.001 * 1000 = 1000.9999...
        Self((secs * 1000.0 + 1e-6).floor() as u64)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    pub fn saturating_add(self, other: TimeCode) -> TimeCode {
        TimeCode(self.0.saturating_add(other.0))
    }

    /// Формат SRT: `HH:MM:SS,mmm`, часы не ограничены сверху
    pub fn encode(&self) -> String {
        let hours = self.0 / MILLIS_PER_HOUR;
        let minutes = (self.0 % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
        let seconds = (self.0 % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND;
        let millis = self.0 % MILLIS_PER_SECOND;
        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }

    /// Формат часов плеера: `MM:SS`, минуты не сворачиваются в часы
    pub fn display(&self) -> String {
        let minutes = self.0 / MILLIS_PER_MINUTE;
        let seconds = (self.0 % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for TimeCode {
    type Err = CaptionError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s, TimeCodeFormat::Srt)
    }
}

/// Разбор временной метки в заданном формате
pub fn decode(text: &str, format: TimeCodeFormat) -> Result<TimeCode> {
    let text = text.trim();
    let malformed = || CaptionError::MalformedTimeCode(text.to_string());

    let (whole, fraction) = text
        .split_once(format.decimal_separator())
        .ok_or_else(malformed)?;

    let components = whole
        .split(':')
        .map(parse_digits)
        .collect::<Option<Vec<u64>>>()
        .ok_or_else(malformed)?;
    if !format.accepts_components(components.len()) {
        return Err(malformed());
    }

    let (hours, minutes, seconds) = match components.as_slice() {
        [h, m, s] => (*h, *m, *s),
        [m, s] => (0, *m, *s),
        _ => return Err(malformed()),
    };
    let millis = parse_fraction(fraction).ok_or_else(malformed)?;

    let total = hours
        .checked_mul(MILLIS_PER_HOUR)
        .and_then(|total| total.checked_add(minutes.checked_mul(MILLIS_PER_MINUTE)?))
        .and_then(|total| total.checked_add(seconds.checked_mul(MILLIS_PER_SECOND)?))
        .and_then(|total| total.checked_add(millis))
        .ok_or_else(malformed)?;

    Ok(TimeCode(total))
}

/// Форматирование временной метки в SRT
pub fn encode(time: TimeCode) -> String {
    time.encode()
}

fn parse_digits(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse::<u64>().ok()
}

/// Дробная часть секунды читается как число миллисекунд: "5" -> 5, "250" -> 250.
/// Больше трёх цифр не допускается.
fn parse_fraction(fraction: &str) -> Option<u64> {
    if fraction.len() > 3 {
        return None;
    }
    parse_digits(fraction)
}
