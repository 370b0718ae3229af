//! Модуль для парсинга субтитров
//!
//! Разбор текста в формате SRT в упорядоченный список реплик и обратная
//! сериализация. По умолчанию разбор снисходительный: строки, которые не
//! похожи ни на номер, ни на интервал, ни на текст реплики, пропускаются.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::ParseMode;
use crate::error::{CaptionError, Result};
use crate::subtitle::timecode::{self, TimeCode, TimeCodeFormat};

/// Разделитель начала и конца интервала
pub const TIME_RANGE_SEPARATOR: &str = "-->";

/// Одна реплика субтитров
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionEntry {
    /// Порядковый номер, начиная с 1, совпадает с порядком в документе
    pub sequence: usize,
    /// Время начала
    pub start: TimeCode,
    /// Время окончания
    pub end: TimeCode,
    /// Текст реплики
    pub text: String,
}

impl CaptionEntry {
    /// Создать новую реплику
    pub fn new(sequence: usize, start: TimeCode, end: TimeCode, text: impl Into<String>) -> Self {
        Self {
            sequence,
            start,
            end,
            text: text.into(),
        }
    }

    /// Длительность реплики; ноль, если конец раньше начала
    pub fn duration(&self) -> TimeCode {
        TimeCode::from_millis(self.end.as_millis().saturating_sub(self.start.as_millis()))
    }

    /// Попадает ли позиция в интервал реплики (обе границы включены)
    pub fn contains(&self, position: TimeCode) -> bool {
        self.start <= position && position <= self.end
    }

    /// Блок SRT: `<N>\n<start> --> <end>\n<text>\n\n`
    pub fn to_srt_block(&self) -> String {
        format!(
            "{}\n{} {} {}\n{}\n\n",
            self.sequence,
            self.start.encode(),
            TIME_RANGE_SEPARATOR,
            self.end.encode(),
            self.text
        )
    }
}

/// Документ субтитров. После разбора не изменяется; при редактировании
/// строится новый документ целиком.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaptionDocument {
    entries: Vec<CaptionEntry>,
}

impl CaptionDocument {
    /// Собрать документ, перенумеровав реплики по порядку с 1
    pub fn from_entries(entries: Vec<CaptionEntry>) -> Self {
        let entries = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| CaptionEntry {
                sequence: i + 1,
                ..entry
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[CaptionEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<CaptionEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CaptionEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CaptionEntry> {
        self.entries.iter()
    }

    /// Наибольшее время окончания среди реплик
    pub fn duration(&self) -> TimeCode {
        self.entries
            .iter()
            .map(|entry| entry.end)
            .max()
            .unwrap_or(TimeCode::ZERO)
    }

    /// Сериализация в SRT с номерами 1..n
    pub fn to_srt(&self) -> String {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                CaptionEntry {
                    sequence: i + 1,
                    ..entry.clone()
                }
                .to_srt_block()
            })
            .collect()
    }

    /// JSON-представление для интерфейса
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a CaptionDocument {
    type Item = &'a CaptionEntry;
    type IntoIter = std::slice::Iter<'a, CaptionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Снисходительный разбор текста SRT
pub fn parse(text: &str) -> Result<CaptionDocument> {
    parse_with_mode(text, ParseMode::Lenient)
}

/// Разбор текста SRT в заданном режиме.
///
/// Ошибка `MalformedTimeCode` возвращается в любом режиме, если строка
/// интервала распознана, но метку времени разобрать нельзя. В строгом
/// режиме любая пропущенная строка даёт `InvalidFormat`.
pub fn parse_with_mode(text: &str, mode: ParseMode) -> Result<CaptionDocument> {
    let lines: Vec<&str> = text.lines().collect();
    let mut entries = Vec::new();
    let mut skipped = 0usize;
    let mut i = 0;

    while i < lines.len() {
        let line_no = i + 1;
        let line = lines[i].trim();
        i += 1;

        if line.is_empty() || is_sequence_marker(line) {
            continue;
        }

        if !line.contains(TIME_RANGE_SEPARATOR) {
            skip(mode, line_no, "unrecognized line", line)?;
            skipped += 1;
            continue;
        }

        let Some((start, end)) = split_time_range(line) else {
            skip(mode, line_no, "time range must have exactly two time codes", line)?;
            skipped += 1;
            continue;
        };
        let start = timecode::decode(start, TimeCodeFormat::Srt)?;
        let end = timecode::decode(end, TimeCodeFormat::Srt)?;

        match lines.get(i).map(|next| next.trim()) {
            // The line right after a time range is always caption text, even with "-->" in it.
            Some(caption) if !caption.is_empty() => {
                i += 1;
                entries.push(CaptionEntry::new(entries.len() + 1, start, end, caption));
            }
            _ => {
                skip(mode, line_no, "time range without caption text", line)?;
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        debug!("Skipped {} unusable lines while parsing captions", skipped);
    }
    info!("Parsed {} caption entries", entries.len());
    Ok(CaptionDocument { entries })
}

/// Разбор файла SRT
pub fn parse_file<P: AsRef<Path>>(path: P, mode: ParseMode) -> Result<CaptionDocument> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CaptionError::FileNotFound(format!(
            "Caption file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path)?;
    parse_with_mode(&contents, mode)
}

/// Запись документа в файл SRT
pub fn write_file<P: AsRef<Path>>(path: P, document: &CaptionDocument) -> Result<()> {
    fs::write(path.as_ref(), document.to_srt())?;
    info!(
        "Wrote {} caption entries to {}",
        document.len(),
        path.as_ref().display()
    );
    Ok(())
}

fn is_sequence_marker(line: &str) -> bool {
    line.bytes().all(|b| b.is_ascii_digit())
}

/// Делит строку интервала на две метки. Всё после первой метки окончания
/// (например, координаты позиционирования) игнорируется.
fn split_time_range(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split(TIME_RANGE_SEPARATOR);
    let start = parts.next()?.trim();
    let end = parts.next()?.split_whitespace().next()?;
    if parts.next().is_some() || start.is_empty() {
        return None;
    }
    Some((start, end))
}

fn skip(mode: ParseMode, line_no: usize, reason: &str, line: &str) -> Result<()> {
    match mode {
        ParseMode::Lenient => {
            debug!("Skipping line {}: {} ({:?})", line_no, reason, line);
            Ok(())
        }
        ParseMode::Strict => Err(CaptionError::InvalidFormat(format!(
            "line {}: {}: {:?}",
            line_no, reason, line
        ))),
    }
}
