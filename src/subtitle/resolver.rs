//! Определение активной реплики для текущей позиции воспроизведения

use log::debug;

use crate::subtitle::parser::{CaptionDocument, CaptionEntry};
use crate::subtitle::timecode::TimeCode;

/// Результат поиска реплики для позиции воспроизведения
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Индекс активной реплики
    pub active: Option<usize>,
    /// Индекс первой реплики, начинающейся после позиции.
    /// Заполняется только когда активной реплики нет.
    pub next: Option<usize>,
}

impl Resolution {
    /// Текст активной реплики или пустая строка
    pub fn text<'a>(&self, document: &'a CaptionDocument) -> &'a str {
        self.entry(document).map(|entry| entry.text.as_str()).unwrap_or("")
    }

    pub fn entry<'a>(&self, document: &'a CaptionDocument) -> Option<&'a CaptionEntry> {
        self.active.and_then(|index| document.get(index))
    }
}

/// Найти активную реплику.
///
/// Реплики не обязаны быть отсортированы и могут пересекаться: побеждает
/// первая подходящая в порядке документа. Поиск линейный на каждый вызов.
pub fn resolve(document: &CaptionDocument, position: TimeCode) -> Resolution {
    resolve_secs(document, position.as_secs_f64())
}

/// Позиция в секундах, как её сообщает плеер.
///
/// Сравнение идёт в секундах без округления позиции до миллисекунды:
/// 2.0005 уже не попадает в реплику, которая заканчивается на 2.000.
pub fn resolve_secs(document: &CaptionDocument, position_secs: f64) -> Resolution {
    let contains = |entry: &CaptionEntry| {
        entry.start.as_secs_f64() <= position_secs && position_secs <= entry.end.as_secs_f64()
    };
    if let Some(index) = document.iter().position(contains) {
        return Resolution {
            active: Some(index),
            next: None,
        };
    }

    Resolution {
        active: None,
        next: document
            .iter()
            .position(|entry| entry.start.as_secs_f64() > position_secs),
    }
}

/// Отслеживание активной реплики во время воспроизведения.
///
/// Владеет текущим документом; новый документ заменяет старый целиком.
#[derive(Debug, Clone, Default)]
pub struct CaptionTracker {
    document: CaptionDocument,
    current_index: Option<usize>,
    next_index: Option<usize>,
    active: Option<usize>,
}

impl CaptionTracker {
    pub fn new(document: CaptionDocument) -> Self {
        let mut tracker = Self::default();
        tracker.replace(document);
        tracker
    }

    pub fn document(&self) -> &CaptionDocument {
        &self.document
    }

    /// Заменить документ. Курсор встаёт на первую реплику, если она есть.
    pub fn replace(&mut self, document: CaptionDocument) {
        let first = if document.is_empty() { None } else { Some(0) };
        debug!("Caption tracker loaded {} entries", document.len());
        self.document = document;
        self.current_index = first;
        self.next_index = None;
        self.active = None;
    }

    /// Обновить позицию воспроизведения и вернуть текст для показа
    pub fn update(&mut self, position: TimeCode) -> &str {
        self.update_secs(position.as_secs_f64())
    }

    pub fn update_secs(&mut self, position_secs: f64) -> &str {
        let resolution = resolve_secs(&self.document, position_secs);
        self.active = resolution.active;
        match resolution.active {
            Some(index) => {
                self.current_index = Some(index);
                self.next_index = None;
            }
            None => {
                if resolution.next.is_some() {
                    self.next_index = resolution.next;
                }
            }
        }
        self.active_text()
    }

    /// Текст реплики, активной после последнего обновления
    pub fn active_text(&self) -> &str {
        self.active
            .and_then(|index| self.document.get(index))
            .map(|entry| entry.text.as_str())
            .unwrap_or("")
    }

    /// Индекс последней совпавшей реплики
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Индекс реплики, с которой продолжится показ после паузы между репликами
    pub fn next_index(&self) -> Option<usize> {
        self.next_index
    }
}
