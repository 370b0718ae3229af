//! # Субтитры
//!
//! Временные метки, разбор и сериализация SRT, конвертация транскрипции
//! Whisper, поиск активной реплики и ручная разметка.

pub mod authoring;
pub mod parser;
pub mod resolver;
pub mod timecode;
pub mod transcript;

pub use authoring::{AuthoringSession, split_sentences};
pub use parser::{CaptionDocument, CaptionEntry, parse, parse_file, parse_with_mode, write_file};
pub use resolver::{CaptionTracker, Resolution, resolve};
pub use timecode::{TimeCode, TimeCodeFormat, decode, encode};
pub use transcript::{convert_transcript, convert_transcript_with, transcript_to_document};
