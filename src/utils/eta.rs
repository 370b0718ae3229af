//! Оценка времени транскрипции
//!
//! Оценка носит справочный характер: это обратный отсчёт для интерфейса,
//! а не таймаут.

/// Ожидаемое время обработки в секундах, округлённое вверх
pub fn estimate_eta(duration_secs: f64, factor: f64) -> u64 {
    if !duration_secs.is_finite() || duration_secs <= 0.0 || !(factor > 0.0) {
        return 0;
    }
    (duration_secs * factor).ceil() as u64
}

/// `0s`, `45s`, `2m 5s`
pub fn format_eta(seconds: u64) -> String {
    let minutes = seconds / 60;
    let remaining = seconds % 60;
    if minutes > 0 {
        format!("{}m {}s", minutes, remaining)
    } else {
        format!("{}s", remaining)
    }
}
