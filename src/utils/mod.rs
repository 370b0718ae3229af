//! Вспомогательные модули: логирование и оценка времени транскрипции

pub mod eta;
pub mod logger;

pub use eta::{estimate_eta, format_eta};

#[cfg(test)]
mod tests {
    mod test_eta;
}
