use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info};

use caption_sync::CaptionSync;
use caption_sync::config::{self, ParseMode};
use caption_sync::subtitle::{self, TimeCode};
use caption_sync::utils::{self, logger};

/// Работа с субтитрами SRT и транскрипцией Whisper
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к JSON файлу конфигурации
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Подробное логирование
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Разобрать файл субтитров и вывести нормализованный SRT
    Parse {
        file: PathBuf,
        /// Отклонять непонятные строки вместо пропуска
        #[arg(long)]
        strict: bool,
        /// Вывести JSON вместо SRT
        #[arg(long)]
        json: bool,
    },

    /// Конвертировать вывод Whisper в SRT
    Convert {
        transcript: PathBuf,
        /// Файл для записи; по умолчанию stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Показать реплику, активную в заданный момент
    At {
        file: PathBuf,
        /// Позиция воспроизведения в секундах
        seconds: f64,
    },

    /// Оценить время транскрипции аудио: длительность × eta_factor из конфигурации.
    /// Размер модели Whisper на оценку не влияет.
    Eta {
        /// Длительность аудио в секундах
        seconds: f64,
    },
}

fn main() {
    let cli = Cli::parse();
    logger::init_logger(cli.debug);

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => config::load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => config::CaptionConfig::default(),
    };

    match cli.command {
        Commands::Parse { file, strict, json } => {
            if strict {
                config.parse_mode = ParseMode::Strict;
            }
            let sync = CaptionSync::new(config)?;
            let document = sync
                .load(&file)
                .with_context(|| format!("Failed to parse {}", file.display()))?;
            if json {
                println!("{}", document.to_json()?);
            } else {
                print!("{}", document.to_srt());
            }
        }
        Commands::Convert { transcript, output } => {
            let sync = CaptionSync::new(config)?;
            let raw = fs::read_to_string(&transcript)
                .with_context(|| format!("Failed to read {}", transcript.display()))?;
            let document = sync.transcript_to_document(&raw)?;
            match output {
                Some(path) => subtitle::write_file(&path, &document)?,
                None => print!("{}", document.to_srt()),
            }
        }
        Commands::At { file, seconds } => {
            let sync = CaptionSync::new(config)?;
            let document = sync.load(&file)?;
            let mut tracker = sync.tracker(document);
            let position = TimeCode::from_secs_f64(seconds);
            let text = tracker.update(position).to_string();
            info!(
                "Position {} ({}): current {:?}, next {:?}",
                position.display(),
                position,
                tracker.current_index(),
                tracker.next_index()
            );
            println!("{}", text);
        }
        Commands::Eta { seconds } => {
            let sync = CaptionSync::new(config)?;
            let eta = sync.estimate_eta(seconds);
            info!(
                "ETA factor {} (model {} is not taken into account)",
                sync.config().eta_factor,
                sync.config().whisper_model.as_str()
            );
            println!("{}", utils::format_eta(eta));
        }
    }

    Ok(())
}
