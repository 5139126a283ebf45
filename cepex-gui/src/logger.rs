use crate::dir::CepexDirectory;
use std::{error::Error, fs::File, str::FromStr, sync::Arc};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

pub const GUI_LOG_FILE_NAME: &str = "cepex-gui.log";

#[derive(Debug)]
pub enum LoggerError {
    Io(std::io::Error),
    Init(tracing_subscriber::util::TryInitError),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to create log file: {}", e),
            Self::Init(e) => write!(f, "Failed to install logger: {}", e),
        }
    }
}

impl Error for LoggerError {}

impl From<std::io::Error> for LoggerError {
    fn from(e: std::io::Error) -> LoggerError {
        LoggerError::Io(e)
    }
}

impl From<tracing_subscriber::util::TryInitError> for LoggerError {
    fn from(e: tracing_subscriber::util::TryInitError) -> LoggerError {
        LoggerError::Init(e)
    }
}

// Renderer and windowing crates are far too chatty at debug level.
const MUTED_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "iced_tiny_skia",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "mio",
    "cosmic_text",
    "polling",
    "calloop",
    "async_io",
    "sctk",
    "tokio",
];

pub fn is_muted(target: &str) -> bool {
    MUTED_TARGETS.iter().any(|prefix| target.starts_with(prefix))
}

pub fn setup_logger(log_level: LevelFilter, datadir: &CepexDirectory) -> Result<(), LoggerError> {
    let log_path = datadir.path().join(GUI_LOG_FILE_NAME);

    let file = File::create(log_path)?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                // Applies to *both* layers.
                .with_filter(filter::filter_fn(|metadata| !is_muted(metadata.target()))),
        )
        .try_init()?;

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, Box<dyn Error>> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}
