use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn into_tracing_level(&self) -> LevelFilter {
        match self {
            &LogLevel::Off => LevelFilter::OFF,
            &LogLevel::Error => LevelFilter::ERROR,
            &LogLevel::Warn => LevelFilter::WARN,
            &LogLevel::Info => LevelFilter::INFO,
            &LogLevel::Debug => LevelFilter::DEBUG,
            &LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Installs the global fmt subscriber. Safe to call more than once; later
/// calls are ignored so tests can share a process.
pub fn init_tracing(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level.into_tracing_level())
        .try_init();
}
