use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised by a tone emitter. The game logs and drops them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ToneError {
    #[error("tone queue is full, dropped note {note}")]
    QueueFull { note: u8 },

    #[error("note {0} is outside the MIDI range")]
    NoteOutOfRange(u8),

    #[error("tone start time {0} is not a finite, non-negative number of seconds")]
    InvalidTime(f64),
}

/// Errors from parsing musical duration notation such as `"8n"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationParseError {
    #[error("empty duration")]
    Empty,

    #[error("unknown duration suffix in {0:?} (expected n, t or a trailing dot)")]
    UnknownSuffix(String),

    #[error("invalid note value in {0:?}")]
    InvalidValue(String),
}
