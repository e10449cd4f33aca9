//! Domain error types.

use chrono::NaiveDate;

/// Top-level error type for sigscan.
#[derive(Debug, thiserror::Error)]
pub enum SigscanError {
    #[error("market data error: {reason}")]
    DataFetch { reason: String },

    #[error("CSV error in {file}: {reason}")]
    Csv { file: String, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("series not in chronological order: {next} does not follow {prev}")]
    UnorderedSeries { prev: NaiveDate, next: NaiveDate },

    #[error("insufficient data for {market}: have {bars} bars, need {minimum}")]
    InsufficientData {
        market: String,
        bars: usize,
        minimum: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&SigscanError> for std::process::ExitCode {
    fn from(err: &SigscanError) -> Self {
        let code: u8 = match err {
            SigscanError::Io(_) => 1,
            SigscanError::ConfigParse { .. }
            | SigscanError::ConfigMissing { .. }
            | SigscanError::ConfigInvalid { .. } => 2,
            SigscanError::DataFetch { .. } | SigscanError::Csv { .. } => 3,
            SigscanError::UnorderedSeries { .. } | SigscanError::InsufficientData { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
