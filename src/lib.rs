use thiserror::Error;

pub mod composer;
pub mod config;
pub mod files;
pub mod segmenter;

pub use composer::{compose, paragraphs, wrap_words, Paragraph, ReflowConfig};
pub use config::AppConfig;
pub use segmenter::{normalize_whitespace, segment, Unit};

#[derive(Error, Debug)]
pub enum ReflowError {
    /// A reflow option was zero.
    #[error("Invalid {name}: must be a positive integer, got {value}")]
    InvalidOption { name: &'static str, value: usize },
    /// The config file could not be located, read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),
    /// Reading the transcript or writing the result failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reflow a flat transcript into wrapped paragraphs.
///
/// The configuration is checked before the input is looked at, so an invalid
/// width or group size fails even for empty input.
pub fn reflow(raw: &str, config: &ReflowConfig) -> Result<String, ReflowError> {
    config.validate()?;
    let units = segment(raw);
    compose(&units, config)
}

/// Counts describing one reflow run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReflowStats {
    pub units: usize,
    pub paragraphs: usize,
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
}

impl ReflowStats {
    /// Tally a finished run from its units and formatted output.
    pub fn collect(units: &[Unit<'_>], formatted: &str) -> Self {
        if formatted.is_empty() {
            return ReflowStats::default();
        }

        ReflowStats {
            units: units.len(),
            paragraphs: formatted.matches("\n\n").count() + 1,
            lines: formatted.lines().filter(|line| !line.is_empty()).count(),
            words: units.iter().map(Unit::word_count).sum(),
            chars: formatted.chars().count(),
        }
    }
}
