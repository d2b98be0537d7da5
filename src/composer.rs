//! Paragraph grouping and line wrapping.

use crate::segmenter::Unit;
use crate::ReflowError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SENTENCES_PER_PARAGRAPH: usize = 3;
pub const DEFAULT_LINE_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflowConfig {
    pub sentences_per_paragraph: usize,
    /// Target characters per line before breaking at a word boundary.
    pub line_width: usize,
}

impl Default for ReflowConfig {
    fn default() -> Self {
        ReflowConfig {
            sentences_per_paragraph: DEFAULT_SENTENCES_PER_PARAGRAPH,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl ReflowConfig {
    pub fn new(sentences_per_paragraph: usize, line_width: usize) -> Result<Self, ReflowError> {
        let config = ReflowConfig {
            sentences_per_paragraph,
            line_width,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject zero for either option.
    pub fn validate(&self) -> Result<(), ReflowError> {
        if self.sentences_per_paragraph == 0 {
            return Err(ReflowError::InvalidOption {
                name: "sentences_per_paragraph",
                value: self.sentences_per_paragraph,
            });
        }
        if self.line_width == 0 {
            return Err(ReflowError::InvalidOption {
                name: "line_width",
                value: self.line_width,
            });
        }
        Ok(())
    }
}

/// A run of consecutive units rendered together.
#[derive(Debug, Clone, Copy)]
pub struct Paragraph<'u, 'a> {
    units: &'u [Unit<'a>],
}

impl<'u, 'a> Paragraph<'u, 'a> {
    pub fn units(&self) -> &'u [Unit<'a>] {
        self.units
    }

    pub fn words(&self) -> impl Iterator<Item = &'a str> + 'u {
        self.units.iter().flat_map(|unit| unit.words())
    }

    /// Join the units with single spaces and wrap to `line_width`.
    pub fn render(&self, line_width: usize) -> String {
        wrap_words(self.words(), line_width).join("\n")
    }
}

/// Partition units into paragraphs of `sentences_per_paragraph`; the last one
/// holds the remainder. A group size of zero is rejected.
pub fn paragraphs<'u, 'a>(
    units: &'u [Unit<'a>],
    sentences_per_paragraph: usize,
) -> Result<impl Iterator<Item = Paragraph<'u, 'a>>, ReflowError> {
    if sentences_per_paragraph == 0 {
        return Err(ReflowError::InvalidOption {
            name: "sentences_per_paragraph",
            value: sentences_per_paragraph,
        });
    }

    Ok(units
        .chunks(sentences_per_paragraph)
        .map(|units| Paragraph { units }))
}

/// Greedy word wrap. Widths are counted in chars; a word longer than
/// `line_width` sits alone on its line, unsplit.
pub fn wrap_words<'w>(words: impl IntoIterator<Item = &'w str>, line_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in words {
        let word_len = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= line_width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Render units as wrapped paragraphs separated by one blank line.
pub fn compose(units: &[Unit<'_>], config: &ReflowConfig) -> Result<String, ReflowError> {
    config.validate()?;

    let rendered: Vec<String> = paragraphs(units, config.sentences_per_paragraph)?
        .map(|paragraph| paragraph.render(config.line_width))
        .collect();

    tracing::debug!(
        paragraphs = rendered.len(),
        line_width = config.line_width,
        "composed transcript"
    );

    Ok(rendered.join("\n\n"))
}
