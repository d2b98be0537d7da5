//! Sentence segmentation for flat transcript text.
//!
//! A unit closes at `.`, `?` or `!` when the mark is followed by whitespace or
//! the end of the input. Runs such as `...` or `?!` close once, at their last
//! mark. Abbreviations and decimals are not special-cased.

use std::fmt;

/// Sentence-ending punctuation marks.
const TERMINALS: [char; 3] = ['.', '?', '!'];

/// One sentence-like segment, borrowed from the raw transcript.
///
/// The span is trimmed but may still hold irregular interior whitespace from
/// the source; use [`Unit::words`] or the `Display` impl for normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit<'a> {
    text: &'a str,
}

impl<'a> Unit<'a> {
    fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// The raw, trimmed span of the transcript.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn words(&self) -> impl Iterator<Item = &'a str> {
        self.text.split_whitespace()
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /// Whether the unit closed on terminal punctuation rather than running
    /// into the end of the input.
    pub fn is_terminated(&self) -> bool {
        self.text.ends_with(TERMINALS)
    }

    pub fn normalized(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Unit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

/// Collapse every whitespace run into a single space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_terminal(ch: char) -> bool {
    TERMINALS.contains(&ch)
}

/// Split raw text into sentence-like units, in source order.
///
/// Whitespace is treated as already collapsed: only the character after a
/// punctuation mark decides a boundary, never how much whitespace follows it.
/// A trailing fragment without terminal punctuation is kept as the last unit.
pub fn segment(raw: &str) -> Vec<Unit<'_>> {
    let mut units = Vec::new();
    let mut start: Option<usize> = None;
    let mut chars = raw.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch.is_whitespace() {
            continue;
        }
        let begin = *start.get_or_insert(idx);

        if is_terminal(ch) {
            let at_boundary = chars.peek().map_or(true, |&(_, next)| next.is_whitespace());
            if at_boundary {
                units.push(Unit::new(&raw[begin..idx + ch.len_utf8()]));
                start = None;
            }
        }
    }

    if let Some(begin) = start {
        units.push(Unit::new(raw[begin..].trim_end()));
    }

    tracing::debug!(units = units.len(), "segmented transcript");
    units
}
