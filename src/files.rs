//! Reading transcripts in and writing reflowed text out.

use crate::ReflowError;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Expand a leading `~` in a user-supplied path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Read the transcript from `path`, or all of stdin when no path is given.
pub fn read_input(path: Option<&Path>, max_chars: Option<usize>) -> Result<String, ReflowError> {
    let mut text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if let Some(max) = max_chars {
        let kept = limit_chars(&text, max).len();
        if kept < text.len() {
            tracing::warn!(max_chars = max, "input truncated");
            text.truncate(kept);
        }
    }

    Ok(text)
}

/// The first `max` chars of `text`.
pub fn limit_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// `<dir>/<stem><suffix>.<ext>` next to the input file.
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };

    input.with_file_name(file_name)
}

pub fn write_output(path: &Path, text: &str) -> Result<(), ReflowError> {
    let mut contents = text.to_string();
    if !contents.is_empty() {
        contents.push('\n');
    }
    std::fs::write(path, contents)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}
