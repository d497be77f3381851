// src/core/stopwords/loader.rs

use crate::core::stopwords::StopWordSet;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

/// Loads a stop-word set from a plain-text file with one word per line.
///
/// Blank lines and lines starting with `#` are skipped, and surrounding
/// whitespace is trimmed from each word.
///
/// # Arguments
///
/// * `path` - The stop-word file to read
///
/// # Returns
///
/// * `Ok(StopWordSet)` containing the loaded words
///
/// # Errors
///
/// This function may return an error if:
/// * The file does not exist or cannot be read
/// * The file is not valid UTF-8 text
#[inline]
pub fn load_stop_words(path: &Path) -> Result<StopWordSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read stop words file: {}", path.display()))?;

    let mut stop_words = StopWordSet::new();
    for line in content.lines() {
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        stop_words.insert(word);
    }

    Ok(stop_words)
}
