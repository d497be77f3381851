// src/core/counter.rs

mod normalize;

use crate::core::stopwords::StopWords;
use crate::models::WordCountResult;
use normalize::normalize;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// A single ASCII whitespace character or a run of two or more hyphens.
/// A lone hyphen is not a boundary; it is removed during normalization.
static TOKEN_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n\v\f\r]|-{2,}").expect("valid regex"));

/// One or more ASCII letters covering the entire token.
static VALID_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CountError {
    /// Raised for absent input only. Empty text is a valid zero-count input.
    #[error("text input must not be absent")]
    InvalidInput,
}

/// Computes word statistics for `text`, excluding stop words.
///
/// The trimmed text is split on single whitespace characters and on runs of
/// two or more hyphens. Each token is stripped of one trailing period and of
/// all remaining hyphens, then kept only if it is ASCII letters throughout
/// and the stop-word predicate does not claim it. Stop words are checked
/// last, against the fully normalized form.
///
/// # Arguments
///
/// * `text` - The text to analyse; `None` models absent input
/// * `stop_words` - Predicate deciding which normalized words to exclude
///
/// # Returns
///
/// * `Ok(WordCountResult)` - Totals, unique words, and the average length
///
/// # Errors
///
/// Returns [`CountError::InvalidInput`] when `text` is `None`. Every present
/// string produces a result; text with no valid words yields zero counts and
/// a zero average rather than an error.
pub fn count_words<S>(text: Option<&str>, stop_words: &S) -> Result<WordCountResult, CountError>
where
    S: StopWords + ?Sized,
{
    let text = text.ok_or(CountError::InvalidInput)?;

    let retained: Vec<String> = TOKEN_BOUNDARY
        .split(text.trim())
        .map(normalize)
        .filter(|word| VALID_WORD.is_match(word))
        .filter(|word| !stop_words.contains_word(word))
        .collect();

    Ok(WordCountResult::from_retained(&retained))
}
