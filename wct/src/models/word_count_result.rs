// src/models/word_count_result.rs

use crate::models::Average;
use serde::Serialize;
use std::collections::HashSet;

/// Summary statistics for one counting pass, built once from the retained
/// words and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCountResult {
    pub total_word_count: u64,
    pub unique_word_count: u64,
    pub average_word_length: Average,
    pub unique_words: HashSet<String>,
}

impl WordCountResult {
    /// The result for input with no retained words.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_word_count: 0,
            unique_word_count: 0,
            average_word_length: Average::ZERO,
            unique_words: HashSet::new(),
        }
    }

    /// Builds the record from the retained words, duplicates included.
    #[must_use]
    pub fn from_retained(words: &[String]) -> Self {
        if words.is_empty() {
            return Self::empty();
        }

        let total_word_count = u64::try_from(words.len()).unwrap_or(u64::MAX);
        // Retained words are ASCII letters only, so byte length equals
        // character length.
        let total_length = words.iter().fold(0_u64, |sum, word| {
            sum.saturating_add(u64::try_from(word.len()).unwrap_or(u64::MAX))
        });
        let unique_words: HashSet<String> = words.iter().cloned().collect();
        let unique_word_count = u64::try_from(unique_words.len()).unwrap_or(u64::MAX);

        Self {
            total_word_count,
            unique_word_count,
            average_word_length: Average::from_ratio(total_length, total_word_count),
            unique_words,
        }
    }
}
