// src/utils.rs

use crate::models::WordCountResult;

pub fn print_result(result: &WordCountResult) {
    println!(
        "Number of words: {}, unique: {}; average word length: {}",
        result.total_word_count, result.unique_word_count, result.average_word_length
    );
}
