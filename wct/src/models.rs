// src/models.rs

mod average;
mod word_count_result;

pub use average::Average;
pub use word_count_result::WordCountResult;
