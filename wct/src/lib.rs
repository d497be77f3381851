// src/lib.rs

pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use crate::core::counter::{CountError, count_words};
pub use crate::core::stopwords::{StopWordSet, StopWords, load_stop_words};
pub use models::{Average, WordCountResult};
