// tests/integration_tests/edge_cases_test.rs
use anyhow::Result;
use wct::{CountError, StopWordSet, count_words};

#[test]
fn test_absent_text_never_returns_a_result() {
    let result = count_words(None, &StopWordSet::new());
    assert_eq!(result, Err(CountError::InvalidInput));
}

#[test]
fn test_punctuation_only_text() -> Result<()> {
    let result = count_words(Some("!!! ... ??? ,,,"), &StopWordSet::new())?;
    assert_eq!(result.total_word_count, 0, "No token survives validation");
    assert_eq!(result.average_word_length.to_string(), "0.00");
    Ok(())
}

#[test]
fn test_text_of_only_stop_words() -> Result<()> {
    let stop_words = StopWordSet::from_words(["the", "a", "an"]);
    let result = count_words(Some("the a an the"), &stop_words)?;
    assert_eq!(result.total_word_count, 0);
    assert_eq!(result.unique_word_count, 0);
    assert_eq!(result.average_word_length.to_string(), "0.00");
    assert!(result.unique_words.is_empty());
    Ok(())
}

#[test]
fn test_hyphen_only_tokens_vanish() -> Result<()> {
    let result = count_words(Some("- -- --- a-"), &StopWordSet::new())?;
    assert_eq!(result.total_word_count, 1, "Only 'a' survives");
    assert!(result.unique_words.contains("a"));
    Ok(())
}

#[test]
fn test_lone_period_is_not_a_word() -> Result<()> {
    let result = count_words(Some(". word ."), &StopWordSet::new())?;
    assert_eq!(result.total_word_count, 1);
    assert!(result.unique_words.contains("word"));
    Ok(())
}

#[test]
fn test_crlf_line_endings_split() -> Result<()> {
    let result = count_words(Some("alpha\r\nbeta\r\ngamma"), &StopWordSet::new())?;
    assert_eq!(result.total_word_count, 3);
    Ok(())
}

#[test]
fn test_mixed_script_tokens_are_discarded() -> Result<()> {
    let result = count_words(Some("naïve café über plain"), &StopWordSet::new())?;
    assert_eq!(result.total_word_count, 1);
    assert!(result.unique_words.contains("plain"));
    Ok(())
}

#[test]
fn test_repeated_trailing_periods_invalidate() -> Result<()> {
    // Only one trailing period is stripped; "word.." keeps one and fails.
    let result = count_words(Some("word.. word."), &StopWordSet::new())?;
    assert_eq!(result.total_word_count, 1);
    assert!(result.unique_words.contains("word"));
    Ok(())
}

#[test]
fn test_case_variants_are_distinct_words() -> Result<()> {
    let result = count_words(Some("Word word WORD"), &StopWordSet::new())?;
    assert_eq!(result.total_word_count, 3);
    assert_eq!(result.unique_word_count, 3, "No case folding anywhere");
    Ok(())
}
