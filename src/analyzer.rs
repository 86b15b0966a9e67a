use crate::tokenizer::tokenize;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

lazy_static::lazy_static! {
    static ref SENTENCE_BREAK: Regex = Regex::new(r"[.!?]+").unwrap();
}

/// Word and sentence counts derived from a paper's abstract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbstractStats {
    pub total_words: usize,
    pub unique_words: usize,
    pub total_sentences: usize,
}

/// Derive statistics from one abstract.
///
/// Sentences are the segments left by splitting on runs of `.`, `!`, `?`
/// that are non-empty after trimming. Text with no terminator at all is a
/// single segment and counts as one sentence.
pub fn analyze(abstract_text: &str) -> AbstractStats {
    let words = tokenize(abstract_text);
    let unique: HashSet<&str> = words.iter().map(String::as_str).collect();
    let total_sentences = SENTENCE_BREAK
        .split(abstract_text)
        .filter(|segment| !segment.trim().is_empty())
        .count();

    AbstractStats {
        total_words: words.len(),
        unique_words: unique.len(),
        total_sentences,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_basic() {
        let stats = analyze("Deep learning. Deep networks!");
        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.unique_words, 3);
        assert_eq!(stats.total_sentences, 2);
    }

    #[test]
    fn test_empty_abstract() {
        let stats = analyze("");
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.unique_words, 0);
        assert_eq!(stats.total_sentences, 0);
    }

    #[test]
    fn test_no_terminator_counts_one_sentence() {
        let stats = analyze("a result without terminal punctuation");
        assert_eq!(stats.total_sentences, 1);
    }

    #[test]
    fn test_terminator_runs_collapse() {
        let stats = analyze("Wait... what?! Really.");
        assert_eq!(stats.total_sentences, 3);
    }

    #[test]
    fn test_whitespace_only_segments_discarded() {
        let stats = analyze("One. . . Two.");
        assert_eq!(stats.total_sentences, 2);
    }
}
