use crate::paper::Paper;
use crate::tokenizer::tokenize;
use serde::Serialize;
use std::collections::BTreeMap;

/// One entry in the top-10 word ranking.
#[derive(Debug, Clone, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub frequency: usize,
}

/// Corpus-wide aggregates, recomputed from the immutable corpus per request.
///
/// Maps are `BTreeMap` so key order is stable and identical requests
/// serialize to byte-identical bodies.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusStats {
    pub total_papers: usize,
    pub total_words: usize,
    pub unique_words: usize,
    pub top_10_words: Vec<WordFrequency>,
    pub category_distribution: BTreeMap<String, usize>,
}

/// Single pass over the corpus: abstract word totals, a global word
/// frequency table, and per-category paper counts. A category repeated
/// within one paper's list counts each time it appears.
pub fn compute(papers: &[Paper]) -> CorpusStats {
    let mut total_words = 0;
    let mut frequencies: BTreeMap<String, usize> = BTreeMap::new();
    let mut categories: BTreeMap<String, usize> = BTreeMap::new();

    for paper in papers {
        let words = tokenize(&paper.abstract_text);
        total_words += words.len();
        for word in words {
            *frequencies.entry(word).or_insert(0) += 1;
        }
        for category in &paper.categories {
            *categories.entry(category.clone()).or_insert(0) += 1;
        }
    }

    let unique_words = frequencies.len();
    let top_10_words = top_words(&frequencies, 10);

    CorpusStats {
        total_papers: papers.len(),
        total_words,
        unique_words,
        top_10_words,
        category_distribution: categories,
    }
}

/// Rank by frequency descending, ties broken by word ascending.
fn top_words(frequencies: &BTreeMap<String, usize>, limit: usize) -> Vec<WordFrequency> {
    let mut ranked: Vec<WordFrequency> = frequencies
        .iter()
        .map(|(word, &frequency)| WordFrequency {
            word: word.clone(),
            frequency,
        })
        .collect();
    ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.word.cmp(&b.word)));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_paper_counts() {
        let papers = vec![Paper::new(
            "1".into(),
            "T".into(),
            "Deep learning. Deep networks!".into(),
        )];
        let stats = compute(&papers);
        assert_eq!(stats.total_papers, 1);
        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.unique_words, 3);
        assert_eq!(stats.top_10_words[0].word, "deep");
        assert_eq!(stats.top_10_words[0].frequency, 2);
    }

    #[test]
    fn test_tie_breaks_lexicographically() {
        let papers = vec![Paper::new("1".into(), "T".into(), "zebra apple zebra apple".into())];
        let stats = compute(&papers);
        assert_eq!(stats.top_10_words[0].word, "apple");
        assert_eq!(stats.top_10_words[1].word, "zebra");
    }

    #[test]
    fn test_top_words_truncates_to_ten() {
        let papers = vec![Paper::new(
            "1".into(),
            "T".into(),
            "a b c d e f g h i j k l m".into(),
        )];
        let stats = compute(&papers);
        assert_eq!(stats.top_10_words.len(), 10);
        assert_eq!(stats.unique_words, 13);
    }

    #[test]
    fn test_category_distribution() {
        let papers = vec![
            Paper::new("1".into(), "T".into(), "".into())
                .with_categories(vec!["cs.LG".into(), "cs.AI".into(), "cs.LG".into()]),
            Paper::new("2".into(), "T".into(), "".into()).with_categories(vec!["cs.AI".into()]),
        ];
        let stats = compute(&papers);
        // repeats within one paper count each time
        assert_eq!(stats.category_distribution["cs.LG"], 2);
        assert_eq!(stats.category_distribution["cs.AI"], 2);
    }

    #[test]
    fn test_empty_corpus() {
        let stats = compute(&[]);
        assert_eq!(stats.total_papers, 0);
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.unique_words, 0);
        assert!(stats.top_10_words.is_empty());
        assert!(stats.category_distribution.is_empty());
    }
}
