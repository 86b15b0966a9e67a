// Re-export main components
pub mod analyzer;
pub mod api;
pub mod paper;
pub mod search;
pub mod stats;
pub mod store;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::AbstractStats;
pub use api::{create_router, ApiError};
pub use paper::Paper;
pub use search::SearchHit;
pub use stats::CorpusStats;
pub use store::PaperStore;

// Re-export error types
pub use anyhow::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_workflow() {
        let store = PaperStore::from_papers(vec![Paper::new(
            "2301.00001".to_string(),
            "Attention in Neural Networks".to_string(),
            "We revisit attention. Neural networks benefit.".to_string(),
        )]);

        assert!(store.exists());
        assert!(store.by_id("2301.00001").is_some());

        let terms = tokenizer::tokenize("neural attention");
        let hits = search::search(store.all(), &terms);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].match_score, 4);

        let stats = stats::compute(store.all());
        assert_eq!(stats.total_papers, 1);
    }
}
