use crate::paper::Paper;
use crate::tokenizer::{count_term, tokenize};
use serde::Serialize;

/// One matched paper: occurrence counts summed over terms and fields.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub arxiv_id: String,
    pub title: String,
    pub match_score: usize,
    pub matches_in: Vec<&'static str>,
}

/// Scan the corpus for whole-word, case-insensitive term occurrences.
///
/// A term matches only as a complete word, bounded by non-letters or the
/// string edges. That boundary rule is exactly the tokenizer's segmentation,
/// so each field is tokenized once and terms are counted against its token
/// stream. Title and abstract are counted independently per term and summed
/// into `match_score`; a paper is a hit iff the score is positive. Results
/// keep corpus order and are never re-sorted by score.
pub fn search(papers: &[Paper], terms: &[String]) -> Vec<SearchHit> {
    let mut hits = Vec::new();

    for paper in papers {
        let title_tokens = tokenize(&paper.title);
        let abstract_tokens = tokenize(&paper.abstract_text);

        let mut score = 0;
        let mut in_title = false;
        let mut in_abstract = false;
        for term in terms {
            let title_count = count_term(&title_tokens, term);
            let abstract_count = count_term(&abstract_tokens, term);
            score += title_count + abstract_count;
            in_title |= title_count > 0;
            in_abstract |= abstract_count > 0;
        }

        if score > 0 {
            let mut matches_in = Vec::new();
            if in_title {
                matches_in.push("title");
            }
            if in_abstract {
                matches_in.push("abstract");
            }
            hits.push(SearchHit {
                arxiv_id: paper.arxiv_id.clone(),
                title: paper.title.clone(),
                match_score: score,
                matches_in,
            });
        }
    }

    hits
}
