use crate::paper::{CorpusFile, Paper, RawPaper};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read-only paper corpus: the source-ordered listing plus an id index.
///
/// Built once at startup and shared behind `Arc`. Nothing mutates after
/// construction, so concurrent request handlers need no locking; do not add
/// any.
#[derive(Debug, Default)]
pub struct PaperStore {
    papers: Vec<Paper>,
    by_id: HashMap<String, usize>,
}

impl PaperStore {
    /// Load the corpus from a JSON file.
    ///
    /// A missing, unreadable, or unparseable file yields an empty store
    /// rather than a startup failure; the HTTP layer reports the condition
    /// as a 500 on every request.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match read_corpus(path) {
            Ok(raw) => Self::from_papers(raw.into_iter().map(RawPaper::normalize).collect()),
            Err(err) => {
                tracing::warn!("could not load corpus from {}: {:#}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Build a store from already-normalized papers.
    ///
    /// The id index is last-write-wins on duplicates; papers with an empty
    /// id stay out of the index but remain in the listing.
    pub fn from_papers(papers: Vec<Paper>) -> Self {
        let mut by_id = HashMap::with_capacity(papers.len());
        for (pos, paper) in papers.iter().enumerate() {
            if !paper.arxiv_id.is_empty() {
                by_id.insert(paper.arxiv_id.clone(), pos);
            }
        }
        Self { papers, by_id }
    }

    /// True iff at least one paper loaded.
    pub fn exists(&self) -> bool {
        !self.papers.is_empty()
    }

    /// All papers in source order.
    pub fn all(&self) -> &[Paper] {
        &self.papers
    }

    /// Point lookup by arXiv id.
    pub fn by_id(&self, id: &str) -> Option<&Paper> {
        self.by_id.get(id).map(|&pos| &self.papers[pos])
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}

fn read_corpus(path: &Path) -> Result<Vec<RawPaper>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let reader = BufReader::new(file);
    let corpus: CorpusFile = serde_json::from_reader(reader).context("parse corpus JSON")?;
    Ok(corpus.into_papers())
}
