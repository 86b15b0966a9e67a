use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A normalized paper record.
///
/// Field fallbacks in the corpus JSON (`arxiv_id` vs `id`, `published` vs
/// `updated`) are resolved once when the corpus is loaded; afterwards the
/// record is immutable. `published` is an opaque date string, never parsed.
#[derive(Debug, Clone, Serialize)]
pub struct Paper {
    pub arxiv_id: String,
    pub title: String,
    pub authors: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub categories: Vec<String>,
    pub published: String,
}

impl Paper {
    pub fn new(arxiv_id: String, title: String, abstract_text: String) -> Self {
        Self {
            arxiv_id,
            title,
            authors: Vec::new(),
            abstract_text,
            categories: Vec::new(),
            published: String::new(),
        }
    }

    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_published(mut self, published: String) -> Self {
        self.published = published;
        self
    }
}

/// A paper object as it appears in the corpus file.
///
/// The id fields stay loose (`Value`) so a non-string id downgrades that one
/// paper instead of failing the whole corpus parse. Unrecognized fields are
/// ignored.
#[derive(Debug, Deserialize)]
pub struct RawPaper {
    #[serde(default)]
    arxiv_id: Option<Value>,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    authors: Vec<String>,
    #[serde(rename = "abstract", default)]
    abstract_text: String,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    published: Option<String>,
    #[serde(default)]
    updated: Option<String>,
}

impl RawPaper {
    /// Resolve fallbacks into a strict [`Paper`].
    ///
    /// An id that is absent, non-string, or empty resolves to the empty
    /// string; such papers remain in the listing but never enter the id
    /// index.
    pub fn normalize(self) -> Paper {
        let arxiv_id = string_field(self.arxiv_id)
            .or_else(|| string_field(self.id))
            .unwrap_or_default();
        let published = self
            .published
            .filter(|s| !s.is_empty())
            .or(self.updated)
            .unwrap_or_default();
        Paper {
            arxiv_id,
            title: self.title,
            authors: self.authors,
            abstract_text: self.abstract_text,
            categories: self.categories,
            published,
        }
    }
}

fn string_field(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// The two accepted corpus file shapes: a bare array of papers, or an
/// object wrapping the array under a `papers` key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CorpusFile {
    Array(Vec<RawPaper>),
    Wrapped { papers: Vec<RawPaper> },
}

impl CorpusFile {
    pub fn into_papers(self) -> Vec<RawPaper> {
        match self {
            CorpusFile::Array(papers) => papers,
            CorpusFile::Wrapped { papers } => papers,
        }
    }
}
