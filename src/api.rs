use crate::analyzer::{self, AbstractStats};
use crate::paper::Paper;
use crate::search::{self, SearchHit};
use crate::stats;
use crate::store::PaperStore;
use crate::tokenizer::tokenize;
use axum::{
    extract::{Path, Query, Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};

// ========== Request/Response Types ==========

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Listing row: abstract and derived stats are omitted for weight.
#[derive(Debug, Serialize)]
pub struct PaperSummary {
    pub arxiv_id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub categories: Vec<String>,
}

impl From<&Paper> for PaperSummary {
    fn from(paper: &Paper) -> Self {
        Self {
            arxiv_id: paper.arxiv_id.clone(),
            title: paper.title.clone(),
            authors: paper.authors.clone(),
            categories: paper.categories.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaperDetail {
    pub arxiv_id: String,
    pub title: String,
    pub authors: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub categories: Vec<String>,
    pub published: String,
    pub abstract_stats: AbstractStats,
}

impl From<&Paper> for PaperDetail {
    fn from(paper: &Paper) -> Self {
        Self {
            arxiv_id: paper.arxiv_id.clone(),
            title: paper.title.clone(),
            authors: paper.authors.clone(),
            abstract_text: paper.abstract_text.clone(),
            categories: paper.categories.clone(),
            published: paper.published.clone(),
            abstract_stats: analyzer::analyze(&paper.abstract_text),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchHit>,
}

// ========== Error Handling ==========

/// Everything a request can fail with. Converted to a JSON body at the
/// response boundary; nothing propagates past it.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("papers.json not found or empty")]
    DataUnavailable,
    #[error("unknown paper id")]
    UnknownPaper { arxiv_id: String },
    #[error("endpoint not found")]
    RouteNotFound,
    #[error("missing query parameter 'q'")]
    MissingQuery,
    #[error("malformed query")]
    MalformedQuery,
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::DataUnavailable | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UnknownPaper { .. } | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MissingQuery | ApiError::MalformedQuery => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::UnknownPaper { arxiv_id } => json!({
                "error": self.to_string(),
                "arxiv_id": arxiv_id,
            }),
            ApiError::Internal(err) => {
                tracing::error!("request failed: {:#}", err);
                json!({
                    "error": self.to_string(),
                    "detail": format!("{:#}", err),
                })
            }
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

// ========== Request Logging ==========

/// Short per-request annotation a handler attaches for the access log,
/// e.g. a result count.
#[derive(Debug, Clone)]
struct LogNote(String);

fn annotated(response: impl IntoResponse, note: String) -> Response {
    let mut response = response.into_response();
    response.extensions_mut().insert(LogNote(note));
    response
}

/// One line per handled request: method, path, status, and the handler's
/// annotation when present. Bodies are never logged.
async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let response = next.run(req).await;

    let status = response.status();
    match response.extensions().get::<LogNote>() {
        Some(LogNote(note)) => tracing::info!("{} {} - {} ({})", method, path, status, note),
        None => tracing::info!("{} {} - {}", method, path, status),
    }
    response
}

/// Every body on this surface is JSON; declare the encoding with it.
async fn set_json_charset(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=utf-8"),
    );
    response
}

/// Answer 500 on every request while the corpus is unavailable. Runs ahead
/// of routing so unknown paths get the same treatment.
async fn require_corpus(
    State(store): State<Arc<PaperStore>>,
    req: Request,
    next: Next,
) -> Response {
    if !store.exists() {
        return ApiError::DataUnavailable.into_response();
    }
    next.run(req).await
}

// ========== Handlers ==========

async fn list_papers(State(store): State<Arc<PaperStore>>) -> Response {
    let rows: Vec<PaperSummary> = store.all().iter().map(PaperSummary::from).collect();
    let note = format!("{} results", rows.len());
    annotated(Json(rows), note)
}

async fn get_paper(
    State(store): State<Arc<PaperStore>>,
    Path(arxiv_id): Path<String>,
) -> Result<Response, ApiError> {
    let paper = store
        .by_id(&arxiv_id)
        .ok_or(ApiError::UnknownPaper { arxiv_id })?;
    Ok(annotated(Json(PaperDetail::from(paper)), "1 result".to_string()))
}

async fn search_papers(
    State(store): State<Arc<PaperStore>>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let query = params.q.trim().to_string();
    if query.is_empty() {
        return Err(ApiError::MissingQuery);
    }
    let terms = tokenize(&query);
    if terms.is_empty() {
        return Err(ApiError::MalformedQuery);
    }

    let results = search::search(store.all(), &terms);
    let note = format!("{} results", results.len());
    Ok(annotated(Json(SearchResponse { query, results }), note))
}

async fn corpus_stats(State(store): State<Arc<PaperStore>>) -> Response {
    let stats = stats::compute(store.all());
    let note = format!("papers={}", stats.total_papers);
    annotated(Json(stats), note)
}

async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

// ========== Router ==========

/// Build the full service: four GET routes over the shared store, a JSON
/// 404 for everything else (including non-GET methods on known paths), the
/// corpus-availability gate, and the access log.
pub fn create_router(store: Arc<PaperStore>) -> Router {
    Router::new()
        .route("/papers", get(list_papers).fallback(not_found))
        .route("/papers/:arxiv_id", get(get_paper).fallback(not_found))
        .route("/search", get(search_papers).fallback(not_found))
        .route("/stats", get(corpus_stats).fallback(not_found))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(store.clone(), require_corpus))
        .layer(middleware::from_fn(set_json_charset))
        .layer(middleware::from_fn(log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(store)
}
