use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;

use filestore_analysis::{frequent_words, word_count, RankedWords};
use filestore_protocol::{DocumentResponse, FileQuery, FreqWordsQuery, HealthResponse};
use filestore_store::StoreError;

use crate::error::ServerResult;
use crate::form::DocumentForm;
use crate::state::AppState;

/// `POST /add`: create a document, 409 if the name is taken.
pub async fn add_handler(
    State(state): State<AppState>,
    form: DocumentForm,
) -> ServerResult<StatusCode> {
    state.store.add(form.require_filename()?, &form.content)?;
    tracing::info!(filename = %form.filename, bytes = form.content.len(), "file added");
    Ok(StatusCode::CREATED)
}

/// `POST /remove`: delete a document, 404 if absent (an empty name included).
pub async fn remove_handler(
    State(state): State<AppState>,
    form: DocumentForm,
) -> ServerResult<StatusCode> {
    state.store.remove(&form.filename)?;
    tracing::info!(filename = %form.filename, "file removed");
    Ok(StatusCode::OK)
}

/// `POST /update`: replace a document's content.
pub async fn update_handler(
    State(state): State<AppState>,
    form: DocumentForm,
) -> ServerResult<StatusCode> {
    state.store.update(form.require_filename()?, &form.content)?;
    tracing::info!(filename = %form.filename, bytes = form.content.len(), "file updated");
    Ok(StatusCode::OK)
}

/// `GET /list`: every document name as a JSON array.
pub async fn list_handler(State(state): State<AppState>) -> ServerResult<Json<Vec<String>>> {
    let names = state.store.list()?;
    tracing::debug!(count = names.len(), "listed files");
    Ok(Json(names))
}

/// `GET /get?filename=`: one document as JSON.
pub async fn get_handler(
    State(state): State<AppState>,
    Query(query): Query<FileQuery>,
) -> ServerResult<Json<DocumentResponse>> {
    let doc = state
        .store
        .get(&query.filename)?
        .ok_or_else(|| StoreError::NotFound {
            name: query.filename.clone(),
        })?;
    tracing::debug!(filename = %doc.name, hash = %doc.hash.short_hex(), "fetched file");
    Ok(Json(doc.into()))
}

/// `GET /wc`: total whitespace-delimited words across all documents, as text.
pub async fn word_count_handler(State(state): State<AppState>) -> ServerResult<String> {
    let total: usize = state
        .store
        .snapshot()?
        .iter()
        .map(|doc| word_count(&doc.content))
        .sum();
    Ok(format!("{total}\n"))
}

/// `GET /freq-words?limit=&order=`: ranked word counts over the whole corpus.
pub async fn freq_words_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ServerResult<Json<RankedWords>> {
    let query = FreqWordsQuery::from_pairs(pairs);
    let corpus = state.store.corpus()?;
    let (limit, order) = (query.limit(), query.order());
    let ranked = frequent_words(&corpus, limit, order);
    tracing::debug!(limit, %order, returned = ranked.len(), "ranked words");
    Ok(Json(ranked))
}

/// `GET /health`.
pub async fn health_handler(State(state): State<AppState>) -> ServerResult<Json<HealthResponse>> {
    let documents = state.store.list()?.len();
    Ok(Json(HealthResponse::ok(documents)))
}
