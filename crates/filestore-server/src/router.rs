use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use filestore_protocol::endpoints;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all file store endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ADD, post(handler::add_handler))
        .route(endpoints::REMOVE, post(handler::remove_handler))
        .route(endpoints::UPDATE, post(handler::update_handler))
        .route(endpoints::LIST, get(handler::list_handler))
        .route(endpoints::GET, get(handler::get_handler))
        .route(endpoints::WORD_COUNT, get(handler::word_count_handler))
        .route(endpoints::FREQ_WORDS, get(handler::freq_words_handler))
        .route(endpoints::HEALTH, get(handler::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
