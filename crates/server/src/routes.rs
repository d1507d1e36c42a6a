use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod books;
pub mod sellers;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Generated OpenAPI document for every handler annotated with `#[utoipa::path]`.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Versioned record API. Collection paths answer with and without the trailing slash.
fn api_v1() -> Router<ServerState> {
    Router::new()
        // sellers: full CRUD, delete cascades to the seller's books
        .route("/sellers", get(sellers::list).post(sellers::create))
        .route("/sellers/", get(sellers::list).post(sellers::create))
        .route("/sellers/:id", get(sellers::get).put(sellers::update).delete(sellers::delete))
        // books: create and read only
        .route("/books", get(books::list).post(books::create))
        .route("/books/", get(books::list).post(books::create))
        .route("/books/:id", get(books::get))
}

/// Build the full application router: health, OpenAPI document and `/api/v1`.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        // public, unversioned endpoints
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        // record API
        .nest("/api/v1", api_v1())
        .with_state(state)
        .layer(cors)
        // request/response tracing, one span per request
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
