use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use models::book::{self, NewBook};
use service::{book_service, unit_of_work};

use crate::errors::JsonApiError;
use crate::extract::{ApiPath, ValidJson};
use crate::state::ServerState;

#[derive(Debug, Serialize)]
pub struct BookList {
    pub books: Vec<book::Model>,
}

#[utoipa::path(
    post, path = "/api/v1/books/", tag = "books",
    request_body = crate::openapi::NewBookDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::BookDoc),
        (status = 422, description = "Validation Error or unknown seller")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(input): ValidJson<NewBook>,
) -> Result<(StatusCode, Json<book::Model>), JsonApiError> {
    let created = unit_of_work::run(&state.db, move |txn| {
        Box::pin(async move { book_service::create_book(txn, &input).await })
    })
    .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/v1/books/", tag = "books",
    responses((status = 200, description = "List OK", body = crate::openapi::BookListDoc))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<BookList>, JsonApiError> {
    let books = unit_of_work::run(&state.db, |txn| {
        Box::pin(async move { book_service::list_books(txn).await })
    })
    .await?;
    Ok(Json(BookList { books }))
}

#[utoipa::path(
    get, path = "/api/v1/books/{id}", tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::BookDoc),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<book::Model>, JsonApiError> {
    let found = unit_of_work::run(&state.db, move |txn| {
        Box::pin(async move { book_service::get_book(txn, id).await })
    })
    .await?;
    Ok(Json(found))
}
