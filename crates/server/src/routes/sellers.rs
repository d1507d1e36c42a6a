use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

use models::seller::{self, NewSeller, SellerWithBooks};
use service::seller_service::{self, SellerUpdate};
use service::unit_of_work;

use crate::errors::JsonApiError;
use crate::extract::{ApiPath, ValidJson};
use crate::state::ServerState;

#[derive(Debug, Serialize)]
pub struct SellerList {
    pub sellers: Vec<SellerWithBooks>,
}

#[utoipa::path(
    post, path = "/api/v1/sellers/", tag = "sellers",
    request_body = crate::openapi::NewSellerDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CreatedSellerDoc),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(input): ValidJson<NewSeller>,
) -> Result<(StatusCode, Json<seller::Model>), JsonApiError> {
    let created = unit_of_work::run(&state.db, move |txn| {
        Box::pin(async move { seller_service::create_seller(txn, &input).await })
    })
    .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/v1/sellers/", tag = "sellers",
    responses((status = 200, description = "List OK", body = crate::openapi::SellerListDoc))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<SellerList>, JsonApiError> {
    let sellers = unit_of_work::run(&state.db, |txn| {
        Box::pin(async move { seller_service::list_sellers(txn).await })
    })
    .await?;
    info!(count = sellers.len(), "list sellers");
    Ok(Json(SellerList { sellers }))
}

#[utoipa::path(
    get, path = "/api/v1/sellers/{id}", tag = "sellers",
    params(("id" = i32, Path, description = "Seller ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::SellerDoc),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<SellerWithBooks>, JsonApiError> {
    let found = unit_of_work::run(&state.db, move |txn| {
        Box::pin(async move { seller_service::get_seller(txn, id).await })
    })
    .await?;
    Ok(Json(found))
}

#[utoipa::path(
    put, path = "/api/v1/sellers/{id}", tag = "sellers",
    params(("id" = i32, Path, description = "Seller ID")),
    request_body = crate::openapi::SellerUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::SellerDoc),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    ValidJson(input): ValidJson<SellerUpdate>,
) -> Result<Json<SellerWithBooks>, JsonApiError> {
    let updated = unit_of_work::run(&state.db, move |txn| {
        Box::pin(async move { seller_service::update_seller(txn, id, &input).await })
    })
    .await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/v1/sellers/{id}", tag = "sellers",
    params(("id" = i32, Path, description = "Seller ID")),
    responses(
        (status = 204, description = "Deleted with all books"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, JsonApiError> {
    // books go first, inside the same transaction as the seller row
    unit_of_work::run(&state.db, move |txn| {
        Box::pin(async move { seller_service::delete_seller(txn, id).await })
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}
