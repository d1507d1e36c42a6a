use sea_orm::ConnectionTrait;
use tracing::{info, instrument};

use models::book::{self, NewBook};

use crate::errors::ServiceError;

/// Create a book for an existing seller. An unknown `seller_id` is a
/// referential integrity error and nothing is written.
#[instrument(skip(uow, input), fields(seller_id = input.seller_id))]
pub async fn create_book<C: ConnectionTrait>(
    uow: &C,
    input: &NewBook,
) -> Result<book::Model, ServiceError> {
    let created = book::create(uow, input).await?;
    info!(book_id = created.id, "book created");
    Ok(created)
}

/// Get a book by id.
pub async fn get_book<C: ConnectionTrait>(uow: &C, id: i32) -> Result<book::Model, ServiceError> {
    book::find(uow, id).await?.ok_or_else(|| ServiceError::not_found("book", id))
}

/// All books in creation order.
pub async fn list_books<C: ConnectionTrait>(uow: &C) -> Result<Vec<book::Model>, ServiceError> {
    Ok(book::list(uow).await?)
}
