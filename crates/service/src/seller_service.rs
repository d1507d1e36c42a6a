use sea_orm::{ConnectionTrait, TransactionTrait};
use serde::Deserialize;
use tracing::{info, instrument};

use models::seller::{self, NewSeller, SellerProfile, SellerWithBooks};

use crate::errors::ServiceError;

/// Replacement values for a seller. `password` is accepted so callers can
/// send the full record, but it is never written.
#[derive(Clone, Debug, Deserialize)]
pub struct SellerUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

impl SellerUpdate {
    fn profile(&self) -> SellerProfile {
        SellerProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Register a seller. It starts without books.
#[instrument(skip_all)]
pub async fn create_seller<C: ConnectionTrait>(
    uow: &C,
    input: &NewSeller,
) -> Result<seller::Model, ServiceError> {
    let created = seller::create(uow, input).await?;
    info!(seller_id = created.id, "seller created");
    Ok(created)
}

/// All sellers in creation order, each with its books.
pub async fn list_sellers<C: ConnectionTrait>(
    uow: &C,
) -> Result<Vec<SellerWithBooks>, ServiceError> {
    Ok(seller::list_with_books(uow).await?)
}

/// One seller with its books.
pub async fn get_seller<C: ConnectionTrait>(
    uow: &C,
    id: i32,
) -> Result<SellerWithBooks, ServiceError> {
    seller::find_with_books(uow, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("seller", id))
}

/// Overwrite name and email; the stored password stays as it is.
#[instrument(skip(uow, input))]
pub async fn update_seller<C: ConnectionTrait>(
    uow: &C,
    id: i32,
    input: &SellerUpdate,
) -> Result<SellerWithBooks, ServiceError> {
    seller::update_profile(uow, id, &input.profile())
        .await?
        .ok_or_else(|| ServiceError::not_found("seller", id))?;
    let updated = get_seller(uow, id).await?;
    info!(seller_id = id, "seller updated");
    Ok(updated)
}

/// Delete a seller together with all of its books.
#[instrument(skip(uow))]
pub async fn delete_seller<C>(uow: &C, id: i32) -> Result<(), ServiceError>
where
    C: ConnectionTrait + TransactionTrait,
{
    if !seller::delete_cascade(uow, id).await? {
        return Err(ServiceError::not_found("seller", id));
    }
    info!(seller_id = id, "seller deleted");
    Ok(())
}
