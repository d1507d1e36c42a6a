use sea_orm::{
    entity::prelude::*, ConnectionTrait, LoaderTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ModelError;
use crate::{book, validate};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seller")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Stored as given. Never serialized.
    #[serde(skip_serializing, default)]
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Books,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Books => Entity::has_many(book::Entity).into() }
    }
}

impl Related<book::Entity> for Entity {
    fn to() -> RelationDef { Relation::Books.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted when registering a seller.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewSeller {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl NewSeller {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate::required("first_name", &self.first_name, validate::NAME_MAX)?;
        validate::required("last_name", &self.last_name, validate::NAME_MAX)?;
        validate::bounded("email", &self.email, validate::EMAIL_MAX)?;
        validate::bounded("password", &self.password, validate::PASSWORD_MAX)?;
        Ok(())
    }
}

/// The mutable part of a seller. The password is not part of it.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SellerProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl SellerProfile {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate::required("first_name", &self.first_name, validate::NAME_MAX)?;
        validate::required("last_name", &self.last_name, validate::NAME_MAX)?;
        validate::bounded("email", &self.email, validate::EMAIL_MAX)?;
        Ok(())
    }
}

/// A seller with its books already loaded, ordered by book id.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SellerWithBooks {
    #[serde(flatten)]
    pub seller: Model,
    pub books: Vec<book::Model>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: &NewSeller) -> Result<Model, ModelError> {
    input.validate()?;
    let am = ActiveModel {
        first_name: Set(input.first_name.clone()),
        last_name: Set(input.last_name.clone()),
        email: Set(input.email.clone()),
        password: Set(input.password.clone()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_with_books<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<Option<SellerWithBooks>, ModelError> {
    let Some(seller) = Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    let books = seller
        .find_related(book::Entity)
        .order_by_asc(book::Column::Id)
        .all(db)
        .await?;
    Ok(Some(SellerWithBooks { seller, books }))
}

/// All sellers in id order. Books for every seller come from one batched query.
pub async fn list_with_books<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<SellerWithBooks>, ModelError> {
    let sellers = Entity::find().order_by_asc(Column::Id).all(db).await?;
    let books = sellers
        .load_many(book::Entity::find().order_by_asc(book::Column::Id), db)
        .await?;
    Ok(sellers
        .into_iter()
        .zip(books)
        .map(|(seller, books)| SellerWithBooks { seller, books })
        .collect())
}

/// Overwrite name and email in place. `None` when the seller does not exist.
pub async fn update_profile<C: ConnectionTrait>(
    db: &C,
    id: i32,
    profile: &SellerProfile,
) -> Result<Option<Model>, ModelError> {
    profile.validate()?;
    let Some(found) = Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    let mut am: ActiveModel = found.into();
    am.first_name = Set(profile.first_name.clone());
    am.last_name = Set(profile.last_name.clone());
    am.email = Set(profile.email.clone());
    Ok(Some(am.update(db).await?))
}

/// Remove a seller and every book referencing it in one transaction
/// (a savepoint when `db` is already a transaction). Returns `false` and
/// changes nothing when the seller does not exist.
pub async fn delete_cascade<C>(db: &C, id: i32) -> Result<bool, ModelError>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;
    if Entity::find_by_id(id).one(&txn).await?.is_none() {
        txn.rollback().await?;
        return Ok(false);
    }
    let books = book::Entity::delete_many()
        .filter(book::Column::SellerId.eq(id))
        .exec(&txn)
        .await?;
    let res = Entity::delete_by_id(id).exec(&txn).await?;
    if res.rows_affected == 0 {
        txn.rollback().await?;
        return Ok(false);
    }
    txn.commit().await?;
    debug!(seller_id = id, books_deleted = books.rows_affected, "seller deleted");
    Ok(true)
}
