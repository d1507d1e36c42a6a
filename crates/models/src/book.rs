use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{seller, validate};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub pages: i32,
    pub seller_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Seller }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Seller => Entity::belongs_to(seller::Entity)
                .from(Column::SellerId)
                .to(seller::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<seller::Entity> for Entity {
    fn to() -> RelationDef { Relation::Seller.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub pages: i32,
    pub seller_id: i32,
}

impl NewBook {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate::required("title", &self.title, validate::TITLE_MAX)?;
        validate::required("author", &self.author, validate::AUTHOR_MAX)?;
        Ok(())
    }
}

/// Insert a book owned by an existing seller. The owner check runs on the
/// same connection as the insert so a transaction covers both.
pub async fn create<C: ConnectionTrait>(db: &C, input: &NewBook) -> Result<Model, ModelError> {
    input.validate()?;
    let owner = seller::Entity::find_by_id(input.seller_id).one(db).await?;
    if owner.is_none() {
        return Err(ModelError::ReferentialIntegrity(format!(
            "seller {} does not exist",
            input.seller_id
        )));
    }
    let am = ActiveModel {
        title: Set(input.title.clone()),
        author: Set(input.author.clone()),
        year: Set(input.year),
        pages: Set(input.pages),
        seller_id: Set(input.seller_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn list_by_seller<C: ConnectionTrait>(
    db: &C,
    seller_id: i32,
) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .filter(Column::SellerId.eq(seller_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}
