


use anyhow::Result;
use sea_orm::DatabaseConnection;

use crate::db::{connect_and_migrate, DatabaseConfig};
use crate::{book, seller};

/// Fresh in-memory database with the schema applied.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    connect_and_migrate(&DatabaseConfig::in_memory()).await
}

pub(crate) fn new_seller(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> seller::NewSeller {
    seller::NewSeller {
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: email.into(),
        password: password.into(),
    }
}

pub(crate) fn new_book(seller_id: i32, title: &str) -> book::NewBook {
    book::NewBook {
        title: title.into(),
        author: "Pushkin".into(),
        year: 2001,
        pages: 104,
        seller_id,
    }
}

/// Integration tests combining both entities
pub mod integration_tests {
    use super::*;
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

    /// seller -> books -> list -> delete -> nothing left
    #[tokio::test]
    async fn test_complete_workflow() -> Result<()> {
        let db = setup_test_db().await?;

        let maria_input = new_seller("Maria", "Ivanova", "ivanova@mail.ru", "123Maria");
        let maria = seller::create(&db, &maria_input).await?;
        let irina_input = new_seller("Irina", "Petrova", "petrova@mail.ru", "123Irina");
        let irina = seller::create(&db, &irina_input).await?;

        for title in ["Eugene Onegin", "Boris Godunov", "Ruslan and Ludmila"] {
            book::create(&db, &new_book(maria.id, title)).await?;
        }
        book::create(&db, &new_book(irina.id, "Dead Souls")).await?;

        let all = seller::list_with_books(&db).await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].seller.id, maria.id);
        assert_eq!(all[0].books.len(), 3);
        assert_eq!(all[0].books[0].title, "Eugene Onegin");
        assert_eq!(all[1].books.len(), 1);

        assert!(seller::delete_cascade(&db, maria.id).await?);

        let orphans = book::Entity::find()
            .filter(book::Column::SellerId.eq(maria.id))
            .count(&db)
            .await?;
        assert_eq!(orphans, 0);
        assert_eq!(book::Entity::find().count(&db).await?, 1);
        assert_eq!(seller::list_with_books(&db).await?.len(), 1);
        Ok(())
    }
}
