#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::db::{connect_and_migrate, DatabaseConfig};
use models::seller::NewSeller;

/// A private, migrated in-memory database for one test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    connect_and_migrate(&DatabaseConfig::in_memory()).await
}

pub fn ivan() -> NewSeller {
    NewSeller {
        first_name: "Ivan".into(),
        last_name: "Ivanov".into(),
        email: "ivanov@mail.ru".into(),
        password: "123Ivan".into(),
    }
}

pub fn maria() -> NewSeller {
    NewSeller {
        first_name: "Maria".into(),
        last_name: "Ivanova".into(),
        email: "ivanova@mail.ru".into(),
        password: "123Maria".into(),
    }
}
