use sea_orm::DatabaseConnection;

/// Shared handler state. The pool is cheap to clone; every request opens its
/// own unit of work from it.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}
