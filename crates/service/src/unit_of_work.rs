//! Request-scoped unit of work.
//!
//! `run` opens a transaction, hands it to the closure and commits only when
//! the closure returns `Ok`. Any `Err` (and a dropped transaction, e.g. on
//! panic or cancellation) rolls every write back.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionError, TransactionTrait};
use tracing::debug;

use crate::errors::ServiceError;

pub type Work<'c, T> = Pin<Box<dyn Future<Output = Result<T, ServiceError>> + Send + 'c>>;

pub async fn run<T, F>(db: &DatabaseConnection, work: F) -> Result<T, ServiceError>
where
    T: Send,
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> Work<'c, T> + Send,
{
    db.transaction(work).await.map_err(|e| match e {
        TransactionError::Connection(e) => ServiceError::from(e),
        TransactionError::Transaction(e) => {
            debug!(error = %e, "unit of work rolled back");
            e
        }
    })
}
