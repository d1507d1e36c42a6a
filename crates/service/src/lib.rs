//! Service layer providing the seller/book record operations on top of models.
//! - Every operation takes the unit of work it runs in as an explicit argument.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Outcomes are reported through [`errors::ServiceError`].

pub mod errors;
pub mod unit_of_work;
pub mod seller_service;
pub mod book_service;
#[cfg(test)]
pub mod test_support;
