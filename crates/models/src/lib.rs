//! Storage model for the book market: the `seller` and `book` entities,
//! their relation, and the operations that keep every book attached to an
//! existing seller.

pub mod errors;
pub mod db;
pub mod validate;
pub mod seller;
pub mod book;

#[cfg(test)]
mod tests;
