#[cfg(test)]
mod memory;
mod postgres;
pub mod schema;

use std::error::Error;

use crate::models::Transaction;

#[cfg(test)]
pub use memory::MemoryWarehouse;
pub use postgres::PostgresWarehouse;

/// Text rendering of a result set returned by a validation statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>
}

/// A single warehouse session, used serially by one pipeline stage and then closed.
pub trait Warehouse {
    type Error: Error + Send + Sync + 'static;

    /// Runs the table definition. The DDL is expected to be idempotent ("create if not exists").
    async fn apply_schema(&mut self, ddl: &str) -> Result<(), Self::Error>;

    /// Inserts one row with `statement`, which binds the columns in [`schema::COLUMNS`] order.
    async fn insert(&mut self, statement: &str, row: &Transaction) -> Result<u64, Self::Error>;

    /// Executes a read-only statement and returns whatever rows it produced.
    async fn query(&mut self, statement: &str) -> Result<QueryResult, Self::Error>;

    /// Releases the session.
    async fn close(self);
}
