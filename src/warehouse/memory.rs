use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::models::Transaction;
use crate::warehouse::{QueryResult, Warehouse};

#[derive(Debug, Error)]
#[error("Memory warehouse error: {0}")]
pub struct MemoryError(pub String);

/// In-process warehouse used by tests: records every call and fails on request.
///
/// Like `sql/create_table.sql`, it refuses rows without a `transaction_id` or `transaction_date`.
#[derive(Debug, Default)]
pub struct MemoryWarehouse {
    pub schema: Vec<String>,
    pub statements: Vec<String>,
    pub rows: Vec<Transaction>,
    pub executed: Vec<String>,
    failing_rows: HashSet<String>,
    failing_statements: HashSet<String>,
    results: HashMap<String, QueryResult>,
    fail_schema: bool
}

impl MemoryWarehouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_row(mut self, transaction_id: &str) -> Self {
        self.failing_rows.insert(transaction_id.to_string());
        self
    }

    pub fn fail_statement(mut self, statement: &str) -> Self {
        self.failing_statements.insert(statement.trim().to_string());
        self
    }

    pub fn fail_schema(mut self) -> Self {
        self.fail_schema = true;
        self
    }

    pub fn with_result(mut self, statement: &str, result: QueryResult) -> Self {
        self.results.insert(statement.trim().to_string(), result);
        self
    }
}

impl Warehouse for MemoryWarehouse {
    type Error = MemoryError;

    async fn apply_schema(&mut self, ddl: &str) -> Result<(), Self::Error> {
        if self.fail_schema {
            return Err(MemoryError("permission denied for schema public".to_string()));
        }

        self.schema.push(ddl.to_string());
        Ok(())
    }

    async fn insert(&mut self, statement: &str, row: &Transaction) -> Result<u64, Self::Error> {
        self.statements.push(statement.to_string());

        let Some(transaction_id) = &row.transaction_id else {
            return Err(MemoryError("null value in column \"transaction_id\" violates not-null constraint".to_string()));
        };

        if row.transaction_date.is_none() {
            return Err(MemoryError("null value in column \"transaction_date\" violates not-null constraint".to_string()));
        }

        if self.failing_rows.contains(transaction_id) {
            return Err(MemoryError(format!("duplicate key value [{transaction_id}]")));
        }

        self.rows.push(row.clone());
        Ok(1)
    }

    async fn query(&mut self, statement: &str) -> Result<QueryResult, Self::Error> {
        self.executed.push(statement.to_string());

        let key = statement.trim();

        if self.failing_statements.contains(key) {
            return Err(MemoryError(format!("syntax error in [{key}]")));
        }

        Ok(self.results.get(key).cloned().unwrap_or_default())
    }

    async fn close(self) {}
}
