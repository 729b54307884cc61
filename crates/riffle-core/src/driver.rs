mod row;
pub use row::Row;

use crate::{async_trait, stmt::Value, Result};

use std::fmt::Debug;

/// Executes rendered statements against a database.
///
/// Implementations own connection handling. Neither round-trip is retried
/// here; cancellation is caller-driven by dropping the returned future.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Executes a statement that returns rows.
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>>;

    /// Executes a statement, returning the number of affected rows.
    async fn exec(&self, sql: &str, params: &[Value]) -> Result<u64>;
}
