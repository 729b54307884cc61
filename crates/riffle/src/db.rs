use crate::{FromRow, Result};

use riffle_core::{driver::Driver, stmt, Error};

use std::sync::Arc;

/// Handle to a database.
///
/// The execution engine is injected, so any [`Driver`] implementation works,
/// including stand-ins in tests. Cloning is cheap and shares the driver.
#[derive(Debug, Clone)]
pub struct Db {
    pub(crate) driver: Arc<dyn Driver>,
}

impl Db {
    pub fn new(driver: impl Driver) -> Self {
        Self {
            driver: Arc::new(driver),
        }
    }

    /// Runs a `SELECT` expected to match a single row.
    ///
    /// A lookup that matches nothing is an absent value, not an error:
    ///
    /// ```no_run
    /// # use riffle::{stmt::{Expr, Select}, Db};
    /// # #[derive(Debug)] struct User;
    /// # impl riffle::FromRow for User {
    /// #     fn from_row(_: &riffle::Row) -> riffle::Result<Self> { Ok(User) }
    /// # }
    /// # async fn example(db: Db) -> riffle::Result<()> {
    /// let user: Option<User> = db
    ///     .get(Select::new("users").column("*").and_where(Expr::eq("email", "ada@example.com")))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get<T: FromRow>(&self, query: stmt::Select) -> Result<Option<T>> {
        match self.fetch_one(query).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_record_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Runs a `SELECT` expected to match a single row, failing with a
    /// record-not-found error when it matches nothing.
    pub async fn fetch_one<T: FromRow>(&self, query: stmt::Select) -> Result<T> {
        let table = query.from.clone();

        let mut params = Vec::new();
        let sql = riffle_sql::serialize(&query.into(), &mut params)?;
        let rows = self.driver.query(&sql, &params).await?;

        match rows.first() {
            Some(row) => T::from_row(row),
            None => Err(Error::record_not_found(format!("table={table}"))),
        }
    }

    /// Runs an `INSERT`/`UPDATE`/`DELETE`, returning the number of rows
    /// affected.
    pub async fn exec(&self, statement: impl Into<stmt::Statement>) -> Result<u64> {
        let mut params = Vec::new();
        let sql = riffle_sql::serialize(&statement.into(), &mut params)?;
        self.driver.exec(&sql, &params).await
    }
}
