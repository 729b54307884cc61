//! Riffle runs paginated list queries against a relational database: it
//! counts the filtered rows first, skips the data round-trip when the
//! requested page cannot be satisfied, and hands back the rows together with
//! normalized paging metadata.
//!
//! ```no_run
//! use riffle::{Db, ListOption, stmt::{Direction, Select}};
//! # #[derive(Debug)] struct User;
//! # impl riffle::FromRow for User {
//! #     fn from_row(_: &riffle::Row) -> riffle::Result<Self> { Ok(User) }
//! # }
//! # async fn example(db: Db) -> riffle::Result<()> {
//! let page = db
//!     .list::<User>(
//!         Select::new("users").column("*"),
//!         vec![
//!             ListOption::with("status", ["active"]),
//!             ListOption::sort_by("created_at", Direction::Desc),
//!         ],
//!     )
//!     .await?;
//!
//! println!("{} of {} users", page.len(), page.pagination.count_records);
//! # Ok(())
//! # }
//! ```

mod db;
pub use db::Db;

mod list;

mod list_option;
pub use list_option::{Category, ListOption};

mod page;
pub use page::Page;

pub mod pagination;
pub use pagination::{OffsetPagination, SeekPagination};

mod row;
pub use row::FromRow;

pub use riffle_core::{
    async_trait,
    driver::{Driver, Row},
    stmt, Error, Result,
};
