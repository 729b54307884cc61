use riffle_core::{driver::Row, Result};

/// Populates a value from a result row.
///
/// Implemented by callers for each destination shape:
///
/// ```
/// use riffle::{FromRow, Result, Row};
///
/// struct User {
///     id: i64,
///     name: String,
/// }
///
/// impl FromRow for User {
///     fn from_row(row: &Row) -> Result<Self> {
///         Ok(User {
///             id: row.get("id")?.to_i64()?,
///             name: row.get("name")?.to_string()?,
///         })
///     }
/// }
/// ```
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> Result<Self>;
}

// Scalar impls cover single-column selects, e.g. `SELECT COUNT(*)` or a
// lookup of one value by key.
impl FromRow for i64 {
    fn from_row(row: &Row) -> Result<Self> {
        row.at(0)?.to_i64()
    }
}

impl FromRow for String {
    fn from_row(row: &Row) -> Result<Self> {
        row.at(0)?.to_string()
    }
}

impl FromRow for bool {
    fn from_row(row: &Row) -> Result<Self> {
        row.at(0)?.to_bool()
    }
}
