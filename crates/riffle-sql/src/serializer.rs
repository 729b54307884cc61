#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod statement;
mod value;

use riffle_core::{stmt::Statement, Error, Result};

/// Serializes a statement to PostgreSQL text, pushing bound values into
/// `params` as `$n` placeholders are emitted.
///
/// A statement that cannot be rendered (no projection, no source table,
/// an update without assignments, an insert without rows) fails with a
/// statement-assembly error before anything is written.
pub fn serialize(stmt: &Statement, params: &mut impl Params) -> Result<String> {
    validate(stmt)?;

    let mut ret = String::new();

    let mut f = Formatter {
        dst: &mut ret,
        params,
    };

    stmt.to_sql(&mut f);

    ret.push(';');
    Ok(ret)
}

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

fn validate(stmt: &Statement) -> Result<()> {
    match stmt {
        Statement::Select(select) => {
            if select.columns.is_empty() {
                return Err(Error::statement(
                    "select statement must have at least one projected column",
                ));
            }
            if select.from.is_empty() {
                return Err(Error::statement("select statement must name a source table"));
            }
        }
        Statement::Insert(insert) => {
            if insert.into.is_empty() {
                return Err(Error::statement("insert statement must name a target table"));
            }
            if insert.rows.is_empty() {
                return Err(Error::statement(
                    "insert statement must have at least one row of values",
                ));
            }
        }
        Statement::Update(update) => {
            if update.table.is_empty() {
                return Err(Error::statement("update statement must name a target table"));
            }
            if update.assignments.is_empty() {
                return Err(Error::statement(
                    "update statement must have at least one assignment",
                ));
            }
        }
        Statement::Delete(delete) => {
            if delete.from.is_empty() {
                return Err(Error::statement("delete statement must name a source table"));
            }
        }
    }

    Ok(())
}
