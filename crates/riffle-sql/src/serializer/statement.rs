use super::{Comma, Formatter, Params, ToSql};

use riffle_core::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            stmt::Statement::Delete(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Select(stmt) => stmt.to_sql(f),
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let columns = Comma(self.columns.iter().map(String::as_str));

        fmt!(f, "SELECT " columns " FROM " self.from.as_str());

        for join in &self.joins {
            fmt!(f, " " join);
        }

        let filter = self.filter.as_ref().map(|filter| (" WHERE ", filter));
        let group_by = if self.group_by.is_empty() {
            None
        } else {
            Some((
                " GROUP BY ",
                Comma(self.group_by.iter().map(String::as_str)),
            ))
        };
        let order_by = self.order_by.as_ref().map(|order_by| (" ", order_by));
        let limit = self.limit.map(|limit| (" LIMIT ", limit));
        let offset = self.offset.map(|offset| (" OFFSET ", offset));

        fmt!(f, filter group_by order_by limit offset);
    }
}

impl ToSql for &stmt::Join {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, self.kind.as_sql() " " self.object.as_str());
    }
}

impl ToSql for &stmt::OrderBy {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let order_by = Comma(&self.exprs);

        fmt!(f, "ORDER BY " order_by);
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if let Some(direction) = self.direction {
            fmt!(f, self.column.as_str() " " direction.as_sql());
        } else {
            fmt!(f, self.column.as_str());
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "INSERT INTO " self.into.as_str());

        if !self.columns.is_empty() {
            fmt!(f, " (" Comma(self.columns.iter().map(String::as_str)) ")");
        }

        let rows = Comma(self.rows.iter().map(|row| RowValues(row.as_slice())));
        fmt!(f, " VALUES " rows);
    }
}

/// One parenthesized VALUES record
struct RowValues<'a>(&'a [stmt::Value]);

impl ToSql for RowValues<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "(" Comma(self.0.iter()) ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let assignments = Comma(self.assignments.iter());
        fmt!(f, "UPDATE " self.table.as_str() " SET " assignments);

        let filter = self.filter.as_ref().map(|filter| (" WHERE ", filter));
        fmt!(f, filter);
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(&self.value);
        fmt!(f, self.column.as_str() " = " placeholder);
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "DELETE FROM " self.from.as_str());

        let filter = self.filter.as_ref().map(|filter| (" WHERE ", filter));
        fmt!(f, filter);
    }
}
