use super::{Expr, Join, JoinKind, OrderBy, OrderByExpr, Statement};

/// A composable `SELECT` statement.
///
/// Projections, `GROUP BY` terms, and join objects are raw SQL fragments;
/// the `WHERE` predicate is a structured [`Expr`] tree so options can extend
/// it mechanically.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// The projection part of the query, rendered verbatim.
    pub columns: Vec<String>,

    /// The `FROM` table.
    pub from: String,

    /// `JOIN` clauses, in supplied order.
    pub joins: Vec<Join>,

    /// Query filter
    pub filter: Option<Expr>,

    /// `GROUP BY` terms, rendered verbatim.
    pub group_by: Vec<String>,

    pub order_by: Option<OrderBy>,

    pub limit: Option<i64>,

    pub offset: Option<i64>,
}

impl Select {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            columns: vec![],
            from: from.into(),
            joins: vec![],
            filter: None,
            group_by: vec![],
            order_by: None,
            limit: None,
            offset: None,
        }
    }

    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }

    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn join(mut self, object: impl Into<String>) -> Self {
        self.joins.push(Join {
            kind: JoinKind::Inner,
            object: object.into(),
        });
        self
    }

    pub fn left_join(mut self, object: impl Into<String>) -> Self {
        self.joins.push(Join {
            kind: JoinKind::Left,
            object: object.into(),
        });
        self
    }

    /// Adds a predicate, `AND`-combined with any existing filter.
    pub fn and_where(mut self, expr: impl Into<Expr>) -> Self {
        self.add_filter(expr);
        self
    }

    pub fn add_filter(&mut self, expr: impl Into<Expr>) {
        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr),
            None => expr.into(),
        });
    }

    pub fn group_by(mut self, term: impl Into<String>) -> Self {
        self.group_by.push(term.into());
        self
    }

    /// Appends an `ORDER BY` term.
    pub fn order_by(mut self, expr: impl Into<OrderByExpr>) -> Self {
        let expr = expr.into();
        match &mut self.order_by {
            Some(order_by) => order_by.exprs.push(expr),
            None => self.order_by = Some(expr.into()),
        }
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Rewrites the statement to report its row count: the projection is
    /// replaced with `COUNT(*)`, every other clause is preserved as-is.
    pub fn to_count(&self) -> Select {
        Select {
            columns: vec!["COUNT(*)".to_string()],
            ..self.clone()
        }
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_count_replaces_only_the_projection() {
        let query = Select::new("users")
            .columns(["id", "name"])
            .join("orders ON orders.user_id = users.id")
            .and_where(Expr::eq("active", true))
            .group_by("users.id");

        let count = query.to_count();

        assert_eq!(count.columns, vec!["COUNT(*)".to_string()]);
        assert_eq!(count.from, query.from);
        assert_eq!(count.joins, query.joins);
        assert_eq!(count.filter, query.filter);
        assert_eq!(count.group_by, query.group_by);
    }

    #[test]
    fn and_where_accumulates_conjunction() {
        let query = Select::new("users")
            .column("*")
            .and_where(Expr::eq("a", 1))
            .and_where(Expr::eq("b", 2))
            .and_where(Expr::eq("c", 3));

        let Some(Expr::And(and)) = query.filter else {
            panic!("expected a flattened conjunction");
        };
        assert_eq!(and.operands.len(), 3);
    }
}
