use super::{Expr, Statement};

/// A composable `DELETE` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// The target table.
    pub from: String,

    /// Query filter
    pub filter: Option<Expr>,
}

impl Delete {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            filter: None,
        }
    }

    /// Adds a predicate, `AND`-combined with any existing filter.
    pub fn and_where(mut self, expr: impl Into<Expr>) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr),
            None => expr.into(),
        });
        self
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
