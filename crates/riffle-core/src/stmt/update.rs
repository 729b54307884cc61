use super::{Expr, Statement, Value};

/// A composable `UPDATE` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,

    /// `SET` clauses, in supplied order.
    pub assignments: Vec<Assignment>,

    /// Query filter
    pub filter: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Value,
}

impl Update {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            assignments: vec![],
            filter: None,
        }
    }

    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.assignments.push(Assignment {
            column: column.into(),
            value: value.into(),
        });
        self
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

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
