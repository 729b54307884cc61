use super::{Statement, Value};

/// A composable `INSERT` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// The target table.
    pub into: String,

    /// The inserted columns.
    pub columns: Vec<String>,

    /// One entry per inserted row; each value binds positionally.
    pub rows: Vec<Vec<Value>>,
}

impl Insert {
    pub fn new(into: impl Into<String>) -> Self {
        Self {
            into: into.into(),
            columns: vec![],
            rows: vec![],
        }
    }

    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Appends a row of values.
    pub fn values<I>(mut self, row: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
