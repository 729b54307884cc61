use super::{BinaryOp, ExprAnd, ExprBinaryOp, ExprOr, Value};

/// A predicate expression tree, used for `WHERE` clauses.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Logical conjunction of operands
    And(ExprAnd),

    /// A binary comparison
    BinaryOp(ExprBinaryOp),

    /// A raw column reference
    Column(String),

    /// Logical disjunction of operands
    Or(ExprOr),

    /// A bound scalar value
    Value(Value),
}

impl Expr {
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(name.into())
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        ExprBinaryOp::new(column, BinaryOp::Eq, value).into()
    }

    pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Self {
        ExprBinaryOp::new(column, BinaryOp::Ne, value).into()
    }

    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        ExprBinaryOp::new(column, BinaryOp::Gt, value).into()
    }

    pub fn ge(column: impl Into<String>, value: impl Into<Value>) -> Self {
        ExprBinaryOp::new(column, BinaryOp::Ge, value).into()
    }

    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        ExprBinaryOp::new(column, BinaryOp::Lt, value).into()
    }

    pub fn le(column: impl Into<String>, value: impl Into<Value>) -> Self {
        ExprBinaryOp::new(column, BinaryOp::Le, value).into()
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}
