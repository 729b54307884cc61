use super::{BinaryOp, Expr, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

impl ExprBinaryOp {
    /// A comparison binding `column` against a scalar `value`.
    pub fn new(column: impl Into<String>, op: BinaryOp, value: impl Into<Value>) -> Self {
        Self {
            lhs: Box::new(Expr::column(column)),
            op,
            rhs: Box::new(Expr::value(value)),
        }
    }
}

impl From<ExprBinaryOp> for Expr {
    fn from(value: ExprBinaryOp) -> Self {
        Self::BinaryOp(value)
    }
}
