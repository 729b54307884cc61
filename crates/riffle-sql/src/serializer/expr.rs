use super::{Delimited, Formatter, Params, ToSql};

use riffle_core::stmt;

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                fmt!(f, Delimited(&expr.operands, " AND "));
            }
            BinaryOp(expr) => {
                let lhs = &*expr.lhs;
                let rhs = &*expr.rhs;
                fmt!(f, lhs " " expr.op " " rhs);
            }
            Column(name) => {
                fmt!(f, name.as_str());
            }
            // Disjunctions parenthesize themselves so they survive being an
            // operand of an outer conjunction.
            Or(expr) => {
                fmt!(f, "(" Delimited(&expr.operands, " OR ") ")");
            }
            Value(value) => {
                value.to_sql(f);
            }
        }
    }
}

impl ToSql for stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(self.as_sql());
    }
}
