mod delete;
pub use delete::Delete;

mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_or;
pub use expr_or::ExprOr;

mod insert;
pub use insert::Insert;

mod join;
pub use join::{Join, JoinKind};

mod op_binary;
pub use op_binary::BinaryOp;

mod order_by;
pub use order_by::OrderBy;

mod order_by_expr;
pub use order_by_expr::OrderByExpr;

mod select;
pub use select::Select;

mod statement;
pub use statement::Statement;

mod update;
pub use update::{Assignment, Update};

mod value;
pub use value::Value;
