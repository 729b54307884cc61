#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinKind,

    /// The joined table and its `ON` constraint, rendered verbatim,
    /// e.g. `orders ON orders.user_id = users.id`.
    pub object: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
}

impl JoinKind {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Inner => "JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
        }
    }
}
