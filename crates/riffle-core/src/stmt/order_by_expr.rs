use super::Direction;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    /// The ordered column, rendered verbatim
    pub column: String,

    /// Ascending or descending; `None` leaves the database default
    pub direction: Option<Direction>,
}

impl OrderByExpr {
    pub fn new(column: impl Into<String>, direction: Direction) -> Self {
        Self {
            column: column.into(),
            direction: Some(direction),
        }
    }
}

impl From<&str> for OrderByExpr {
    fn from(column: &str) -> Self {
        Self {
            column: column.to_string(),
            direction: None,
        }
    }
}

impl From<(&str, Direction)> for OrderByExpr {
    fn from((column, direction): (&str, Direction)) -> Self {
        Self::new(column, direction)
    }
}
