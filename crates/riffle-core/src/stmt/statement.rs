use super::{Delete, Insert, Select, Update};

/// Any statement the serializer can render.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Self::Select(select) => Some(select),
            _ => None,
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Self::Select(_))
    }
}
