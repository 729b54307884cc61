use crate::{err, stmt::Value, Result};

use std::sync::Arc;

/// A single result row. Column names are shared across the result set.
#[derive(Debug, Clone)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl Row {
    pub fn new(columns: Arc<[String]>, values: Vec<Value>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `index`.
    pub fn at(&self, index: usize) -> Result<Value> {
        match self.values.get(index) {
            Some(value) => Ok(value.clone()),
            None => Err(err!("row has no column at index {index}")),
        }
    }

    /// Returns the value of the named column.
    pub fn get(&self, column: &str) -> Result<Value> {
        match self.columns.iter().position(|name| name == column) {
            Some(index) => Ok(self.values[index].clone()),
            None => Err(err!("row has no column named `{column}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Row {
        Row::new(
            vec!["id".to_string(), "name".to_string()].into(),
            vec![Value::I64(7), Value::String("ada".to_string())],
        )
    }

    #[test]
    fn get_by_name_and_index() {
        let row = row();
        assert_eq!(row.get("id").unwrap().to_i64().unwrap(), 7);
        assert_eq!(row.at(1).unwrap().to_string().unwrap(), "ada");
    }

    #[test]
    fn missing_column_names_the_column() {
        let err = row().get("age").unwrap_err();
        assert!(err.to_string().contains("`age`"));
    }
}
