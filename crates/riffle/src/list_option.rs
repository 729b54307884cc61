use crate::OffsetPagination;

use riffle_core::stmt::{self, Direction, Expr, Value};

/// A unit of list-query intent: how to filter, sort, or page a select.
///
/// Options are classified by variant, never by value, so the list
/// orchestrator can apply filters before counting while deferring sorting
/// and paging until the count is known.
#[derive(Debug, Clone)]
pub enum ListOption {
    /// Binds a column to a set of values. No values is a no-op, one value is
    /// an equality, several are a disjunction of equalities. The negated
    /// form inverts each comparison and conjoins instead.
    Filter {
        column: String,
        values: Vec<Value>,
        negated: bool,
    },

    /// Appends an `ORDER BY` term to the data query.
    Sort {
        column: String,
        direction: Direction,
    },

    /// Applies `LIMIT`/`OFFSET` derived from a pagination snapshot.
    Page(OffsetPagination),
}

/// Coarse classification of a [`ListOption`], controlling application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Filtering,
    Paging,
    Sorting,
}

impl ListOption {
    /// A filter binding `column` to the given values.
    pub fn with<I>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Filter {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
            negated: false,
        }
    }

    /// Like [`ListOption::with`], but negates the comparison.
    pub fn without<I>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Filter {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
            negated: true,
        }
    }

    /// Sorts the result by `column` in the given direction.
    pub fn sort_by(column: impl Into<String>, direction: Direction) -> Self {
        Self::Sort {
            column: column.into(),
            direction,
        }
    }

    /// Limits the result to the page described by `pagination`.
    ///
    /// The pagination state is snapshotted here: mutating the caller's value
    /// after the option is built does not change what the option applies.
    pub fn paginate(pagination: &OffsetPagination) -> Self {
        Self::Page(pagination.clone())
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Filter { .. } => Category::Filtering,
            Self::Sort { .. } => Category::Sorting,
            Self::Page(_) => Category::Paging,
        }
    }

    /// Applies this option to `query`.
    pub fn apply(&self, query: stmt::Select) -> stmt::Select {
        match self {
            Self::Filter {
                column,
                values,
                negated: false,
            } => match values.as_slice() {
                [] => query,
                [value] => query.and_where(Expr::eq(column.clone(), value.clone())),
                values => query.and_where(Expr::or_from_vec(
                    values
                        .iter()
                        .map(|value| Expr::eq(column.clone(), value.clone()))
                        .collect(),
                )),
            },
            Self::Filter {
                column,
                values,
                negated: true,
            } => match values.as_slice() {
                [] => query,
                [value] => query.and_where(Expr::ne(column.clone(), value.clone())),
                values => query.and_where(Expr::and_from_vec(
                    values
                        .iter()
                        .map(|value| Expr::ne(column.clone(), value.clone()))
                        .collect(),
                )),
            },
            Self::Sort { column, direction } => {
                query.order_by(stmt::OrderByExpr::new(column.clone(), *direction))
            }
            Self::Page(pagination) => query.limit(pagination.limit()).offset(pagination.offset()),
        }
    }

    /// Partitions options by category, preserving relative order within each
    /// partition. Returns `(filtering, paging, sorting)`.
    pub fn categorize(
        options: impl IntoIterator<Item = ListOption>,
    ) -> (Vec<ListOption>, Vec<ListOption>, Vec<ListOption>) {
        let (mut filtering, mut paging, mut sorting) = (Vec::new(), Vec::new(), Vec::new());
        for option in options {
            match option.category() {
                Category::Filtering => filtering.push(option),
                Category::Paging => paging.push(option),
                Category::Sorting => sorting.push(option),
            }
        }
        (filtering, paging, sorting)
    }

    pub(crate) fn into_page(self) -> Option<OffsetPagination> {
        match self {
            Self::Page(pagination) => Some(pagination),
            _ => None,
        }
    }
}
