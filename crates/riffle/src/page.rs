use crate::OffsetPagination;

use std::ops::Deref;

/// A page of rows returned by [`Db::list`](crate::Db::list), together with
/// its paging metadata.
#[derive(Debug)]
pub struct Page<T> {
    /// Rows in this page. Empty when the result set is empty or the
    /// requested page is out of range.
    pub items: Vec<T>,

    /// Pagination state after counting: `count_records` and `count_pages`
    /// are filled in.
    pub pagination: OffsetPagination,
}

// Allow using pages like a regular slice for ergonomics.
impl<T> Deref for Page<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}
