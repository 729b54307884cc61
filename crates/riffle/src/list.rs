use crate::{Db, FromRow, ListOption, OffsetPagination, Page, Result};

use riffle_core::{err, stmt, Error};

/// Page size used when a list call supplies no paging option.
const DEFAULT_PER_PAGE: i64 = 20;

impl Db {
    /// Runs a `SELECT` that returns a list of rows, driving pagination.
    ///
    /// The supplied options are partitioned by category. Filters are applied
    /// first and a count query derived from the filtered statement runs as
    /// the first round-trip. When the result set is empty, or the requested
    /// page lies beyond the last one, the data round-trip is skipped and an
    /// empty page comes back carrying the normalized paging metadata.
    /// Otherwise sorting and paging are applied and the data query runs as
    /// the second, final round-trip.
    ///
    /// Supplying more than one paging option is a configuration error; no
    /// query is executed in that case.
    pub async fn list<T: FromRow>(
        &self,
        query: stmt::Select,
        options: Vec<ListOption>,
    ) -> Result<Page<T>> {
        let (filtering, mut paging, sorting) = ListOption::categorize(options);

        if paging.len() > 1 {
            return Err(Error::configuration(
                "only one pagination option is allowed",
            ));
        }
        let mut pagination = paging
            .pop()
            .and_then(ListOption::into_page)
            .unwrap_or_else(|| OffsetPagination::new(DEFAULT_PER_PAGE));

        let mut query = query;
        for option in &filtering {
            query = option.apply(query);
        }

        let mut params = Vec::new();
        let count_sql = riffle_sql::serialize(&query.to_count().into(), &mut params)
            .map_err(|err| err.context(err!("assemble count query")))?;
        let rows = self
            .driver
            .query(&count_sql, &params)
            .await
            .map_err(|err| err.context(err!("count records")))?;
        let total = match rows.into_iter().next() {
            Some(row) => row
                .at(0)
                .and_then(|value| value.to_i64())
                .map_err(|err| err.context(err!("count records")))?,
            None => return Err(err!("count records: count query returned no rows")),
        };

        pagination.set_count_records(total);
        if pagination.count_records == 0 || pagination.page > pagination.count_pages {
            // Skip running the data query
            return Ok(Page {
                items: Vec::new(),
                pagination,
            });
        }

        for option in &sorting {
            query = option.apply(query);
        }
        query = ListOption::paginate(&pagination).apply(query);

        let mut params = Vec::new();
        let sql = riffle_sql::serialize(&query.into(), &mut params)
            .map_err(|err| err.context(err!("assemble query")))?;
        let rows = self.driver.query(&sql, &params).await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            items.push(T::from_row(row)?);
        }

        Ok(Page { items, pagination })
    }
}
