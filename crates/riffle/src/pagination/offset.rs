use super::{rel_entry, X_PAGINATION};

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Paging state for the offset/limit pagination method.
///
/// The public fields may be set straight from a request (the type
/// deserializes from `page` / `per_page` query parameters); every accessor
/// re-applies the normalization rules, so out-of-range input heals itself:
///
/// - `page <= 0` reads as 1
/// - `per_page <= 0` reads as the default page size
/// - `count_records < 0` reads as 0
/// - `count_pages` is always `ceil(count_records / per_page)`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsetPagination {
    pub page: i64,
    pub per_page: i64,
    pub count_pages: i64,
    pub count_records: i64,

    #[serde(skip)]
    default_per_page: i64,
}

impl OffsetPagination {
    /// Creates a new `OffsetPagination` with a default page size.
    pub fn new(default_per_page: i64) -> Self {
        let mut pagination = Self {
            default_per_page,
            ..Self::default()
        };
        pagination.normalize();
        pagination
    }

    /// Sets the default page size and returns the value in effect.
    pub fn set_default_per_page(&mut self, default_per_page: i64) -> i64 {
        self.default_per_page = default_per_page;
        self.normalize();
        self.default_per_page
    }

    /// Returns the page size.
    pub fn limit(&self) -> i64 {
        self.normalized().per_page
    }

    /// Returns the number of rows skipped before the current page.
    pub fn offset(&self) -> i64 {
        let normalized = self.normalized();
        (normalized.page - 1) * normalized.per_page
    }

    /// Returns the current page index (1-based).
    pub fn current_page(&self) -> i64 {
        self.normalized().page
    }

    /// Returns the page size.
    pub fn page_size(&self) -> i64 {
        self.normalized().per_page
    }

    /// Records the total number of matching rows, recomputing `count_pages`.
    pub fn set_count_records(&mut self, total: i64) {
        self.count_records = total;
        self.normalize();
    }

    fn normalize(&mut self) {
        if self.default_per_page <= 0 {
            self.default_per_page = 20;
        }

        if self.page <= 0 {
            self.page = 1;
        }

        if self.per_page <= 0 {
            self.per_page = self.default_per_page;
        }

        if self.count_records <= 0 {
            self.count_records = 0;
        }

        self.count_pages = (self.count_records + self.per_page - 1) / self.per_page;
    }

    fn normalized(&self) -> Self {
        let mut pagination = self.clone();
        pagination.normalize();
        pagination
    }

    /// Composes a `Link` header value for the HTTP response.
    /// See: <https://www.w3.org/wiki/LinkHeader>
    ///
    /// e.g. `Link: </users?page=1>; rel="first", </users?page=2>; rel="next"`
    pub fn link_header(&self, url: &Url) -> String {
        let normalized = self.normalized();
        let mut links = Vec::new();

        links.push(rel_entry(url, "first", &[("page", 1.to_string())]));

        if normalized.page > 1 {
            links.push(rel_entry(
                url,
                "prev",
                &[("page", (normalized.page - 1).to_string())],
            ));
        }

        // Deliberately `page + 1 < count_pages`, not `<=`: the next link
        // already drops out on the second-to-last page. Existing clients
        // depend on this boundary.
        if normalized.page + 1 < normalized.count_pages {
            links.push(rel_entry(
                url,
                "next",
                &[("page", (normalized.page + 1).to_string())],
            ));
        }

        links.push(rel_entry(
            url,
            "last",
            &[("page", normalized.count_pages.to_string())],
        ));

        links.join(", ")
    }

    /// Composes the compact header value `{page},{per_page},{count_pages},{count_records}`.
    ///
    /// e.g. `X-Pagination: 1,20,10,200`
    pub fn x_pagination_header(&self) -> String {
        let normalized = self.normalized();
        format!(
            "{},{},{},{}",
            normalized.page, normalized.per_page, normalized.count_pages, normalized.count_records
        )
    }

    /// Returns the paging headers to write to an HTTP response, computed
    /// against the inbound request URL.
    pub fn response_headers(&self, url: &Url) -> [(&'static str, String); 2] {
        [
            ("Link", self.link_header(url)),
            (X_PAGINATION, self.x_pagination_header()),
        ]
    }
}

impl fmt::Display for OffsetPagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OffsetPagination#{}", self.x_pagination_header())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn limit_falls_back_to_default_page_size() {
        let mut pagination = OffsetPagination::new(20);
        assert_eq!(pagination.limit(), 20);

        pagination.per_page = -5;
        assert_eq!(pagination.limit(), 20);

        pagination.per_page = 50;
        assert_eq!(pagination.limit(), 50);
    }

    #[test]
    fn zero_default_falls_back_to_twenty() {
        let pagination = OffsetPagination::new(0);
        assert_eq!(pagination.limit(), 20);
    }

    #[test]
    fn offset_is_pages_skipped_times_page_size() {
        let mut pagination = OffsetPagination::new(20);
        assert_eq!(pagination.offset(), 0);

        pagination.page = 3;
        assert_eq!(pagination.offset(), 40);
        assert_eq!(
            pagination.offset(),
            (pagination.current_page() - 1) * pagination.page_size()
        );
    }

    #[test]
    fn count_pages_is_ceiling_division() {
        let mut pagination = OffsetPagination::new(20);

        pagination.set_count_records(45);
        assert_eq!(pagination.count_pages, 3);

        pagination.set_count_records(40);
        assert_eq!(pagination.count_pages, 2);

        pagination.set_count_records(0);
        assert_eq!(pagination.count_pages, 0);

        pagination.set_count_records(-3);
        assert_eq!(pagination.count_records, 0);
        assert_eq!(pagination.count_pages, 0);
    }

    #[test]
    fn accessors_are_idempotent() {
        let mut pagination = OffsetPagination::new(0);
        pagination.page = -2;
        pagination.per_page = -1;
        pagination.set_count_records(7);

        let first = (
            pagination.current_page(),
            pagination.page_size(),
            pagination.limit(),
            pagination.offset(),
        );
        let second = (
            pagination.current_page(),
            pagination.page_size(),
            pagination.limit(),
            pagination.offset(),
        );
        assert_eq!(first, second);
        assert_eq!(first, (1, 20, 20, 0));
    }

    #[test]
    fn link_header_for_a_middle_page() {
        let mut pagination = OffsetPagination::new(10);
        pagination.page = 2;
        pagination.set_count_records(50);

        let url = Url::parse("https://api.example.com/users?page=2&status=active").unwrap();
        assert_eq!(
            pagination.link_header(&url),
            "</users?page=1&status=active>; rel=\"first\", \
             </users?page=1&status=active>; rel=\"prev\", \
             </users?page=3&status=active>; rel=\"next\", \
             </users?page=5&status=active>; rel=\"last\""
        );
    }

    #[test]
    fn next_link_drops_out_near_the_last_page() {
        let mut pagination = OffsetPagination::new(10);
        pagination.page = 5;
        pagination.set_count_records(50);

        let url = Url::parse("https://api.example.com/users?page=5").unwrap();
        let header = pagination.link_header(&url);
        assert!(!header.contains("rel=\"next\""));

        // The boundary is strict: page 4 of 5 carries no next link either.
        pagination.page = 4;
        assert!(!pagination.link_header(&url).contains("rel=\"next\""));

        pagination.page = 3;
        assert!(pagination.link_header(&url).contains("rel=\"next\""));
    }

    #[test]
    fn x_pagination_header_format() {
        let mut pagination = OffsetPagination::new(20);
        pagination.page = 1;
        pagination.set_count_records(200);

        assert_eq!(pagination.x_pagination_header(), "1,20,10,200");
        assert_eq!(pagination.to_string(), "OffsetPagination#1,20,10,200");
    }

    #[test]
    fn deserializes_from_query_parameters() {
        let pagination: OffsetPagination =
            serde_json::from_str(r#"{"page": 3, "per_page": 50}"#).unwrap();
        assert_eq!(pagination.current_page(), 3);
        assert_eq!(pagination.page_size(), 50);
    }
}
