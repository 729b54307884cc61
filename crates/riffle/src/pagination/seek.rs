use super::{rel_entry, X_PAGINATION};

use url::Url;

/// Paging state for the seek (keyset/cursor) pagination method.
///
/// Unlike [`OffsetPagination`](super::OffsetPagination) there is no total
/// count: position is carried by an opaque cursor token that this layer
/// never decodes or validates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeekPagination {
    limit: i64,
    cursor: String,

    default_limit: i64,
}

impl SeekPagination {
    /// Creates a new `SeekPagination` with a default limit. A non-positive
    /// default is coerced to 10.
    pub fn new(default_limit: i64) -> Self {
        Self {
            default_limit: if default_limit <= 0 { 10 } else { default_limit },
            ..Self::default()
        }
    }

    /// Updates the limit and returns the value in effect.
    pub fn set_limit(&mut self, limit: i64) -> i64 {
        self.limit = limit;
        self.limit()
    }

    /// Returns a valid (> 0) limit, falling back to the default.
    pub fn limit(&self) -> i64 {
        if self.limit <= 0 {
            self.default_limit
        } else {
            self.limit
        }
    }

    /// Updates the cursor and returns the new value.
    pub fn set_cursor(&mut self, cursor: impl Into<String>) -> &str {
        self.cursor = cursor.into();
        &self.cursor
    }

    /// Returns the cursor token, unchanged.
    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    /// Composes a `Link` header value for the HTTP response.
    /// See: <https://www.w3.org/wiki/LinkHeader>
    pub fn link_header(&self, url: &Url) -> String {
        rel_entry(
            url,
            "next",
            &[
                ("limit", self.limit().to_string()),
                ("cursor", self.cursor().to_string()),
            ],
        )
    }

    /// Composes the compact header value `{cursor},{limit}`.
    ///
    /// e.g. `X-Pagination: dXNlcjoxMCwz,20`
    pub fn x_pagination_header(&self) -> String {
        format!("{},{}", self.cursor(), self.limit())
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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn limit_falls_back_to_default() {
        let mut pagination = SeekPagination::new(25);
        assert_eq!(pagination.limit(), 25);
        assert_eq!(pagination.set_limit(0), 25);
        assert_eq!(pagination.set_limit(40), 40);
        assert_eq!(pagination.limit(), 40);
    }

    #[test]
    fn non_positive_default_is_coerced() {
        let pagination = SeekPagination::new(-1);
        assert_eq!(pagination.limit(), 10);
    }

    #[test]
    fn cursor_is_an_opaque_passthrough() {
        let mut pagination = SeekPagination::new(10);
        assert_eq!(pagination.cursor(), "");

        pagination.set_cursor("abc");
        assert_eq!(pagination.cursor(), "abc");
    }

    #[test]
    fn link_header_rewrites_limit_and_cursor() {
        let mut pagination = SeekPagination::new(10);
        pagination.set_limit(20);
        pagination.set_cursor("dXNlcjoxMCwz");

        let url = Url::parse("https://api.example.com/users?cursor=old&limit=10").unwrap();
        assert_eq!(
            pagination.link_header(&url),
            "</users?cursor=dXNlcjoxMCwz&limit=20>; rel=\"next\""
        );
    }

    #[test]
    fn x_pagination_header_format() {
        let mut pagination = SeekPagination::new(10);
        pagination.set_limit(20);
        pagination.set_cursor("dXNlcjoxMCwz");
        assert_eq!(pagination.x_pagination_header(), "dXNlcjoxMCwz,20");
    }
}
