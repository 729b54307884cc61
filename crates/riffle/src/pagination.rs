//! Two pagination strategies for list queries:
//!
//! 1. Offset/limit pagination: [`OffsetPagination`]
//! 2. Seek/keyset/cursor pagination: [`SeekPagination`]
//!
//! Reference:
//! <https://blog.jooq.org/faster-sql-paging-with-jooq-using-the-seek-method/>

mod offset;
pub use offset::OffsetPagination;

mod seek;
pub use seek::SeekPagination;

use std::collections::BTreeMap;

use url::Url;

/// Name of the compact pagination response header.
pub const X_PAGINATION: &str = "X-Pagination";

/// Builds one `Link` header relation entry from the request URL, with the
/// given query parameters rewritten onto it.
///
/// Query pairs render in sorted key order, so the output is stable no matter
/// how the inbound URL spelled its query string.
fn rel_entry(url: &Url, rel: &str, params: &[(&str, String)]) -> String {
    let mut pairs: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in url.query_pairs() {
        pairs
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    for (key, value) in params {
        pairs.insert((*key).to_string(), vec![value.clone()]);
    }

    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, values) in &pairs {
        for value in values {
            query.append_pair(key, value);
        }
    }

    format!("<{}?{}>; rel=\"{}\"", url.path(), query.finish(), rel)
}
