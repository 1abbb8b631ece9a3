//! Pagination `Link` header parsing
//!
//! GitHub reports where the remaining pages of a listing live through the
//! `Link` response header:
//!
//! `<https://api.github.com/repos/o/r/contributors?per_page=1&anon=1&page=2>; rel="next",
//!  <https://api.github.com/repos/o/r/contributors?per_page=1&anon=1&page=468>; rel="last"`
//!
//! With a page size of one, the page number of the `rel="last"` entry equals
//! the total item count, so a single header read replaces walking the whole
//! listing.

/// Extract the total contributor count from a `Link` header value.
///
/// The second comma-separated entry is the `rel="last"` link; the value of
/// its `page=` parameter is the count. Returns 0 when the header does not
/// have that shape, which callers treat as "unknown" rather than an error.
pub fn contributors_from_link_header(link: &str) -> u32 {
    let Some(last_entry) = link.split(',').nth(1) else {
        return 0;
    };
    let Some(url) = last_entry.split(';').next() else {
        return 0;
    };
    let Some(start) = url.find("&page=") else {
        return 0;
    };
    let tail = &url[start + "&page=".len()..];
    let Some(end) = tail.find('>') else {
        return 0;
    };
    tail[..end].parse().unwrap_or(0)
}
