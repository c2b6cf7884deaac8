//! Log truncation utilities.
//!
//! Panel responses are full HTML pages, often tens of kilobytes. Debug logs
//! keep only a prefix so request tracing stays readable.

/// Maximum number of bytes of a response body to include in debug logs.
const TRUNCATE_LIMIT: usize = 512;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a response body for logging.
///
/// Returns the original string if it fits within the limit, otherwise the
/// first `TRUNCATE_LIMIT` bytes with a suffix carrying the total length.
pub fn truncate_for_log(body: &str) -> String {
    if body.len() <= TRUNCATE_LIMIT {
        body.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &body[..floor_char_boundary(body, TRUNCATE_LIMIT)],
            body.len()
        )
    }
}
