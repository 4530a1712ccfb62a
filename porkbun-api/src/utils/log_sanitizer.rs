//! Log sanitization utilities
//!
//! Response bodies can carry private keys (`/ssl/retrieve`) and other data that
//! should not land in logs verbatim. Bodies are only logged on failure, and only
//! through [`truncate_for_log`].

/// Maximum number of bytes of a body kept in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for safe logging.
///
/// Short strings are returned unchanged. Longer ones are cut at the last char
/// boundary within [`TRUNCATE_LIMIT`] bytes and suffixed with the original length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|end| *end <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}
