//! Base64 text normalisation
//!
//! Pasted base64 tends to arrive with surrounding whitespace, one or more copies
//! of a `data:` URI prefix, and missing `=` padding. [`normalize`] repairs all
//! three so the result can go straight to a strict decoder.

/// Data-URI scheme marker prepended to inline PNG payloads
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// UTF-8 byte order mark some editors write at the start of saved text
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Produce a canonical base64 string from raw input text
///
/// 1. Trim surrounding whitespace (and a leading byte order mark)
/// 2. Strip the data-URI prefix while it is present at the start
/// 3. Append `=` until the length is a multiple of 4
///
/// Characters outside the base64 alphabet are left in place; rejecting them is
/// the decoder's job.
///
/// # Example
/// ```
/// use base64_image_recovery::recovery::normalize::normalize;
///
/// assert_eq!(normalize("data:image/png;base64,aGVsbG8"), "aGVsbG8=");
/// ```
pub fn normalize(text: &str) -> String {
    let trimmed = text.trim().trim_start_matches(BYTE_ORDER_MARK).trim();

    let mut body = trimmed;
    while let Some(rest) = body.strip_prefix(DATA_URI_PREFIX) {
        body = rest;
    }

    let mut canonical = body.to_string();
    let remainder = canonical.len() % 4;
    if remainder != 0 {
        canonical.extend(std::iter::repeat('=').take(4 - remainder));
    }

    canonical
}

/// Number of data-URI prefix copies at the start of the (trimmed) text
pub fn count_prefixes(text: &str) -> usize {
    let mut body = text.trim().trim_start_matches(BYTE_ORDER_MARK).trim();
    let mut count = 0;
    while let Some(rest) = body.strip_prefix(DATA_URI_PREFIX) {
        body = rest;
        count += 1;
    }
    count
}
