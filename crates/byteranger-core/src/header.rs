//! Adapter from an HTTP header map to the range parser.
//!
//! Bridges [`http::HeaderMap`] to [`parse`](crate::parse): reads the
//! `Content-Length` to learn the size being ranged over, then feeds every
//! `Range` value through the parser with the `bytes=` prefix.

use http::header::{CONTENT_LENGTH, RANGE};
use http::HeaderMap;

use crate::error::RangeError;
use crate::parser::parse;
use crate::range::ByteRange;

/// Parse the byte ranges requested by an HTTP header map.
///
/// The map must carry a `Content-Length` that parses as a non-negative
/// integer; otherwise [`RangeError::InvalidContentLength`] is returned with
/// the raw header values for diagnostics. All `Range` values are parsed
/// with the fixed `bytes=` prefix. Callers serving other range units should
/// call [`parse`](crate::parse) directly with their own prefix.
///
/// A missing `Range` header is not an error: it parses to an empty set.
///
/// # Example
///
/// ```rust
/// use byteranger_core::{parse_from_headers, ByteRange};
/// use http::HeaderMap;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(http::header::RANGE, "bytes=100-200".parse().unwrap());
/// headers.insert(http::header::CONTENT_LENGTH, "300".parse().unwrap());
///
/// let ranges = parse_from_headers(&headers)?;
/// assert_eq!(ranges, vec![ByteRange::new(100, 200)]);
/// # Ok::<(), byteranger_core::RangeError>(())
/// ```
pub fn parse_from_headers(headers: &HeaderMap) -> Result<Vec<ByteRange>, RangeError> {
    let length = headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok())
        .ok_or_else(|| RangeError::invalid_content_length(raw_values(headers)))?;

    let mut ranges = Vec::new();
    for value in headers.get_all(RANGE) {
        // Range values are plain ASCII; anything undecodable cannot name a
        // valid byte range.
        let value = value.to_str().map_err(|_| RangeError::InvalidRange)?;
        ranges.push(value);
    }
    parse(&ranges, "bytes=", length)
}

/// Collect every raw `Content-Length` occurrence for error reporting.
fn raw_values(headers: &HeaderMap) -> Vec<String> {
    headers
        .get_all(CONTENT_LENGTH)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .collect()
}
