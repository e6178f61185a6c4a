//! Range list tokenizer and validator.
//!
//! Turns one or more `Range`-header-shaped strings into validated
//! [`ByteRange`] values and hands the collected set to the merger.
//! Tokenization is allocation-light: entries are split in place and the
//! single `-` separator is located with `memchr`.

use memchr::memchr;

use crate::error::RangeError;
use crate::range::{merge, ByteRange};

/// Parse one or more RFC 7233 style byte-range lists.
///
/// Each entry in `ranges` models one header occurrence and may hold several
/// comma-separated tokens. A leading `prefix` (typically `"bytes="`) is
/// stripped from each entry when present; an entry without it is tokenized
/// as-is. `max_len` is the size of the content being ranged over, and every
/// resulting range must fit inside `[0, max_len]`.
///
/// Three token forms are accepted:
///
/// - `X-Y` covers `[X, Y]` and requires `X <= Y <= max_len`
/// - `X-` covers `[X, max_len]`
/// - `-Y` covers the last `Y` bytes, `[max_len - Y, max_len]`
///
/// On success the collected ranges are merged into a sorted set of disjoint
/// intervals. The first offending token aborts the whole parse: a numeric
/// field that is not an integer surfaces as
/// [`RangeError::MalformedNumber`], every other violation as
/// [`RangeError::InvalidRange`]. An empty `ranges` slice parses to an empty
/// vector.
///
/// # Example
///
/// ```rust
/// use byteranger_core::{parse, ByteRange};
///
/// let ranges = parse(&["bytes=0-99,200-"], "bytes=", 350)?;
/// assert_eq!(ranges, vec![ByteRange::new(0, 99), ByteRange::new(200, 350)]);
/// # Ok::<(), byteranger_core::RangeError>(())
/// ```
pub fn parse<S: AsRef<str>>(
    ranges: &[S],
    prefix: &str,
    max_len: u64,
) -> Result<Vec<ByteRange>, RangeError> {
    let mut result = Vec::with_capacity(ranges.len());
    for entry in ranges {
        let entry = entry.as_ref();
        let list = entry.strip_prefix(prefix).unwrap_or(entry);
        for token in list.split(',') {
            result.push(parse_token(token, max_len)?);
        }
    }
    Ok(merge(result))
}

/// Parse a single `start-stop` token against the content length.
fn parse_token(token: &str, max_len: u64) -> Result<ByteRange, RangeError> {
    let (start, stop) = split_token(token)?;

    if start.is_empty() {
        // Suffix form: the last `stop` bytes of the content.
        let y = parse_offset(stop)?;
        if y > max_len {
            return Err(RangeError::InvalidRange);
        }
        Ok(ByteRange::new(max_len - y, max_len))
    } else if stop.is_empty() {
        // Open-ended form: from `start` through the end of the content.
        let x = parse_offset(start)?;
        if x > max_len {
            return Err(RangeError::InvalidRange);
        }
        Ok(ByteRange::new(x, max_len))
    } else {
        let x = parse_offset(start)?;
        let y = parse_offset(stop)?;
        if x > max_len || y > max_len || x > y {
            return Err(RangeError::InvalidRange);
        }
        Ok(ByteRange::new(x, y))
    }
}

/// Split a token on its single `-` separator.
///
/// Exactly one dash must be present; zero or more than one is a shape error.
#[inline]
fn split_token(token: &str) -> Result<(&str, &str), RangeError> {
    let bytes = token.as_bytes();
    let dash = memchr(b'-', bytes).ok_or(RangeError::InvalidRange)?;
    if memchr(b'-', &bytes[dash + 1..]).is_some() {
        return Err(RangeError::InvalidRange);
    }
    Ok((&token[..dash], &token[dash + 1..]))
}

/// Parse a numeric field, keeping the offending text on failure.
#[inline]
fn parse_offset(text: &str) -> Result<u64, RangeError> {
    text.parse::<u64>()
        .map_err(|source| RangeError::malformed(text, source))
}
