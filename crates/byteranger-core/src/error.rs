use std::fmt;
use std::num::ParseIntError;

/// Errors produced while parsing range specifications.
///
/// There are deliberately few kinds. Every structural problem with a range
/// token collapses into the single [`RangeError::InvalidRange`] sentinel,
/// matching the RFC-style behavior of rejecting the request as a whole
/// rather than reporting which bound was at fault. Numeric fields that fail
/// to parse keep the offending text so callers can log the exact bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// A numeric field was not a valid non-negative integer.
    MalformedNumber {
        /// The text that failed to parse.
        text: String,
        /// The underlying integer parse failure.
        source: ParseIntError,
    },
    /// A range token had the wrong shape, fell outside `[0, max_len]`, or
    /// had its bounds reversed.
    InvalidRange,
    /// The header collection had no usable `Content-Length` value.
    InvalidContentLength {
        /// Every raw `Content-Length` occurrence, as received.
        values: Vec<String>,
    },
}

impl RangeError {
    /// Wrap an integer parse failure together with the text that caused it.
    pub fn malformed(text: impl Into<String>, source: ParseIntError) -> Self {
        RangeError::MalformedNumber {
            text: text.into(),
            source,
        }
    }

    /// Build the content-length error from the raw header values.
    pub fn invalid_content_length(values: Vec<String>) -> Self {
        RangeError::InvalidContentLength { values }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::MalformedNumber { text, source } => {
                write!(f, "malformed number {:?}: {}", text, source)
            }
            RangeError::InvalidRange => write!(f, "invalid range"),
            RangeError::InvalidContentLength { values } => {
                write!(f, "invalid content length: {:?}", values)
            }
        }
    }
}

impl std::error::Error for RangeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RangeError::MalformedNumber { source, .. } => Some(source),
            _ => None,
        }
    }
}
