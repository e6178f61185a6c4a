//! # Byteranger Core
//!
//! Parser for HTTP `Range` request headers (RFC 7233 byte-range syntax)
//! producing a normalized set of inclusive byte intervals.
//!
//! Servers answering partial-content requests hand the raw header values
//! and the content length to this crate and get back a sorted list of
//! disjoint `[start, stop]` intervals, with overlapping and touching
//! requests already merged together.
//!
//! ## Quick Start
//!
//! ```rust
//! use byteranger_core::{parse, ByteRange};
//!
//! let ranges = parse(&["bytes=0-99", "bytes=50-99,200-300"], "bytes=", 350).unwrap();
//! assert_eq!(ranges, vec![ByteRange::new(0, 99), ByteRange::new(200, 300)]);
//! ```
//!
//! ## Working from headers
//!
//! When the request is already materialized as an [`http::HeaderMap`], the
//! header adapter extracts `Content-Length` and every `Range` occurrence:
//!
//! ```rust
//! use byteranger_core::parse_from_headers;
//! use http::HeaderMap;
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(http::header::RANGE, "bytes=250-,-50".parse().unwrap());
//! headers.insert(http::header::CONTENT_LENGTH, "350".parse().unwrap());
//!
//! let ranges = parse_from_headers(&headers).unwrap();
//! assert_eq!(ranges.len(), 1); // 250- and -50 overlap and merge
//! ```
//!
//! ## Errors
//!
//! Parsing is all-or-nothing: the first bad token fails the whole call with
//! either [`RangeError::MalformedNumber`] (a numeric field that would not
//! parse, offending text attached) or the coarse
//! [`RangeError::InvalidRange`] sentinel (wrong token shape, bounds outside
//! `[0, max_len]`, or reversed bounds). Callers typically answer either
//! with a 416-class response or by ignoring the header entirely.

pub mod error;
pub mod header;
pub mod parser;
pub mod range;

pub use error::RangeError;
pub use header::parse_from_headers;
pub use parser::parse;
pub use range::{merge, ByteRange};
