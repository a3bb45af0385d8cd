//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use uri_value::prelude::*;
//!
//! let uri = UriValue::parse("https://example.com/a?x=1").unwrap();
//! assert_eq!(uri.query("x"), Some("1"));
//! ```

pub use crate::{
    // Core types
    QueryPairs, UriValue,
    // Codec
    decode, encode, encode_query_pairs,
    // Errors
    ParseError, ParseErrorKind, SegmentError,
};
