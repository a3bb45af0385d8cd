//! Error types for URI decomposition and segment access.

use std::fmt;

/// Error returned when a URI string cannot be decomposed.
///
/// Only the structural splits can fail: a malformed scheme or an
/// unterminated IPv6 host literal. Malformed query tokens are dropped
/// rather than rejected, so they never surface here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific decomposition error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Scheme syntax is invalid (must start with a letter, then letters,
    /// digits, `+`, `-`, or `.`)
    InvalidScheme {
        /// The scheme that was found
        found: String,
    },
    /// Host syntax is invalid
    InvalidHost {
        /// The authority host portion that was found
        found: String,
        /// Reason for invalidity
        reason: &'static str,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::InvalidScheme { found } => {
                write!(f, "invalid scheme '{found}'")
            }
            ParseErrorKind::InvalidHost { found, reason } => {
                write!(f, "invalid host '{found}': {reason}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Error returned by index-based segment reads.
///
/// Only reads fail loudly; out-of-range segment writes are silent no-ops
/// by contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentError {
    /// Requested segment index is past the end of the segment sequence
    OutOfRange {
        /// The requested index
        index: usize,
        /// Number of segments available
        len: usize,
    },
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "segment index {index} out of range for {len} segments")
            }
        }
    }
}

impl std::error::Error for SegmentError {}
