//! Error kinds shared by every scanner and parser in the crate.

use alloc::string::String;

use thiserror::Error;

/// Failure modes of a schema-driven parse.
///
/// The first failure anywhere in a recursive parse aborts it; nothing is
/// retried. Each kind maps to a stable numeric code (see
/// [`ParseError::code`]) for embedders that surface results across a
/// process or FFI boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The descriptor cannot decode into the provided target. Returned when
    /// an [`Unknown`](crate::Descriptor::Unknown) descriptor is paired with
    /// concrete target storage; untyped input goes through
    /// [`validate`](crate::validate) instead.
    #[error("descriptor cannot decode into the provided target")]
    NotSupported,
    /// The cursor was at or past the end of input where at least one byte
    /// was required.
    #[error("unexpected end of input")]
    OutOfBounds,
    /// The byte stream does not match the grammar expected at the current
    /// state.
    #[error("malformed input: {0}")]
    BadFormat(&'static str),
    /// The schema itself is malformed: a descriptor does not match the type
    /// of the storage it was asked to fill.
    #[error("malformed schema: {0}")]
    BadSpec(&'static str),
    /// An object property has no descriptor entry. Only returned when
    /// [`deny_unknown_properties`](crate::ParserOptions::deny_unknown_properties)
    /// is set; lenient parsing skips the value instead.
    #[error("no descriptor for property {0:?}")]
    PropertyNotFound(String),
    /// Value nesting exceeded
    /// [`max_depth`](crate::ParserOptions::max_depth).
    #[error("value nesting exceeds the configured depth limit")]
    DepthLimitExceeded,
}

impl ParseError {
    /// Stable numeric code for this error kind. `0` is reserved for success
    /// and never constructed.
    #[must_use]
    pub fn code(&self) -> u8 {
        match self {
            ParseError::NotSupported => 1,
            ParseError::OutOfBounds => 2,
            ParseError::BadFormat(_) => 3,
            ParseError::BadSpec(_) => 4,
            ParseError::PropertyNotFound(_) => 5,
            ParseError::DepthLimitExceeded => 6,
        }
    }
}
