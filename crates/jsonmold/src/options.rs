/// Configuration for a schema-driven parse.
///
/// The defaults give lenient, prefix-parse behavior: unknown object
/// properties are skipped, trailing bytes after a complete value are
/// ignored, and nesting is bounded at a depth comfortably above real-world
/// documents.
///
/// # Examples
///
/// ```rust
/// use jsonmold::{Descriptor, ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     require_full_consumption: true,
///     ..Default::default()
/// };
/// let mut value = 0_i64;
/// assert!(parse_with_options(b"12 34", &mut value, &Descriptor::int(), &options).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Maximum nesting depth of values.
    ///
    /// The top-level value sits at depth zero and every array element or
    /// object property value adds one; a parse fails with
    /// [`ParseError::DepthLimitExceeded`](crate::ParseError::DepthLimitExceeded)
    /// once it reaches a value at this depth, rather than exhausting the
    /// call stack on hostile input.
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,

    /// Whether an object property absent from the schema is an error.
    ///
    /// When `false`, the value of an unmatched property is structurally
    /// validated and discarded, whatever its shape, so schemas tolerate
    /// inputs that grow new fields. When `true`, an unmatched name on an
    /// object being decoded fails with
    /// [`ParseError::PropertyNotFound`](crate::ParseError::PropertyNotFound).
    /// Values reached through the skip path are always parsed leniently.
    ///
    /// # Default
    ///
    /// `false`
    pub deny_unknown_properties: bool,

    /// Whether the whole input must be consumed.
    ///
    /// When `false`, a parse succeeds once one complete value has been
    /// consumed and trailing bytes are not inspected. When `true`, anything
    /// other than whitespace after the value is a format error.
    ///
    /// # Default
    ///
    /// `false`
    pub require_full_consumption: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: 128,
            deny_unknown_properties: false,
            require_full_consumption: false,
        }
    }
}
