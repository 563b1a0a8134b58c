//! The parse driver: cursor plumbing, the descriptor dispatcher, and the
//! public entry points.
//!
//! Parsing is plain recursive descent over one resident byte buffer. The
//! dispatcher [`parse_value`] is the single recursion point: the composite
//! parsers call back into it for every nested element or property value,
//! and it enforces the depth bound that keeps hostile nesting from
//! exhausting the call stack. A `None` target anywhere in the descent means
//! "validate and discard": the skip path reuses these same parsers instead
//! of maintaining a parallel implementation.

mod accumulator;
mod composite;
mod scalars;
mod skip;


use core::any::Any;

use crate::{descriptor::Descriptor, error::ParseError, options::ParserOptions};

/// Parses one JSON value from the start of `input` into `target`.
///
/// The target type must match the descriptor: `i64` for
/// [`Descriptor::Int`], `f64` for [`Descriptor::Float`], `String` for
/// [`Descriptor::String`], `bool` for [`Descriptor::Bool`], a `Vec` of the
/// element type for arrays, and the record type bound by the property
/// accessors for objects.
///
/// Prefix-parse semantics: parsing succeeds once one complete value has
/// been consumed, and the offset of the first unconsumed byte is returned;
/// trailing bytes are not inspected. [`parse_with_options`] changes that
/// and the other behavior switches.
///
/// # Errors
///
/// See [`ParseError`] for the failure modes. After an error the contents of
/// `target` are unspecified, but everything decoded along the way has been
/// released or is owned by `target`; nothing leaks.
pub fn parse<T: Any>(
    input: &[u8],
    target: &mut T,
    descriptor: &Descriptor,
) -> Result<usize, ParseError> {
    parse_with_options(input, target, descriptor, &ParserOptions::default())
}

/// [`parse`] with explicit [`ParserOptions`].
///
/// # Errors
///
/// As for [`parse`], plus [`ParseError::PropertyNotFound`] under
/// [`deny_unknown_properties`](ParserOptions::deny_unknown_properties) and
/// [`ParseError::BadFormat`] for trailing bytes under
/// [`require_full_consumption`](ParserOptions::require_full_consumption).
pub fn parse_with_options<T: Any>(
    input: &[u8],
    target: &mut T,
    descriptor: &Descriptor,
    options: &ParserOptions,
) -> Result<usize, ParseError> {
    log::trace!("parse: {} input bytes", input.len());
    let mut input = Input::new(input);
    parse_value(&mut input, Some(target), descriptor, 0, options)?;
    finish(&mut input, options)?;
    Ok(input.pos())
}

/// Structurally validates one JSON value of unknown shape, decoding
/// nothing.
///
/// This is the top-level counterpart of the lenient skip path used for
/// object properties absent from a schema: the value is parsed for
/// validity and discarded. Returns the offset of the first unconsumed
/// byte.
///
/// # Errors
///
/// The grammar errors of [`parse`]; never [`ParseError::BadSpec`] or
/// [`ParseError::PropertyNotFound`], since no schema is involved.
pub fn validate(input: &[u8]) -> Result<usize, ParseError> {
    validate_with_options(input, &ParserOptions::default())
}

/// [`validate`] with explicit [`ParserOptions`].
///
/// # Errors
///
/// As for [`validate`].
pub fn validate_with_options(input: &[u8], options: &ParserOptions) -> Result<usize, ParseError> {
    log::trace!("validate: {} input bytes", input.len());
    let mut input = Input::new(input);
    skip::skip_value(&mut input, 0, options)?;
    finish(&mut input, options)?;
    Ok(input.pos())
}

fn finish(input: &mut Input<'_>, options: &ParserOptions) -> Result<(), ParseError> {
    if options.require_full_consumption {
        input.skip_whitespace();
        if !input.at_end() {
            return Err(ParseError::BadFormat("trailing bytes after the value"));
        }
    }
    Ok(())
}

/// Routes a descriptor/target pair to the matching scanner or composite
/// parser. The single recursion point of the whole engine.
pub(crate) fn parse_value(
    input: &mut Input<'_>,
    target: Option<&mut dyn Any>,
    descriptor: &Descriptor,
    depth: usize,
    options: &ParserOptions,
) -> Result<(), ParseError> {
    if depth >= options.max_depth {
        return Err(ParseError::DepthLimitExceeded);
    }
    match descriptor {
        Descriptor::Int => scalars::scan_int(input, target),
        Descriptor::Float => scalars::scan_float(input, target),
        Descriptor::String => scalars::scan_string(input, target),
        Descriptor::Bool => scalars::scan_bool(input, target),
        Descriptor::Array(array) => composite::parse_array(input, target, array, depth, options),
        Descriptor::Object(object) => composite::parse_object(input, target, object, depth, options),
        Descriptor::Unknown => match target {
            Some(_) => Err(ParseError::NotSupported),
            None => skip::skip_value(input, depth, options),
        },
    }
}

/// Byte cursor over the input buffer.
///
/// On success every parser leaves the position at the first byte it did not
/// consume; on failure the position is unspecified.
pub(crate) struct Input<'src> {
    bytes: &'src [u8],
    pos: usize,
}

impl<'src> Input<'src> {
    pub(crate) fn new(bytes: &'src [u8]) -> Self {
        Input { bytes, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Advances past the current byte.
    pub(crate) fn bump(&mut self) {
        self.pos += 1;
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Guard for parsers that need at least one more byte.
    pub(crate) fn require_remaining(&self) -> Result<(), ParseError> {
        if self.at_end() {
            Err(ParseError::OutOfBounds)
        } else {
            Ok(())
        }
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.bump();
        }
    }

    /// The bytes consumed since `start`.
    pub(crate) fn slice_from(&self, start: usize) -> &'src [u8] {
        &self.bytes[start..self.pos]
    }
}

/// The whitespace bytes every scanner skips and every token may end on.
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Decode terminators: the bytes that end a scalar token without belonging
/// to it.
pub(crate) fn is_terminator(byte: u8) -> bool {
    matches!(byte, b',' | b'}' | b']') || is_whitespace(byte)
}
