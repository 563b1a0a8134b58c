//! Structural skip-parsing for values whose shape is not in the schema.
//!
//! Used by the top-level untyped entry points and for object properties a
//! schema does not mention. Rather than a parallel implementation, the
//! skipper re-enters the ordinary scanners and composite parsers with a
//! null target and placeholder descriptors, so skipped values obey exactly
//! the same grammar as decoded ones.

use crate::{
    descriptor::{ArrayDescriptor, ObjectDescriptor},
    error::ParseError,
    options::ParserOptions,
    parser::{Input, composite, scalars},
};

/// Parses and discards one value, dispatching on its first byte.
pub(crate) fn skip_value(
    input: &mut Input<'_>,
    depth: usize,
    options: &ParserOptions,
) -> Result<(), ParseError> {
    if depth >= options.max_depth {
        return Err(ParseError::DepthLimitExceeded);
    }
    input.require_remaining()?;
    input.skip_whitespace();
    let Some(byte) = input.peek() else {
        return Err(ParseError::BadFormat("expected a value"));
    };
    log::trace!("skipping value at offset {}", input.pos());
    match byte {
        b'{' => composite::parse_object(input, None, &ObjectDescriptor::skip(), depth, options),
        b'[' => composite::parse_array(input, None, &ArrayDescriptor::skip(), depth, options),
        b'"' => scalars::scan_string(input, None),
        b'-' | b'.' | b'0'..=b'9' => scalars::scan_float(input, None),
        byte if byte.is_ascii_alphabetic() => scalars::scan_bool(input, None),
        _ => Err(ParseError::BadFormat("unrecognized value")),
    }
}
