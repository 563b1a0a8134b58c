//! Finite-state scanners for the four scalar shapes.
//!
//! Each scanner starts at the cursor, skips leading whitespace, and runs a
//! small byte-level state machine over the token. A token ends at the first
//! `,`, `}`, `]`, whitespace byte, or end of input; the terminator is left
//! unconsumed. Passing no target runs the same machine in validate-only
//! mode for the skip path.
//!
//! Character classes use the conjunctive ASCII range tests
//! (`is_ascii_digit`, `is_ascii_alphabetic`); token text is decoded through
//! `bstr`, which treats the byte buffer as conventionally UTF-8.

use alloc::{string::String, vec::Vec};
use core::any::Any;

use bstr::{ByteSlice, ByteVec};

use crate::{
    error::ParseError,
    parser::{Input, is_terminator},
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum IntState {
    Init,
    Body,
    End,
}

/// Scans one integer token and decodes it into an `i64` target.
pub(crate) fn scan_int(
    input: &mut Input<'_>,
    target: Option<&mut dyn Any>,
) -> Result<(), ParseError> {
    input.require_remaining()?;
    input.skip_whitespace();
    let start = input.pos();
    let mut state = IntState::Init;
    while state != IntState::End {
        let Some(byte) = input.peek() else { break };
        match state {
            IntState::Init => {
                if byte == b'-' || byte.is_ascii_digit() {
                    state = IntState::Body;
                    input.bump();
                } else {
                    return Err(ParseError::BadFormat("expected a digit or minus sign"));
                }
            }
            IntState::Body => {
                if byte.is_ascii_digit() {
                    input.bump();
                } else if is_terminator(byte) {
                    state = IntState::End;
                } else {
                    return Err(ParseError::BadFormat("unexpected byte in an integer"));
                }
            }
            IntState::End => {}
        }
    }

    let value: i64 = decode_token(input.slice_from(start), "malformed integer literal")?;
    if let Some(target) = target {
        let slot = target
            .downcast_mut::<i64>()
            .ok_or(ParseError::BadSpec("integer target is not i64"))?;
        *slot = value;
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum FloatState {
    Init,
    Body,
    Fraction,
    End,
}

/// Scans one decimal number token and decodes it into an `f64` target.
///
/// The grammar is an optional minus sign, digits, and at most one decimal
/// point starting the fraction; there is no exponent form.
pub(crate) fn scan_float(
    input: &mut Input<'_>,
    target: Option<&mut dyn Any>,
) -> Result<(), ParseError> {
    input.require_remaining()?;
    input.skip_whitespace();
    let start = input.pos();
    let mut state = FloatState::Init;
    while state != FloatState::End {
        let Some(byte) = input.peek() else { break };
        match state {
            FloatState::Init => {
                if byte == b'-' || byte.is_ascii_digit() {
                    state = FloatState::Body;
                    input.bump();
                } else {
                    return Err(ParseError::BadFormat("expected a digit or minus sign"));
                }
            }
            FloatState::Body => {
                if byte.is_ascii_digit() {
                    input.bump();
                } else if byte == b'.' {
                    state = FloatState::Fraction;
                    input.bump();
                } else if is_terminator(byte) {
                    state = FloatState::End;
                } else {
                    return Err(ParseError::BadFormat("unexpected byte in a number"));
                }
            }
            FloatState::Fraction => {
                if byte.is_ascii_digit() {
                    input.bump();
                } else if is_terminator(byte) {
                    state = FloatState::End;
                } else {
                    return Err(ParseError::BadFormat("unexpected byte in a fraction"));
                }
            }
            FloatState::End => {}
        }
    }

    let value: f64 = decode_token(input.slice_from(start), "malformed number literal")?;
    if let Some(target) = target {
        let slot = target
            .downcast_mut::<f64>()
            .ok_or(ParseError::BadSpec("number target is not f64"))?;
        *slot = value;
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum StringState {
    Init,
    InString,
    Escape,
    End,
}

/// Scans one string token and decodes it into a [`String`] target.
///
/// Escape handling: `\n`, `\t` and `\r` decode to their control bytes; any
/// other escaped byte decodes to itself, so `\"` and `\\` work without
/// their own table entries and unrecognized escapes pass through.
pub(crate) fn scan_string(
    input: &mut Input<'_>,
    target: Option<&mut dyn Any>,
) -> Result<(), ParseError> {
    input.require_remaining()?;
    input.skip_whitespace();
    let mut decoded: Option<Vec<u8>> = target.is_some().then(Vec::new);
    let mut state = StringState::Init;
    while state != StringState::End {
        let Some(byte) = input.peek() else {
            return Err(ParseError::BadFormat("unterminated string"));
        };
        match state {
            StringState::Init => {
                if byte != b'"' {
                    return Err(ParseError::BadFormat("expected an opening quote"));
                }
                state = StringState::InString;
            }
            StringState::InString => match byte {
                b'\\' => state = StringState::Escape,
                b'"' => state = StringState::End,
                _ => {
                    if let Some(buf) = decoded.as_mut() {
                        buf.push(byte);
                    }
                }
            },
            StringState::Escape => {
                let unescaped = match byte {
                    b'n' => b'\n',
                    b't' => b'\t',
                    b'r' => b'\r',
                    other => other,
                };
                if let Some(buf) = decoded.as_mut() {
                    buf.push(unescaped);
                }
                state = StringState::InString;
            }
            StringState::End => {}
        }
        input.bump();
    }

    if let Some(target) = target {
        let text = decoded
            .unwrap_or_default()
            .into_string()
            .map_err(|_| ParseError::BadFormat("string is not valid UTF-8"))?;
        let slot = target
            .downcast_mut::<String>()
            .ok_or(ParseError::BadSpec("string target is not String"))?;
        *slot = text;
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum BoolState {
    Init,
    Body,
    End,
}

/// Scans one alphabetic literal and decodes `true`/`false` into a `bool`
/// target. Any other word, including different capitalizations, is a
/// format error.
pub(crate) fn scan_bool(
    input: &mut Input<'_>,
    target: Option<&mut dyn Any>,
) -> Result<(), ParseError> {
    input.require_remaining()?;
    input.skip_whitespace();
    let start = input.pos();
    let mut state = BoolState::Init;
    while state != BoolState::End {
        let Some(byte) = input.peek() else { break };
        match state {
            BoolState::Init => {
                if byte.is_ascii_alphabetic() {
                    state = BoolState::Body;
                    input.bump();
                } else {
                    return Err(ParseError::BadFormat("expected a literal"));
                }
            }
            BoolState::Body => {
                if byte.is_ascii_alphabetic() {
                    input.bump();
                } else if is_terminator(byte) {
                    state = BoolState::End;
                } else {
                    return Err(ParseError::BadFormat("unexpected byte in a literal"));
                }
            }
            BoolState::End => {}
        }
    }

    let value = match input.slice_from(start) {
        b"true" => true,
        b"false" => false,
        _ => return Err(ParseError::BadFormat("expected true or false")),
    };
    if let Some(target) = target {
        let slot = target
            .downcast_mut::<bool>()
            .ok_or(ParseError::BadSpec("boolean target is not bool"))?;
        *slot = value;
    }
    Ok(())
}

/// Decodes a numeric token through its `FromStr` form. An empty token
/// (nothing but whitespace before the terminator), a lone minus sign, or
/// an out-of-range value all fail here.
fn decode_token<T: core::str::FromStr>(
    token: &[u8],
    reason: &'static str,
) -> Result<T, ParseError> {
    token
        .to_str()
        .ok()
        .and_then(|text| text.parse().ok())
        .ok_or(ParseError::BadFormat(reason))
}
