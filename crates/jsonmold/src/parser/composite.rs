//! Array and object parsers.
//!
//! Both are finite-state drivers over the byte cursor that recurse into
//! the dispatcher for every nested value. The array parser owns the
//! accumulate-then-flatten strategy: the element count is unknown until
//! `]`, so decoded elements live in an [`Accumulator`] and move into the
//! caller's storage only once the whole array has parsed. The object
//! parser resolves each property name against the schema and either
//! decodes into the accessor-projected field or skips the value.

use alloc::string::String;
use core::any::Any;

use crate::{
    descriptor::{ArrayDescriptor, ObjectDescriptor, PropertyDescriptor},
    error::ParseError,
    options::ParserOptions,
    parser::{Input, accumulator::Accumulator, parse_value, scalars, skip},
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum ArrayState {
    Init,
    Value,
    Next,
    End,
}

pub(crate) fn parse_array(
    input: &mut Input<'_>,
    target: Option<&mut dyn Any>,
    descriptor: &ArrayDescriptor,
    depth: usize,
    options: &ParserOptions,
) -> Result<(), ParseError> {
    input.require_remaining()?;
    let mut elements = Accumulator::new();
    let mut state = ArrayState::Init;
    while state != ArrayState::End {
        input.skip_whitespace();
        let Some(byte) = input.peek() else {
            return Err(ParseError::BadFormat("unterminated array"));
        };
        match state {
            ArrayState::Init => {
                if byte != b'[' {
                    return Err(ParseError::BadFormat("expected [ to open an array"));
                }
                input.bump();
                state = ArrayState::Value;
            }
            ArrayState::Value => {
                if byte == b']' && elements.is_empty() {
                    input.bump();
                    state = ArrayState::End;
                } else {
                    let mut slot = if target.is_some() {
                        descriptor.element().alloc_slot()?
                    } else {
                        None
                    };
                    parse_value(
                        input,
                        slot.as_deref_mut(),
                        descriptor.element(),
                        depth + 1,
                        options,
                    )?;
                    elements.push(slot);
                    state = ArrayState::Next;
                }
            }
            ArrayState::Next => match byte {
                b',' => {
                    input.bump();
                    state = ArrayState::Value;
                }
                b']' => {
                    input.bump();
                    state = ArrayState::End;
                }
                _ => return Err(ParseError::BadFormat("expected , or ] in an array")),
            },
            ArrayState::End => {}
        }
    }

    if let Some(target) = target {
        log::trace!("array completed with {} elements", elements.len());
        descriptor.store_into(target, elements.into_slots())?;
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ObjectState {
    Init,
    ObjectNext,
    PropName,
    PropDelim,
    PropValue,
    PropNext,
    End,
}

pub(crate) fn parse_object(
    input: &mut Input<'_>,
    mut target: Option<&mut dyn Any>,
    descriptor: &ObjectDescriptor,
    depth: usize,
    options: &ParserOptions,
) -> Result<(), ParseError> {
    input.require_remaining()?;
    let mut state = ObjectState::Init;
    let mut pending: Option<&PropertyDescriptor> = None;
    while state != ObjectState::End {
        input.skip_whitespace();
        let Some(byte) = input.peek() else {
            return Err(ParseError::BadFormat("unterminated object"));
        };
        match state {
            ObjectState::Init => {
                if byte != b'{' {
                    return Err(ParseError::BadFormat("expected { to open an object"));
                }
                input.bump();
                state = ObjectState::ObjectNext;
            }
            ObjectState::ObjectNext => match byte {
                b'}' => {
                    input.bump();
                    state = ObjectState::End;
                }
                b'"' => state = ObjectState::PropName,
                _ => return Err(ParseError::BadFormat("expected a property name or }")),
            },
            ObjectState::PropName => {
                pending = resolve_name(input, target.is_some(), descriptor, options)?;
                state = ObjectState::PropDelim;
            }
            ObjectState::PropDelim => {
                if byte != b':' {
                    return Err(ParseError::BadFormat("expected : after a property name"));
                }
                input.bump();
                state = ObjectState::PropValue;
            }
            ObjectState::PropValue => {
                match (&mut target, pending.take()) {
                    (Some(record), Some(property)) => {
                        let field = property.field(&mut **record)?;
                        parse_value(input, Some(field), property.descriptor(), depth + 1, options)?;
                    }
                    _ => skip::skip_value(input, depth + 1, options)?,
                }
                state = ObjectState::PropNext;
            }
            ObjectState::PropNext => match byte {
                b',' => {
                    input.bump();
                    state = ObjectState::ObjectNext;
                }
                b'}' => {
                    input.bump();
                    state = ObjectState::End;
                }
                _ => return Err(ParseError::BadFormat("expected , or } in an object")),
            },
            ObjectState::End => {}
        }
    }
    Ok(())
}

/// Decodes a property name and resolves it against the descriptor's
/// property list. With no target the name is validated and ignored; an
/// unmatched name is `None` in lenient mode.
fn resolve_name<'d>(
    input: &mut Input<'_>,
    targeted: bool,
    descriptor: &'d ObjectDescriptor,
    options: &ParserOptions,
) -> Result<Option<&'d PropertyDescriptor>, ParseError> {
    if !targeted {
        scalars::scan_string(input, None)?;
        return Ok(None);
    }
    let mut name = String::new();
    scalars::scan_string(input, Some(&mut name as &mut dyn Any))?;
    match descriptor.resolve(&name) {
        Some(property) => Ok(Some(property)),
        None if options.deny_unknown_properties => Err(ParseError::PropertyNotFound(name)),
        None => {
            log::trace!("no descriptor for property {name:?}, skipping its value");
            Ok(None)
        }
    }
}
