//! Schema-driven JSON deserialization without an intermediate value tree.
//!
//! Callers describe the shape of a native data structure with a
//! [`Descriptor`] tree (which field each JSON property lands in, what the
//! elements of each array decode to) and [`parse`] fills the structure
//! directly from a byte buffer of JSON text. There is no reflection and no
//! generic value tree in between: every decoded scalar is written straight
//! into caller-owned storage through accessors generated when the schema is
//! built.
//!
//! Parsing is lenient by default: object properties absent from the schema
//! are structurally validated and discarded, so a schema stays
//! forward-compatible with inputs that grow new fields. [`validate`] exposes
//! the same skip machinery as a top-level entry point for untyped input.
//!
//! ```rust
//! use jsonmold::{Descriptor, PropertyDescriptor, parse};
//!
//! #[derive(Default)]
//! struct Reading {
//!     id: i64,
//!     samples: Vec<f64>,
//! }
//!
//! let schema = Descriptor::object::<Reading>(vec![
//!     PropertyDescriptor::new("id", Descriptor::int(), |r: &mut Reading| &mut r.id),
//!     PropertyDescriptor::new(
//!         "samples",
//!         Descriptor::array_of::<f64>(Descriptor::float()),
//!         |r: &mut Reading| &mut r.samples,
//!     ),
//! ]);
//!
//! let mut reading = Reading::default();
//! let consumed = parse(br#"{"id":7,"samples":[0.5,1.25]}"#, &mut reading, &schema).unwrap();
//! assert_eq!(reading.id, 7);
//! assert_eq!(reading.samples, [0.5, 1.25]);
//! assert_eq!(consumed, 29);
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod descriptor;
mod error;
mod options;
mod parser;

#[cfg(test)]
mod tests;

pub use descriptor::{ArrayDescriptor, Descriptor, ObjectDescriptor, PropertyDescriptor};
pub use error::ParseError;
pub use options::ParserOptions;
pub use parser::{parse, parse_with_options, validate, validate_with_options};
