//! Runtime type descriptors standing in for reflection.
//!
//! A [`Descriptor`] tree tells the parser what shape of native value a
//! piece of JSON decodes into and where each decoded piece lands. The tree
//! is built once per schema, is immutable afterwards, and is `Send + Sync`,
//! so one schema can serve parses on any number of threads.
//!
//! Targets are type-erased as `&mut dyn Any`. The bridges back to concrete
//! types (field accessors, array element storage, object allocation) are
//! generated here at construction time from typed arguments, so a mismatch
//! between a descriptor and the storage it is applied to surfaces at parse
//! time as [`ParseError::BadSpec`], never as memory unsafety.

use alloc::{boxed::Box, string::String, vec::Vec};
use core::{any::Any, fmt};

use crate::error::ParseError;

/// Projects an object record onto one of its fields.
type Accessor = Box<dyn for<'a> Fn(&'a mut dyn Any) -> Option<&'a mut dyn Any> + Send + Sync>;

/// Produces a fresh, default-initialized record for object array elements.
type Allocator = fn() -> Box<dyn Any>;

/// Describes the shape of one native value.
///
/// Scalar targets are fixed by the engine: `Int` decodes into `i64`,
/// `Float` into `f64`, `String` into [`String`], `Bool` into `bool`.
/// Composite shapes carry the descriptors of what they contain.
pub enum Descriptor {
    /// A JSON integer decoded into `i64`.
    Int,
    /// A JSON decimal number decoded into `f64`.
    Float,
    /// A JSON string decoded into [`String`].
    String,
    /// A `true`/`false` literal decoded into `bool`.
    Bool,
    /// A homogeneous array decoded into a `Vec` of the element type.
    Array(ArrayDescriptor),
    /// An object decoded field-by-field into a caller record.
    Object(ObjectDescriptor),
    /// A value of unknown shape: structurally validated and discarded.
    Unknown,
}

impl Descriptor {
    /// Descriptor for a JSON integer.
    #[must_use]
    pub fn int() -> Self {
        Descriptor::Int
    }

    /// Descriptor for a JSON decimal number.
    #[must_use]
    pub fn float() -> Self {
        Descriptor::Float
    }

    /// Descriptor for a JSON string.
    #[must_use]
    pub fn string() -> Self {
        Descriptor::String
    }

    /// Descriptor for a `true`/`false` literal.
    #[must_use]
    pub fn boolean() -> Self {
        Descriptor::Bool
    }

    /// Descriptor for a value that is validated and discarded.
    #[must_use]
    pub fn unknown() -> Self {
        Descriptor::Unknown
    }

    /// Descriptor for an array whose elements decode into `T`.
    ///
    /// `T` must be the target type of `element`: `i64` for [`Int`], `f64`
    /// for [`Float`], [`String`] for [`String`](Descriptor::String), `bool`
    /// for [`Bool`], the record type of an object element, or `Vec<U>` for
    /// a nested array. The pairing is checked when decoded elements are
    /// written back, failing with [`ParseError::BadSpec`] on a mismatch.
    ///
    /// [`Int`]: Descriptor::Int
    /// [`Float`]: Descriptor::Float
    /// [`Bool`]: Descriptor::Bool
    #[must_use]
    pub fn array_of<T: Any>(element: Descriptor) -> Self {
        Descriptor::Array(ArrayDescriptor {
            element: Box::new(element),
            store: Some(ElementStore {
                new_slot: vec_slot::<T>,
                clear: vec_clear::<T>,
                push: vec_push::<T>,
            }),
        })
    }

    /// Descriptor for an object decoded into the record type `R`.
    ///
    /// Shorthand for [`ObjectDescriptor::new`] followed by
    /// [`ObjectDescriptor::with_allocator`], so records described this way
    /// can also appear as array elements.
    #[must_use]
    pub fn object<R: Any + Default>(properties: Vec<PropertyDescriptor>) -> Self {
        Descriptor::Object(ObjectDescriptor::new(properties).with_allocator::<R>())
    }

    /// Fresh default-initialized storage for one decoded value of this
    /// shape, or `None` for a shape that decodes nothing
    /// ([`Unknown`](Descriptor::Unknown)).
    pub(crate) fn alloc_slot(&self) -> Result<Option<Box<dyn Any>>, ParseError> {
        match self {
            Descriptor::Int => Ok(Some(Box::new(0_i64))),
            Descriptor::Float => Ok(Some(Box::new(0_f64))),
            Descriptor::String => Ok(Some(Box::new(String::new()))),
            Descriptor::Bool => Ok(Some(Box::new(false))),
            Descriptor::Array(array) => array.new_slot().map(Some),
            Descriptor::Object(object) => object.allocate().map(Some),
            Descriptor::Unknown => Ok(None),
        }
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Int => f.write_str("Int"),
            Descriptor::Float => f.write_str("Float"),
            Descriptor::String => f.write_str("String"),
            Descriptor::Bool => f.write_str("Bool"),
            Descriptor::Array(array) => f.debug_tuple("Array").field(array.element()).finish(),
            Descriptor::Object(object) => object.fmt(f),
            Descriptor::Unknown => f.write_str("Unknown"),
        }
    }
}

/// Array shape: the element descriptor plus the storage bindings generated
/// for the concrete element type.
pub struct ArrayDescriptor {
    element: Box<Descriptor>,
    store: Option<ElementStore>,
}

/// Storage vtable generated by [`Descriptor::array_of`] for the element
/// type `T`: fresh `Vec<T>` slots, clearing a target, and moving a decoded
/// element into it.
struct ElementStore {
    new_slot: fn() -> Box<dyn Any>,
    clear: fn(&mut dyn Any) -> Result<(), ParseError>,
    push: fn(&mut dyn Any, Box<dyn Any>) -> Result<(), ParseError>,
}

impl ArrayDescriptor {
    /// The descriptor of each element.
    #[must_use]
    pub fn element(&self) -> &Descriptor {
        &self.element
    }

    /// Placeholder used by skip-parsing: element shapes are unknown and
    /// nothing is materialized.
    pub(crate) fn skip() -> Self {
        ArrayDescriptor {
            element: Box::new(Descriptor::Unknown),
            store: None,
        }
    }

    /// Fresh storage for this array when it is itself an element of an
    /// outer array.
    pub(crate) fn new_slot(&self) -> Result<Box<dyn Any>, ParseError> {
        self.store().map(|store| (store.new_slot)())
    }

    /// Moves accumulated elements into `target` in arrival order, replacing
    /// any previous contents.
    pub(crate) fn store_into<I>(&self, target: &mut dyn Any, elements: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = Box<dyn Any>>,
    {
        let store = self.store()?;
        (store.clear)(target)?;
        for element in elements {
            (store.push)(target, element)?;
        }
        Ok(())
    }

    fn store(&self) -> Result<&ElementStore, ParseError> {
        self.store.as_ref().ok_or(ParseError::BadSpec(
            "array descriptor has no element storage binding",
        ))
    }
}

/// Object shape: an ordered property list plus an optional allocator used
/// when records are created by the parser as array elements.
pub struct ObjectDescriptor {
    properties: Vec<PropertyDescriptor>,
    allocator: Option<Allocator>,
}

impl ObjectDescriptor {
    /// Describes an object with the given properties and no allocator.
    ///
    /// Sufficient when records only ever appear as caller-owned targets; an
    /// object used as an array element also needs
    /// [`with_allocator`](Self::with_allocator).
    #[must_use]
    pub fn new(properties: Vec<PropertyDescriptor>) -> Self {
        ObjectDescriptor {
            properties,
            allocator: None,
        }
    }

    /// Attaches an allocator producing default-initialized `R` records.
    #[must_use]
    pub fn with_allocator<R: Any + Default>(mut self) -> Self {
        self.allocator = Some(default_record::<R>);
        self
    }

    /// The properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    /// Placeholder used by skip-parsing: no properties, so every value in
    /// the object flows through the lenient skip path.
    pub(crate) fn skip() -> Self {
        ObjectDescriptor {
            properties: Vec::new(),
            allocator: None,
        }
    }

    /// Exact-match lookup of a property by JSON name. Linear scan; property
    /// lists are small and names unique.
    pub(crate) fn resolve(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|property| property.name == name)
    }

    pub(crate) fn allocate(&self) -> Result<Box<dyn Any>, ParseError> {
        let allocator = self.allocator.ok_or(ParseError::BadSpec(
            "object used as an array element needs an allocator",
        ))?;
        Ok(allocator())
    }
}

impl fmt::Debug for ObjectDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.properties.iter().map(|p| (p.name(), p.descriptor())))
            .finish()
    }
}

/// Binds one JSON property name to a field of a record.
pub struct PropertyDescriptor {
    name: String,
    descriptor: Descriptor,
    access: Accessor,
}

impl PropertyDescriptor {
    /// Binds the JSON property `name` to the field of `R` reached through
    /// `project`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonmold::{Descriptor, PropertyDescriptor};
    ///
    /// #[derive(Default)]
    /// struct Point {
    ///     x: f64,
    /// }
    ///
    /// let property = PropertyDescriptor::new("x", Descriptor::float(), |p: &mut Point| &mut p.x);
    /// assert_eq!(property.name(), "x");
    /// ```
    #[must_use]
    pub fn new<R: Any, F: Any>(
        name: impl Into<String>,
        descriptor: Descriptor,
        project: fn(&mut R) -> &mut F,
    ) -> Self {
        PropertyDescriptor {
            name: name.into(),
            descriptor,
            access: Box::new(move |record: &mut dyn Any| project_field(record, project)),
        }
    }

    /// The JSON name this property matches, case-sensitively.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Projects `record` onto this property's field.
    pub(crate) fn field<'a>(&self, record: &'a mut dyn Any) -> Result<&'a mut dyn Any, ParseError> {
        (self.access)(record).ok_or(ParseError::BadSpec(
            "record target does not match the property's record type",
        ))
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

fn vec_slot<T: Any>() -> Box<dyn Any> {
    Box::new(Vec::<T>::new())
}

fn vec_clear<T: Any>(target: &mut dyn Any) -> Result<(), ParseError> {
    let items = target.downcast_mut::<Vec<T>>().ok_or(ParseError::BadSpec(
        "array target is not a Vec of the declared element type",
    ))?;
    items.clear();
    Ok(())
}

fn vec_push<T: Any>(target: &mut dyn Any, element: Box<dyn Any>) -> Result<(), ParseError> {
    let items = target.downcast_mut::<Vec<T>>().ok_or(ParseError::BadSpec(
        "array target is not a Vec of the declared element type",
    ))?;
    let element = element.downcast::<T>().map_err(|_| {
        ParseError::BadSpec("decoded element does not match the declared element type")
    })?;
    items.push(*element);
    Ok(())
}

fn default_record<R: Any + Default>() -> Box<dyn Any> {
    Box::new(R::default())
}

fn project_field<'a, R: Any, F: Any>(
    record: &'a mut dyn Any,
    project: fn(&mut R) -> &mut F,
) -> Option<&'a mut dyn Any> {
    record
        .downcast_mut::<R>()
        .map(|record| project(record) as &mut dyn Any)
}
