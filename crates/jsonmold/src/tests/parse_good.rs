use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};

use crate::{Descriptor, ParserOptions, PropertyDescriptor, parse, parse_with_options};

#[test]
fn top_level_integer() {
    let mut value = 0_i64;
    assert_eq!(parse(b"   -12399\n", &mut value, &Descriptor::int()), Ok(9));
    assert_eq!(value, -12399);
}

#[test]
fn top_level_float() {
    let mut value = 0.0_f64;
    assert_eq!(parse(b"0.54", &mut value, &Descriptor::float()), Ok(4));
    assert!((value - 0.54).abs() < f64::EPSILON);
}

#[test]
fn top_level_string_decodes_escapes() {
    let mut value = String::new();
    assert_eq!(parse(br#""a\tb""#, &mut value, &Descriptor::string()), Ok(6));
    assert_eq!(value, "a\tb");

    assert_eq!(parse(br#""a\qb""#, &mut value, &Descriptor::string()), Ok(6));
    assert_eq!(value, "aqb", "unrecognized escapes decode to the byte itself");
}

#[test]
fn top_level_boolean() {
    let mut value = true;
    assert_eq!(parse(b"false", &mut value, &Descriptor::boolean()), Ok(5));
    assert!(!value);
}

#[test]
fn empty_array_yields_no_elements() {
    let schema = Descriptor::array_of::<f64>(Descriptor::float());
    let mut values = vec![9.0_f64];
    assert_eq!(parse(b"[]", &mut values, &schema), Ok(2));
    assert!(values.is_empty(), "previous contents are replaced");
}

#[test]
fn nested_float_arrays() {
    let schema = Descriptor::array_of::<Vec<f64>>(Descriptor::array_of::<f64>(Descriptor::float()));
    let mut values: Vec<Vec<f64>> = Vec::new();
    let input = b"[[0.54,1.23,-6.5],[2,3,4.0]]";
    assert_eq!(parse(input, &mut values, &schema), Ok(input.len()));
    assert_eq!(values, [vec![0.54, 1.23, -6.5], vec![2.0, 3.0, 4.0]]);
}

#[derive(Debug, Default, PartialEq)]
struct Inner {
    value: i64,
}

#[derive(Debug, Default, PartialEq)]
struct Outer {
    value: Inner,
}

fn outer_schema() -> Descriptor {
    Descriptor::object::<Outer>(vec![PropertyDescriptor::new(
        "value",
        Descriptor::object::<Inner>(vec![PropertyDescriptor::new(
            "value",
            Descriptor::int(),
            |inner: &mut Inner| &mut inner.value,
        )]),
        |outer: &mut Outer| &mut outer.value,
    )])
}

#[test]
fn nested_objects() {
    let mut outer = Outer::default();
    assert_eq!(
        parse(br#"{"value":{"value":12}}"#, &mut outer, &outer_schema()),
        Ok(22)
    );
    assert_eq!(outer.value.value, 12);
}

#[derive(Debug, Default, PartialEq)]
struct Tagged {
    id: i64,
    name: String,
}

fn tagged_schema() -> Descriptor {
    Descriptor::object::<Tagged>(vec![
        PropertyDescriptor::new("id", Descriptor::int(), |t: &mut Tagged| &mut t.id),
        PropertyDescriptor::new("name", Descriptor::string(), |t: &mut Tagged| &mut t.name),
    ])
}

#[test]
fn unknown_properties_are_skipped() {
    // Unknown values of every shape, before, between and after the known
    // properties; the known ones land regardless of position.
    let input =
        br#"{"extra":[1,{"deep":[true,"x"]}],"id":5,"junk":{"a":[[]]},"name":"ok","tail":-3.5}"#;
    let mut tagged = Tagged::default();
    assert_eq!(parse(input, &mut tagged, &tagged_schema()), Ok(input.len()));
    assert_eq!(
        tagged,
        Tagged {
            id: 5,
            name: "ok".to_string()
        }
    );
}

#[test]
fn property_declaration_order_is_irrelevant() {
    let mut tagged = Tagged::default();
    let input = br#"{"name":"swapped","id":-2}"#;
    assert_eq!(parse(input, &mut tagged, &tagged_schema()), Ok(input.len()));
    assert_eq!(tagged.id, -2);
    assert_eq!(tagged.name, "swapped");
}

#[test]
fn duplicate_property_last_wins() {
    let mut tagged = Tagged::default();
    let input = br#"{"id":1,"id":2}"#;
    assert_eq!(parse(input, &mut tagged, &tagged_schema()), Ok(input.len()));
    assert_eq!(tagged.id, 2);
}

#[test]
fn array_of_strings() {
    let schema = Descriptor::array_of::<String>(Descriptor::string());
    let mut values: Vec<String> = Vec::new();
    let input = br#"["one","two\n","three"]"#;
    assert_eq!(parse(input, &mut values, &schema), Ok(input.len()));
    assert_eq!(values, ["one", "two\n", "three"]);
}

#[derive(Debug, Default, PartialEq)]
struct Point {
    x: i64,
    y: i64,
}

#[test]
fn array_of_objects_uses_the_allocator() {
    let element = Descriptor::object::<Point>(vec![
        PropertyDescriptor::new("x", Descriptor::int(), |p: &mut Point| &mut p.x),
        PropertyDescriptor::new("y", Descriptor::int(), |p: &mut Point| &mut p.y),
    ]);
    let schema = Descriptor::array_of::<Point>(element);
    let mut points: Vec<Point> = Vec::new();
    let input = br#"[{"x":1,"y":2},{"y":4,"x":3}]"#;
    assert_eq!(parse(input, &mut points, &schema), Ok(input.len()));
    assert_eq!(points, [Point { x: 1, y: 2 }, Point { x: 3, y: 4 }]);
}

#[test]
fn object_trailing_comma_is_tolerated() {
    // The property loop returns to the same state that accepts `}` for an
    // empty object, so a trailing comma parses.
    let mut tagged = Tagged::default();
    let input = br#"{"id":9,}"#;
    assert_eq!(parse(input, &mut tagged, &tagged_schema()), Ok(input.len()));
    assert_eq!(tagged.id, 9);
}

#[test]
fn empty_object_leaves_defaults() {
    let mut tagged = Tagged {
        id: 41,
        name: "kept".to_string(),
    };
    assert_eq!(parse(b"{}", &mut tagged, &tagged_schema()), Ok(2));
    assert_eq!(tagged.id, 41);
    assert_eq!(tagged.name, "kept");
}

#[test]
fn prefix_parse_ignores_trailing_bytes() {
    let mut value = false;
    assert_eq!(parse(b"true garbage", &mut value, &Descriptor::boolean()), Ok(4));
    assert!(value);
}

#[test]
fn whitespace_is_tolerated_everywhere() {
    #[derive(Debug, Default, PartialEq)]
    struct Mixed {
        a: Vec<i64>,
        b: bool,
    }
    let schema = Descriptor::object::<Mixed>(vec![
        PropertyDescriptor::new(
            "a",
            Descriptor::array_of::<i64>(Descriptor::int()),
            |m: &mut Mixed| &mut m.a,
        ),
        PropertyDescriptor::new("b", Descriptor::boolean(), |m: &mut Mixed| &mut m.b),
    ]);
    let input = b" { \"a\" : [ 1 , 2 ] , \"b\" : true } ";
    let mut mixed = Mixed::default();
    assert_eq!(parse(input, &mut mixed, &schema), Ok(input.len() - 1));
    assert_eq!(mixed.a, [1, 2]);
    assert!(mixed.b);
}

#[test]
fn full_consumption_allows_trailing_whitespace() {
    let options = ParserOptions {
        require_full_consumption: true,
        ..Default::default()
    };
    let mut value = 0_i64;
    assert_eq!(
        parse_with_options(b"7  \n", &mut value, &Descriptor::int(), &options),
        Ok(4)
    );
    assert_eq!(value, 7);
}

#[test]
fn schemas_are_reusable_and_shareable() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let schema = tagged_schema();
    assert_send_sync(&schema);

    let mut first = Tagged::default();
    let mut second = Tagged::default();
    assert!(parse(br#"{"id":1,"name":"a"}"#, &mut first, &schema).is_ok());
    assert!(parse(br#"{"id":2,"name":"b"}"#, &mut second, &schema).is_ok());
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}
