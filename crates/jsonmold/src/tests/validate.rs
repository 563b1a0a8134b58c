use alloc::string::String;

use crate::{ParseError, ParserOptions, validate, validate_with_options};

#[test]
fn validate_accepts_scalars() {
    assert_eq!(validate(b"17"), Ok(2));
    assert_eq!(validate(b"  -2.5,"), Ok(6));
    assert_eq!(validate(br#""text""#), Ok(6));
    assert_eq!(validate(b"true"), Ok(4));
    assert_eq!(validate(b"false "), Ok(5));
}

#[test]
fn validate_accepts_nested_composites() {
    let input = br#"{"a":{"b":[1,2.5,"x",{"c":true}]},"d":[[],[false]]}"#;
    assert_eq!(validate(input), Ok(input.len()));
}

#[test]
fn validate_accepts_empty_composites() {
    assert_eq!(validate(b"[]"), Ok(2));
    assert_eq!(validate(b"{}"), Ok(2));
}

#[test]
fn validate_has_prefix_semantics() {
    assert_eq!(validate(b"1,2"), Ok(1));
    assert_eq!(validate(b"[1] tail"), Ok(3));
}

#[test]
fn validate_rejects_malformed_values() {
    for input in [
        &b"{"[..],
        b"[1,",
        b"truth",
        b"null",
        br#""open"#,
        b"%",
        b"   ",
    ] {
        assert!(
            matches!(validate(input), Err(ParseError::BadFormat(_))),
            "expected BadFormat for {:?}",
            core::str::from_utf8(input).unwrap_or("<binary>"),
        );
    }
    assert_eq!(validate(b""), Err(ParseError::OutOfBounds));
}

#[test]
fn validate_bounds_nesting_depth() {
    let deep: String = core::iter::repeat_n('[', 200).collect();
    assert_eq!(
        validate(deep.as_bytes()),
        Err(ParseError::DepthLimitExceeded)
    );
}

#[test]
fn validate_ignores_strict_property_mode() {
    // Skip-parsing has no schema to be strict against; unknown names stay
    // lenient even when the option is set.
    let options = ParserOptions {
        deny_unknown_properties: true,
        ..Default::default()
    };
    let input = br#"{"anything":{"goes":[1,"two",true]}}"#;
    assert_eq!(validate_with_options(input, &options), Ok(input.len()));
}

#[test]
fn validate_can_require_full_consumption() {
    let options = ParserOptions {
        require_full_consumption: true,
        ..Default::default()
    };
    assert_eq!(validate_with_options(b"{} \n", &options), Ok(4));
    assert!(matches!(
        validate_with_options(b"{} x", &options),
        Err(ParseError::BadFormat(_))
    ));
}
