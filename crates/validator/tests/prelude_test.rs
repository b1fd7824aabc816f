//! Integration tests for the prelude module.
//!
//! Verifies that `use fleetform_validator::prelude::*` brings in everything
//! a consumer needs for common validation scenarios.

use fleetform_validator::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn prelude_provides_validate_and_ext() {
    let v = not_empty().and(max_length(80));
    assert!(v.validate("Acme Travels").is_ok());
    assert!(v.validate("").is_err());
}

#[test]
fn compose_macro_via_prelude() {
    let v = compose![min_length(2), max_length(4)];
    assert!(v.validate("abc").is_ok());
    assert!(v.validate("a").is_err());
    assert!(v.validate("abcde").is_err());
}

#[test]
fn numeric_range_for_occupants_style_field() {
    let v = min(1_u32).and(max(6_u32));
    assert!(v.validate(&1).is_ok());
    assert!(v.validate(&6).is_ok());
    assert!(v.validate(&0).is_err());
    assert!(v.validate(&7).is_err());
}

#[test]
fn pattern_validator_via_prelude() {
    let v = matches("^[0-9]{10}$").unwrap();
    assert!(v.validate("0123456789").is_ok());
    assert!(v.validate("012-345-6789").is_err());
}

#[test]
fn each_surfaces_every_offending_element() {
    let v = each(max(100_u64));
    let err = v.validate(&[50, 200, 300]).unwrap_err();
    assert_eq!(err.param("failed_count"), Some("2"));
    assert_eq!(err.param("failed_indices"), Some("1,2"));
    assert_eq!(err.total_error_count(), 3);
}

#[test]
fn required_and_optional_are_duals() {
    let must_exist = required::<u32>();
    assert!(must_exist.validate(&Some(3)).is_ok());
    assert!(must_exist.validate(&None).is_err());

    let may_be_absent = optional(min(1_u32));
    assert!(may_be_absent.validate(&None).is_ok());
    assert!(may_be_absent.validate(&Some(0)).is_err());
}

#[test]
fn custom_validator_via_macro() {
    validator! {
        Ascii for str;
        rule(input) { input.is_ascii() }
        error(input) { ValidationError::new("ascii", "Value must be ASCII") }
        fn ascii();
    }

    let v = ascii().and(not_empty());
    assert!(v.validate("plain").is_ok());
    assert!(v.validate("naïve").is_err());
}

#[test]
fn errors_serialize_to_json() {
    let v = min_length(5);
    let err = v.validate("hi").unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["code"], "min_length");
}
