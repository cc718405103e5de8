//! Tests for one-shot header validation

use super::fields;
use crate::Error;
use crate::app::services::record_mapper::HeaderSchema;

#[test]
fn test_valid_header_fixes_schema() {
    let schema = HeaderSchema::validate(&fields(&[
        "name.firstName",
        "name.lastName",
        "age",
        "address.city",
        "gender",
    ]))
    .unwrap();

    assert_eq!(schema.len(), 5);
    assert_eq!(schema.names()[3], "address.city");
}

#[test]
fn test_header_names_are_trimmed() {
    let schema = HeaderSchema::validate(&fields(&[
        " name.firstName ",
        "name.lastName\t",
        " age",
        " address.city ",
    ]))
    .unwrap();

    assert_eq!(schema.names()[0], "name.firstName");
    assert_eq!(schema.names()[3], "address.city");
}

#[test]
fn test_wrong_name_at_position_one_is_reported() {
    let result = HeaderSchema::validate(&fields(&["name.firstName", "wrong", "age"]));

    match result {
        Err(Error::HeaderMismatch {
            position,
            expected,
            actual,
        }) => {
            assert_eq!(position, 1);
            assert_eq!(expected, "name.lastName");
            assert_eq!(actual, "wrong");
        }
        other => panic!("expected HeaderMismatch, got {other:?}"),
    }
}

#[test]
fn test_missing_required_position_reports_empty_actual() {
    let result = HeaderSchema::validate(&fields(&["name.firstName", "name.lastName"]));

    match result {
        Err(Error::HeaderMismatch {
            position, actual, ..
        }) => {
            assert_eq!(position, 2);
            assert_eq!(actual, "");
        }
        other => panic!("expected HeaderMismatch, got {other:?}"),
    }
}

#[test]
fn test_required_names_must_match_exactly() {
    // Case differences are mismatches, not near-misses
    let result = HeaderSchema::validate(&fields(&["name.firstname", "name.lastName", "age"]));
    assert!(matches!(result, Err(Error::HeaderMismatch { position: 0, .. })));
}

#[test]
fn test_empty_header_row_fails_at_position_zero() {
    let result = HeaderSchema::validate(&[]);
    assert!(matches!(result, Err(Error::HeaderMismatch { position: 0, .. })));
}
