//! Tests for data row mapping

use serde_json::json;

use super::{fields, schema};
use crate::Error;
use crate::app::services::record_mapper::map_record;

#[test]
fn test_reference_mapping_with_address_and_null_additional_info() {
    let schema = schema(&["name.firstName", "name.lastName", "age", "address.city"]);
    let record = map_record(&schema, &fields(&["Ann", "Lee", "34", "Paris"]), 1).unwrap();

    assert_eq!(record.name, "Ann Lee");
    assert_eq!(record.age, 34);
    assert_eq!(record.address, Some(json!({"city": "Paris"})));
    assert_eq!(record.additional_info, None);
}

#[test]
fn test_non_address_columns_land_in_additional_info() {
    let schema = schema(&[
        "name.firstName",
        "name.lastName",
        "age",
        "gender",
        "pets.dog.name",
    ]);
    let record = map_record(&schema, &fields(&["Bo", "Ek", "41", "m", "Rex"]), 1).unwrap();

    assert_eq!(record.address, None);
    assert_eq!(
        record.additional_info,
        Some(json!({"gender": "m", "pets": {"dog": {"name": "Rex"}}}))
    );
}

#[test]
fn test_address_prefix_is_stripped_before_expansion() {
    let schema = schema(&[
        "name.firstName",
        "name.lastName",
        "age",
        "address.city.zone",
        "address.line1",
    ]);
    let record = map_record(
        &schema,
        &fields(&["Ann", "Lee", "34", "North", "12 High St"]),
        1,
    )
    .unwrap();

    assert_eq!(
        record.address,
        Some(json!({"city": {"zone": "North"}, "line1": "12 High St"}))
    );
}

#[test]
fn test_short_rows_are_padded_with_empty_strings() {
    let schema = schema(&["name.firstName", "name.lastName", "age", "address.city"]);
    let record = map_record(&schema, &fields(&["Ann", "Lee", "34"]), 1).unwrap();

    // The padded empty value still expands into the address tree
    assert_eq!(record.address, Some(json!({"city": ""})));
}

#[test]
fn test_extra_fields_beyond_header_count_are_ignored() {
    let schema = schema(&["name.firstName", "name.lastName", "age"]);
    let record = map_record(&schema, &fields(&["Ann", "Lee", "34", "spill", "over"]), 1).unwrap();

    assert_eq!(record.name, "Ann Lee");
    assert_eq!(record.address, None);
    assert_eq!(record.additional_info, None);
}

#[test]
fn test_full_name_without_last_name_has_no_trailing_space() {
    let schema = schema(&["name.firstName", "name.lastName", "age"]);
    let record = map_record(&schema, &fields(&["Ann", "", "34"]), 1).unwrap();
    assert_eq!(record.name, "Ann");
}

#[test]
fn test_full_name_without_first_name_is_trimmed() {
    let schema = schema(&["name.firstName", "name.lastName", "age"]);
    let record = map_record(&schema, &fields(&["", "Lee", "34"]), 1).unwrap();
    assert_eq!(record.name, "Lee");
}

#[test]
fn test_age_is_trimmed_before_parsing() {
    let schema = schema(&["name.firstName", "name.lastName", "age"]);
    let record = map_record(&schema, &fields(&["Ann", "Lee", "  34  "]), 1).unwrap();
    assert_eq!(record.age, 34);
}

#[test]
fn test_age_parses_leading_integer_leniently() {
    let schema = schema(&["name.firstName", "name.lastName", "age"]);

    let record = map_record(&schema, &fields(&["Ann", "Lee", "42years"]), 1).unwrap();
    assert_eq!(record.age, 42);

    let record = map_record(&schema, &fields(&["Ann", "Lee", "-5"]), 1).unwrap();
    assert_eq!(record.age, -5);

    let record = map_record(&schema, &fields(&["Ann", "Lee", "+7"]), 1).unwrap();
    assert_eq!(record.age, 7);
}

#[test]
fn test_invalid_age_carries_record_number_and_raw_value() {
    let schema = schema(&["name.firstName", "name.lastName", "age"]);
    let result = map_record(&schema, &fields(&["Ann", "Lee", "unknown"]), 17);

    match result {
        Err(Error::InvalidAge { record_number, raw }) => {
            assert_eq!(record_number, 17);
            assert_eq!(raw, "unknown");
        }
        other => panic!("expected InvalidAge, got {other:?}"),
    }
}

#[test]
fn test_empty_age_field_is_invalid() {
    let schema = schema(&["name.firstName", "name.lastName", "age"]);
    let result = map_record(&schema, &fields(&["Ann", "Lee", ""]), 3);
    assert!(matches!(result, Err(Error::InvalidAge { .. })));
}

#[test]
fn test_duplicate_header_takes_last_value_in_one_slot() {
    let schema = schema(&["name.firstName", "name.lastName", "age", "note", "note"]);
    let record = map_record(&schema, &fields(&["Ann", "Lee", "34", "first", "last"]), 1).unwrap();

    assert_eq!(record.additional_info, Some(json!({"note": "last"})));
}

#[test]
fn test_bare_address_column_goes_to_additional_info() {
    // "address" without the dot prefix is not routed to the address tree
    let schema = schema(&["name.firstName", "name.lastName", "age", "address"]);
    let record = map_record(&schema, &fields(&["Ann", "Lee", "34", "somewhere"]), 1).unwrap();

    assert_eq!(record.address, None);
    assert_eq!(
        record.additional_info,
        Some(json!({"address": "somewhere"}))
    );
}

#[test]
fn test_address_column_with_empty_tail_uses_empty_key() {
    let schema = schema(&["name.firstName", "name.lastName", "age", "address."]);
    let record = map_record(&schema, &fields(&["Ann", "Lee", "34", "x"]), 1).unwrap();

    assert_eq!(record.address, Some(json!({"": "x"})));
}
