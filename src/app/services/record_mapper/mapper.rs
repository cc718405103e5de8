//! Data row mapping against a validated header schema

use serde_json::{Map, Value};

use super::header::HeaderSchema;
use super::nested::set_nested;
use crate::app::models::MappedRecord;
use crate::constants::{ADDRESS_PREFIX, REQUIRED_HEADERS};
use crate::{Error, Result};

/// Map one tokenized data row into a [`MappedRecord`]
///
/// Short rows are padded with empty fields up to the header count; extra
/// fields beyond the header count are ignored. The three reserved columns
/// feed the derived full name and parsed age; every other column expands its
/// dotted name into the address tree (for names with the `address.` prefix,
/// which is stripped) or the additional-info tree. Trees with no top-level
/// keys become `None`.
///
/// `record_number` is the 1-based data row index, used only for the
/// [`Error::InvalidAge`] context.
pub fn map_record(
    schema: &HeaderSchema,
    fields: &[String],
    record_number: u64,
) -> Result<MappedRecord> {
    // Flat header -> value mapping in first-occurrence order; a duplicated
    // header name keeps one slot and takes the last value.
    let mut flat: Vec<(&str, &str)> = Vec::with_capacity(schema.len());
    for (position, name) in schema.names().iter().enumerate() {
        let value = fields.get(position).map(String::as_str).unwrap_or("");
        match flat.iter_mut().find(|(key, _)| *key == name.as_str()) {
            Some((_, slot)) => *slot = value,
            None => flat.push((name.as_str(), value)),
        }
    }

    let lookup = |key: &str| {
        flat.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or("")
    };

    let first_name = lookup(REQUIRED_HEADERS[0]);
    let last_name = lookup(REQUIRED_HEADERS[1]);
    let name = if last_name.is_empty() {
        first_name.trim().to_string()
    } else {
        format!("{first_name} {last_name}").trim().to_string()
    };

    let age_raw = lookup(REQUIRED_HEADERS[2]);
    let age = parse_age(age_raw).ok_or_else(|| Error::invalid_age(record_number, age_raw))?;

    let mut address = Map::new();
    let mut additional_info = Map::new();

    for (key, value) in &flat {
        if REQUIRED_HEADERS.contains(key) {
            continue;
        }

        match key.strip_prefix(ADDRESS_PREFIX) {
            Some(rest) => {
                let path: Vec<&str> = rest.split('.').collect();
                set_nested(&mut address, &path, value);
            }
            None => {
                let path: Vec<&str> = key.split('.').collect();
                set_nested(&mut additional_info, &path, value);
            }
        }
    }

    Ok(MappedRecord {
        name,
        age,
        address: non_empty(address),
        additional_info: non_empty(additional_info),
    })
}

/// Parse the leading integer of a trimmed age field
///
/// Matches lenient base-10 semantics: optional sign, then a run of ASCII
/// digits; anything after the digit run is ignored ("42years" parses as 42).
/// Returns `None` when no digits are present.
fn parse_age(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    let rest = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let digit_run = rest
        .as_bytes()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digit_run == 0 {
        return None;
    }

    let sign_len = trimmed.len() - rest.len();
    trimmed[..sign_len + digit_run].parse().ok()
}

fn non_empty(map: Map<String, Value>) -> Option<Value> {
    if map.is_empty() {
        None
    } else {
        Some(Value::Object(map))
    }
}
