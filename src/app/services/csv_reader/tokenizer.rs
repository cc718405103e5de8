//! Field tokenization for one complete logical record
//!
//! Implements an RFC4180-like split: quoted fields may contain delimiters,
//! newlines, and escaped quotes (`""`); unquoted fields are trimmed. This is
//! deliberately not a full RFC 4180 parser - malformed input degrades
//! gracefully instead of erroring (see the permissive rules below).

use crate::constants::{DELIMITER, QUOTE};

const DELIM: u8 = DELIMITER as u8;
const QUOTE_BYTE: u8 = QUOTE as u8;

/// Split one complete logical record into raw field strings
///
/// Scans left to right with a cursor:
/// - A field opening with a quote is consumed verbatim up to its closing
///   quote, with `""` decoded to one literal quote. After the close, runs of
///   spaces and tabs before the delimiter are skipped; any other stray
///   character simply ends the skip without erroring.
/// - An unquoted field runs up to the next delimiter and is trimmed of
///   leading and trailing whitespace.
///
/// The record is expected to be quote-balanced (the accumulator guarantees
/// this); an unterminated quote nevertheless captures the rest of the record
/// as field text rather than panicking.
pub fn tokenize(record: &str) -> Vec<String> {
    let bytes = record.as_bytes();
    let len = bytes.len();
    let mut fields = Vec::new();
    let mut i = 0;

    while i < len {
        if bytes[i] == QUOTE_BYTE {
            // Quoted field: skip the opening quote, copy until the close
            i += 1;
            let mut field = String::new();
            let mut run = i;
            let mut closed = false;

            while i < len {
                if bytes[i] == QUOTE_BYTE {
                    field.push_str(&record[run..i]);
                    if i + 1 < len && bytes[i + 1] == QUOTE_BYTE {
                        // Escaped quote stays inside the field
                        field.push(QUOTE);
                        i += 2;
                    } else {
                        i += 1;
                        closed = true;
                    }
                    run = i;
                    if closed {
                        break;
                    }
                } else {
                    i += 1;
                }
            }
            if !closed {
                field.push_str(&record[run..]);
                i = len;
            }

            // Tolerate whitespace between the closing quote and the
            // delimiter; anything else ends the skip permissively.
            while i < len && bytes[i] != DELIM {
                if bytes[i] == b' ' || bytes[i] == b'\t' {
                    i += 1;
                    continue;
                }
                break;
            }

            fields.push(field);
            if i < len && bytes[i] == DELIM {
                i += 1;
            }
        } else {
            // Unquoted field: capture up to the delimiter and trim
            let start = i;
            while i < len && bytes[i] != DELIM {
                i += 1;
            }
            fields.push(record[start..i].trim().to_string());
            if i < len && bytes[i] == DELIM {
                i += 1;
            }
        }
    }

    fields
}
