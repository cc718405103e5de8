//! Tests for record tokenization

use crate::app::services::csv_reader::tokenize;

#[test]
fn test_plain_unquoted_fields() {
    assert_eq!(tokenize("a,b,c"), vec!["a", "b", "c"]);
}

#[test]
fn test_quoted_field_with_embedded_delimiter_and_escaped_quote() {
    assert_eq!(
        tokenize("a,\"b,c\",\"d\"\"e\""),
        vec!["a", "b,c", "d\"e"]
    );
}

#[test]
fn test_unquoted_fields_are_trimmed() {
    assert_eq!(tokenize("  a ,\tb , c  "), vec!["a", "b", "c"]);
}

#[test]
fn test_quoted_field_preserves_interior_whitespace() {
    assert_eq!(tokenize("\"  padded  \",x"), vec!["  padded  ", "x"]);
}

#[test]
fn test_quoted_field_with_embedded_newline() {
    assert_eq!(
        tokenize("Ann,\"12 High St\nFlat 3\",34"),
        vec!["Ann", "12 High St\nFlat 3", "34"]
    );
}

#[test]
fn test_empty_fields_between_delimiters() {
    assert_eq!(tokenize("a,,c"), vec!["a", "", "c"]);
    assert_eq!(tokenize(",a"), vec!["", "a"]);
}

#[test]
fn test_no_trailing_empty_field_after_final_delimiter() {
    // The cursor stops at end of record, so "a," yields one field
    assert_eq!(tokenize("a,"), vec!["a"]);
}

#[test]
fn test_whitespace_skipped_between_closing_quote_and_delimiter() {
    assert_eq!(tokenize("\"a\"  ,b"), vec!["a", "b"]);
    assert_eq!(tokenize("\"a\"\t,b"), vec!["a", "b"]);
}

#[test]
fn test_stray_characters_after_closing_quote_degrade_permissively() {
    // Non-whitespace after a closing quote starts a new unquoted segment
    // rather than raising an error.
    assert_eq!(tokenize("\"a\"x,b"), vec!["a", "x", "b"]);
}

#[test]
fn test_consecutive_escaped_quotes() {
    assert_eq!(tokenize("\"\"\"\"\"\""), vec!["\"\""]);
}

#[test]
fn test_empty_quoted_field() {
    assert_eq!(tokenize("\"\",b"), vec!["", "b"]);
}

#[test]
fn test_empty_record_yields_no_fields() {
    assert_eq!(tokenize(""), Vec::<String>::new());
}

#[test]
fn test_multibyte_text_in_both_field_kinds() {
    assert_eq!(
        tokenize("Zoë,\"Ökostraße 5, Köln\""),
        vec!["Zoë", "Ökostraße 5, Köln"]
    );
}

#[test]
fn test_unterminated_quote_captures_rest_of_record() {
    assert_eq!(tokenize("a,\"open ended"), vec!["a", "open ended"]);
}
