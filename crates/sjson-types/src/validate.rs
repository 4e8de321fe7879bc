//! Value validation against a requested [`ValueKind`].
//!
//! Accepted forms:
//! - Number: optional `-`, one or more ASCII digits, optionally `.` followed by
//!   one or more ASCII digits. No exponent, no leading `+`.
//! - String: at least two characters, starting and ending with `"`
//! - Boolean: exactly `true` or `false`
//! - Array: at least two characters, starting with `[` and ending with `]`
//! - Null: exactly `null`
//!
//! Neither String nor Array inspects its interior, but neither may contain a
//! `\n` or `\r`. The validator never rewrites its input.

use crate::error::TypeError;
use crate::kind::ValueKind;

/// Characters that may not appear inside a delimited (String or Array) value.
const LINE_TERMINATORS: &[char] = &['\n', '\r'];

/// Validate `value` against `kind`, returning `Ok(())` if it is accepted.
///
/// # Examples
///
/// ```
/// use sjson_types::{validate, ValueKind};
///
/// assert!(validate("25.5", ValueKind::Number).is_ok());
/// assert!(validate("\"John\"", ValueKind::String).is_ok());
/// assert!(validate("True", ValueKind::Boolean).is_err());
/// ```
pub fn validate(value: &str, kind: ValueKind) -> Result<(), TypeError> {
    if is_valid(value, kind) {
        Ok(())
    } else {
        Err(TypeError::InvalidValue {
            kind,
            value: value.to_string(),
        })
    }
}

/// Returns `true` if `value` is acceptable for `kind`.
pub fn is_valid(value: &str, kind: ValueKind) -> bool {
    match kind {
        ValueKind::Number => is_number(value),
        ValueKind::String => is_delimited(value, '"', '"'),
        ValueKind::Boolean => value == "true" || value == "false",
        ValueKind::Array => is_delimited(value, '[', ']'),
        ValueKind::Null => value == "null",
    }
}

/// Validate against a legacy integer kind code. Unsupported codes reject
/// every value.
pub fn is_valid_for_code(value: &str, code: i32) -> bool {
    ValueKind::from_code(code).is_ok_and(|kind| is_valid(value, kind))
}

/// The first kind, in code order, that accepts `value`.
pub fn classify(value: &str) -> Option<ValueKind> {
    ValueKind::ALL
        .into_iter()
        .find(|kind| is_valid(value, *kind))
}

fn is_number(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    match unsigned.split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => all_digits(unsigned),
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_delimited(value: &str, open: char, close: char) -> bool {
    if value.chars().count() < 2 || !value.starts_with(open) || !value.ends_with(close) {
        return false;
    }
    !value.contains(LINE_TERMINATORS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn numbers() {
        assert!(is_valid("25", ValueKind::Number));
        assert!(is_valid("25.5", ValueKind::Number));
        assert!(is_valid("-3", ValueKind::Number));
        assert!(is_valid("0", ValueKind::Number));
        assert!(is_valid("007", ValueKind::Number));
        assert!(is_valid("-0.25", ValueKind::Number));
    }

    #[test]
    fn reject_malformed_numbers() {
        assert!(!is_valid("abc", ValueKind::Number));
        assert!(!is_valid("not_a_number", ValueKind::Number));
        assert!(!is_valid("", ValueKind::Number));
        assert!(!is_valid("-", ValueKind::Number));
        assert!(!is_valid("+1", ValueKind::Number));
        assert!(!is_valid("1e5", ValueKind::Number));
        assert!(!is_valid(".5", ValueKind::Number));
        assert!(!is_valid("5.", ValueKind::Number));
        assert!(!is_valid("1.2.3", ValueKind::Number));
        assert!(!is_valid(" 1", ValueKind::Number));
        assert!(!is_valid("--1", ValueKind::Number));
        assert!(!is_valid("١٢", ValueKind::Number));
    }

    #[test]
    fn strings() {
        assert!(is_valid("\"John\"", ValueKind::String));
        assert!(is_valid("\"\"", ValueKind::String));
        assert!(is_valid("\"a \" b\"", ValueKind::String));
        assert!(!is_valid("John", ValueKind::String));
        assert!(!is_valid("\"", ValueKind::String));
        assert!(!is_valid("\"open", ValueKind::String));
        assert!(!is_valid("\"two\nlines\"", ValueKind::String));
    }

    #[test]
    fn unicode_separators_are_ordinary_content() {
        assert!(is_valid("\"a\u{2028}b\"", ValueKind::String));
        assert!(is_valid("\"a\u{2029}b\"", ValueKind::String));
        assert!(is_valid("[1,\u{2028}2]", ValueKind::Array));
        assert_eq!(classify("\"\u{2029}\""), Some(ValueKind::String));
    }

    #[test]
    fn booleans() {
        assert!(is_valid("true", ValueKind::Boolean));
        assert!(is_valid("false", ValueKind::Boolean));
        assert!(!is_valid("True", ValueKind::Boolean));
        assert!(!is_valid("1", ValueKind::Boolean));
        assert!(!is_valid(" true", ValueKind::Boolean));
    }

    #[test]
    fn arrays() {
        assert!(is_valid("[1,2,3]", ValueKind::Array));
        assert!(is_valid("[1, 2, 3]", ValueKind::Array));
        assert!(is_valid("[]", ValueKind::Array));
        assert!(is_valid("[not json at all]", ValueKind::Array));
        assert!(!is_valid("[", ValueKind::Array));
        assert!(!is_valid("1,2,3", ValueKind::Array));
        assert!(!is_valid("[1,\r2]", ValueKind::Array));
    }

    #[test]
    fn null() {
        assert!(is_valid("null", ValueKind::Null));
        assert!(!is_valid("Null", ValueKind::Null));
        assert!(!is_valid("", ValueKind::Null));
    }

    #[test]
    fn validate_reports_kind_and_value() {
        let err = validate("abc", ValueKind::Number).unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidValue {
                kind: ValueKind::Number,
                value: "abc".into(),
            }
        );
    }

    #[test]
    fn legacy_codes() {
        assert!(is_valid_for_code("25", 1));
        assert!(is_valid_for_code("\"x\"", 2));
        assert!(is_valid_for_code("false", 3));
        assert!(is_valid_for_code("[]", 4));
        assert!(is_valid_for_code("null", 5));
        assert!(!is_valid_for_code("null", 0));
        assert!(!is_valid_for_code("25", 6));
        assert!(!is_valid_for_code("25", -1));
    }

    #[test]
    fn classify_picks_first_matching_kind() {
        assert_eq!(classify("-12.5"), Some(ValueKind::Number));
        assert_eq!(classify("\"hi\""), Some(ValueKind::String));
        assert_eq!(classify("true"), Some(ValueKind::Boolean));
        assert_eq!(classify("[true]"), Some(ValueKind::Array));
        assert_eq!(classify("null"), Some(ValueKind::Null));
        assert_eq!(classify("bare"), None);
    }

    proptest! {
        #[test]
        fn formatted_integers_are_numbers(n in any::<i64>()) {
            prop_assert!(is_valid(&n.to_string(), ValueKind::Number));
        }

        #[test]
        fn fixed_point_decimals_are_numbers(
            int in 0u32..1_000_000,
            frac in 0u32..10_000,
            neg in any::<bool>(),
        ) {
            let sign = if neg { "-" } else { "" };
            let text = format!("{sign}{int}.{frac}");
            prop_assert!(is_valid(&text, ValueKind::Number));
        }

        #[test]
        fn quoted_single_line_text_is_a_string(body in "[^\n\r]*") {
            let text = format!("\"{body}\"");
            prop_assert!(is_valid(&text, ValueKind::String));
        }

        #[test]
        fn text_without_digits_is_never_a_number(text in "[^0-9]*") {
            prop_assert!(!is_valid(&text, ValueKind::Number));
        }

        #[test]
        fn classify_agrees_with_is_valid(text in ".{0,12}") {
            if let Some(kind) = classify(&text) {
                prop_assert!(is_valid(&text, kind));
            } else {
                for kind in ValueKind::ALL {
                    prop_assert!(!is_valid(&text, kind));
                }
            }
        }
    }
}
