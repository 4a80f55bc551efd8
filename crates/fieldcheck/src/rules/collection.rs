//! Collection-content rules
//!
//! These apply a per-element check across a sequence of optionals and fail
//! on the first offending index. A non-sequence input (including a missing
//! sequence) fails as a wrong-type violation; an empty sequence passes.

use crate::foundation::{FieldValue, ValidationError};
use crate::rules::string;

fn as_seq<'a>(
    value: &'a FieldValue<'a>,
    code: &'static str,
) -> Result<&'a [FieldValue<'a>], ValidationError> {
    match value {
        FieldValue::Seq(items) => Ok(items),
        other => Err(ValidationError::wrong_type(
            code,
            "sequence",
            other.kind_name(),
        )),
    }
}

/// Fails if any element of the sequence is absent.
pub fn not_contains_nil(value: &FieldValue<'_>) -> Result<(), ValidationError> {
    let items = as_seq(value, "not_contains_nil")?;
    for (index, item) in items.iter().enumerate() {
        if matches!(item, FieldValue::Missing(_)) {
            return Err(ValidationError::new(
                "not_contains_nil",
                "sequence contains an absent element",
            )
            .with_param("index", index.to_string()));
        }
    }
    Ok(())
}

/// Fails if [`string::not_empty`] fails for any element.
pub fn not_contains_empty(value: &FieldValue<'_>) -> Result<(), ValidationError> {
    each(value, "not_contains_empty", string::not_empty)
}

/// Fails if [`string::not_blank`] fails for any element.
pub fn not_contains_blank(value: &FieldValue<'_>) -> Result<(), ValidationError> {
    each(value, "not_contains_blank", string::not_blank)
}

fn each(
    value: &FieldValue<'_>,
    code: &'static str,
    check: fn(&FieldValue<'_>) -> Result<(), ValidationError>,
) -> Result<(), ValidationError> {
    let items = as_seq(value, code)?;
    for (index, item) in items.iter().enumerate() {
        if let Err(cause) = check(item) {
            return Err(ValidationError::new(code, "sequence element rejected")
                .with_param("index", index.to_string())
                .with_param("cause", cause.message.into_owned()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Kind;

    fn seq<'a>(items: Vec<FieldValue<'a>>) -> FieldValue<'a> {
        FieldValue::Seq(items)
    }

    #[test]
    fn nil_element_fails() {
        let value = seq(vec![FieldValue::Str("a"), FieldValue::Missing(Kind::Str)]);
        let err = not_contains_nil(&value).unwrap_err();
        assert_eq!(err.param("index"), Some("1"));
    }

    #[test]
    fn all_present_passes() {
        let value = seq(vec![FieldValue::Str("a"), FieldValue::Str("b")]);
        assert!(not_contains_nil(&value).is_ok());
    }

    #[test]
    fn empty_sequence_passes_every_rule() {
        assert!(not_contains_nil(&seq(vec![])).is_ok());
        assert!(not_contains_empty(&seq(vec![])).is_ok());
        assert!(not_contains_blank(&seq(vec![])).is_ok());
    }

    #[test]
    fn non_sequence_is_a_type_error() {
        let err = not_contains_nil(&FieldValue::Str("a")).unwrap_err();
        assert_eq!(err.param("expected"), Some("sequence"));

        // A missing sequence is not a sequence either.
        assert!(not_contains_empty(&FieldValue::Missing(Kind::Seq)).is_err());
    }

    #[test]
    fn empty_element_fails_contains_empty_but_blank_passes_it() {
        let value = seq(vec![FieldValue::Str(" "), FieldValue::Str("x")]);
        assert!(not_contains_empty(&value).is_ok());
        assert!(not_contains_blank(&value).is_err());

        let value = seq(vec![FieldValue::Str("")]);
        let err = not_contains_empty(&value).unwrap_err();
        assert_eq!(err.param("index"), Some("0"));
        assert_eq!(err.param("cause"), Some("value is empty"));
    }

    #[test]
    fn absent_element_fails_element_rules_too() {
        let value = seq(vec![FieldValue::Missing(Kind::Str)]);
        assert!(not_contains_empty(&value).is_err());
        assert!(not_contains_blank(&value).is_err());
    }
}
