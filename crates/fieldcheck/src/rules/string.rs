//! String rules: emptiness, blankness, email shape
//!
//! All three accept a bare string or an optional string; absence is its
//! own failure, any other kind is a wrong-type failure.

use std::sync::LazyLock;

use crate::foundation::{FieldValue, Kind, ValidationError};

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).expect("email regex is valid")
});

/// Resolves the value to a present string, or reports absent/wrong-type
/// under the given rule code.
fn as_str<'a>(value: &'a FieldValue<'_>, code: &'static str) -> Result<&'a str, ValidationError> {
    match value {
        FieldValue::Str(s) => Ok(s),
        FieldValue::Missing(Kind::Str) => Err(ValidationError::absent(code)),
        other => Err(ValidationError::wrong_type(
            code,
            "string",
            other.kind_name(),
        )),
    }
}

/// Fails if the value is absent or the string has length zero.
pub fn not_empty(value: &FieldValue<'_>) -> Result<(), ValidationError> {
    let s = as_str(value, "not_empty")?;
    if s.is_empty() {
        return Err(ValidationError::new("not_empty", "value is empty"));
    }
    Ok(())
}

/// Fails if the value is absent or the string is whitespace-only.
pub fn not_blank(value: &FieldValue<'_>) -> Result<(), ValidationError> {
    let s = as_str(value, "not_blank")?;
    if s.trim().is_empty() {
        return Err(ValidationError::new("not_blank", "value is blank"));
    }
    Ok(())
}

/// Fails if the value is absent or does not have an email shape.
pub fn email(value: &FieldValue<'_>) -> Result<(), ValidationError> {
    let s = as_str(value, "email")?;
    if !EMAIL_REGEX.is_match(s) {
        return Err(ValidationError::new("email", "value is not an email"));
    }
    Ok(())
}
