//! Tag dispatcher: marker strings to rule invocations
//!
//! An annotation marker is a string of `@`-prefixed tokens
//! (`"@Required@NotBlank"`). Tokens are the segments after each `@`; the
//! segment before the first `@` is discarded, so a marker with no leading
//! `@` selects nothing. Tokens resolve left to right and the first
//! violation short-circuits the rest.
//!
//! A pattern marker is a raw regular expression applied to string fields
//! with unanchored search semantics.

use crate::foundation::{Error, FieldValue, Kind, ValidationError};
use crate::registry::Registry;

/// Applies every annotation token of `marker` to `value`, in order.
///
/// An unresolvable token is a configuration error; a failing rule is a
/// violation. Either aborts the remaining tokens.
pub fn apply_annotations(
    marker: &str,
    value: &FieldValue<'_>,
    registry: &Registry,
) -> Result<(), Error> {
    for token in marker.trim().split('@').skip(1) {
        let annotation = registry.resolve(token)?;
        annotation.run(value)?;
    }
    Ok(())
}

/// Applies a pattern marker to `value`.
///
/// The value must be a present string: absence is a violation, any other
/// kind is a wrong-field-type violation. A pattern that does not compile
/// is a configuration error, not a validation failure.
pub fn apply_pattern(pattern: &str, value: &FieldValue<'_>) -> Result<(), Error> {
    let s = match value {
        FieldValue::Str(s) => *s,
        FieldValue::Missing(Kind::Str) => {
            return Err(ValidationError::absent("pattern").into());
        }
        other => {
            return Err(ValidationError::wrong_type("pattern", "string", other.kind_name()).into());
        }
    };

    let regex = regex::Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })?;

    if !regex.is_match(s) {
        return Err(ValidationError::new("pattern", "value does not match pattern")
            .with_param("pattern", pattern.to_owned())
            .into());
    }

    Ok(())
}
