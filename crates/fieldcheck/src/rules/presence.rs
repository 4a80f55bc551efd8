//! Presence rule
//!
//! `@Required` only asks whether an optional value is there. It never
//! inspects the underlying content: a present empty string passes.

use crate::foundation::{FieldValue, ValidationError};

/// Fails iff the value is absent.
pub fn required(value: &FieldValue<'_>) -> Result<(), ValidationError> {
    match value {
        FieldValue::Missing(_) => Err(ValidationError::absent("required")),
        _ => Ok(()),
    }
}
