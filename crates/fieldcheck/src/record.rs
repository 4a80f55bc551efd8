//! Record descriptors and the recursive field walker
//!
//! A [`Record`] exposes its fields as an ordered list of [`BoundField`]s:
//! name, declared [`Markers`], and the kind-erased value. The
//! [`markers!`](crate::markers) macro writes this implementation from a
//! field listing; hand implementations are equally valid.
//!
//! The walker visits fields in declaration order, recurses into
//! record-valued fields, applies markers at every leaf and stops at the
//! first failure. Timestamps never reach the recursion branch: they
//! convert to [`FieldValue::Timestamp`], so the leaf/non-leaf decision is
//! carried by the value variant itself rather than a type check inside
//! the walker.

use crate::foundation::{Error, FieldValue};
use crate::marker;
use crate::registry::Registry;

// ============================================================================
// DESCRIPTORS
// ============================================================================

/// The declarative markers attached to one field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    /// Annotation marker, e.g. `"@Required@NotBlank"`.
    pub annotation: Option<&'static str>,
    /// Pattern marker: a raw regular expression.
    pub pattern: Option<&'static str>,
    /// Name of a registered field-error mapping that substitutes rule
    /// violations on this field.
    pub field_err: Option<&'static str>,
}

impl Markers {
    /// Markers with nothing declared.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            annotation: None,
            pattern: None,
            field_err: None,
        }
    }
}

/// One declared field of a record, bound to its runtime value.
#[derive(Debug)]
pub struct BoundField<'a> {
    /// Field name as declared, used as the error field path.
    pub name: &'static str,
    /// Declared markers.
    pub markers: Markers,
    /// The field's value, kind-erased.
    pub value: FieldValue<'a>,
}

/// A type whose fields can be walked by the validator.
///
/// Implementations list every validatable field in declaration order.
/// Implement via the [`markers!`](crate::markers) macro.
pub trait Record {
    /// The record's fields, in declaration order.
    fn fields(&self) -> Vec<BoundField<'_>>;
}

// ============================================================================
// WALKER
// ============================================================================

/// Walks a record depth-first, applying markers at every leaf.
///
/// Returns the first failure: configuration errors as-is, rule violations
/// with the field path attached — or substituted by the field's declared
/// field-error mapping, when one is registered.
pub(crate) fn walk(record: &dyn Record, registry: &Registry) -> Result<(), Error> {
    for field in record.fields() {
        if let FieldValue::Record(nested) = &field.value {
            walk(*nested, registry)?;
            continue;
        }

        if let Some(annotation) = field.markers.annotation {
            if let Err(err) = marker::apply_annotations(annotation, &field.value, registry) {
                return Err(finish(err, &field, registry));
            }
        }

        if let Some(pattern) = field.markers.pattern {
            if let Err(err) = marker::apply_pattern(pattern, &field.value) {
                return Err(finish(err, &field, registry));
            }
        }
    }

    Ok(())
}

/// Attaches the field path to a rule violation, or substitutes it with the
/// field's registered field error. Configuration errors pass through
/// untouched: a broken marker should never be masked by a substitution.
fn finish(err: Error, field: &BoundField<'_>, registry: &Registry) -> Error {
    match err {
        Error::Rule(violation) => {
            if let Some(name) = field.markers.field_err {
                if let Some(substituted) = registry.field_error(name) {
                    return Error::Field(substituted);
                }
            }
            Error::Rule(violation.with_field(field.name))
        }
        other => other,
    }
}

// ============================================================================
// TESTS
// ============================================================================
