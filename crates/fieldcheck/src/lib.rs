//! # fieldcheck
//!
//! Declarative, marker-driven validation bound to `serde_json`
//! deserialization.
//!
//! A record type lists its fields and their markers once, through the
//! [`markers!`] macro; the library decodes raw bytes into the type and
//! walks that listing, applying each marker's rule and failing fast on
//! the first violation. Whole-record validators — a single plain one and
//! any number of ordered ones per type — run after every field passes.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Signup {
//!     email: Option<String>,
//!     display_name: String,
//! }
//!
//! fieldcheck::markers! {
//!     Signup {
//!         email: annotation = "@Required@Email";
//!         display_name: annotation = "@NotBlank";
//!     }
//! }
//!
//! let signup: Signup =
//!     fieldcheck::from_str(r#"{"email":"a@b.co","display_name":"Ada"}"#)?;
//! ```
//!
//! ## Built-in annotations
//!
//! - **Presence**: `Required`
//! - **String**: `NotEmpty`, `NotBlank`, `Email`
//! - **Collection**: `NotContainsNil`, `NotContainsEmpty`, `NotContainsBlank`
//! - **Numeric**: `Positive`, `PositiveOrZero`, `Negative`, `NegativeOrZero`
//! - **Temporal**: `Future`, `FutureOrPresent`, `Present`, `PastOrPresent`,
//!   `Past`
//!
//! Custom annotations register under any non-built-in name via
//! [`register_annotation`]; `pattern` markers apply a regular expression
//! to string fields.
//!
//! ## Process-wide state
//!
//! Registrations land in the process-wide default [`Registry`]; [`reset`]
//! clears all of it between isolated test runs or configuration epochs.
//! Construct an explicit [`Registry`] instead when isolation matters.

// ValidationError flows by value through every rule invocation; boxing it
// would put an allocation on the failure path of each check.
#![allow(clippy::result_large_err)]

pub mod annotation;
pub mod codec;
pub mod field_error;
pub mod foundation;
mod macros;
pub mod marker;
pub mod prelude;
pub mod record;
pub mod registry;
pub mod rules;

pub use annotation::{Annotation, RuleFn};
pub use codec::{from_slice, from_str, to_string, to_vec};
pub use field_error::FieldError;
pub use foundation::{AsFieldValue, Error, FieldValue, Kind, Number, ValidationError};
pub use record::{BoundField, Markers, Record};
pub use registry::{
    OrderedRecordValidator, RecordValidator, Registry, default_registry,
};

// ============================================================================
// PROCESS-WIDE CONVENIENCE SURFACE
// ============================================================================

/// Validates an already-constructed record against the default registry:
/// field markers first, then the whole-record validators for `T`.
pub fn validate<T>(value: &T) -> Result<(), Error>
where
    T: Record + 'static,
{
    default_registry().validate(value)
}

/// Registers the plain whole-record validator for `T` in the default
/// registry, replacing any prior registration for that type.
pub fn register_validator<T, V>(validator: V)
where
    T: 'static,
    V: RecordValidator<T> + 'static,
{
    default_registry().register_validator::<T, V>(validator);
}

/// Appends an ordered whole-record validator for `T` in the default
/// registry.
pub fn register_ordered_validator<T, V>(validator: V)
where
    T: 'static,
    V: OrderedRecordValidator<T> + 'static,
{
    default_registry().register_ordered_validator::<T, V>(validator);
}

/// Registers a custom annotation in the default registry. Fails if the
/// name is reserved by a built-in rule.
pub fn register_annotation<F>(name: impl Into<String>, rule: F) -> Result<(), Error>
where
    F: Fn(&FieldValue<'_>) -> Result<(), ValidationError> + Send + Sync + 'static,
{
    default_registry().register_annotation(name, rule)
}

/// Registers a field-error mapping in the default registry.
pub fn register_field_error(name: impl Into<String>, default_msg: impl Into<String>) {
    default_registry().register_field_error(name, default_msg);
}

/// Clears every process-wide catalog: custom annotations, validators,
/// ordered validators and field-error mappings.
pub fn reset() {
    default_registry().reset();
}
