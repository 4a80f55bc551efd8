//! Process-wide registries and the whole-record validator composer
//!
//! A [`Registry`] owns four catalogs: custom annotations (by name), plain
//! whole-record validators (by type), ordered whole-record validators (by
//! type, insertion-ordered), and field-error mappings (by name). Every map
//! sits behind a [`parking_lot::RwLock`] — the registries are shared
//! mutable state, and registration from one thread must not race
//! resolution from another.
//!
//! Most callers never construct a `Registry`: the crate-level functions in
//! [`lib`](crate) delegate to the process-wide [`default_registry`], whose
//! lifecycle ends only at [`Registry::reset`]. Tests that want isolation
//! construct their own.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::annotation::{self, Annotation, RuleFn};
use crate::field_error::FieldError;
use crate::foundation::{Error, FieldValue, ValidationError};
use crate::record::{self, Record};

// ============================================================================
// WHOLE-RECORD VALIDATOR TRAITS
// ============================================================================

/// A validator that inspects an entire decoded instance.
///
/// Runs after every field-level marker has passed.
pub trait RecordValidator<T>: Send + Sync {
    /// Validates the whole record.
    fn validate(&self, value: &T) -> Result<(), ValidationError>;
}

/// A whole-record validator with an explicit run order relative to its
/// peers for the same type. Lower orders run first; peers with equal
/// orders run in registration order.
pub trait OrderedRecordValidator<T>: Send + Sync {
    /// Validates the whole record.
    fn validate(&self, value: &T) -> Result<(), ValidationError>;

    /// This validator's position in the run sequence.
    fn order(&self) -> i32;
}

impl<T, F> RecordValidator<T> for F
where
    F: Fn(&T) -> Result<(), ValidationError> + Send + Sync,
{
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        self(value)
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

type Stored = Box<dyn Any + Send + Sync>;

/// The owning object behind all process-wide validation state.
#[derive(Default)]
pub struct Registry {
    custom_annotations: RwLock<HashMap<String, Annotation>>,
    validators: RwLock<HashMap<TypeId, Stored>>,
    ordered_validators: RwLock<HashMap<TypeId, Vec<Stored>>>,
    field_errors: RwLock<HashMap<String, String>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Annotations
    // ------------------------------------------------------------------

    /// Resolves an annotation token: built-ins first, then customs.
    pub fn resolve(&self, name: &str) -> Result<Annotation, Error> {
        if let Some(builtin) = annotation::builtin(name) {
            return Ok(builtin);
        }
        self.custom_annotations
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownAnnotation(name.to_owned()))
    }

    /// Registers a custom annotation under `name`.
    ///
    /// Fails if `name` is reserved by a built-in. Re-registering a custom
    /// name replaces the previous rule.
    pub fn register_annotation<F>(&self, name: impl Into<String>, rule: F) -> Result<(), Error>
    where
        F: Fn(&FieldValue<'_>) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        let name = name.into();
        if annotation::is_builtin(&name) {
            return Err(Error::ReservedAnnotation(name));
        }

        let rule: RuleFn = Arc::new(rule);
        let entry = Annotation::new(&name, rule);
        debug!(annotation = %name, "registered custom annotation");
        self.custom_annotations.write().insert(name, entry);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Whole-record validators
    // ------------------------------------------------------------------

    /// Registers the plain whole-record validator for `T`, replacing any
    /// prior registration for the same type.
    pub fn register_validator<T, V>(&self, validator: V)
    where
        T: 'static,
        V: RecordValidator<T> + 'static,
    {
        let entry: Arc<dyn RecordValidator<T>> = Arc::new(validator);
        let replaced = self
            .validators
            .write()
            .insert(TypeId::of::<T>(), Box::new(entry));
        if replaced.is_some() {
            warn!(
                record = std::any::type_name::<T>(),
                "replacing previously registered validator"
            );
        } else {
            debug!(record = std::any::type_name::<T>(), "registered validator");
        }
    }

    /// Appends an ordered whole-record validator for `T`.
    pub fn register_ordered_validator<T, V>(&self, validator: V)
    where
        T: 'static,
        V: OrderedRecordValidator<T> + 'static,
    {
        let entry: Arc<dyn OrderedRecordValidator<T>> = Arc::new(validator);
        debug!(
            record = std::any::type_name::<T>(),
            order = entry.order(),
            "registered ordered validator"
        );
        self.ordered_validators
            .write()
            .entry(TypeId::of::<T>())
            .or_default()
            .push(Box::new(entry));
    }

    /// Runs the plain validator for `T` (if any), then the ordered
    /// validators sorted ascending by order. First failure wins; a plain
    /// validator failure prevents the ordered ones from running at all.
    pub(crate) fn run_validators<T: 'static>(&self, value: &T) -> Result<(), Error> {
        // Clone the handles out of the maps before running anything: a
        // validator is caller code and must not execute under our lock.
        let plain = self
            .validators
            .read()
            .get(&TypeId::of::<T>())
            .and_then(|stored| stored.downcast_ref::<Arc<dyn RecordValidator<T>>>())
            .cloned();

        if let Some(validator) = plain {
            validator.validate(value)?;
        }

        let mut ordered: Vec<Arc<dyn OrderedRecordValidator<T>>> = self
            .ordered_validators
            .read()
            .get(&TypeId::of::<T>())
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|stored| {
                        stored
                            .downcast_ref::<Arc<dyn OrderedRecordValidator<T>>>()
                            .cloned()
                    })
                    .collect()
            })
            .unwrap_or_default();

        // Stable sort over the insertion-ordered list: equal orders keep
        // registration order.
        ordered.sort_by_key(|validator| validator.order());

        for validator in ordered {
            validator.validate(value)?;
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Field errors
    // ------------------------------------------------------------------

    /// Registers a field-error mapping: `name` to its default message.
    pub fn register_field_error(&self, name: impl Into<String>, default_msg: impl Into<String>) {
        let name = name.into();
        debug!(field_error = %name, "registered field error");
        self.field_errors.write().insert(name, default_msg.into());
    }

    /// Looks up a registered field-error mapping.
    #[must_use]
    pub fn field_error(&self, name: &str) -> Option<FieldError> {
        self.field_errors
            .read()
            .get(name)
            .map(|msg| FieldError::new(name, msg.clone()))
    }

    // ------------------------------------------------------------------
    // Validation entry point and lifecycle
    // ------------------------------------------------------------------

    /// Validates an already-constructed record: field markers first, then
    /// the whole-record validators registered for `T`.
    pub fn validate<T>(&self, value: &T) -> Result<(), Error>
    where
        T: Record + 'static,
    {
        record::walk(value, self)?;
        self.run_validators(value)
    }

    /// Clears every catalog: custom annotations, plain and ordered
    /// validators, and field-error mappings. Intended between isolated
    /// test cases or reconfiguration epochs, never concurrently with an
    /// in-flight validation.
    pub fn reset(&self) {
        trace!("resetting registry");
        self.custom_annotations.write().clear();
        self.validators.write().clear();
        self.ordered_validators.write().clear();
        self.field_errors.write().clear();
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("custom_annotations", &self.custom_annotations.read().len())
            .field("validators", &self.validators.read().len())
            .field(
                "ordered_validators",
                &self.ordered_validators.read().len(),
            )
            .field("field_errors", &self.field_errors.read().len())
            .finish()
    }
}

// ============================================================================
// PROCESS-WIDE DEFAULT
// ============================================================================

static DEFAULT: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The process-wide registry behind the crate-level convenience functions.
#[must_use]
pub fn default_registry() -> &'static Registry {
    &DEFAULT
}

// ============================================================================
// TESTS
// ============================================================================
