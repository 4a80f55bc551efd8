//! Named annotations and the built-in catalog
//!
//! An [`Annotation`] binds a marker token (`Required`, `NotBlank`, ...) to
//! a rule callable. The built-in catalog is populated once at process
//! start and is immutable; custom annotations live in the
//! [`Registry`](crate::Registry) and may not shadow a built-in name.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::foundation::{FieldValue, ValidationError};
use crate::rules::{collection, numeric, presence, string, temporal};

/// The callable form of a rule: one kind-erased value in, first violation
/// out.
pub type RuleFn = Arc<dyn Fn(&FieldValue<'_>) -> Result<(), ValidationError> + Send + Sync>;

/// A named validation rule, resolvable from an annotation marker token.
#[derive(Clone)]
pub struct Annotation {
    name: Arc<str>,
    rule: RuleFn,
}

impl Annotation {
    pub(crate) fn new(name: &str, rule: RuleFn) -> Self {
        Self {
            name: Arc::from(name),
            rule,
        }
    }

    /// The marker token this annotation answers to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the rule against a field value.
    pub fn run(&self, value: &FieldValue<'_>) -> Result<(), ValidationError> {
        (self.rule)(value)
    }
}

impl std::fmt::Debug for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Annotation")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// BUILT-IN CATALOG
// ============================================================================

macro_rules! builtin_catalog {
    ($($name:literal => $rule:path),+ $(,)?) => {
        static BUILTINS: LazyLock<HashMap<&'static str, Annotation>> = LazyLock::new(|| {
            let mut catalog = HashMap::new();
            $(
                let rule: RuleFn = Arc::new($rule);
                catalog.insert($name, Annotation::new($name, rule));
            )+
            catalog
        });
    };
}

builtin_catalog! {
    "Required"         => presence::required,
    "NotEmpty"         => string::not_empty,
    "NotBlank"         => string::not_blank,
    "Email"            => string::email,
    "NotContainsNil"   => collection::not_contains_nil,
    "NotContainsEmpty" => collection::not_contains_empty,
    "NotContainsBlank" => collection::not_contains_blank,
    "Positive"         => numeric::positive,
    "PositiveOrZero"   => numeric::positive_or_zero,
    "Negative"         => numeric::negative,
    "NegativeOrZero"   => numeric::negative_or_zero,
    "Future"           => temporal::future,
    "FutureOrPresent"  => temporal::future_or_present,
    "Present"          => temporal::present,
    "PastOrPresent"    => temporal::past_or_present,
    "Past"             => temporal::past,
}

/// Looks up a built-in annotation by marker token.
pub(crate) fn builtin(name: &str) -> Option<Annotation> {
    BUILTINS.get(name).cloned()
}

/// Whether the token is reserved by the built-in catalog.
pub(crate) fn is_builtin(name: &str) -> bool {
    BUILTINS.contains_key(name)
}
