//! Error types for validation failures
//!
//! Two layers live here. [`ValidationError`] is the structured per-rule
//! failure: a stable code, a human-readable message, an optional field path
//! and ordered parameters. [`Error`] is the crate-level taxonomy that keeps
//! decode failures, configuration mistakes and rule violations apart.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use crate::field_error::FieldError;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured rule-violation error.
///
/// Uses `Cow<'static, str>` for zero-allocation when error codes and messages
/// are known at compile time (the common case).
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::ValidationError;
///
/// let error = ValidationError::new("not_blank", "value is blank")
///     .with_field("username");
/// assert_eq!(error.code, "not_blank");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling; always the snake-case rule name.
    ///
    /// Examples: "not_blank", "required", "pattern"
    pub code: Cow<'static, str>,

    /// Human-readable reason in English.
    pub message: Cow<'static, str>,

    /// Optional field path, attached by the record walker.
    pub field: Option<Cow<'static, str>>,

    /// Parameters describing the failure, as ordered key-value pairs
    /// (typically 0-2 params). Example: `[("index", "3")]`
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates an "absent value" error for the given rule code.
    pub fn absent(code: impl Into<Cow<'static, str>>) -> Self {
        Self::new(code, "value is absent")
    }

    /// Creates a "wrong type for this rule" error.
    pub fn wrong_type(
        code: impl Into<Cow<'static, str>>,
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(code, "wrong type for this rule")
            .with_param("expected", expected)
            .with_param("actual", actual)
    }
}

// ============================================================================
// CRATE-LEVEL ERROR TAXONOMY
// ============================================================================

/// Everything a fieldcheck entry point can fail with.
///
/// The variants fall into three families, which callers are expected to
/// treat differently:
///
/// - **Decode/encode** — the transcoder rejected the bytes; rule logic
///   never ran.
/// - **Configuration** — a marker names an unknown annotation, a pattern
///   does not compile, or a custom annotation collides with a built-in.
///   These are programmer mistakes, not bad data.
/// - **Violation** — a rule rejected a field value ([`Error::Rule`]), or a
///   registered whole-record validator rejected the instance; when the
///   failing field declares a `field_err` marker the violation is replaced
///   by the caller's [`FieldError`] ([`Error::Field`]).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input bytes could not be decoded into the target type.
    #[error("failed to decode input")]
    Decode(#[source] serde_json::Error),

    /// A value could not be encoded.
    #[error("failed to encode value")]
    Encode(#[source] serde_json::Error),

    /// An annotation marker token did not resolve to any known rule.
    #[error("unknown annotation `{0}`")]
    UnknownAnnotation(String),

    /// A custom annotation registration collided with a built-in name.
    #[error("annotation `{0}` is reserved by a built-in rule")]
    ReservedAnnotation(String),

    /// A pattern marker did not compile as a regular expression.
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A built-in or custom rule rejected a field value, or a whole-record
    /// validator rejected the instance.
    #[error(transparent)]
    Rule(#[from] ValidationError),

    /// A rule violation substituted by a caller-declared field error.
    #[error(transparent)]
    Field(#[from] FieldError),
}

// ============================================================================
// TESTS
// ============================================================================
