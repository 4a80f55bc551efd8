//! Runtime value model for field validation
//!
//! Rules are dispatched from marker strings at validation time, so they
//! cannot be generic over the field's static type. Instead every supported
//! field type converts into the closed sum type [`FieldValue`], and each
//! rule matches on the variants it understands.
//!
//! The model keeps two distinctions that matter to the rule set:
//!
//! - **absent vs. present**: `Option::None` becomes [`FieldValue::Missing`],
//!   carrying the [`Kind`] the value would have had. A missing string and a
//!   missing number fail different rules differently.
//! - **numeric width erasure**: every signed integer width widens into
//!   [`Number::Int`] and both float widths into [`Number::Float`], so each
//!   numeric rule is written once.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::record::Record;

// ============================================================================
// KIND
// ============================================================================

/// The coarse kind of a field value, used for absent-value bookkeeping and
/// wrong-type diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A UTF-8 string.
    Str,
    /// A signed integer or floating-point number.
    Number,
    /// A timestamp; always a leaf, never recursed into.
    Timestamp,
    /// A sequence of field values.
    Seq,
    /// A nested record the walker recurses into.
    Record,
    /// A present value outside the validatable kinds.
    Other,
}

impl Kind {
    /// Human-readable kind name for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Str => "string",
            Self::Number => "number",
            Self::Timestamp => "timestamp",
            Self::Seq => "sequence",
            Self::Record => "record",
            Self::Other => "unsupported",
        }
    }
}

// ============================================================================
// NUMBER
// ============================================================================

/// A width-erased signed number.
///
/// Sign comparisons follow the underlying representation: integer
/// comparisons are exact, float comparisons are IEEE (so `NaN` compares
/// false against zero and therefore passes the strict sign rules, which
/// only fail on a definite `<= 0` / `>= 0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Any of `i8`, `i16`, `i32`, `i64`, `isize`, widened.
    Int(i64),
    /// Any of `f32`, `f64`, widened.
    Float(f64),
}

impl Number {
    #[must_use]
    pub fn le_zero(self) -> bool {
        match self {
            Self::Int(i) => i <= 0,
            Self::Float(f) => f <= 0.0,
        }
    }

    #[must_use]
    pub fn lt_zero(self) -> bool {
        match self {
            Self::Int(i) => i < 0,
            Self::Float(f) => f < 0.0,
        }
    }

    #[must_use]
    pub fn ge_zero(self) -> bool {
        match self {
            Self::Int(i) => i >= 0,
            Self::Float(f) => f >= 0.0,
        }
    }

    #[must_use]
    pub fn gt_zero(self) -> bool {
        match self {
            Self::Int(i) => i > 0,
            Self::Float(f) => f > 0.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A borrowed, kind-erased view of one field of a record.
///
/// Built by [`AsFieldValue`] implementations; consumed by the rule set and
/// the record walker. The `Record` variant is what the walker recurses
/// into — timestamps convert to `Timestamp` and are therefore leaves by
/// construction, even though `DateTime` is structurally a record.
pub enum FieldValue<'a> {
    /// `None` of an optional field, with the kind the value would have had.
    Missing(Kind),
    /// A present string.
    Str(&'a str),
    /// A present signed number.
    Number(Number),
    /// A present timestamp.
    Timestamp(DateTime<Utc>),
    /// A present sequence; elements are themselves field values, so the
    /// collection rules reuse the scalar rules per element.
    Seq(Vec<FieldValue<'a>>),
    /// A nested record.
    Record(&'a dyn Record),
    /// A present value no built-in rule understands; carries the concrete
    /// type name for diagnostics.
    Other(&'static str),
}

impl FieldValue<'_> {
    /// The coarse kind of this value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Missing(kind) => *kind,
            Self::Str(_) => Kind::Str,
            Self::Number(_) => Kind::Number,
            Self::Timestamp(_) => Kind::Timestamp,
            Self::Seq(_) => Kind::Seq,
            Self::Record(_) => Kind::Record,
            Self::Other(_) => Kind::Other,
        }
    }

    /// Kind name for diagnostics; for `Other` values this is the concrete
    /// type name captured at conversion time.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Other(name) => name,
            other => other.kind().name(),
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(kind) => f.debug_tuple("Missing").field(kind).finish(),
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::Timestamp(t) => f.debug_tuple("Timestamp").field(t).finish(),
            Self::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            Self::Record(_) => f.write_str("Record(..)"),
            Self::Other(name) => f.debug_tuple("Other").field(name).finish(),
        }
    }
}

// ============================================================================
// CONVERSION TRAIT
// ============================================================================

/// Conversion from a concrete field type into the runtime value model.
///
/// The associated [`KIND`](Self::KIND) is what `Option<T>` reports when the
/// value is `None` — absence remembers what would have been there.
///
/// Implemented for the supported scalars, `Option<T>`, `Vec<T>`, and (via
/// the [`markers!`](crate::markers) macro) every described record type.
pub trait AsFieldValue {
    /// The kind this type converts to when present.
    const KIND: Kind;

    /// Borrows `self` as a [`FieldValue`].
    fn field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for String {
    const KIND: Kind = Kind::Str;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }
}

impl<T: AsFieldValue> AsFieldValue for Option<T> {
    const KIND: Kind = T::KIND;

    fn field_value(&self) -> FieldValue<'_> {
        match self {
            Some(value) => value.field_value(),
            None => FieldValue::Missing(T::KIND),
        }
    }
}

impl<T: AsFieldValue> AsFieldValue for Vec<T> {
    const KIND: Kind = Kind::Seq;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.iter().map(AsFieldValue::field_value).collect())
    }
}

impl AsFieldValue for DateTime<Utc> {
    const KIND: Kind = Kind::Timestamp;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Timestamp(*self)
    }
}

macro_rules! int_field_value {
    ($($ty:ty),+ $(,)?) => {$(
        impl AsFieldValue for $ty {
            const KIND: Kind = Kind::Number;

            fn field_value(&self) -> FieldValue<'_> {
                FieldValue::Number(Number::Int(i64::from(*self)))
            }
        }
    )+};
}

int_field_value!(i8, i16, i32, i64);

impl AsFieldValue for isize {
    const KIND: Kind = Kind::Number;

    fn field_value(&self) -> FieldValue<'_> {
        // Pointer-width signed integers fit in i64 on every supported target.
        #[allow(clippy::cast_possible_wrap)]
        let widened = *self as i64;
        FieldValue::Number(Number::Int(widened))
    }
}

impl AsFieldValue for f32 {
    const KIND: Kind = Kind::Number;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Number(Number::Float(f64::from(*self)))
    }
}

impl AsFieldValue for f64 {
    const KIND: Kind = Kind::Number;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Number(Number::Float(*self))
    }
}

macro_rules! other_field_value {
    ($($ty:ty),+ $(,)?) => {$(
        impl AsFieldValue for $ty {
            const KIND: Kind = Kind::Other;

            fn field_value(&self) -> FieldValue<'_> {
                FieldValue::Other(stringify!($ty))
            }
        }
    )+};
}

// Present but outside the rule set's kinds: every rule reports these as a
// wrong-type violation rather than silently passing them.
other_field_value!(bool, u8, u16, u32, u64, usize);

// ============================================================================
// TESTS
// ============================================================================
