//! Temporal-ordering rules
//!
//! "Present" means the same whole second as now: equality is compared on
//! truncated Unix seconds, ordering on the full timestamp. The comparison
//! core is pure (explicit `now`) so it can be tested deterministically;
//! the public rules bind it to `Utc::now()`.

use chrono::{DateTime, Utc};

use crate::foundation::{FieldValue, Kind, ValidationError};

/// Whole-second equality.
fn same_second(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.timestamp() == b.timestamp()
}

pub(crate) fn is_future(t: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    t > now && !same_second(t, now)
}

pub(crate) fn is_future_or_present(t: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    t > now || same_second(t, now)
}

pub(crate) fn is_present(t: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    same_second(t, now)
}

pub(crate) fn is_past_or_present(t: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    t < now || same_second(t, now)
}

pub(crate) fn is_past(t: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    t < now && !same_second(t, now)
}

fn check(
    value: &FieldValue<'_>,
    code: &'static str,
    message: &'static str,
    holds: fn(DateTime<Utc>, DateTime<Utc>) -> bool,
) -> Result<(), ValidationError> {
    match value {
        FieldValue::Timestamp(t) => {
            if holds(*t, Utc::now()) {
                Ok(())
            } else {
                Err(ValidationError::new(code, message).with_param("actual", t.to_rfc3339()))
            }
        }
        FieldValue::Missing(Kind::Timestamp) => Err(ValidationError::absent(code)),
        other => Err(ValidationError::wrong_type(
            code,
            "timestamp",
            other.kind_name(),
        )),
    }
}

/// Fails if absent or not strictly after the current second.
pub fn future(value: &FieldValue<'_>) -> Result<(), ValidationError> {
    check(value, "future", "value is not in the future", is_future)
}

/// Fails if absent or before the current second.
pub fn future_or_present(value: &FieldValue<'_>) -> Result<(), ValidationError> {
    check(
        value,
        "future_or_present",
        "value is in the past",
        is_future_or_present,
    )
}

/// Fails if absent or not within the current second.
pub fn present(value: &FieldValue<'_>) -> Result<(), ValidationError> {
    check(value, "present", "value is not the present time", is_present)
}

/// Fails if absent or after the current second.
pub fn past_or_present(value: &FieldValue<'_>) -> Result<(), ValidationError> {
    check(
        value,
        "past_or_present",
        "value is in the future",
        is_past_or_present,
    )
}

/// Fails if absent or not strictly before the current second.
pub fn past(value: &FieldValue<'_>) -> Result<(), ValidationError> {
    check(value, "past", "value is not in the past", is_past)
}
