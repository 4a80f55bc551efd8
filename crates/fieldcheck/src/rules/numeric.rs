//! Numeric sign rules
//!
//! Polymorphic across every signed integer width and both float widths via
//! [`Number`]. Zero passes only the `*_or_zero` variants. A present
//! non-number is a wrong-type violation, distinct from absence.

use crate::foundation::{FieldValue, Kind, Number, ValidationError};

fn as_number(value: &FieldValue<'_>, code: &'static str) -> Result<Number, ValidationError> {
    match value {
        FieldValue::Number(n) => Ok(*n),
        FieldValue::Missing(Kind::Number) => Err(ValidationError::absent(code)),
        other => Err(ValidationError::wrong_type(
            code,
            "number",
            other.kind_name(),
        )),
    }
}

fn check(
    value: &FieldValue<'_>,
    code: &'static str,
    message: &'static str,
    violates: fn(Number) -> bool,
) -> Result<(), ValidationError> {
    let n = as_number(value, code)?;
    if violates(n) {
        return Err(ValidationError::new(code, message).with_param("actual", n.to_string()));
    }
    Ok(())
}

/// Fails if absent or `value <= 0`.
pub fn positive(value: &FieldValue<'_>) -> Result<(), ValidationError> {
    check(value, "positive", "value is not positive", Number::le_zero)
}

/// Fails if absent or `value < 0`.
pub fn positive_or_zero(value: &FieldValue<'_>) -> Result<(), ValidationError> {
    check(
        value,
        "positive_or_zero",
        "value is negative",
        Number::lt_zero,
    )
}

/// Fails if absent or `value >= 0`.
pub fn negative(value: &FieldValue<'_>) -> Result<(), ValidationError> {
    check(value, "negative", "value is not negative", Number::ge_zero)
}

/// Fails if absent or `value > 0`.
pub fn negative_or_zero(value: &FieldValue<'_>) -> Result<(), ValidationError> {
    check(
        value,
        "negative_or_zero",
        "value is positive",
        Number::gt_zero,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::AsFieldValue;

    // Zero passes only the "or zero" variants, for every supported width
    // (bare and optional).
    macro_rules! zero_boundary_for {
        ($($name:ident: $zero:expr),+ $(,)?) => {$(
            #[test]
            fn $name() {
                let zero = $zero;
                let value = zero.field_value();
                assert!(positive(&value).is_err());
                assert!(negative(&value).is_err());
                assert!(positive_or_zero(&value).is_ok());
                assert!(negative_or_zero(&value).is_ok());
            }
        )+};
    }

    zero_boundary_for! {
        zero_i8: 0i8,
        zero_i16: 0i16,
        zero_i32: 0i32,
        zero_i64: 0i64,
        zero_isize: 0isize,
        zero_f32: 0f32,
        zero_f64: 0f64,
        zero_opt_int: Some(0i64),
        zero_opt_float: Some(0f64),
    }

    #[test]
    fn strictly_positive() {
        let five = Some(5i32);
        let value = five.field_value();
        assert!(positive(&value).is_ok());
        assert!(positive_or_zero(&value).is_ok());
        assert!(negative(&value).is_err());
        assert!(negative_or_zero(&value).is_err());

        let half = 0.5f32;
        assert!(positive(&half.field_value()).is_ok());
    }

    #[test]
    fn strictly_negative() {
        let minus = -5i16;
        let value = minus.field_value();
        assert!(negative(&value).is_ok());
        assert!(negative_or_zero(&value).is_ok());
        assert!(positive(&value).is_err());
        assert!(positive_or_zero(&value).is_err());

        let half = -0.5f64;
        assert!(negative(&half.field_value()).is_ok());
    }

    #[test]
    fn absent_number_is_absent_not_type_error() {
        let missing: Option<i64> = None;
        let err = positive(&missing.field_value()).unwrap_err();
        assert_eq!(err.message, "value is absent");
    }

    #[test]
    fn non_number_is_a_type_error() {
        let err = positive(&FieldValue::Str("5")).unwrap_err();
        assert_eq!(err.param("expected"), Some("number"));
        assert_eq!(err.param("actual"), Some("string"));
    }
}
