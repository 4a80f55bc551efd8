//! End-to-end decode-and-validate tests against the process-wide registry.
//!
//! Every test uses its own record type (and its own annotation names), so
//! the tests stay independent under the parallel test runner even though
//! they share the default registry.

use fieldcheck::{
    Error, FieldValue, OrderedRecordValidator, RecordValidator, ValidationError, markers,
};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

// ============================================================================
// PLAIN WHOLE-RECORD VALIDATOR
// ============================================================================

#[derive(Debug, Deserialize)]
struct Greeting {
    value: String,
}

markers! {
    Greeting {
        value;
    }
}

struct NotBlankGreeting;

impl RecordValidator<Greeting> for NotBlankGreeting {
    fn validate(&self, value: &Greeting) -> Result<(), ValidationError> {
        if value.value.trim().is_empty() {
            return Err(ValidationError::new("blank_greeting", "blank value"));
        }
        Ok(())
    }
}

#[test]
fn plain_validator_accepts_and_rejects() {
    fieldcheck::register_validator::<Greeting, _>(NotBlankGreeting);

    let greeting: Greeting = fieldcheck::from_slice(br#"{ "value": "test_string" }"#).unwrap();
    assert_eq!(greeting.value, "test_string");

    let err = fieldcheck::from_slice::<Greeting>(br#"{ "value": "" }"#).unwrap_err();
    assert!(matches!(err, Error::Rule(v) if v.code == "blank_greeting"));
}

// ============================================================================
// ORDERED WHOLE-RECORD VALIDATORS
// ============================================================================

#[derive(Debug, Deserialize)]
struct Basket {
    value: String,
}

markers! {
    Basket {
        value;
    }
}

struct NeedsSubstring {
    substring: &'static str,
    order: i32,
}

impl OrderedRecordValidator<Basket> for NeedsSubstring {
    fn validate(&self, value: &Basket) -> Result<(), ValidationError> {
        if value.value.contains(self.substring) {
            Ok(())
        } else {
            Err(ValidationError::new("needs_substring", "substring is not contained")
                .with_param("substring", self.substring))
        }
    }

    fn order(&self) -> i32 {
        self.order
    }
}

#[test]
fn ordered_validators_compose_in_order() {
    // Registered in reverse order; the composer sorts by order().
    fieldcheck::register_ordered_validator::<Basket, _>(NeedsSubstring {
        substring: "banana",
        order: 2,
    });
    fieldcheck::register_ordered_validator::<Basket, _>(NeedsSubstring {
        substring: "apple",
        order: 1,
    });

    let basket: Basket = fieldcheck::from_slice(br#"{ "value": "apple,banana" }"#).unwrap();
    assert_eq!(basket.value, "apple,banana");

    // Missing "apple": the order-1 validator reports, order-2 never runs.
    let err = fieldcheck::from_slice::<Basket>(br#"{ "value": "graph,banana" }"#).unwrap_err();
    let Error::Rule(violation) = err else {
        panic!("expected a rule violation");
    };
    assert_eq!(violation.param("substring"), Some("apple"));

    // Missing "banana": order-1 passes, order-2 reports.
    let err = fieldcheck::from_slice::<Basket>(br#"{ "value": "apple,graph" }"#).unwrap_err();
    let Error::Rule(violation) = err else {
        panic!("expected a rule violation");
    };
    assert_eq!(violation.param("substring"), Some("banana"));
}

// ============================================================================
// FIELD MARKERS THROUGH DECODE
// ============================================================================

#[derive(Debug, Deserialize)]
struct MaybeValue {
    value: Option<String>,
}

markers! {
    MaybeValue {
        value: annotation = "@Required";
    }
}

#[test]
fn required_rejects_null_and_accepts_present() {
    let err = fieldcheck::from_slice::<MaybeValue>(br#"{ "value": null }"#).unwrap_err();
    let Error::Rule(violation) = err else {
        panic!("expected a rule violation");
    };
    assert_eq!(violation.code, "required");
    assert_eq!(violation.field.as_deref(), Some("value"));

    let decoded: MaybeValue = fieldcheck::from_slice(br#"{ "value": "x" }"#).unwrap();
    assert_eq!(decoded.value.as_deref(), Some("x"));
}

#[derive(Debug, Deserialize)]
struct Coupon {
    code: String,
}

markers! {
    Coupon {
        code: pattern = "^[A-Z]{3}-[0-9]{4}$";
    }
}

#[test]
fn pattern_marker_through_decode() {
    let coupon: Coupon = fieldcheck::from_str(r#"{ "code": "ABC-1234" }"#).unwrap();
    assert_eq!(coupon.code, "ABC-1234");

    let err = fieldcheck::from_str::<Coupon>(r#"{ "code": "nope" }"#).unwrap_err();
    assert!(matches!(err, Error::Rule(v) if v.code == "pattern"));
}

#[derive(Debug, Deserialize)]
struct TagList {
    tags: Vec<Option<String>>,
}

markers! {
    TagList {
        tags: annotation = "@NotContainsNil@NotContainsBlank";
    }
}

#[test]
fn collection_markers_through_decode() {
    let ok: TagList = fieldcheck::from_str(r#"{ "tags": ["a", "b"] }"#).unwrap();
    assert_eq!(ok.tags.len(), 2);

    let err = fieldcheck::from_str::<TagList>(r#"{ "tags": ["a", null] }"#).unwrap_err();
    assert!(matches!(err, Error::Rule(v) if v.code == "not_contains_nil"));

    let err = fieldcheck::from_str::<TagList>(r#"{ "tags": ["a", "  "] }"#).unwrap_err();
    assert!(matches!(err, Error::Rule(v) if v.code == "not_contains_blank"));
}

#[derive(Debug, Deserialize)]
struct Account {
    balance: i64,
    overdraft: Option<f64>,
}

markers! {
    Account {
        balance: annotation = "@Positive";
        overdraft: annotation = "@NegativeOrZero";
    }
}

#[test]
fn numeric_markers_through_decode() {
    let ok: Account = fieldcheck::from_str(r#"{ "balance": 10, "overdraft": -1.5 }"#).unwrap();
    assert_eq!(ok.balance, 10);

    let err = fieldcheck::from_str::<Account>(r#"{ "balance": 0, "overdraft": 0 }"#).unwrap_err();
    assert!(matches!(err, Error::Rule(v) if v.code == "positive"));

    // Absent optional number is an absence, reported by the marker.
    let err = fieldcheck::from_str::<Account>(r#"{ "balance": 1 }"#).unwrap_err();
    let Error::Rule(violation) = err else {
        panic!("expected a rule violation");
    };
    assert_eq!(violation.code, "negative_or_zero");
    assert_eq!(violation.message, "value is absent");
}

// ============================================================================
// NESTED RECORDS
// ============================================================================

#[derive(Debug, Deserialize)]
struct Street {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Household {
    street: Street,
    fallback: Option<Street>,
}

markers! {
    Street {
        name: annotation = "@NotBlank";
    }

    Household {
        street;
        fallback: annotation = "@Required";
    }
}

#[test]
fn nested_records_recurse_and_optional_records_answer_required() {
    let ok: Household = fieldcheck::from_str(
        r#"{ "street": { "name": "Main" }, "fallback": { "name": "Side" } }"#,
    )
    .unwrap();
    assert_eq!(ok.street.name, "Main");

    // The nested record's own marker fires.
    let err = fieldcheck::from_str::<Household>(
        r#"{ "street": { "name": "  " }, "fallback": { "name": "Side" } }"#,
    )
    .unwrap_err();
    let Error::Rule(violation) = err else {
        panic!("expected a rule violation");
    };
    assert_eq!(violation.code, "not_blank");
    assert_eq!(violation.field.as_deref(), Some("name"));

    // An absent optional record is a leaf and answers @Required.
    let err =
        fieldcheck::from_str::<Household>(r#"{ "street": { "name": "Main" } }"#).unwrap_err();
    assert!(matches!(err, Error::Rule(v) if v.code == "required"));
}

// ============================================================================
// CUSTOM ANNOTATIONS
// ============================================================================

#[derive(Debug, Deserialize)]
struct Invoice {
    id: String,
}

markers! {
    Invoice {
        id: annotation = "@InvoiceId";
    }
}

#[test]
fn custom_annotation_runs_from_a_marker() {
    fieldcheck::register_annotation("InvoiceId", |value: &FieldValue<'_>| match value {
        FieldValue::Str(s) if s.starts_with("INV-") => Ok(()),
        FieldValue::Str(_) => Err(ValidationError::new("invoice_id", "missing INV- prefix")),
        _ => Err(ValidationError::wrong_type("invoice_id", "string", value.kind_name())),
    })
    .unwrap();

    let ok: Invoice = fieldcheck::from_str(r#"{ "id": "INV-7" }"#).unwrap();
    assert_eq!(ok.id, "INV-7");

    let err = fieldcheck::from_str::<Invoice>(r#"{ "id": "7" }"#).unwrap_err();
    assert!(matches!(err, Error::Rule(v) if v.code == "invoice_id"));
}

#[test]
fn builtin_names_stay_reserved() {
    let err = fieldcheck::register_annotation("NotBlank", |_: &FieldValue<'_>| Ok(())).unwrap_err();
    assert!(matches!(err, Error::ReservedAnnotation(name) if name == "NotBlank"));
}

// ============================================================================
// DECODE AND ENCODE BOUNDARIES
// ============================================================================

#[test]
fn malformed_input_is_a_decode_error() {
    let err = fieldcheck::from_slice::<MaybeValue>(b"{ not json").unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[derive(Debug, Serialize)]
struct Outgoing {
    value: String,
}

#[test]
fn encode_is_a_pass_through_without_validation() {
    // A value that would fail any blank check still encodes.
    let outgoing = Outgoing {
        value: "   ".to_owned(),
    };
    let json = fieldcheck::to_string(&outgoing).unwrap();
    assert_eq!(json, r#"{"value":"   "}"#);
    assert_eq!(fieldcheck::to_vec(&outgoing).unwrap(), json.into_bytes());
}
