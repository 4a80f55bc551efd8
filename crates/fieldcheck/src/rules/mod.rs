//! The built-in rule set
//!
//! Each rule is a pure function from a [`FieldValue`](crate::FieldValue)
//! to `Result<(), ValidationError>`. Rules distinguish three failure
//! families:
//!
//! - **absent** — `Missing` of the rule's own kind,
//! - **wrong type** — anything outside the rule's kind, including
//!   `Missing` of a *different* kind (an absent number is a type error to
//!   a string rule, not an absence),
//! - the rule's own **violation**.
//!
//! The marker names under which these rules are reachable live in
//! [`crate::annotation`].

pub mod collection;
pub mod numeric;
pub mod presence;
pub mod string;
pub mod temporal;
