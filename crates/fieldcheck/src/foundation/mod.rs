//! Foundation types shared by every other module
//!
//! - **Errors**: [`ValidationError`] (structured rule violations) and
//!   [`Error`] (the crate-level taxonomy keeping decode, configuration and
//!   violation failures apart).
//! - **Values**: [`FieldValue`] and friends — the kind-erased runtime view
//!   of a field that the rule set dispatches on.

pub mod error;
pub mod value;

pub use error::{Error, ValidationError};
pub use value::{AsFieldValue, FieldValue, Kind, Number};
