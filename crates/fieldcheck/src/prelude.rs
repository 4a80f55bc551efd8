//! Common imports for fieldcheck consumers
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//! ```

pub use crate::field_error::FieldError;
pub use crate::foundation::{AsFieldValue, Error, FieldValue, Kind, Number, ValidationError};
pub use crate::record::{BoundField, Markers, Record};
pub use crate::registry::{
    OrderedRecordValidator, RecordValidator, Registry, default_registry,
};
pub use crate::{
    from_slice, from_str, register_annotation, register_field_error, register_ordered_validator,
    register_validator, reset, to_string, to_vec, validate,
};
