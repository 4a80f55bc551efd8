//! Caller-declared substitution errors
//!
//! A [`FieldError`] is what a caller gets back instead of a raw rule
//! violation when the failing field declares a `field_err` marker naming a
//! registered mapping. Its display form is the wire shape serialized with
//! the same encoding the rest of the system speaks.

use std::fmt;

use serde::Serialize;

/// A named, caller-controlled error substituting a rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    name: String,
    default_msg: String,
}

/// Wire shape of a field error.
#[derive(Serialize)]
struct Wire<'a> {
    framework: &'static str,
    #[serde(rename = "errorName")]
    error_name: &'a str,
    msg: &'a str,
}

impl FieldError {
    /// The fixed framework identifier carried by every field error.
    pub const FRAMEWORK: &'static str = "fieldcheck";

    /// Creates a field error from its registered name and default message.
    pub fn new(name: impl Into<String>, default_msg: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_msg: default_msg.into(),
        }
    }

    /// The caller-chosen error name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default user-facing message.
    #[must_use]
    pub fn default_msg(&self) -> &str {
        &self.default_msg
    }

    fn wire(&self) -> Wire<'_> {
        Wire {
            framework: Self::FRAMEWORK,
            error_name: &self.name,
            msg: &self.default_msg,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Serializing three plain strings cannot realistically fail; fall
        // back to a bare rendering rather than swallowing the error.
        match serde_json::to_string(&self.wire()) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{}: {}", self.name, self.default_msg),
        }
    }
}

impl std::error::Error for FieldError {}
