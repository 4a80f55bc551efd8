//! Decode-and-validate and encode entry points
//!
//! Thin wrappers over `serde_json` bound to the process-wide registry:
//! decoding is followed by the full validation pass, encoding is a plain
//! pass-through. A decode failure never reaches rule logic, and a
//! validation failure discards the decoded instance.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::foundation::Error;
use crate::record::Record;
use crate::registry::default_registry;

/// Decodes `bytes` into `T` and validates the result.
///
/// Returns [`Error::Decode`] on malformed input; otherwise the first
/// field-marker or whole-record-validator failure, or the instance.
pub fn from_slice<T>(bytes: &[u8]) -> Result<T, Error>
where
    T: DeserializeOwned + Record + 'static,
{
    let value: T = serde_json::from_slice(bytes).map_err(Error::Decode)?;
    default_registry().validate(&value)?;
    Ok(value)
}

/// Decodes a string slice into `T` and validates the result.
pub fn from_str<T>(s: &str) -> Result<T, Error>
where
    T: DeserializeOwned + Record + 'static,
{
    from_slice(s.as_bytes())
}

/// Encodes a value. Pass-through to the transcoder; no validation runs.
pub fn to_vec<T: Serialize>(value: &T) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(value).map_err(Error::Encode)
}

/// Encodes a value to a string. Pass-through; no validation runs.
pub fn to_string<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(Error::Encode)
}
