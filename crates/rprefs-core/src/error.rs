// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors raised by the checked accessors and decode helpers.

use serde_json::Value;
use thiserror::Error;

/// Error type for facade operations that can fail.
///
/// The plain accessors never produce one; absence is reported as `None`.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// A named field is present but does not hold the expected JSON shape.
    #[error("field `{field}` has type {found}, expected {expected}")]
    TypeMismatch {
        /// Field name within the bundle.
        field: &'static str,
        /// Expected JSON type.
        expected: &'static str,
        /// JSON type actually found.
        found: &'static str,
    },
    /// Payload bytes were not valid JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A sub-bundle could not be decoded into the requested type.
    #[error("cannot decode `{field}`: {source}")]
    Decode {
        /// Field name within the bundle.
        field: &'static str,
        /// Underlying serde failure.
        source: serde_json::Error,
    },
}

/// JSON type name used in mismatch reports.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
