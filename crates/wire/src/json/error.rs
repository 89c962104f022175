//! Wire error types
//!
//! Decoding fails in exactly two ways:
//!
//! | Kind | Meaning |
//! |------|---------|
//! | `Syntax` | The payload is not well-formed JSON |
//! | `Format` | Well-formed JSON, but a value breaks its field grammar |
//!
//! Every `Format` error names the offending field as a path, e.g.
//! `publicationDate.year` or `tokenIds[1]`, and carries a [`Malformed`]
//! cause. Neither kind is retryable, and no partial record is ever returned.

use serde_json::Value;
use thiserror::Error;

/// Why a well-formed JSON value was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    /// The JSON token has the wrong type
    #[error("expected {expected}, found {found}")]
    WrongType {
        /// Expected JSON type
        expected: &'static str,
        /// JSON type found
        found: &'static str,
    },

    /// Not a base-10 integer literal
    #[error("invalid integer literal {0:?}")]
    InvalidInteger(String),

    /// Integer does not fit the field
    #[error("integer {0} out of range")]
    IntegerOutOfRange(String),

    /// Not a `<seconds>s` duration
    #[error("invalid duration {0:?}")]
    InvalidDuration(String),

    /// Duration too large to represent
    #[error("duration {0:?} out of range")]
    DurationOutOfRange(String),

    /// Not an RFC 3339 timestamp
    #[error("invalid timestamp {text:?}: {cause}")]
    InvalidTimestamp {
        /// The rejected text
        text: String,
        /// Parser message
        cause: String,
    },

    /// Not standard base64
    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    /// A key the enclosing object requires is absent
    #[error("required key is missing")]
    MissingKey,

    /// A structurally mapped value did not fit its type
    #[error("{0}")]
    Structure(String),
}

impl Malformed {
    /// Wrong-type error for `found`
    pub fn wrong_type(expected: &'static str, found: &Value) -> Self {
        Malformed::WrongType {
            expected,
            found: json_type_name(found),
        }
    }
}

/// Decode error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Invalid JSON syntax, including truncated input
    #[error("invalid JSON: {0}")]
    Syntax(String),

    /// A value did not match its field grammar
    #[error("invalid value for `{field}`: {reason}")]
    Format {
        /// Path of the offending field; `$` for the payload itself
        field: String,
        /// What was wrong with it
        #[source]
        reason: Malformed,
    },
}

impl DecodeError {
    /// Format error for `field`
    pub fn format(field: impl Into<String>, reason: Malformed) -> Self {
        DecodeError::Format {
            field: field.into(),
            reason,
        }
    }

    /// Check if the payload was not well-formed JSON
    pub fn is_syntax(&self) -> bool {
        matches!(self, DecodeError::Syntax(_))
    }

    /// Check if a field broke its grammar
    pub fn is_format(&self) -> bool {
        matches!(self, DecodeError::Format { .. })
    }

    /// Path of the offending field, for format errors
    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::Format { field, .. } => Some(field),
            DecodeError::Syntax(_) => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        DecodeError::Syntax(e.to_string())
    }
}

/// Encode error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// NaN and infinities have no JSON number form
    #[error("cannot encode non-finite float in `{field}`")]
    NonFiniteFloat {
        /// Path of the field
        field: String,
    },

    /// RFC 3339 only has four-digit years
    #[error("cannot encode timestamp in `{field}`: year outside 0000-9999")]
    TimestampOutOfRange {
        /// Path of the field
        field: String,
    },

    /// A record wrote a key missing from its declared key order
    #[error("{record} does not declare key `{key}`")]
    UndeclaredKey {
        /// Record type name
        record: &'static str,
        /// The undeclared key
        key: &'static str,
    },

    /// A structurally mapped value failed to serialize
    #[error("cannot encode `{field}`: {message}")]
    Structure {
        /// Path of the field
        field: String,
        /// Serializer message
        message: String,
    },
}

/// JSON type name of a value, for error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
