//! Unified error types for genai-types.
//!
//! This module wraps the wire layer's decode and encode errors behind one
//! type, so callers that do both can use a single `Result`.

use genai_wire::{DecodeError, EncodeError};
use thiserror::Error;

/// All genai-types errors.
///
/// Neither kind is retryable: the same payload or record fails the same way
/// every time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A payload could not be decoded
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A record could not be encoded
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

/// Result type for genai-types operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if the payload was not well-formed JSON.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Decode(e) if e.is_syntax())
    }

    /// Check if a field value broke its wire grammar.
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Decode(e) if e.is_format())
    }

    /// Check if this error came from encoding.
    pub fn is_encode(&self) -> bool {
        matches!(self, Error::Encode(_))
    }

    /// Path of the offending field, when one is known.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Decode(e) => e.field(),
            Error::Encode(EncodeError::NonFiniteFloat { field })
            | Error::Encode(EncodeError::TimestampOutOfRange { field })
            | Error::Encode(EncodeError::Structure { field, .. }) => Some(field),
            Error::Encode(EncodeError::UndeclaredKey { key, .. }) => Some(*key),
        }
    }
}
