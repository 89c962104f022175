//! # genai-types
//!
//! Typed records exchanged with a generative AI service, and the
//! protobuf-JSON codec that moves them on and off the wire.
//!
//! ## Quick Start
//!
//! ```
//! use genai_types::prelude::*;
//!
//! // Encode a record
//! let meta = VideoMetadata::segment(TimeDelta::zero(), TimeDelta::seconds(15));
//! let bytes = encode(&meta)?;
//! assert_eq!(bytes, br#"{"endOffset":"15s","startOffset":"0s"}"#);
//!
//! // Decode a record
//! let info: TokensInfo = decode(br#"{"tokenIds":["1"],"tokens":["YQ=="]}"#)?;
//! assert_eq!(info.tokens, vec![b"a".to_vec()]);
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Crates
//!
//! - [`genai_core`] - record types, no encoding logic
//! - [`genai_wire`] - field codecs, per-record key order, tagged dispatch

#![warn(missing_docs)]

mod error;

pub mod prelude;

pub use error::{Error, Result};

use genai_wire::WireRecord;

/// Encode a record to its JSON wire form.
pub fn encode<R: WireRecord>(record: &R) -> Result<Vec<u8>> {
    Ok(genai_wire::encode_record(record)?)
}

/// Decode a record from its JSON wire form.
///
/// No partial record is ever returned: the first malformed field fails the
/// whole decode.
pub fn decode<R: WireRecord>(bytes: &[u8]) -> Result<R> {
    Ok(genai_wire::decode_record(bytes)?)
}
