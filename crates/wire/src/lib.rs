//! Wire encoding for genai records
//!
//! This crate implements the protobuf-JSON wire contract for the records in
//! `genai-core`. Most fields map structurally; a few field kinds have special
//! wire forms:
//!
//! ## Wire Encoding Rules
//!
//! | Field kind | JSON Encoding |
//! |------------|--------------|
//! | int64 | `"1024"` (quoted decimal) |
//! | int32, float | number |
//! | duration | `"15s"`, `"1.5s"` |
//! | timestamp | `"2024-12-31T23:59:59Z"` |
//! | bytes | `"dGVzdA=="` (standard base64) |
//! | date | `{"day":26,"month":10,"year":2023}` |
//! | enum | `"ACTIVE"` (unknown spellings kept verbatim) |
//!
//! Absent and zero-valued optional fields are omitted. Each record writes its
//! keys in a fixed, declared order, so output is byte-for-byte deterministic.
//!
//! ## Examples
//!
//! ```
//! use genai_wire::{decode_record, encode_record};
//! use genai_core::Checkpoint;
//!
//! // Required counters are written even when zero
//! let checkpoint = Checkpoint::default();
//! let json = encode_record(&checkpoint).unwrap();
//! assert_eq!(json, br#"{"epoch":"0","step":"0"}"#);
//!
//! // Decode a checkpoint
//! let decoded: Checkpoint = decode_record(br#"{"checkpointId":"c1","epoch":"10"}"#).unwrap();
//! assert_eq!(decoded.epoch, 10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

// Re-export main types
pub use json::{
    decode_object, decode_record, encode_object, encode_record, encode_string,
    parse_json_object, DecodeError, EncodeError, Malformed, ObjectDecoder, ObjectEncoder, Record,
    RecordKind, WireRecord,
};
