//! JSON wire encoding for genai records
//!
//! The service speaks protobuf-JSON. Most fields map structurally, but a few
//! field kinds have special wire forms:
//!
//! - 64-bit integers as quoted decimal strings: `"1024"`
//! - durations as seconds with an `s` suffix: `"15s"`
//! - timestamps as RFC 3339 in UTC: `"2024-12-31T23:59:59Z"`
//! - bytes as standard base64: `"dGVzdA=="`
//! - dates as `{"day":..,"month":..,"year":..}` objects
//!
//! Each record type implements [`WireRecord`], declaring its key order and
//! mapping its fields through [`ObjectEncoder`] / [`ObjectDecoder`].

mod date;
mod decode;
mod encode;
mod error;
mod records;
mod registry;
pub mod scalar;

pub use decode::{decode_object, parse_json_object, ObjectDecoder};
pub use encode::{encode_object, encode_string, ObjectEncoder};
pub use error::{json_type_name, DecodeError, EncodeError, Malformed};
pub use registry::{Record, RecordKind};

/// A record with a fixed JSON object shape
///
/// Implementations write every field through the encoder and read every field
/// through the decoder; the encoder rejects keys missing from `KEY_ORDER`.
pub trait WireRecord: Sized {
    /// Type name used in errors and logs
    const NAME: &'static str;

    /// Wire keys in output order
    const KEY_ORDER: &'static [&'static str];

    /// Write this record's fields
    fn write_fields(&self, out: &mut ObjectEncoder) -> Result<(), EncodeError>;

    /// Read a record from a parsed object
    fn read_fields(obj: &ObjectDecoder<'_>) -> Result<Self, DecodeError>;
}

/// Encode a record to JSON bytes
pub fn encode_record<R: WireRecord>(record: &R) -> Result<Vec<u8>, EncodeError> {
    encode_object(record).map(String::into_bytes)
}

/// Decode a record from JSON bytes
///
/// Fails with [`DecodeError::Syntax`] on malformed JSON and
/// [`DecodeError::Format`] on the first field that breaks its grammar. No
/// partial record is returned.
pub fn decode_record<R: WireRecord>(bytes: &[u8]) -> Result<R, DecodeError> {
    decode_object(bytes)
}
