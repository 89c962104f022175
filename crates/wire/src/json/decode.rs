//! JSON decoding for records
//!
//! A payload is parsed once into a generic object map. Each record then pulls
//! its fields out of that map through an [`ObjectDecoder`], which applies the
//! field codec and attaches the field path to any failure.
//!
//! Conventions shared by every accessor:
//! - an absent key and an explicit `null` both mean "not set", except for
//!   free-form JSON values, where `null` is itself a value;
//! - keys the record does not ask for are ignored;
//! - the first bad field fails the whole record.

use super::error::{DecodeError, Malformed};
use super::scalar;
use super::WireRecord;
use chrono::{DateTime, TimeDelta, Utc};
use genai_core::CivilDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Parse a payload whose top level must be a JSON object
pub fn parse_json_object(bytes: &[u8]) -> Result<Map<String, Value>, DecodeError> {
    match serde_json::from_slice::<Value>(bytes)? {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::format("$", Malformed::wrong_type("object", &other))),
    }
}

/// Decode a record from a JSON payload
pub fn decode_object<R: WireRecord>(bytes: &[u8]) -> Result<R, DecodeError> {
    let map = parse_json_object(bytes)?;
    R::read_fields(&ObjectDecoder::new(&map, String::new()))
}

/// Reads typed fields out of one parsed JSON object
pub struct ObjectDecoder<'a> {
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> ObjectDecoder<'a> {
    /// Decoder over `map`, which sits at `path` (empty for the payload root)
    pub fn new(map: &'a Map<String, Value>, path: String) -> Self {
        ObjectDecoder { map, path }
    }

    /// Path of this object
    pub fn path(&self) -> &str {
        &self.path
    }

    fn field_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn fault(&self, key: &str, reason: Malformed) -> DecodeError {
        DecodeError::format(self.field_path(key), reason)
    }

    /// Raw value for `key`, treating `null` as absent
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    /// Decode `key` with a scalar codec, if present
    fn scalar<T>(
        &self,
        key: &str,
        decode: impl Fn(&Value) -> Result<T, Malformed>,
    ) -> Result<Option<T>, DecodeError> {
        self.get(key)
            .map(|v| decode(v).map_err(|reason| self.fault(key, reason)))
            .transpose()
    }

    /// Decode every element of the array at `key`; absent means empty
    fn list<T>(
        &self,
        key: &str,
        decode: impl Fn(&'a Value, String) -> Result<T, DecodeError>,
    ) -> Result<Vec<T>, DecodeError> {
        let Some(value) = self.get(key) else {
            return Ok(Vec::new());
        };
        let items = value
            .as_array()
            .ok_or_else(|| self.fault(key, Malformed::wrong_type("array", value)))?;
        let base = self.field_path(key);
        items
            .iter()
            .enumerate()
            .map(|(i, item)| decode(item, format!("{}[{}]", base, i)))
            .collect()
    }

    fn scalar_list<T>(
        &self,
        key: &str,
        decode: impl Fn(&Value) -> Result<T, Malformed>,
    ) -> Result<Vec<T>, DecodeError> {
        self.list(key, |item, path| {
            decode(item).map_err(|reason| DecodeError::format(path, reason))
        })
    }

    // === default-mapped fields ===

    /// String; absent means empty
    pub fn string(&self, key: &str) -> Result<String, DecodeError> {
        Ok(self.opt_string(key)?.unwrap_or_default())
    }

    /// String list; absent means empty
    pub fn string_list(&self, key: &str) -> Result<Vec<String>, DecodeError> {
        self.scalar_list(key, |v| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| Malformed::wrong_type("string", v))
        })
    }

    /// Optional bool
    pub fn opt_bool(&self, key: &str) -> Result<Option<bool>, DecodeError> {
        self.scalar(key, |v| {
            v.as_bool().ok_or_else(|| Malformed::wrong_type("bool", v))
        })
    }

    /// 32-bit integer; absent means zero
    pub fn int32(&self, key: &str) -> Result<i32, DecodeError> {
        Ok(self.opt_int32(key)?.unwrap_or_default())
    }

    /// Optional 32-bit integer
    pub fn opt_int32(&self, key: &str) -> Result<Option<i32>, DecodeError> {
        self.scalar(key, scalar::decode_int32)
    }

    /// 32-bit integer that must be present
    pub fn required_int32(&self, key: &str) -> Result<i32, DecodeError> {
        self.opt_int32(key)?
            .ok_or_else(|| self.fault(key, Malformed::MissingKey))
    }

    /// Optional float
    pub fn opt_float(&self, key: &str) -> Result<Option<f64>, DecodeError> {
        self.scalar(key, scalar::decode_float)
    }

    /// Open enum from its wire spelling
    pub fn enum_value<E: From<String>>(&self, key: &str) -> Result<Option<E>, DecodeError> {
        Ok(self.opt_string(key)?.map(E::from))
    }

    fn opt_string(&self, key: &str) -> Result<Option<String>, DecodeError> {
        self.scalar(key, |v| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| Malformed::wrong_type("string", v))
        })
    }

    /// Arbitrary JSON; an explicit `null` is kept
    pub fn json_value(&self, key: &str) -> Result<Option<Value>, DecodeError> {
        Ok(self.map.get(key).cloned())
    }

    /// Free-form object; absent means empty
    pub fn json_map(&self, key: &str) -> Result<Map<String, Value>, DecodeError> {
        Ok(self.structural(key)?.unwrap_or_default())
    }

    /// Serde-mapped value
    pub fn structural<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DecodeError> {
        self.scalar(key, |v| {
            <T as Deserialize>::deserialize(v).map_err(|e| Malformed::Structure(e.to_string()))
        })
    }

    // === custom-coded fields ===

    /// 64-bit integer string; absent means zero
    pub fn big_int(&self, key: &str) -> Result<i64, DecodeError> {
        Ok(self.opt_big_int(key)?.unwrap_or_default())
    }

    /// Optional 64-bit integer string
    pub fn opt_big_int(&self, key: &str) -> Result<Option<i64>, DecodeError> {
        self.scalar(key, scalar::decode_big_int)
    }

    /// List of 64-bit integer strings
    pub fn big_int_list(&self, key: &str) -> Result<Vec<i64>, DecodeError> {
        self.scalar_list(key, scalar::decode_big_int)
    }

    /// List of base64 byte sequences
    pub fn bytes_list(&self, key: &str) -> Result<Vec<Vec<u8>>, DecodeError> {
        self.scalar_list(key, scalar::decode_bytes)
    }

    /// Duration; absent means zero
    pub fn duration(&self, key: &str) -> Result<TimeDelta, DecodeError> {
        Ok(self
            .scalar(key, scalar::decode_duration)?
            .unwrap_or_else(TimeDelta::zero))
    }

    /// Optional RFC 3339 timestamp
    pub fn timestamp(&self, key: &str) -> Result<Option<DateTime<Utc>>, DecodeError> {
        self.scalar(key, scalar::decode_timestamp)
    }

    /// Calendar date; absent means the zero date
    pub fn date(&self, key: &str) -> Result<CivilDate, DecodeError> {
        Ok(self.record::<CivilDate>(key)?.unwrap_or_default())
    }

    /// Nested record
    pub fn record<R: WireRecord>(&self, key: &str) -> Result<Option<R>, DecodeError> {
        self.get(key)
            .map(|v| decode_nested(v, self.field_path(key)))
            .transpose()
    }

    /// List of nested records; absent means empty
    pub fn record_list<R: WireRecord>(&self, key: &str) -> Result<Vec<R>, DecodeError> {
        self.list(key, decode_nested::<R>)
    }

    /// Map of name to nested record; absent means empty
    pub fn record_map<R: WireRecord>(
        &self,
        key: &str,
    ) -> Result<BTreeMap<String, R>, DecodeError> {
        let Some(value) = self.get(key) else {
            return Ok(BTreeMap::new());
        };
        let entries = value
            .as_object()
            .ok_or_else(|| self.fault(key, Malformed::wrong_type("object", value)))?;
        let base = self.field_path(key);
        entries
            .iter()
            .map(|(name, v)| {
                decode_nested(v, format!("{}.{}", base, name)).map(|record| (name.clone(), record))
            })
            .collect()
    }
}

fn decode_nested<R: WireRecord>(value: &Value, path: String) -> Result<R, DecodeError> {
    match value {
        Value::Object(map) => R::read_fields(&ObjectDecoder::new(map, path)),
        other => Err(DecodeError::format(path, Malformed::wrong_type("object", other))),
    }
}
