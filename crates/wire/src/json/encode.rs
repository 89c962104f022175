//! JSON encoding for records
//!
//! Records are written through an [`ObjectEncoder`], which holds one slot per
//! key in the record's declared key order. Fields may be written in any
//! order; output always follows the declaration. Empty slots are omitted, so
//! an all-absent record encodes to `{}`.
//!
//! Writing a key the record did not declare is an error, not a silent append.

use super::error::EncodeError;
use super::scalar;
use super::WireRecord;
use chrono::{DateTime, TimeDelta, Utc};
use genai_core::CivilDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Encode a record to a JSON string
pub fn encode_object<R: WireRecord>(record: &R) -> Result<String, EncodeError> {
    encode_at(record, String::new())
}

fn encode_at<R: WireRecord>(record: &R, path: String) -> Result<String, EncodeError> {
    let mut out = ObjectEncoder::new::<R>(path);
    record.write_fields(&mut out)?;
    Ok(out.finish())
}

/// Encode a string with JSON escaping
pub fn encode_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

/// Writes the fields of one JSON object in a fixed key order
pub struct ObjectEncoder {
    record: &'static str,
    order: &'static [&'static str],
    path: String,
    slots: Vec<Option<String>>,
}

impl ObjectEncoder {
    /// Encoder for record type `R` at `path` (empty for the payload root)
    pub fn new<R: WireRecord>(path: String) -> Self {
        ObjectEncoder {
            record: R::NAME,
            order: R::KEY_ORDER,
            path,
            slots: vec![None; R::KEY_ORDER.len()],
        }
    }

    fn field_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// Store an already-encoded JSON fragment under `key`
    pub fn raw(&mut self, key: &'static str, json: String) -> Result<(), EncodeError> {
        let index = self
            .order
            .iter()
            .position(|k| *k == key)
            .ok_or(EncodeError::UndeclaredKey {
                record: self.record,
                key,
            })?;
        self.slots[index] = Some(json);
        Ok(())
    }

    /// Render the object, keys in declared order
    pub fn finish(self) -> String {
        let pairs: Vec<String> = self
            .order
            .iter()
            .zip(self.slots)
            .filter_map(|(key, value)| value.map(|v| format!("{}:{}", encode_string(key), v)))
            .collect();
        format!("{{{}}}", pairs.join(","))
    }

    // === default-mapped fields ===

    /// String, omitted when empty
    pub fn string(&mut self, key: &'static str, value: &str) -> Result<(), EncodeError> {
        if value.is_empty() {
            return Ok(());
        }
        self.raw(key, encode_string(value))
    }

    /// String list, omitted when empty
    pub fn string_list(&mut self, key: &'static str, values: &[String]) -> Result<(), EncodeError> {
        if values.is_empty() {
            return Ok(());
        }
        let items: Vec<String> = values.iter().map(|v| encode_string(v)).collect();
        self.raw(key, format!("[{}]", items.join(",")))
    }

    /// Optional bool
    pub fn bool(&mut self, key: &'static str, value: Option<bool>) -> Result<(), EncodeError> {
        match value {
            Some(b) => self.raw(key, b.to_string()),
            None => Ok(()),
        }
    }

    /// Required 32-bit integer, emitted even when zero
    pub fn int32(&mut self, key: &'static str, value: i32) -> Result<(), EncodeError> {
        self.raw(key, value.to_string())
    }

    /// Optional 32-bit integer
    pub fn opt_int32(&mut self, key: &'static str, value: Option<i32>) -> Result<(), EncodeError> {
        match value {
            Some(v) => self.int32(key, v),
            None => Ok(()),
        }
    }

    /// Optional float; NaN and infinities fail
    pub fn float(&mut self, key: &'static str, value: Option<f64>) -> Result<(), EncodeError> {
        let Some(v) = value else {
            return Ok(());
        };
        let json = scalar::encode_float(v).ok_or_else(|| EncodeError::NonFiniteFloat {
            field: self.field_path(key),
        })?;
        self.raw(key, json)
    }

    /// Open enum, omitted when `None`
    pub fn enum_value(&mut self, key: &'static str, value: Option<&str>) -> Result<(), EncodeError> {
        match value {
            Some(v) => self.raw(key, encode_string(v)),
            None => Ok(()),
        }
    }

    /// Arbitrary JSON, omitted when `None`
    pub fn json_value(
        &mut self,
        key: &'static str,
        value: Option<&serde_json::Value>,
    ) -> Result<(), EncodeError> {
        match value {
            Some(v) => self.raw(key, v.to_string()),
            None => Ok(()),
        }
    }

    /// Free-form object, omitted when empty
    pub fn json_map(
        &mut self,
        key: &'static str,
        value: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), EncodeError> {
        if value.is_empty() {
            return Ok(());
        }
        self.structural(key, Some(value))
    }

    /// Serde-mapped value, omitted when `None`
    pub fn structural<T: Serialize>(
        &mut self,
        key: &'static str,
        value: Option<&T>,
    ) -> Result<(), EncodeError> {
        let Some(v) = value else {
            return Ok(());
        };
        let json = serde_json::to_string(v).map_err(|e| EncodeError::Structure {
            field: self.field_path(key),
            message: e.to_string(),
        })?;
        self.raw(key, json)
    }

    // === custom-coded fields ===

    /// Required 64-bit integer as a string, emitted even when zero
    pub fn big_int(&mut self, key: &'static str, value: i64) -> Result<(), EncodeError> {
        self.raw(key, scalar::encode_big_int(value))
    }

    /// Optional 64-bit integer as a string
    pub fn opt_big_int(&mut self, key: &'static str, value: Option<i64>) -> Result<(), EncodeError> {
        match value {
            Some(v) => self.big_int(key, v),
            None => Ok(()),
        }
    }

    /// List of 64-bit integers as strings, omitted when empty
    pub fn big_int_list(&mut self, key: &'static str, values: &[i64]) -> Result<(), EncodeError> {
        if values.is_empty() {
            return Ok(());
        }
        let items: Vec<String> = values.iter().map(|v| scalar::encode_big_int(*v)).collect();
        self.raw(key, format!("[{}]", items.join(",")))
    }

    /// List of byte sequences as base64, omitted when empty
    pub fn bytes_list(&mut self, key: &'static str, values: &[Vec<u8>]) -> Result<(), EncodeError> {
        if values.is_empty() {
            return Ok(());
        }
        let items: Vec<String> = values.iter().map(|v| scalar::encode_bytes(v)).collect();
        self.raw(key, format!("[{}]", items.join(",")))
    }

    /// Duration as `"<seconds>s"`, omitted when zero
    pub fn duration(&mut self, key: &'static str, value: TimeDelta) -> Result<(), EncodeError> {
        if value.is_zero() {
            return Ok(());
        }
        self.raw(key, scalar::encode_duration(value))
    }

    /// Timestamp as RFC 3339, omitted when `None`; years past 9999 fail
    pub fn timestamp(
        &mut self,
        key: &'static str,
        value: Option<&DateTime<Utc>>,
    ) -> Result<(), EncodeError> {
        let Some(t) = value else {
            return Ok(());
        };
        let json =
            scalar::encode_timestamp(t).ok_or_else(|| EncodeError::TimestampOutOfRange {
                field: self.field_path(key),
            })?;
        self.raw(key, json)
    }

    /// Calendar date, omitted when zero
    pub fn date(&mut self, key: &'static str, value: &CivilDate) -> Result<(), EncodeError> {
        if value.is_zero() {
            return Ok(());
        }
        self.record(key, Some(value))
    }

    /// Nested record, omitted when `None`
    pub fn record<R: WireRecord>(
        &mut self,
        key: &'static str,
        value: Option<&R>,
    ) -> Result<(), EncodeError> {
        let Some(v) = value else {
            return Ok(());
        };
        let json = encode_at(v, self.field_path(key))?;
        self.raw(key, json)
    }

    /// List of nested records, omitted when empty
    pub fn record_list<R: WireRecord>(
        &mut self,
        key: &'static str,
        values: &[R],
    ) -> Result<(), EncodeError> {
        if values.is_empty() {
            return Ok(());
        }
        let base = self.field_path(key);
        let items = values
            .iter()
            .enumerate()
            .map(|(i, v)| encode_at(v, format!("{}[{}]", base, i)))
            .collect::<Result<Vec<_>, _>>()?;
        self.raw(key, format!("[{}]", items.join(",")))
    }

    /// Map of name to nested record, omitted when empty
    ///
    /// Entries are written in key order.
    pub fn record_map<R: WireRecord>(
        &mut self,
        key: &'static str,
        values: &BTreeMap<String, R>,
    ) -> Result<(), EncodeError> {
        if values.is_empty() {
            return Ok(());
        }
        let base = self.field_path(key);
        let entries = values
            .iter()
            .map(|(name, v)| {
                encode_at(v, format!("{}.{}", base, name))
                    .map(|json| format!("{}:{}", encode_string(name), json))
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.raw(key, format!("{{{}}}", entries.join(",")))
    }
}
