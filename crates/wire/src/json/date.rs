//! Calendar date codec
//!
//! Wire form: `{"day":26,"month":10,"year":2023}`.
//!
//! - Encode writes all three keys, always in `day, month, year` order. The
//!   zero date is omitted by the enclosing record.
//! - Decode requires `year` whenever the date object is present at all;
//!   `month` and `day` default to 0 ("unspecified").

use super::decode::ObjectDecoder;
use super::encode::ObjectEncoder;
use super::error::{DecodeError, EncodeError};
use super::WireRecord;
use genai_core::CivilDate;

impl WireRecord for CivilDate {
    const NAME: &'static str = "CivilDate";
    const KEY_ORDER: &'static [&'static str] = &["day", "month", "year"];

    fn write_fields(&self, out: &mut ObjectEncoder) -> Result<(), EncodeError> {
        out.int32("day", self.day)?;
        out.int32("month", self.month)?;
        out.int32("year", self.year)?;
        Ok(())
    }

    fn read_fields(obj: &ObjectDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(CivilDate {
            year: obj.required_int32("year")?,
            month: obj.int32("month")?,
            day: obj.int32("day")?,
        })
    }
}
