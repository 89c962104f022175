use crate::json::{DecodeError, EncodeError, ObjectDecoder, ObjectEncoder, WireRecord};
use genai_core::{Citation, CitationMetadata};

impl WireRecord for Citation {
    const NAME: &'static str = "Citation";
    const KEY_ORDER: &'static [&'static str] = &[
        "publicationDate",
        "endIndex",
        "license",
        "startIndex",
        "title",
        "uri",
    ];

    fn write_fields(&self, out: &mut ObjectEncoder) -> Result<(), EncodeError> {
        out.date("publicationDate", &self.publication_date)?;
        out.int32("endIndex", self.end_index)?;
        out.string("license", &self.license)?;
        out.int32("startIndex", self.start_index)?;
        out.string("title", &self.title)?;
        out.string("uri", &self.uri)?;
        Ok(())
    }

    fn read_fields(obj: &ObjectDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Citation {
            end_index: obj.int32("endIndex")?,
            license: obj.string("license")?,
            publication_date: obj.date("publicationDate")?,
            start_index: obj.int32("startIndex")?,
            title: obj.string("title")?,
            uri: obj.string("uri")?,
        })
    }
}

impl WireRecord for CitationMetadata {
    const NAME: &'static str = "CitationMetadata";
    const KEY_ORDER: &'static [&'static str] = &["citations"];

    fn write_fields(&self, out: &mut ObjectEncoder) -> Result<(), EncodeError> {
        out.record_list("citations", &self.citations)
    }

    fn read_fields(obj: &ObjectDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(CitationMetadata {
            citations: obj.record_list("citations")?,
        })
    }
}
