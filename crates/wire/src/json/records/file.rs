use crate::json::{DecodeError, EncodeError, ObjectDecoder, ObjectEncoder, WireRecord};
use genai_core::{File, FileSource, FileState};

impl WireRecord for File {
    const NAME: &'static str = "File";
    const KEY_ORDER: &'static [&'static str] = &[
        "name",
        "displayName",
        "mimeType",
        "sizeBytes",
        "sha256Hash",
        "uri",
        "downloadUri",
        "state",
        "source",
        "videoMetadata",
        "error",
        "expirationTime",
        "createTime",
        "updateTime",
    ];

    fn write_fields(&self, out: &mut ObjectEncoder) -> Result<(), EncodeError> {
        out.string("name", &self.name)?;
        out.string("displayName", &self.display_name)?;
        out.string("mimeType", &self.mime_type)?;
        out.opt_big_int("sizeBytes", self.size_bytes)?;
        out.string("sha256Hash", &self.sha256_hash)?;
        out.string("uri", &self.uri)?;
        out.string("downloadUri", &self.download_uri)?;
        out.enum_value("state", self.state.as_ref().map(FileState::as_str))?;
        out.enum_value("source", self.source.as_ref().map(FileSource::as_str))?;
        out.json_map("videoMetadata", &self.video_metadata)?;
        out.structural("error", self.error.as_ref())?;
        out.timestamp("expirationTime", self.expiration_time.as_ref())?;
        out.timestamp("createTime", self.create_time.as_ref())?;
        out.timestamp("updateTime", self.update_time.as_ref())?;
        Ok(())
    }

    fn read_fields(obj: &ObjectDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(File {
            name: obj.string("name")?,
            display_name: obj.string("displayName")?,
            mime_type: obj.string("mimeType")?,
            size_bytes: obj.opt_big_int("sizeBytes")?,
            create_time: obj.timestamp("createTime")?,
            expiration_time: obj.timestamp("expirationTime")?,
            update_time: obj.timestamp("updateTime")?,
            sha256_hash: obj.string("sha256Hash")?,
            uri: obj.string("uri")?,
            download_uri: obj.string("downloadUri")?,
            state: obj.enum_value("state")?,
            source: obj.enum_value("source")?,
            video_metadata: obj.json_map("videoMetadata")?,
            error: obj.structural("error")?,
        })
    }
}
